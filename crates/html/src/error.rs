//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use pievis_charts::error::ValidationError;
use tinytemplate::error::Error as TinyTemplateError;

/// The result type that uses [RenderError] as the error type.
pub type Result<T> = std::result::Result<T, RenderError>;

/// The error type for rendering a chart document to HTML.
#[derive(Debug)]
#[non_exhaustive]
pub enum RenderError {
    /// The document failed validation before rendering started; no sink
    /// was written to.
    Validation(ValidationError),

    /// The echarts option object could not be serialized.
    Json(serde_json::Error),

    /// A [tinytemplate::error::Error] encountered while rendering the
    /// embedded page template.
    Template(TinyTemplateError),

    /// A sink refused the rendered bytes.
    Io(IoError),
}

impl Error for RenderError {}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render_error = "render error:";

        match self {
            RenderError::Validation(error) => write!(f, "{render_error} {error}"),
            RenderError::Json(error) => {
                write!(f, "{render_error} option serialization failed: {error}")
            }
            RenderError::Template(error) => write!(f, "{render_error} template error: {error}"),
            RenderError::Io(error) => write!(f, "{render_error} I/O error: {error}"),
        }
    }
}

impl From<ValidationError> for RenderError {
    fn from(error: ValidationError) -> Self {
        RenderError::Validation(error)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(error: serde_json::Error) -> Self {
        RenderError::Json(error)
    }
}

impl From<TinyTemplateError> for RenderError {
    fn from(error: TinyTemplateError) -> Self {
        RenderError::Template(error)
    }
}

impl From<IoError> for RenderError {
    fn from(error: IoError) -> Self {
        RenderError::Io(error)
    }
}
