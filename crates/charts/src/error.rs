//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;

/// The result type that uses [ValidationError] as the error type.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// The error type for a chart document that cannot be handed to a renderer.
///
/// Everything else about a document is valid by construction, so the only
/// checks concern the configured asset host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// The configured asset host is not an absolute `http://` or
    /// `https://` URL.
    AssetHostScheme(String),

    /// The configured asset host does not end with a `/`, so script file
    /// names cannot be appended to it.
    AssetHostNoTrailingSlash(String),
}

impl Error for ValidationError {}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chart_error = "chart error:";

        match self {
            ValidationError::AssetHostScheme(host) => {
                write!(
                    f,
                    "{chart_error} asset host `{host}` must start with http:// or https://"
                )
            }
            ValidationError::AssetHostNoTrailingSlash(host) => {
                write!(f, "{chart_error} asset host `{host}` must end with a `/`")
            }
        }
    }
}
