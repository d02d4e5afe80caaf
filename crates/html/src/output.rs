//! Write targets for rendered pages.

use std::io::Write;

use crate::error::RenderError;

/// A sink accepting rendered page text.
///
/// Implemented for every [std::io::Write] type, so files, buffers and
/// sockets all work as sinks.
pub trait OutputStream {
    /// Writes one rendered fragment to the target.
    fn write(&mut self, data: &str) -> Result<(), RenderError>;
}

impl<W: Write> OutputStream for W {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.write_all(data.as_bytes())?;
        Ok(())
    }
}
