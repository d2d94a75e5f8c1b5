// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    CanvasAlloc(String), // Reserving the pixel buffer failed
    Encode(String),      // Turning the canvas into PNG bytes failed
    Write(String),       // Creating/writing the output file failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CanvasAlloc(s) => write!(f, "Canvas allocation error: {s}"),
            Error::Encode(s) => write!(f, "PNG encode error: {s}"),
            Error::Write(s) => write!(f, "File write error: {s}"),
        }
    }
}

// Needed so `main` can hand the error straight to the process boundary.
impl std::error::Error for Error {}
