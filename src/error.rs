use std::io::Error as IoError;
use std::result::Result as StdResult;

/// Errors from loading, saving and editing a bitmap.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not a bmp stream at all.
    #[error("invalid bmp file")]
    InvalidFormat,

    /// Structurally valid, but the bit depth is neither 24 nor 32.
    #[error("unsupported depth: {0}")]
    InvalidDepth(u16),

    #[error("unsupported bitmap: {0}")]
    Unsupported(String),

    #[error("pixel out of image")]
    OutOfBounds,

    #[error(transparent)]
    Io(#[from] IoError),
}

impl Error {
    pub fn unsupported(message: &str) -> Error {
        Error::Unsupported(String::from(message))
    }
}

pub type Result<T> = StdResult<T, Error>;
