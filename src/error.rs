use std::fmt::{Debug, Display};

/// Failure category, at the granularity callers can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The decoded image is not 8-bit RGB.
    InvalidMode,
    /// The input bytes could not be parsed as an image.
    Decode,
    /// The converted image could not be serialized back out.
    Encode,
    /// Reading from or writing to the filesystem failed.
    Io,
}

pub struct GrayError {
    pub kind: ErrorKind,
    message: String,
}

impl GrayError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for GrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for GrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GrayError")
            .field(&self.kind)
            .field(&self.message)
            .finish()
    }
}

impl std::error::Error for GrayError {}

#[macro_export]
macro_rules! wg_err {
    ($kind:expr, $($arg:tt)*) => {
        $crate::error::GrayError::new(
            $kind,
            format!(
                "wondergray: {} @ {}:{}:{}",
                format_args!($($arg)*),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! wg_try {
    ($kind:expr, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::wg_err!($kind, "{}", err));
            }
        }
    };
}
