//! Errors raised at the C boundary.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    #[error("null pointer passed for `{arg}`")]
    NullPointer { arg: &'static str },

    #[error("string is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("failed to install log subscriber: {0}")]
    LoggingInit(String),
}

impl HelperError {
    /// Status code returned across the C ABI. 0 is reserved for success.
    pub fn code(&self) -> i32 {
        match self {
            HelperError::NullPointer { .. } => 1,
            HelperError::InvalidUtf8 { .. } => 2,
            HelperError::LoggingInit(_) => 1,
        }
    }
}

impl From<std::str::Utf8Error> for HelperError {
    fn from(err: std::str::Utf8Error) -> Self {
        HelperError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(HelperError::NullPointer { arg: "out" }.code(), 1);
        assert_eq!(HelperError::InvalidUtf8 { valid_up_to: 3 }.code(), 2);
        assert_eq!(HelperError::LoggingInit("taken".into()).code(), 1);
    }

    #[test]
    fn test_from_utf8_error() {
        let bytes = [b'o', b'k', 0xff];
        let err: HelperError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err, HelperError::InvalidUtf8 { valid_up_to: 2 });
        assert_eq!(
            err.to_string(),
            "string is not valid UTF-8 (valid up to byte 2)"
        );
    }
}
