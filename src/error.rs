use thiserror::Error;

/// Keyword engine error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeywordError {
    /// A scanning window was empty or reached past the end of the text.
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },
}

impl KeywordError {
    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        KeywordError::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KeywordError>;
