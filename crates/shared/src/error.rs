use thiserror::Error;

use crate::domain::TopicId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    Validation,
    Conflict,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "not_found",
            ErrorCode::Validation => "validation",
            ErrorCode::Conflict => "conflict",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("topic {0} not found")]
    NotFound(TopicId),
    #[error("topic id space exhausted")]
    IdsExhausted,
}

impl TopicError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TopicError::NotFound(_) => ErrorCode::NotFound,
            TopicError::IdsExhausted => ErrorCode::Conflict,
        }
    }
}

/// Code/message pair handed to a presentation layer for a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    pub code: ErrorCode,
    pub message: String,
}

impl StatusError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<TopicError> for StatusError {
    fn from(value: TopicError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}
