use shared::{
    domain::{Mode, ParseTopicIdError, TopicId},
    error::{ErrorCode, StatusError, TopicError},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Store(#[from] TopicError),
    #[error("no topic is selected")]
    NoSelection,
    #[error("cannot {action} while in {mode} mode")]
    InvalidTransition { action: &'static str, mode: Mode },
    #[error(transparent)]
    Parse(#[from] ParseTopicIdError),
}

impl ControllerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ControllerError::Store(err) => err.code(),
            ControllerError::NoSelection => ErrorCode::NotFound,
            ControllerError::InvalidTransition { .. } => ErrorCode::Conflict,
            ControllerError::Parse(_) => ErrorCode::Validation,
        }
    }

    pub fn not_found_id(&self) -> Option<TopicId> {
        match self {
            ControllerError::Store(TopicError::NotFound(id)) => Some(*id),
            _ => None,
        }
    }
}

impl From<ControllerError> for StatusError {
    fn from(value: ControllerError) -> Self {
        StatusError::new(value.code(), value.to_string())
    }
}
