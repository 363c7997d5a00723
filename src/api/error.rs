//! API errors and their HTTP statuses
//!
//! Clients can tell a request that never parsed (`BAD_REQUEST`) apart from
//! a well-formed form that failed intake checks (`VALIDATION_ERROR`); both
//! are 400 and both are fixed by resubmitting.

use serde::Serialize;
use thiserror::Error;

use crate::core::services::IntakeError;

/// Error class reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Body could not be read or decoded
    BadRequest,
    /// Form decoded but a field is missing or holds an unknown value
    Validation,
    /// Unknown route or petition
    NotFound,
    /// Response could not be produced
    Internal,
}

impl ErrorCode {
    /// HTTP status sent with this code
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest | Self::Validation => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }

    /// Code as it appears in the `error.code` field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Validation => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Failed API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", code.as_str())]
pub struct ApiError {
    /// Error class, which fixes the HTTP status
    pub code: ErrorCode,
    /// Message shown to the citizen
    pub message: String,
}

impl ApiError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Undecodable request
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Form rejected by intake checks
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }

    /// Missing route or entity
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Server-side failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        let code = match err {
            IntakeError::PetitionNotFound(_) => ErrorCode::NotFound,
            IntakeError::MissingFields(_)
            | IntakeError::InvalidChoice(_)
            | IntakeError::UnsupportedEvidence(_)
            | IntakeError::NoDraft => ErrorCode::Validation,
        };
        Self::new(code, err.to_string())
    }
}

/// The `error` object of a failed response envelope
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Error code string
    pub code: String,
    /// Message shown to the citizen
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}
