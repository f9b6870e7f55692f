// src/application/error_handling.rs
//
// Error mapping for command results
//
// - Maps internal errors to operator-facing responses
// - Storage failures are logged in full and summarized in the response

use log::error;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for adapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Player or match position does not exist
    NotFound,

    /// Entry-form input could not be parsed
    Validation,

    /// Business rule rejected the change
    DomainError,

    /// Tables could not be read or written
    Storage,

    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(err: AppError) -> Self {
        match err {
            AppError::NotFound => Self::not_found("Resource"),

            AppError::Domain(DomainError::NotFound(what)) => Self::not_found(&what),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: domain_error.to_string(),
                details: None,
            },

            AppError::StorageUnavailable(reason) => Self {
                success: false,
                error_type: ErrorType::Storage,
                message: "Changes are disabled until the stored tables can be read".to_string(),
                details: Some(reason),
            },

            AppError::Csv(_) | AppError::Io(_) | AppError::Database(_) | AppError::Pool(_) => {
                error!("Storage error: {:?}", err);
                Self {
                    success: false,
                    error_type: ErrorType::Storage,
                    message: "Could not save the tables".to_string(),
                    details: Some(err.to_string()),
                }
            }

            AppError::Serialization(_) | AppError::Other(_) => {
                error!("Internal error: {:?}", err);
                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: err.to_string(),
                    details: None,
                }
            }
        }
    }

    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from_app_error(err)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{} ({})", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}
