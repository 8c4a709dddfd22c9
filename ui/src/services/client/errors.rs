use thiserror::Error;

use crate::login::LoginMode;
use crate::services::config::ConfigError;

/// Why a login attempt did not produce an identity record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Nothing but whitespace was entered
    #[error("Identifier is empty")]
    EmptyIdentifier,

    /// The backend answered 404
    #[error("Identity not found")]
    NotFound,

    /// Any other non-success status
    #[error("Request failed with status {status}")]
    RequestFailed { status: u16 },

    /// The request never completed
    #[error("Network error: {message}")]
    Network { message: String },

    /// The backend answered 2xx but the body is not a usable record
    #[error("Invalid identity data: {reason}")]
    InvalidData { reason: String },

    /// The client could not be built from its configuration
    #[error("Client misconfigured: {message}")]
    Misconfigured { message: String },
}

impl LoginError {
    /// Text shown in the form for this failure
    pub fn user_message(&self, mode: LoginMode) -> String {
        match (self, mode) {
            (LoginError::EmptyIdentifier, LoginMode::Customer) => {
                "Please enter your account number".to_string()
            }
            (LoginError::EmptyIdentifier, LoginMode::User) => {
                "Please enter your registration ID".to_string()
            }
            (LoginError::NotFound, LoginMode::Customer) => {
                "Account number not found. Please check and try again.".to_string()
            }
            (LoginError::NotFound, LoginMode::User) => {
                "Registration ID not found. Please check and try again.".to_string()
            }
            (LoginError::RequestFailed { .. }, _) => {
                "Failed to load your details. Please try again.".to_string()
            }
            (LoginError::Network { .. }, _) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            (LoginError::InvalidData { .. }, LoginMode::Customer) => {
                "Invalid customer data received. Please contact support.".to_string()
            }
            (LoginError::InvalidData { .. }, LoginMode::User) => {
                "Invalid user data received. Please contact support.".to_string()
            }
            (LoginError::Misconfigured { .. }, _) => {
                "Login is currently unavailable. Please try again later.".to_string()
            }
        }
    }
}

impl From<ConfigError> for LoginError {
    fn from(err: ConfigError) -> Self {
        LoginError::Misconfigured {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for LoginError {
    fn from(err: reqwest::Error) -> Self {
        LoginError::Network {
            message: err.to_string(),
        }
    }
}
