use crate::error::*;
use tracing::error;

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn is_credential_failure(&self) -> bool;
    fn is_permission_failure(&self) -> bool;
    fn user_friendly_message(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::GraphApi(e) => {
                error!("Graph API error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn is_credential_failure(&self) -> bool {
        matches!(self, CoreError::GraphApi(GraphApiError::InvalidToken))
    }

    fn is_permission_failure(&self) -> bool {
        matches!(self, CoreError::GraphApi(GraphApiError::Forbidden { .. }))
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::GraphApi(e) => e.user_friendly_message(),
            CoreError::Config(e) => format!("Configuration problem: {}", e),
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            CoreError::Io(_) => "File system error. Check paths and permissions.".to_string(),
            CoreError::Serialization(_) => "Failed to encode district data.".to_string(),
        }
    }
}

impl GraphApiError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GraphApiError::InvalidToken => {
                "Facebook access token is invalid or expired. Generate a new token.".to_string()
            }
            GraphApiError::Forbidden { page } => {
                format!("Missing permission to read posts from {}.", page)
            }
            GraphApiError::PageNotFound { page } => format!("Page {} could not be found.", page),
            GraphApiError::RateLimitExceeded { retry_after } => {
                format!("Rate limited by Facebook. Try again in {} seconds.", retry_after)
            }
            GraphApiError::RequestTimeout => {
                "The request to Facebook timed out. Please try again.".to_string()
            }
            GraphApiError::InvalidResponse { .. } => {
                "Facebook returned an unexpected response.".to_string()
            }
            GraphApiError::ServerError { .. } => {
                "Facebook is having server trouble. Try again later.".to_string()
            }
        }
    }
}
