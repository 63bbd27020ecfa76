use serde::{Deserialize, Serialize};

/// Error body in the generic API's shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
    pub status: String,
}

impl ErrorResponse {
    pub fn new(code: u16, status: &str, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: ErrorDetail {
                code,
                message: message.into(),
                status: status.to_string(),
            },
        }
    }
}
