use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Status tag carried by every backend envelope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The common envelope wrapping every backend JSON payload.
///
/// Declared once and parameterized by the payload type — domain modules must
/// not redeclare their own copies. `data` is `None` both when the field is
/// absent and when it is JSON `null`; a present-but-falsy payload (`0`, `""`)
/// stays `Some`, so the two cases remain distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying a payload.
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    /// Successful envelope with an informational message.
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Error envelope. Never carries data.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Unwrap the envelope into its payload.
    ///
    /// Error envelopes map onto [`AppError`] with the server's message; a
    /// success envelope with no payload is treated as a malformed response.
    pub fn into_result(self) -> Result<T, AppError> {
        match (self.status, self.data) {
            (ResponseStatus::Success, Some(data)) => Ok(data),
            (ResponseStatus::Success, None) => {
                Err(AppError::internal("Response was missing its data payload"))
            }
            (ResponseStatus::Error, _) => Err(AppError::internal(
                self.message
                    .unwrap_or_else(|| "The server reported an error".to_string()),
            )),
        }
    }
}
