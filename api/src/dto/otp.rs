use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Returned by `POST /send-otp` on success
pub const OTP_SENT_MESSAGE: &str = "OTP sent successfully!";

/// Returned by `POST /verify-otp` on success
pub const OTP_VERIFIED_MESSAGE: &str = "OTP verified";

/// Returned by `POST /reset-password`
pub const PASSWORD_RESET_MESSAGE: &str = "Password reset successfully!";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Recipient address; used verbatim as the lookup key
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
}

/// Missing fields deserialize as empty strings, which then fail lookup or
/// comparison like any other unknown value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: String,

    /// Compared exactly, without trimming. Clients sometimes send a JSON
    /// number here; anything that is not a string never matches.
    #[serde(default)]
    pub otp: Value,
}

impl VerifyOtpRequest {
    /// The candidate code, if it was sent as a string
    pub fn otp_text(&self) -> Option<&str> {
        self.otp.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

/// Body of every OTP endpoint response.
///
/// Verification rejections carry `message`, transport and request failures
/// carry `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OtpResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}
