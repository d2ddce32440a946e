pub mod notification;
pub mod otp;

pub use notification::{NotificationErrorResponse, SendNotificationRequest, SendNotificationResponse};
pub use otp::{OtpResponse, ResetPasswordRequest, SendOtpRequest, VerifyOtpRequest};
