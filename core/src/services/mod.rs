//! Business services containing domain logic and use cases.

pub mod clock;
pub mod notification;
pub mod otp;
pub mod password_reset;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use notification::{NotificationService, PushProvider};
pub use otp::{
    DeliveryInfo, IssueOtpResult, MailSender, OtpCleanupConfig, OtpCleanupService, OtpService,
    OtpServiceConfig, OtpStore, VerifyOtpResult,
};
pub use password_reset::{PasswordResetResult, PasswordResetService};
