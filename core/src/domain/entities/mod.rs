//! Domain entities

pub mod otp_record;
pub mod push_message;

pub use otp_record::OtpRecord;
pub use push_message::{NotificationRequest, PushMessage};
