pub mod health;
pub mod notification;
pub mod otp;
