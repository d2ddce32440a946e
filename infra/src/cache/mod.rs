//! Cache module - OTP record storage
//!
//! Records live in process memory only; they do not survive a restart and
//! are not shared between instances.

pub mod otp_store;

pub use otp_store::InMemoryOtpStore;
