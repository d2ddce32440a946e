//! # Skill Buddy Core
//!
//! Core business logic for the Skill Buddy backend services.
//! This crate contains the OTP lifecycle (issue, verify, expiry cleanup),
//! the password-reset placeholder, the notification relay, the collaborator
//! traits they depend on, and the domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
