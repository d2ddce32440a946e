//! Notification relay module
//!
//! Validates the shape of a relay request and forwards it, unchanged, to a
//! push messaging provider. There is no retry and no queueing.

mod service;
mod traits;


pub use service::NotificationService;
pub use traits::PushProvider;
