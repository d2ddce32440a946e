pub mod error;

pub use error::{notification_error_response, notification_json_config, otp_error_response, otp_json_config};
