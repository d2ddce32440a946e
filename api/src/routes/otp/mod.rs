//! OTP route handlers
//!
//! - `POST /send-otp` issues a code and mails it
//! - `POST /verify-otp` checks a code
//! - `POST /reset-password` accepts a new password without persisting it
//!
//! Every body may be JSON or `application/x-www-form-urlencoded`.

pub mod reset_password;
pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use actix_web::web;
use sb_core::services::{Clock, MailSender, OtpService, OtpStore, PasswordResetService, SystemClock};

pub use reset_password::reset_password;
pub use send_otp::send_otp;
pub use verify_otp::verify_otp;

/// Request body accepted as JSON or as a url-encoded form
///
/// When neither matches, the JSON error (and its `{success:false, error}`
/// response) wins.
pub type JsonOrForm<T> = web::Either<web::Json<T>, web::Form<T>>;

/// Application state that holds the OTP server's services
pub struct OtpAppState<M, S, C = SystemClock>
where
    M: MailSender + ?Sized,
    S: OtpStore + ?Sized,
    C: Clock + ?Sized,
{
    pub otp_service: Arc<OtpService<M, S, C>>,
    pub password_reset_service: Arc<PasswordResetService<C>>,
}

impl<M, S, C> OtpAppState<M, S, C>
where
    M: MailSender + ?Sized,
    S: OtpStore + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(
        otp_service: Arc<OtpService<M, S, C>>,
        password_reset_service: Arc<PasswordResetService<C>>,
    ) -> Self {
        Self {
            otp_service,
            password_reset_service,
        }
    }
}
