use actix_web::{web, HttpResponse};

use sb_core::services::{Clock, MailSender, OtpStore};

use super::{JsonOrForm, OtpAppState};
use crate::dto::otp::{OtpResponse, ResetPasswordRequest, PASSWORD_RESET_MESSAGE};
use crate::handlers::otp_error_response;

/// Handler for POST /reset-password
///
/// Not gated on a verified OTP; always answers
/// `{"success": true, "message": "Password reset successfully!"}`.
pub async fn reset_password<M, S, C>(
    state: web::Data<OtpAppState<M, S, C>>,
    request: JsonOrForm<ResetPasswordRequest>,
) -> HttpResponse
where
    M: MailSender + ?Sized + 'static,
    S: OtpStore + ?Sized + 'static,
    C: Clock + ?Sized + 'static,
{
    let request = request.into_inner();
    match state
        .password_reset_service
        .reset_password(&request.email, &request.password)
    {
        Ok(_) => HttpResponse::Ok().json(OtpResponse::ok(PASSWORD_RESET_MESSAGE)),
        Err(e) => otp_error_response(&e),
    }
}
