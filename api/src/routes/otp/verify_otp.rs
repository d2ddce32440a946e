use actix_web::{web, HttpResponse};

use sb_core::services::{Clock, MailSender, OtpStore};
use sb_shared::masking::mask_email;

use super::{JsonOrForm, OtpAppState};
use crate::dto::otp::{OtpResponse, VerifyOtpRequest, OTP_VERIFIED_MESSAGE};
use crate::handlers::otp_error_response;

/// Handler for POST /verify-otp
///
/// A non-string `otp` is answered like any wrong code.
///
/// # Response
///
/// * 200 `{"success": true, "message": "OTP verified"}`
/// * 400 `{"success": false, "message": "No OTP found" | "OTP expired" | "Invalid OTP"}`
pub async fn verify_otp<M, S, C>(
    state: web::Data<OtpAppState<M, S, C>>,
    request: JsonOrForm<VerifyOtpRequest>,
) -> HttpResponse
where
    M: MailSender + ?Sized + 'static,
    S: OtpStore + ?Sized + 'static,
    C: Clock + ?Sized + 'static,
{
    let request = request.into_inner();
    match state
        .otp_service
        .verify_candidate(&request.email, request.otp_text())
        .await
    {
        Ok(_) => HttpResponse::Ok().json(OtpResponse::ok(OTP_VERIFIED_MESSAGE)),
        Err(e) => {
            log::info!(
                "OTP verification failed for {}: {}",
                mask_email(&request.email),
                e
            );
            otp_error_response(&e)
        }
    }
}
