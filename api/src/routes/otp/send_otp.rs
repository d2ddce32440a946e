use actix_web::{web, HttpResponse};
use validator::Validate;

use sb_core::services::{Clock, MailSender, OtpStore};
use sb_shared::masking::mask_email;

use super::{JsonOrForm, OtpAppState};
use crate::dto::otp::{OtpResponse, SendOtpRequest, OTP_SENT_MESSAGE};
use crate::handlers::otp_error_response;

/// Handler for POST /send-otp
///
/// # Request Body
///
/// ```json
/// { "email": "alice@example.com" }
/// ```
///
/// # Response
///
/// * 200 `{"success": true, "message": "OTP sent successfully!"}`
/// * 400 `{"success": false, "error": "email is required"}`
/// * 500 `{"success": false, "error": "<mail sender message>"}`
pub async fn send_otp<M, S, C>(
    state: web::Data<OtpAppState<M, S, C>>,
    request: JsonOrForm<SendOtpRequest>,
) -> HttpResponse
where
    M: MailSender + ?Sized + 'static,
    S: OtpStore + ?Sized + 'static,
    C: Clock + ?Sized + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        log::warn!("Rejected send_otp request: {}", message);
        return HttpResponse::BadRequest().json(OtpResponse::failed(message));
    }

    let masked = mask_email(&request.email);
    log::info!("Processing send_otp request for {}", masked);

    match state.otp_service.issue(&request.email).await {
        Ok(result) => {
            log::info!(
                "OTP sent to {} (message id {})",
                masked,
                result.delivery.message_id
            );
            HttpResponse::Ok().json(OtpResponse::ok(OTP_SENT_MESSAGE))
        }
        Err(e) => {
            log::error!("Failed to send OTP to {}: {}", masked, e);
            otp_error_response(&e)
        }
    }
}
