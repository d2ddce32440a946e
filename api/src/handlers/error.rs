//! Mapping from domain errors to HTTP responses
//!
//! The two servers speak different error dialects: the OTP endpoints always
//! answer with a `success` flag, the relay answers with a bare `error`.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};

use sb_core::errors::{DomainError, NotificationError};

use crate::dto::{NotificationErrorResponse, OtpResponse};

/// Response for a failed OTP operation
///
/// * Verification failures: 400 with `message`
/// * Invalid input: 400 with `error`
/// * Mail sender or store failures: 500 with `error`
pub fn otp_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Otp(otp_error) => {
            HttpResponse::BadRequest().json(OtpResponse::rejected(otp_error.to_string()))
        }
        DomainError::Validation { .. } | DomainError::Notification(_) => {
            HttpResponse::BadRequest().json(OtpResponse::failed(error.public_message()))
        }
        DomainError::CollaboratorFailure { .. } => {
            HttpResponse::InternalServerError().json(OtpResponse::failed(error.public_message()))
        }
        DomainError::Internal { .. } => {
            log::error!("Internal error: {}", error);
            HttpResponse::InternalServerError().json(OtpResponse::failed("Internal server error"))
        }
    }
}

/// Response for a failed relay request
pub fn notification_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Notification(NotificationError::InvalidRequest { message }) => {
            HttpResponse::BadRequest().json(NotificationErrorResponse {
                error: message.clone(),
            })
        }
        DomainError::Internal { .. } => {
            log::error!("Internal error: {}", error);
            HttpResponse::InternalServerError().json(NotificationErrorResponse {
                error: "Internal server error".to_string(),
            })
        }
        other if other.is_client_error() => {
            HttpResponse::BadRequest().json(NotificationErrorResponse {
                error: other.public_message(),
            })
        }
        other => HttpResponse::InternalServerError().json(NotificationErrorResponse {
            error: other.public_message(),
        }),
    }
}

/// JSON extractor settings for the OTP server; malformed bodies get a
/// `{success:false, error}` answer
pub fn otp_json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            // Form bodies land here first before the form extractor takes them
            if matches!(err, JsonPayloadError::ContentType) {
                log::debug!("OTP request body is not JSON");
            } else {
                log::warn!("Rejected OTP request body: {}", err);
            }
            let response = HttpResponse::BadRequest().json(OtpResponse::failed(err.to_string()));
            InternalError::from_response(err, response).into()
        })
}

/// JSON extractor settings for the relay; malformed bodies get `{error}`
pub fn notification_json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            log::warn!("Rejected notification request body: {}", err);
            let response = HttpResponse::BadRequest().json(NotificationErrorResponse {
                error: err.to_string(),
            });
            InternalError::from_response(err, response).into()
        })
}
