use actix_web::{web, HttpResponse};

use sb_core::services::PushProvider;

use super::NotificationAppState;
use crate::dto::notification::{SendNotificationRequest, SendNotificationResponse};
use crate::handlers::notification_error_response;

/// Handler for POST /send-notification
///
/// # Request Body
///
/// ```json
/// {
///     "token": "<device registration token>",
///     "title": "Hello",
///     "body": "World",
///     "data": { "orderId": "42" }
/// }
/// ```
///
/// # Response
///
/// * 200 `{"success": true, "response": "projects/<id>/messages/<message-id>"}`
/// * 400 `{"error": "token, title, body required"}`
/// * 500 `{"error": "<provider message>"}`
pub async fn send_notification<P>(
    state: web::Data<NotificationAppState<P>>,
    request: web::Json<SendNotificationRequest>,
) -> HttpResponse
where
    P: PushProvider + ?Sized + 'static,
{
    match state
        .notification_service
        .send(request.into_inner().into())
        .await
    {
        Ok(response) => HttpResponse::Ok().json(SendNotificationResponse {
            success: true,
            response,
        }),
        Err(e) => {
            log::warn!("Notification relay failed: {}", e);
            notification_error_response(&e)
        }
    }
}
