//! Notification relay route handlers

pub mod send_notification;

use std::sync::Arc;

use sb_core::services::{NotificationService, PushProvider};

pub use send_notification::send_notification;

/// Application state that holds the relay's service
pub struct NotificationAppState<P: PushProvider + ?Sized> {
    pub notification_service: Arc<NotificationService<P>>,
}

impl<P: PushProvider + ?Sized> NotificationAppState<P> {
    pub fn new(notification_service: Arc<NotificationService<P>>) -> Self {
        Self {
            notification_service,
        }
    }
}
