use shared::{ApiError, Notification, NotificationKind, Operation};

/// Blocking alert for the user
pub fn show(notification: &Notification) {
    if notification.kind == NotificationKind::Error {
        log::warn!("{}", notification);
    }
    gloo::dialogs::alert(&notification.text());
}

pub fn success(operation: Operation) {
    if let Some(notification) = Notification::success(operation) {
        show(&notification);
    }
}

/// Fixed failure message for `operation`; the error detail only goes to the log
pub fn failure(operation: Operation, error: &ApiError) {
    log::error!("{:?} failed: {}", operation, error);
    show(&Notification::failure(operation));
}
