#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// User-facing toast/alert seam. The console prints to stderr; a GUI shell
/// would surface these as toasts.
pub trait NotificationSink {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str);
}

/// Default sink that turns notifications into structured log lines.
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str) {
        match kind {
            NotificationKind::Success => {
                tracing::info!(title = %title, description = %description, "notification")
            }
            NotificationKind::Error => {
                tracing::error!(title = %title, description = %description, "notification")
            }
        }
    }
}
