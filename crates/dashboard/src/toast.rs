use campaign::{Notification, NotificationKind, Notifier};
use std::io::Write;
use std::sync::Mutex;
use tracing::{error, info};

/// Prints notifications as toast lines to a writer (stdout by default)
/// and mirrors them into the log.
pub struct ConsoleNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleNotifier<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub fn toast_line(notification: &Notification) -> String {
    let icon = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✖",
    };
    format!("{} {}", icon, notification.message)
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!(kind = %notification.kind, "{}", notification.message),
            NotificationKind::Error => error!(kind = %notification.kind, "{}", notification.message),
        }
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{}", toast_line(&notification)) {
            error!("Failed to print notification: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_are_written() {
        let notifier = ConsoleNotifier::new(Vec::new());
        notifier.notify(Notification::success("claim Successful"));
        notifier.notify(Notification::error("insufficient funds"));
        let text = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(text, "✔ claim Successful\n✖ insufficient funds\n");
    }
}
