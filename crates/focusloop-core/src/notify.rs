//! Best-effort desktop notifications.
//!
//! A missing notification daemon or denied permission silently disables
//! the channel for that call -- no retry, no escalation, and never an error
//! back to the timer loop.

use notify_rust::Notification;

#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    enabled: bool,
}

impl Notifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn send(&self, summary: &str, body: &str) {
        if !self.enabled {
            return;
        }
        if let Err(e) = Notification::new()
            .summary(summary)
            .body(body)
            .appname("focusloop")
            .icon("alarm-clock")
            .show()
        {
            log::debug!("notification dropped: {e}");
        }
    }
}
