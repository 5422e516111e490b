//! Toast notifications produced by page actions.

use std::time::Duration;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(5000);

/// The page only ever reports success or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A short-lived, closable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub duration: Duration,
    pub closable: bool,
}

impl Notification {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
            severity,
            duration: TOAST_DURATION,
            closable: true,
        }
    }

    pub fn event_added() -> Self {
        Notification::new(
            Severity::Success,
            "Evenement toegevoegd",
            "Het evenement is succesvol toegevoegd.",
        )
    }

    /// Deleting is reported with error severity.
    pub fn event_deleted() -> Self {
        Notification::new(
            Severity::Error,
            "Evenement verwijderd",
            "Het evenement is succesvol verwijderd.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_toasts_are_closable_and_last_five_seconds() {
        for toast in [Notification::event_added(), Notification::event_deleted()] {
            assert_eq!(toast.duration, Duration::from_secs(5));
            assert!(toast.closable);
        }
        assert_eq!(Notification::event_added().severity, Severity::Success);
        assert_eq!(Notification::event_deleted().severity, Severity::Error);
    }
}
