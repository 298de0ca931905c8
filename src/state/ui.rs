//! UI chrome state: dark mode, the admin sidebar, and transient notices.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Severity of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient toast-style notice. `seq` distinguishes notices with equal
/// text so a stale auto-dismiss timer cannot clear a newer notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub seq: u64,
}

/// Shared UI chrome state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: true,
            notice: None,
            notice_seq: 0,
        }
    }
}

impl UiState {
    /// Show a success notice, replacing any current one.
    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.push_notice(NoticeKind::Success, text.into());
    }

    /// Show an error notice, replacing any current one.
    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.push_notice(NoticeKind::Error, text.into());
    }

    fn push_notice(&mut self, kind: NoticeKind, text: String) {
        self.notice_seq += 1;
        self.notice = Some(Notice { kind, text, seq: self.notice_seq });
    }

    /// Dismiss the notice with sequence number `seq`. A stale dismissal (the
    /// notice was already replaced) is a no-op.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|notice| notice.seq == seq) {
            self.notice = None;
        }
    }
}
