//! User-visible notices (toasts) raised by the data layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client reports every failed call through a [`Notifier`]. In the
//! browser that is a [`SignalNotifier`] feeding the notice bar; tests record
//! notices instead.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

/// Notices kept on screen at once; older ones are dropped first.
pub const MAX_VISIBLE_NOTICES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "notice--info",
            Self::Success => "notice--success",
            Self::Warning => "notice--warning",
            Self::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, title: &str, message: &str);
}

/// Queue of notices currently on screen.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, title: &str, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, level, title: title.to_owned(), message: message.to_owned() });
        if self.items.len() > MAX_VISIBLE_NOTICES {
            let overflow = self.items.len() - MAX_VISIBLE_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }
}

/// Notifier that pushes into the reactive notice queue.
#[derive(Clone, Copy)]
pub struct SignalNotifier(pub RwSignal<NoticeState>);

impl Notifier for SignalNotifier {
    fn notify(&self, level: NoticeLevel, title: &str, message: &str) {
        self.0.update(|state| {
            state.push(level, title, message);
        });
    }
}
