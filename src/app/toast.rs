//! Transient, dismissible notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Destructive,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    expires_at: Instant,
}

/// Queue of live notifications, oldest first.
#[derive(Debug)]
pub struct Toasts {
    items: VecDeque<Toast>,
    ttl: Duration,
}

impl Toasts {
    /// Upper bound on notifications kept at once; the oldest is dropped.
    const MAX_VISIBLE: usize = 3;

    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) {
        self.push_at(kind, title, description, Instant::now());
    }

    pub fn push_at(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
        now: Instant,
    ) {
        if self.items.len() == Self::MAX_VISIBLE {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            kind,
            title: title.into(),
            description: description.into(),
            expires_at: now + self.ttl,
        });
    }

    /// Drop every notification whose time is up.
    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|t| t.expires_at > now);
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.back()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
