//! Transient notifications ("toasts").
//!
//! UI regions raise toasts in response to events; the cart store never does.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of toasts kept on screen.
pub const DEFAULT_TOAST_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Bounded queue of toasts, newest last. When full, the oldest is dropped.
#[derive(Debug, Clone)]
pub struct Notifier {
    toasts: VecDeque<Toast>,
    capacity: usize,
    next_id: u64,
}

impl Notifier {
    /// Create a notifier. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Push a success toast and return its id.
    pub fn success(&mut self, message: impl Into<String>, description: Option<String>) -> u64 {
        self.push(ToastKind::Success, message.into(), description)
    }

    /// Push an error toast and return its id.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into(), None)
    }

    fn push(&mut self, kind: ToastKind, message: String, description: Option<String>) -> u64 {
        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            kind,
            message,
            description,
        });
        id
    }

    /// Remove a toast by id. Returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() < before
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_CAPACITY)
    }
}
