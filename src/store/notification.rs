//! Notification slice: messages queue up in arrival order until the user
//! dismisses all of them at once.

use crate::store::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: String,
}

impl Notification {
    pub fn info(message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Info,
            timestamp: timestamp.into(),
        }
    }

    pub fn error(message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            timestamp: timestamp.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    /// Oldest entries are dropped past this many.
    pub capacity: usize,
}

impl NotificationState {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

pub fn reduce(mut state: NotificationState, action: &Action) -> NotificationState {
    match action {
        Action::AddNotification(notification) => {
            state.items.push(notification.clone());
            if state.items.len() > state.capacity {
                let overflow = state.items.len() - state.capacity;
                state.items.drain(..overflow);
            }
            state
        }
        Action::DeleteNotifications => {
            state.items.clear();
            state
        }
        Action::AddItem(_)
        | Action::RemoveItem(_)
        | Action::EditItem(_)
        | Action::UpdateItem(_)
        | Action::CancelEdit
        | Action::ActivateItem(_)
        | Action::DeactivateItem(_) => state,
    }
}
