//! Application store.
//!
//! One explicit object holds every slice of domain state (list,
//! notifications, editor). Slices only change through [`Store::dispatch`],
//! which feeds the action through each slice's pure reducer in turn.

pub mod action;
pub mod editor;
pub mod list;
pub mod notification;

pub use action::Action;
pub use editor::EditorState;
pub use list::{Item, ItemId, ListState};
pub use notification::{Notification, NotificationState};

use tracing::debug;

#[derive(Debug)]
pub struct Store {
    list: ListState,
    notifications: NotificationState,
    editor: EditorState,
    next_item_id: ItemId,
}

impl Store {
    pub fn new(list: ListState, max_notifications: usize) -> Self {
        let next_item_id = list.max_id().map_or(1, |id| id + 1);
        Self {
            list,
            notifications: NotificationState::new(max_notifications),
            editor: EditorState::default(),
            next_item_id,
        }
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn notifications(&self) -> &NotificationState {
        &self.notifications
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn allocate_item_id(&mut self) -> ItemId {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    /// Run `action` through every reducer. Returns `true` when the saved part
    /// of the list (ids, labels, order) changed. Check-offs alone return
    /// `false`.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(action = action.name(), "dispatch");

        let before = self.list.clone();
        self.list = list::reduce(std::mem::take(&mut self.list), &action);
        self.notifications = notification::reduce(
            std::mem::replace(&mut self.notifications, NotificationState::new(1)),
            &action,
        );
        self.editor = editor::reduce(std::mem::take(&mut self.editor), &action);

        !self.list.same_saved_contents(&before)
    }
}
