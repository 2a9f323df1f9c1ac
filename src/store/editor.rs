//! Editor slice: the item currently loaded for editing, if any.

use crate::store::action::Action;
use crate::store::list::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub editing: Option<Item>,
}

pub fn reduce(mut state: EditorState, action: &Action) -> EditorState {
    match action {
        Action::EditItem(item) => {
            state.editing = Some(item.clone());
            state
        }
        Action::UpdateItem(_) | Action::CancelEdit => {
            state.editing = None;
            state
        }
        Action::RemoveItem(id) => {
            if state.editing.as_ref().is_some_and(|i| i.id == *id) {
                state.editing = None;
            }
            state
        }
        Action::AddItem(_)
        | Action::ActivateItem(_)
        | Action::DeactivateItem(_)
        | Action::AddNotification(_)
        | Action::DeleteNotifications => state,
    }
}
