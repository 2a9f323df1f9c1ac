use crate::store::list::{Item, ItemId};
use crate::store::notification::Notification;

/// Everything that can change the store. Each slice reducer matches on the
/// full set and returns its state untouched for variants it does not own.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddItem(Item),
    RemoveItem(ItemId),
    /// Load an item into the editor.
    EditItem(Item),
    /// Commit an edited label back into the list.
    UpdateItem(Item),
    CancelEdit,
    ActivateItem(ItemId),
    DeactivateItem(ItemId),
    AddNotification(Notification),
    DeleteNotifications,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddItem(_) => "ADD_ITEM",
            Action::RemoveItem(_) => "REMOVE_ITEM",
            Action::EditItem(_) => "EDIT_ITEM",
            Action::UpdateItem(_) => "UPDATE_ITEM",
            Action::CancelEdit => "CANCEL_EDIT",
            Action::ActivateItem(_) => "ACTIVATE_ITEM",
            Action::DeactivateItem(_) => "DEACTIVATE_ITEM",
            Action::AddNotification(_) => "ADD_NOTIFICATION",
            Action::DeleteNotifications => "DELETE_NOTIFICATIONS",
        }
    }
}
