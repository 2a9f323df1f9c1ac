//! Shopping list slice.
//!
//! Items keep insertion order. Ids are unique within the list: adding an item
//! whose id is already present is ignored, and every id-addressed action is a
//! no-op when the id is absent.

use crate::store::action::Action;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type ItemId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    /// Local UI state only; never written to the list file.
    #[serde(skip, default = "default_active")]
    pub active: bool,
}

impl Item {
    pub fn new(id: ItemId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            active: true,
        }
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ListState {
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(|i| i.id).max()
    }

    pub fn inactive_count(&self) -> usize {
        self.items.iter().filter(|i| !i.active).count()
    }

    /// First id that appears more than once, if any.
    pub fn duplicate_id(&self) -> Option<ItemId> {
        let mut seen = HashSet::new();
        self.items.iter().map(|i| i.id).find(|id| !seen.insert(*id))
    }

    /// Same ids and labels in the same order. `active` is ignored since it
    /// never reaches the list file.
    pub fn same_saved_contents(&self, other: &ListState) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| a.id == b.id && a.label == b.label)
    }
}

pub fn reduce(mut state: ListState, action: &Action) -> ListState {
    match action {
        Action::AddItem(item) => {
            if !state.contains(item.id) {
                state.items.push(item.clone());
            }
            state
        }
        Action::RemoveItem(id) => {
            state.items.retain(|i| i.id != *id);
            state
        }
        Action::UpdateItem(item) => {
            if let Some(existing) = state.items.iter_mut().find(|i| i.id == item.id) {
                existing.label = item.label.clone();
            }
            state
        }
        Action::ActivateItem(id) => set_active(state, *id, true),
        Action::DeactivateItem(id) => set_active(state, *id, false),
        Action::EditItem(_)
        | Action::CancelEdit
        | Action::AddNotification(_)
        | Action::DeleteNotifications => state,
    }
}

fn set_active(mut state: ListState, id: ItemId, active: bool) -> ListState {
    if let Some(item) = state.items.iter_mut().find(|i| i.id == id) {
        item.active = active;
    }
    state
}
