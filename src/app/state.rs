use crate::app::effect::Effect;
use crate::app::widget::ItemWidget;
use crate::config::AppConfig;
use crate::countdown::CountdownSettings;
use crate::store::{Action, Item, ItemId, ListState, Notification, Store};
use chrono::Local;
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        text
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    List,
    Editor,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
    pub widgets: BTreeMap<ItemId, ItemWidget>,
    pub countdown: CountdownSettings,
    pub input: InputState,
    pub focus: FocusPanel,
    pub selected: usize,
    pub should_quit: bool,
    pub dirty: bool,
    pub timestamp_format: String,
    pub pending_effects: Vec<Effect>,
}

impl AppState {
    pub fn new(config: AppConfig, list: ListState) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        let countdown = CountdownSettings::from_config(&config.countdown);
        let store = Store::new(list, config.ui.max_notifications);
        let focus = if store.list().is_empty() {
            FocusPanel::Editor
        } else {
            FocusPanel::List
        };
        let mut state = Self {
            config,
            store,
            widgets: BTreeMap::new(),
            countdown,
            input: InputState::new(),
            focus,
            selected: 0,
            should_quit: false,
            dirty: true,
            timestamp_format,
            pending_effects: Vec::new(),
        };
        state.reconcile_widgets();
        state
    }

    /// Dispatch into the store, then bring the item widgets in line with the
    /// list. A change to what is saved schedules a save.
    pub fn dispatch(&mut self, action: Action) {
        if self.store.dispatch(action) {
            self.pending_effects.push(Effect::SaveList);
            self.reconcile_widgets();
        }
        self.dirty = true;
    }

    fn reconcile_widgets(&mut self) {
        let list = self.store.list();

        let mut removed = Vec::new();
        self.widgets.retain(|id, widget| {
            if list.contains(*id) {
                true
            } else {
                if widget.unmount() {
                    removed.push(*id);
                }
                false
            }
        });
        for item_id in removed {
            self.pending_effects.push(Effect::CancelCountdown { item_id });
        }

        for item in &list.items {
            self.widgets
                .entry(item.id)
                .or_insert_with(|| ItemWidget::new(item.id, item.active));
        }

        self.selected = self.selected.min(list.len().saturating_sub(1));
    }

    pub fn notify_info(&mut self, message: String) {
        let timestamp = self.timestamp();
        self.dispatch(Action::AddNotification(Notification::info(message, timestamp)));
    }

    pub fn notify_error(&mut self, message: String) {
        let timestamp = self.timestamp();
        self.dispatch(Action::AddNotification(Notification::error(message, timestamp)));
    }

    fn timestamp(&self) -> String {
        Local::now().format(&self.timestamp_format).to_string()
    }

    pub fn items(&self) -> &[Item] {
        &self.store.list().items
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items().get(self.selected)
    }

    pub fn widget(&self, id: ItemId) -> Option<&ItemWidget> {
        self.widgets.get(&id)
    }

    pub fn widget_mut(&mut self, id: ItemId) -> Option<&mut ItemWidget> {
        self.widgets.get_mut(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.widgets.values().filter(|w| w.is_pending()).count()
    }

    pub fn select_next(&mut self) {
        let len = self.items().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
            self.dirty = true;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.items().len();
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
            self.dirty = true;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.dirty = true;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items().len().saturating_sub(1);
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::List => FocusPanel::Editor,
            FocusPanel::Editor => FocusPanel::List,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let list = self.store.list();
        let mut s = format!("Items: {}", list.len());
        let done = list.inactive_count();
        if done > 0 {
            s.push_str(&format!(" ({} done)", done));
        }
        let pending = self.pending_count();
        if pending > 0 {
            s.push_str(&format!(" | Pending: {}", pending));
        }
        s
    }
}
