use crate::app::effect::Effect;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::app::widget::{TickOutcome, Transition};
use crate::countdown::Ticket;
use crate::store::{Action, Item, ItemId};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Effect> {
    let mut effects = match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::CountdownTick { item_id, ticket } => handle_countdown_tick(state, item_id, ticket),
    };

    // Effects raised by dispatches (saves, timer teardown on removal)
    effects.append(&mut state.pending_effects);
    effects
}

fn handle_countdown_tick(state: &mut AppState, item_id: ItemId, ticket: Ticket) -> Vec<Effect> {
    let settings = state.countdown;
    let Some(widget) = state.widget_mut(item_id) else {
        return vec![];
    };

    match widget.tick(ticket, &settings) {
        TickOutcome::Ignored => {
            debug!(item_id, ticket, "stale countdown tick");
            vec![]
        }
        TickOutcome::Advanced => {
            state.dirty = true;
            vec![]
        }
        TickOutcome::Completed { dispatch } => {
            info!(item_id, "item checked off");
            state.dispatch(dispatch);
            vec![Effect::CancelCountdown { item_id }]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Effect> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Effect::Quit];
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Editor => handle_editor_key(state, key),
        FocusPanel::List => handle_list_key(state, key),
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.select_first();
            vec![]
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.select_last();
            vec![]
        }
        KeyCode::Char(' ') | KeyCode::Enter => toggle_selected(state),
        KeyCode::Char('e') => {
            edit_selected(state);
            vec![]
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            remove_selected(state);
            vec![]
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            state.focus = FocusPanel::Editor;
            vec![]
        }
        KeyCode::Char('x') | KeyCode::Esc => {
            dismiss_notifications(state);
            vec![]
        }
        KeyCode::Char('q') => vec![Effect::Quit],
        _ => vec![],
    }
}

fn handle_editor_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    match key.code {
        KeyCode::Enter => {
            submit_editor(state);
            vec![]
        }
        KeyCode::Esc => {
            if state.store.editor().editing.is_some() {
                state.input.clear();
                state.dispatch(Action::CancelEdit);
            } else if !state.store.notifications().is_empty() {
                dismiss_notifications(state);
            } else {
                state.focus = FocusPanel::List;
            }
            vec![]
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                state.input.delete_word_back();
            } else {
                state.input.delete_back();
            }
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.input.move_home(),
                    'e' => state.input.move_end(),
                    'w' => state.input.delete_word_back(),
                    'u' => state.input.clear(),
                    _ => {}
                }
            } else {
                state.input.insert_char(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Start or cancel the countdown on the selected item.
fn toggle_selected(state: &mut AppState) -> Vec<Effect> {
    let Some(item_id) = state.selected_item().map(|i| i.id) else {
        return vec![];
    };
    let Some(widget) = state.widget_mut(item_id) else {
        return vec![];
    };

    match widget.trigger() {
        Transition::Armed { ticket } => {
            state.dirty = true;
            vec![Effect::StartCountdown { item_id, ticket }]
        }
        Transition::Cancelled { dispatch } => {
            debug!(item_id, "countdown cancelled by user");
            state.dispatch(dispatch);
            vec![Effect::CancelCountdown { item_id }]
        }
        Transition::Reactivated { dispatch } => {
            state.dispatch(dispatch);
            vec![]
        }
    }
}

fn edit_selected(state: &mut AppState) {
    let Some(item) = state.selected_item().cloned() else {
        return;
    };
    state.input.set_text(&item.label);
    state.focus = FocusPanel::Editor;
    state.dispatch(Action::EditItem(item));
}

fn remove_selected(state: &mut AppState) {
    let Some(item) = state.selected_item().cloned() else {
        return;
    };
    if state.store.editor().editing.as_ref().is_some_and(|i| i.id == item.id) {
        state.input.clear();
    }
    state.dispatch(Action::RemoveItem(item.id));
    state.notify_info(format!("Removed \"{}\"", item.label));
}

fn submit_editor(state: &mut AppState) {
    let text = state.input.take_text();
    let label = text.trim();
    if label.is_empty() {
        return;
    }

    match state.store.editor().editing.clone() {
        Some(item) => {
            let updated = Item {
                label: label.to_string(),
                ..item
            };
            state.dispatch(Action::UpdateItem(updated));
            state.focus = FocusPanel::List;
        }
        None => {
            let id = state.store.allocate_item_id();
            state.dispatch(Action::AddItem(Item::new(id, label)));
            state.select_last();
        }
    }
}

fn dismiss_notifications(state: &mut AppState) {
    if !state.store.notifications().is_empty() {
        state.dispatch(Action::DeleteNotifications);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::ListState;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, key(KeyCode::Char(c)));
        }
    }

    fn tick(state: &mut AppState, item_id: ItemId, ticket: Ticket) -> Vec<Effect> {
        handle_event(state, AppEvent::CountdownTick { item_id, ticket })
    }

    fn empty_state() -> AppState {
        AppState::new(AppConfig::default(), ListState::default())
    }

    /// A state holding `labels` with the list focused.
    fn list_state(labels: &[&str]) -> AppState {
        let mut state = empty_state();
        for label in labels {
            type_text(&mut state, label);
            handle_event(&mut state, key(KeyCode::Enter));
        }
        handle_event(&mut state, key(KeyCode::Tab));
        state.select_first();
        state
    }

    fn start_countdown(state: &mut AppState) -> (ItemId, Ticket) {
        let effects = handle_event(state, key(KeyCode::Char(' ')));
        match effects.as_slice() {
            [Effect::StartCountdown { item_id, ticket }] => (*item_id, *ticket),
            other => panic!("expected StartCountdown, got {:?}", other),
        }
    }

    #[test]
    fn test_add_from_editor() {
        let mut state = empty_state();
        assert_eq!(state.focus, FocusPanel::Editor);

        type_text(&mut state, "  milk ");
        let effects = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::SaveList]);
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].label, "milk");
        assert!(state.input.text.is_empty());
    }

    #[test]
    fn test_blank_submission_ignored() {
        let mut state = empty_state();
        type_text(&mut state, "   ");
        let effects = handle_event(&mut state, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_cancel_countdown_before_timeout() {
        let mut state = list_state(&["milk"]);
        let (item_id, ticket) = start_countdown(&mut state);
        assert_eq!(state.pending_count(), 1);

        assert!(tick(&mut state, item_id, ticket).is_empty());
        assert!(tick(&mut state, item_id, ticket).is_empty());
        assert!(state.widget(item_id).unwrap().progress() > 0.0);

        let effects = handle_event(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(effects, vec![Effect::CancelCountdown { item_id }]);

        let widget = state.widget(item_id).unwrap();
        assert!(!widget.shows_inactive());
        assert_eq!(widget.progress(), 0.0);
        assert!(state.items()[0].active);
    }

    #[test]
    fn test_countdown_completion_deactivates_once() {
        let mut state = list_state(&["milk", "eggs"]);
        let (item_id, ticket) = start_countdown(&mut state);

        let mut stops = 0;
        for _ in 0..state.countdown.iterations + 5 {
            let effects = tick(&mut state, item_id, ticket);
            stops += effects
                .iter()
                .filter(|e| **e == Effect::CancelCountdown { item_id })
                .count();
        }
        assert_eq!(stops, 1);
        assert!(!state.items()[0].active);
        assert!(state.items()[1].active);
        assert_eq!(state.pending_count(), 0);
        assert_eq!(state.widget(item_id).unwrap().progress(), 0.0);

        // Triggering a checked-off item brings it straight back
        let effects = handle_event(&mut state, key(KeyCode::Char(' ')));
        assert!(effects.is_empty());
        assert!(state.items()[0].active);
    }

    #[test]
    fn test_tick_for_removed_item_is_ignored() {
        let mut state = list_state(&["milk"]);
        let (item_id, ticket) = start_countdown(&mut state);

        let effects = handle_event(&mut state, key(KeyCode::Char('d')));
        assert!(effects.contains(&Effect::CancelCountdown { item_id }));
        assert!(effects.contains(&Effect::SaveList));
        assert!(state.items().is_empty());

        assert!(tick(&mut state, item_id, ticket).is_empty());
    }

    #[test]
    fn test_edit_item() {
        let mut state = list_state(&["milk", "eggs"]);
        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Char('e')));
        assert_eq!(state.focus, FocusPanel::Editor);
        assert_eq!(state.input.text, "eggs");
        assert_eq!(
            state.store.editor().editing.as_ref().map(|i| i.label.as_str()),
            Some("eggs")
        );

        type_text(&mut state, " x12");
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.items()[1].label, "eggs x12");
        assert_eq!(state.items().len(), 2);
        assert!(state.store.editor().editing.is_none());
        assert_eq!(state.focus, FocusPanel::List);
    }

    #[test]
    fn test_escape_abandons_edit() {
        let mut state = list_state(&["milk"]);
        handle_event(&mut state, key(KeyCode::Char('e')));
        handle_event(&mut state, key(KeyCode::Esc));
        assert!(state.store.editor().editing.is_none());
        assert!(state.input.text.is_empty());
        assert_eq!(state.items()[0].label, "milk");
    }

    #[test]
    fn test_remove_notifies_and_dismiss_clears() {
        let mut state = list_state(&["milk", "eggs"]);
        handle_event(&mut state, key(KeyCode::Char('d')));
        handle_event(&mut state, key(KeyCode::Char('d')));
        assert!(state.items().is_empty());
        assert_eq!(state.store.notifications().len(), 2);

        handle_event(&mut state, key(KeyCode::Char('x')));
        assert!(state.store.notifications().is_empty());

        // Nothing left to remove
        handle_event(&mut state, key(KeyCode::Char('d')));
        assert!(state.store.notifications().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut state = empty_state();
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Effect::Quit]);

        // 'q' types into the editor
        assert!(handle_event(&mut state, key(KeyCode::Char('q'))).is_empty());
        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Effect::Quit]);
    }
}
