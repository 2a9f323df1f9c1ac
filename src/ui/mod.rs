mod editor;
mod layout;
mod notification_banner;
mod shopping_list;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.store.notifications().len());

    notification_banner::render(frame, app_layout.notifications, state);
    shopping_list::render(frame, app_layout.list, state);
    editor::render(frame, app_layout.editor, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
