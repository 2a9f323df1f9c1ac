use crate::app::state::AppState;
use crate::store::Notification;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::layout::MAX_BANNER_LINES;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let notifications = &state.store.notifications().items;
    if notifications.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(format!(" Notifications ({}) ", notifications.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Color::Yellow));

    // Newest last; keep the tail when there are more than fit
    let skip = notifications.len().saturating_sub(MAX_BANNER_LINES as usize);
    let mut lines: Vec<Line> = notifications.iter().skip(skip).map(notification_line).collect();
    lines.push(Line::from(Span::styled(
        "x / Esc to close",
        Style::default().fg(Theme::TEXT_MUTED),
    )).alignment(Alignment::Right));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn notification_line(notification: &Notification) -> Line<'_> {
    let style = if notification.is_error() {
        Theme::error_message()
    } else {
        Theme::info_message()
    };
    Line::from(vec![
        Span::styled(format!("{} ", notification.timestamp), Theme::timestamp()),
        Span::styled(notification.message.as_str(), style),
    ])
}
