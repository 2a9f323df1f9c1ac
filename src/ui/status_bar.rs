use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if let Some(name) = &state.config.profile.name {
        parts.push(Span::styled(
            format!(" [{}] ", name),
            Style::default().fg(Color::Green).bg(Color::DarkGray),
        ));
    }

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = match state.focus {
        FocusPanel::List => "space check  e edit  d delete  tab editor  q quit",
        FocusPanel::Editor => "enter save  esc cancel  tab list",
    };
    let focus_name = match state.focus {
        FocusPanel::List => "LIST",
        FocusPanel::Editor => "EDITOR",
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let tail = format!(" {}  [{}] ", hints, focus_name);
    let remaining = (area.width as usize).saturating_sub(used + tail.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        tail,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
