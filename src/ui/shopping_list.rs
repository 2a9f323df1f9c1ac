use crate::app::state::*;
use crate::app::widget::ItemWidget;
use crate::store::Item;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState as ScrollState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::List;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" Shopping list ({}) ", state.items().len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let row_width = block.inner(area).width as usize;

    let mut rows: Vec<ListItem> = state
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let selected = focused && index == state.selected;
            item_row(item, state.widget(item.id), selected, row_width)
        })
        .collect();

    if rows.is_empty() {
        rows.push(ListItem::new(Span::styled(
            " Nothing on the list yet. Type in the editor below to add items.",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    }

    let mut scroll = ScrollState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(List::new(rows).block(block), area, &mut scroll);
}

fn item_row(
    item: &Item,
    widget: Option<&ItemWidget>,
    selected: bool,
    width: usize,
) -> ListItem<'static> {
    let inactive = widget.is_some_and(|w| w.shows_inactive());
    let mut style = if inactive {
        Theme::item_inactive()
    } else {
        Theme::item_active()
    };
    if selected {
        style = style.patch(Theme::item_selected());
    }

    let marker = if selected { "❯ " } else { "  " };
    let mut text = format!("{}{}", marker, item.label);
    let pad = width.saturating_sub(text.width());
    text.push_str(&" ".repeat(pad));

    let progress = widget.map_or(0.0, |w| w.progress());
    let filled = fill_width(width, progress);
    if filled == 0 {
        return ListItem::new(Line::from(Span::styled(text, style)));
    }

    let (head, tail) = split_at_column(&text, filled);
    ListItem::new(Line::from(vec![
        Span::styled(head.to_string(), style.patch(Theme::progress_fill())),
        Span::styled(tail.to_string(), style),
    ]))
}

/// Columns of a `width`-wide row covered by a bar at `progress` percent.
fn fill_width(width: usize, progress: f64) -> usize {
    let filled = (width as f64 * progress.clamp(0.0, 100.0) / 100.0).round() as usize;
    filled.min(width)
}

/// Split `s` so the head spans at most `column` display columns.
fn split_at_column(s: &str, column: usize) -> (&str, &str) {
    let mut used = 0;
    for (index, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > column {
            return s.split_at(index);
        }
        used += w;
    }
    (s, "")
}
