use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Most notification lines shown before the banner scrolls off the oldest.
pub const MAX_BANNER_LINES: u16 = 5;

pub struct AppLayout {
    pub notifications: Rect,
    pub list: Rect,
    pub editor: Rect,
    pub status_bar: Rect,
}

/// Split the screen top to bottom: notification banner (collapsed to zero
/// height when there is nothing to show), list, editor, status bar.
pub fn compute_layout(area: Rect, notification_count: usize) -> AppLayout {
    let banner_height = if notification_count == 0 {
        0
    } else {
        // Messages + close hint + borders
        (notification_count as u16).min(MAX_BANNER_LINES) + 3
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Notifications
            Constraint::Min(3),                // List
            Constraint::Length(3),             // Editor
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    AppLayout {
        notifications: chunks[0],
        list: chunks[1],
        editor: chunks[2],
        status_bar: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_collapses_when_empty() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), 0);
        assert_eq!(layout.notifications.height, 0);
        assert_eq!(layout.editor.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.list.height, 20);
    }

    #[test]
    fn test_banner_height_is_capped() {
        let layout = compute_layout(Rect::new(0, 0, 80, 40), 30);
        assert_eq!(layout.notifications.height, MAX_BANNER_LINES + 3);
    }
}
