use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub const SIDEBAR_WIDTH: u16 = 26;

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | body | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Status bar / go-to bar
        ])
        .split(area);

    // Body: sidebar | content
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Min(30),
        ])
        .split(main_chunks[1]);

    AppLayout {
        header: main_chunks[0],
        sidebar: body[0],
        content: body[1],
        status_bar: main_chunks[2],
    }
}

/// Centered rect of at most `width` x `height` inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2)).max(1);
    let h = height.min(area.height.saturating_sub(2)).max(1);
    Rect::new(
        area.x + (area.width.saturating_sub(w)) / 2,
        area.y + (area.height.saturating_sub(h)) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.content.x, SIDEBAR_WIDTH);
        assert_eq!(layout.content.height, 28);
    }

    #[test]
    fn test_centered_fits() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered(area, 80, 40);
        assert!(popup.width <= 38 && popup.height <= 8);
        assert_eq!(centered(area, 10, 4), Rect::new(15, 3, 10, 4));
    }
}
