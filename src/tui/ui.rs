//! Layout helpers for the visualizer screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub info: Rect,
    pub bars: Rect,
    pub stats: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Split the frame into info panel, bar area, stats, status and footer lines.
pub fn build_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenLayout {
        info: chunks[0],
        bars: chunks[1],
        stats: chunks[2],
        status: chunks[3],
        footer: chunks[4],
    }
}

/// Create a centered rect taking the given percentages of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_gives_bars_the_remaining_height() {
        let layout = build_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.info.height, 5);
        assert_eq!(layout.bars.height, 22);
        assert_eq!(layout.footer.y, 29);
    }

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);

        assert!(centered.width <= 55);
        assert!(centered.x >= 20 && centered.x <= 30);
        assert!(centered.y >= 20 && centered.y <= 30);
    }
}
