//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the navigation sidebar in columns
pub const SIDEBAR_WIDTH: u16 = 20;

/// Main screen layout areas
pub struct MainLayout {
    pub sidebar: Rect,
    pub content: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout: sidebar on the left, workspace content
/// on the right, status line and help bar along the bottom
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(vertical_chunks[0]);

    MainLayout {
        sidebar: horizontal_chunks[0],
        content: horizontal_chunks[1],
        status: vertical_chunks[1],
        help: vertical_chunks[2],
    }
}
