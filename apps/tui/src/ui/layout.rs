use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Width of the month label gutter; fits "September".
pub const MONTH_LABEL_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub month_labels: Rect,
    pub plot: Rect,
    pub year_labels: Rect,
    pub footer: Rect,
    pub shortcuts: Rect,
}

/// Splits the screen. Shared by drawing and mouse hit testing so both agree on
/// where the plot is.
pub fn main_layout(screen: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title and description
            Constraint::Min(6),    // Heatmap
            Constraint::Length(1), // Year labels
            Constraint::Length(4), // Tooltip and legend
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(screen.inner(Margin::new(2, 1)));

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MONTH_LABEL_WIDTH + 1), Constraint::Min(4)])
        .split(rows[1]);

    let year_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MONTH_LABEL_WIDTH + 1), Constraint::Min(4)])
        .split(rows[2]);

    MainLayout {
        header: rows[0],
        month_labels: body[0],
        plot: body[1],
        year_labels: year_row[1],
        footer: rows[3],
        shortcuts: rows[4],
    }
}
