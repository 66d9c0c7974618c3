// UI module for temp-heatmap
// Handles all rendering of the heatmap screen

pub mod layout;
pub mod widgets;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use temp_heatmap::Raster;

use crate::app::App;
use layout::{main_layout, MONTH_LABEL_WIDTH};
use widgets::heatmap::{bucket_color, HeatmapWidget};
use widgets::popup::centered_rect;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let layout = main_layout(f.area());

    render_header(app, f, layout.header);
    f.render_widget(
        HeatmapWidget::new(&app.chart).cursor(app.cursor),
        layout.plot,
    );
    render_month_labels(app, f, layout.month_labels, layout.plot);
    render_year_labels(app, f, layout.year_labels);
    render_footer(app, f, layout.footer);
    render_shortcuts(f, layout.shortcuts);

    if app.show_help {
        render_help_popup(f);
    }
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!("== {} ==", app.chart.title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        TextLine::from(Span::styled(
            app.chart.description(),
            Style::default().fg(Color::White),
        )),
        TextLine::from(Span::styled(
            format!("{} monthly records", app.stats.records),
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// One month name per tick, on the terminal row its band starts in.
fn render_month_labels(app: &App, f: &mut Frame<'_>, area: Rect, plot: Rect) {
    let raster = Raster::new(plot.width, plot.height);
    let canvas = app.chart.canvas();
    let buf = f.buffer_mut();
    let mut last_row = None;

    for tick in &app.chart.y_axis().ticks {
        let Some((_, row)) = raster.grid_position(&app.chart, canvas.left(), tick.position) else {
            continue;
        };
        if last_row == Some(row) {
            continue;
        }
        last_row = Some(row);

        let label = format!("{:>width$}", tick.label, width = MONTH_LABEL_WIDTH as usize);
        buf.set_string(area.x, area.y + row, label, Style::default().fg(Color::Gray));
    }
}

/// Integer year labels, skipping any that would overlap the previous one.
fn render_year_labels(app: &App, f: &mut Frame<'_>, area: Rect) {
    let raster = Raster::new(area.width, 1);
    let canvas = app.chart.canvas();
    let buf = f.buffer_mut();
    let mut next_free = 0_u16;

    for tick in &app.chart.x_axis().ticks {
        let Some((column, _)) = raster.grid_position(&app.chart, tick.position, canvas.top())
        else {
            continue;
        };
        let width = tick.label.len() as u16;
        if column < next_free || column + width > area.width {
            continue;
        }

        buf.set_string(
            area.x + column,
            area.y,
            &tick.label,
            Style::default().fg(Color::Gray),
        );
        next_free = column + width + 1;
    }
}

fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let tooltip = app.hover.tooltip();

    let tooltip_line = if tooltip.is_visible() {
        let mut spans = vec![Span::styled(
            tooltip.text().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(temperature) = app.hovered_temperature() {
            spans.push(Span::styled(
                format!("   {temperature:.3}℃"),
                Style::default().fg(Color::Gray),
            ));
        }
        TextLine::from(spans)
    } else {
        TextLine::from(Span::styled(
            "Move over a cell with the arrows or the mouse",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let mut legend = Vec::new();
    for entry in app.chart.legend() {
        legend.push(Span::styled("■ ", Style::default().fg(bucket_color(entry.bucket))));
        legend.push(Span::styled(entry.label, Style::default().fg(Color::White)));
        legend.push(Span::raw("   "));
    }

    let status = if app.status_message.is_empty() {
        TextLine::from("")
    } else {
        TextLine::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Yellow),
        ))
    };

    let block = Block::default()
        .title("Tooltip")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::Gray));

    let paragraph = Paragraph::new(Text::from(vec![tooltip_line, TextLine::from(legend), status]))
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![
        Span::styled("←→↑↓", Style::default().fg(Color::Cyan)),
        Span::raw(" move  "),
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Cyan)),
        Span::raw(" ±10 years  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" hide  "),
        Span::styled("e", Style::default().fg(Color::Cyan)),
        Span::raw(" export  "),
        Span::styled("F1", Style::default().fg(Color::Cyan)),
        Span::raw(" help  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(60, 60, f.area());

    let lines = vec![
        TextLine::from(Span::styled(
            "Heatmap keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("  Arrows / hjkl   move one year or month"),
        TextLine::from("  PgUp / PgDn     move ten years"),
        TextLine::from("  Home / End      first or last year"),
        TextLine::from("  Mouse           hover the cell under the pointer"),
        TextLine::from("  Esc             hide the tooltip"),
        TextLine::from("  e               export heatmap.svg"),
        TextLine::from("  q               quit"),
        TextLine::from(""),
        TextLine::from("  Colors: variance ≤ -1, -1 to 0, 0 to 1, > 1 (℃)"),
    ];

    let block = Block::default()
        .title("Help (F1 / Esc to close)")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::fixtures;
    use crate::app::{handle_input, App};
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &App) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buf: &ratatui::buffer::Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn draws_title_axes_and_legend() {
        let app = fixtures::app();
        let text = screen_text(&draw(&app));

        assert!(text.contains("Monthly Global Land-Surface Temperature"));
        assert!(text.contains("January"));
        assert!(text.contains("December"));
        assert!(text.contains("1900"));
        assert!(text.contains("-1 to 0"));
    }

    #[test]
    fn draws_tooltip_after_hover() {
        let mut app = fixtures::app();
        handle_input(&mut app, KeyCode::Right);

        let text = screen_text(&draw(&app));
        assert!(text.contains("1901 January : -2"));
    }
}
