use std::path::Path;

use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use temp_heatmap::{CursorMove, GridCursor, Raster};

use crate::app::state::App;
use crate::export::{write_chart, ExportFormat, DEFAULT_EXPORT_PATH};
use crate::ui::layout::main_layout;

pub fn handle_input(app: &mut App, key: KeyCode) {
    if handle_help_toggle(app, key) {
        return;
    }

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Esc => {
            app.chart.pointer_exit(&mut app.hover);
        }
        KeyCode::Char('e') => export(app, Path::new(DEFAULT_EXPORT_PATH)),
        code => {
            if let Some(movement) = cursor_move(code) {
                app.cursor = app.cursor.step(&app.chart, movement);
                app.hover_cursor();
            }
        }
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) || key == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

const fn cursor_move(key: KeyCode) -> Option<CursorMove> {
    match key {
        KeyCode::Left | KeyCode::Char('h') => Some(CursorMove::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(CursorMove::Right),
        KeyCode::Up | KeyCode::Char('k') => Some(CursorMove::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(CursorMove::Down),
        KeyCode::PageUp => Some(CursorMove::PageLeft),
        KeyCode::PageDown => Some(CursorMove::PageRight),
        KeyCode::Home => Some(CursorMove::Home),
        KeyCode::End => Some(CursorMove::End),
        _ => None,
    }
}

/// Mouse movement over the plot hovers the cell underneath; anywhere else
/// hides the tooltip.
pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    if app.show_help || !matches!(event.kind, MouseEventKind::Moved) {
        return;
    }

    let plot = main_layout(app.screen).plot;
    let inside = event.column >= plot.x
        && event.column < plot.x + plot.width
        && event.row >= plot.y
        && event.row < plot.y + plot.height;

    if !inside {
        app.chart.pointer_exit(&mut app.hover);
        return;
    }

    let raster = Raster::new(plot.width, plot.height);
    let Some((x, y)) = raster.canvas_point(&app.chart, event.column - plot.x, event.row - plot.y)
    else {
        return;
    };

    app.chart.pointer_move(&mut app.hover, x, y);

    if let Some(cell) = app.hover.hovered().and_then(|index| app.chart.cells().get(index)) {
        app.cursor = GridCursor {
            year: cell.year,
            month: cell.month,
        };
    }
}

fn export(app: &mut App, path: &Path) {
    app.status_message = match write_chart(&app.chart, path, ExportFormat::from_path(path)) {
        Ok(path) => format!("Exported {}", path.display()),
        Err(e) => {
            tracing::warn!("export failed: {e:#}");
            format!("Export failed: {e}")
        }
    };
}
