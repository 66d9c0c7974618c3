mod dashboard;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use temp_heatmap::{Dataset, Raster, DEFAULT_DATA_URL};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

use dashboard::{bucket_color, Dashboard};

const MONTH_LABEL_WIDTH: u16 = 10;

/// Unloaded until the single fetch completes, then loaded for good.
enum LoadState {
    Loading,
    Ready(Box<Dashboard>),
    Failed(String),
}

impl LoadState {
    /// Text shown in place of the heatmap, `None` once it can be drawn.
    fn message(&self) -> Option<String> {
        match self {
            Self::Loading => Some("Loading global-temperature.json...".to_string()),
            Self::Failed(error) => Some(format!("Could not load the dataset: {error}")),
            Self::Ready(_) => None,
        }
    }
}

fn main() -> io::Result<()> {
    let state = Rc::new(RefCell::new(LoadState::Loading));

    spawn_local(fetch_dataset(state.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| {
            if let LoadState::Ready(dashboard) = &mut *state.borrow_mut() {
                dashboard.handle_key(event.code);
            }
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title(temp_heatmap::legend::CHART_TITLE)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        let state = state.borrow();
        let Some(message) = state.message() else {
            if let LoadState::Ready(dashboard) = &*state {
                render_dashboard(dashboard, f, inner);
            }
            return;
        };

        let paragraph = Paragraph::new(Text::from(TextLine::from(message)))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, inner);
    });

    Ok(())
}

fn render_dashboard(dashboard: &Dashboard, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(4),
        ])
        .split(area);

    let description = Paragraph::new(TextLine::from(Span::styled(
        dashboard.chart.description(),
        Style::default().fg(Color::White),
    )))
    .alignment(Alignment::Center);
    f.render_widget(description, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MONTH_LABEL_WIDTH + 1), Constraint::Min(4)])
        .split(rows[2]);
    let plot = columns[1];

    f.render_widget(
        Paragraph::new(Text::from(dashboard.heatmap_lines(plot.width, plot.height))),
        plot,
    );
    render_month_labels(dashboard, f, columns[0], plot);

    let year_area = Rect {
        x: plot.x,
        width: plot.width,
        ..rows[3]
    };
    render_year_labels(dashboard, f, year_area);

    render_footer(dashboard, f, rows[4]);
}

fn render_month_labels(
    dashboard: &Dashboard,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
    plot: Rect,
) {
    let raster = Raster::new(plot.width, plot.height);
    let left = dashboard.chart.canvas().left();
    let mut lines = vec![TextLine::from(""); usize::from(area.height)];

    for tick in &dashboard.chart.y_axis().ticks {
        if let Some((_, row)) = raster.grid_position(&dashboard.chart, left, tick.position) {
            if let Some(line) = lines.get_mut(usize::from(row)) {
                *line = TextLine::from(Span::styled(
                    tick.label.clone(),
                    Style::default().fg(Color::Gray),
                ));
            }
        }
    }

    f.render_widget(
        Paragraph::new(Text::from(lines)).alignment(Alignment::Right),
        Rect {
            width: MONTH_LABEL_WIDTH,
            ..area
        },
    );
}

fn render_year_labels(dashboard: &Dashboard, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let raster = Raster::new(area.width, 1);
    let top = dashboard.chart.canvas().top();
    let mut row = " ".repeat(usize::from(area.width));
    let mut next_free = 0_usize;

    for tick in &dashboard.chart.x_axis().ticks {
        let Some((column, _)) = raster.grid_position(&dashboard.chart, tick.position, top) else {
            continue;
        };
        let start = usize::from(column);
        let end = start + tick.label.len();
        if start < next_free || end > row.len() {
            continue;
        }
        row.replace_range(start..end, &tick.label);
        next_free = end + 1;
    }

    f.render_widget(
        Paragraph::new(TextLine::from(Span::styled(
            row,
            Style::default().fg(Color::Gray),
        ))),
        area,
    );
}

fn render_footer(dashboard: &Dashboard, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let mut legend = Vec::new();
    for entry in dashboard.chart.legend() {
        legend.push(Span::styled(
            "■ ",
            Style::default().fg(bucket_color(entry.bucket)),
        ));
        legend.push(Span::styled(entry.label, Style::default().fg(Color::White)));
        legend.push(Span::raw("   "));
    }

    let block = Block::default()
        .title("Tooltip")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(vec![
        dashboard.tooltip_line(),
        TextLine::from(legend),
    ]))
    .block(block);
    f.render_widget(paragraph, area);
}

fn fail(store: &Rc<RefCell<LoadState>>, message: String) {
    web_sys::console::error_1(&message.clone().into());
    record_failure(store, message);
}

fn record_failure(store: &Rc<RefCell<LoadState>>, message: String) {
    *store.borrow_mut() = LoadState::Failed(message);
}

async fn fetch_dataset(store: Rc<RefCell<LoadState>>) {
    let Some(window) = web_sys::window() else {
        fail(&store, "No browser window to fetch the dataset from".to_string());
        return;
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let Ok(request) = Request::new_with_str_and_init(DEFAULT_DATA_URL, &opts) else {
        fail(&store, "Failed to build dataset request".to_string());
        return;
    };

    let Ok(response_value) =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await
    else {
        fail(&store, "Dataset request failed".to_string());
        return;
    };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        fail(&store, "Failed to read response".to_string());
        return;
    };

    if !response.ok() {
        fail(&store, format!("Dataset request returned HTTP {}", response.status()));
        return;
    }

    let Ok(body) = response.json() else {
        fail(&store, "Failed to read dataset body".to_string());
        return;
    };
    let Ok(json) = wasm_bindgen_futures::JsFuture::from(body).await else {
        fail(&store, "Dataset body is not JSON".to_string());
        return;
    };

    let value = match serde_wasm_bindgen::from_value::<serde_json::Value>(json) {
        Ok(value) => value,
        Err(error) => {
            fail(&store, format!("Failed to convert dataset: {error}"));
            return;
        }
    };

    let dashboard = Dataset::from_value(value).and_then(|dataset| Dashboard::new(&dataset));
    match dashboard {
        Ok(dashboard) => *store.borrow_mut() = LoadState::Ready(Box::new(dashboard)),
        Err(error) => fail(&store, format!("Failed to build heatmap: {error}")),
    }
}
