use ratatui::layout::Rect;
use temp_heatmap::{DatasetStats, GridCursor, HeatmapChart, HoverState};

/// Interactive state of the terminal heatmap. The chart itself never changes
/// once built; only the pointer, help overlay and status line move.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub chart: HeatmapChart,
    pub stats: DatasetStats,
    pub hover: HoverState,
    pub cursor: GridCursor,
    pub show_help: bool,
    pub status_message: String,
    /// Full terminal area, refreshed on every draw and resize.
    pub screen: Rect,
}

impl App {
    pub fn new(chart: HeatmapChart, stats: DatasetStats) -> Self {
        let cursor = GridCursor::new(&chart);
        Self {
            running: true,
            chart,
            stats,
            hover: HoverState::new(),
            cursor,
            show_help: false,
            status_message: String::new(),
            screen: Rect::default(),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
    }

    /// Hovers the cell under the keyboard cursor.
    pub fn hover_cursor(&mut self) {
        self.cursor.hover(&self.chart, &mut self.hover);
    }

    /// Absolute temperature of the hovered cell, for the tooltip panel.
    pub fn hovered_temperature(&self) -> Option<f64> {
        if !self.hover.tooltip().is_visible() {
            return None;
        }
        self.hover
            .hovered()
            .and_then(|index| self.chart.cells().get(index))
            .map(|cell| cell.temperature)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use temp_heatmap::{Canvas, Dataset, DatasetStats, HeatmapChart, Record};

    use super::App;

    /// Ten years of records, variance rising with the year.
    pub fn app() -> App {
        let records = (1900..1910)
            .flat_map(|year| {
                (1..=12).map(move |month| Record {
                    year,
                    month,
                    variance: f64::from(year - 1905) / 2.0,
                })
            })
            .collect();
        let dataset = Dataset::new(8.66, records).unwrap();
        let chart = HeatmapChart::build(&dataset, Canvas::default()).unwrap();
        let mut app = App::new(chart, DatasetStats::from_dataset(&dataset));
        app.resize(120, 40);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn starts_on_first_cell_with_tooltip_hidden() {
        let app = fixtures::app();

        assert!(app.running);
        assert_eq!(app.cursor.year, 1900);
        assert_eq!(app.cursor.month, 0);
        assert!(!app.hover.tooltip().is_visible());
        assert_eq!(app.hovered_temperature(), None);
    }

    #[test]
    fn hovered_temperature_follows_cursor() {
        let mut app = fixtures::app();
        app.hover_cursor();

        let temperature = app.hovered_temperature().unwrap();
        assert!((temperature - (8.66 - 2.5)).abs() < 1e-9);
    }
}
