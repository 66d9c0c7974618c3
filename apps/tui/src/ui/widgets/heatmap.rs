use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use temp_heatmap::{ColorBucket, GridCursor, HeatmapChart, Raster};

pub const fn bucket_color(bucket: ColorBucket) -> Color {
    let (r, g, b) = bucket.rgb();
    Color::Rgb(r, g, b)
}

/// Paints the plot area one terminal cell at a time, sampling the chart at
/// each cell's center.
pub struct HeatmapWidget<'a> {
    chart: &'a HeatmapChart,
    cursor: Option<GridCursor>,
}

impl<'a> HeatmapWidget<'a> {
    pub const fn new(chart: &'a HeatmapChart) -> Self {
        Self {
            chart,
            cursor: None,
        }
    }

    /// Marks the cells belonging to the cursor's year and month.
    pub fn cursor(mut self, cursor: GridCursor) -> Self {
        self.cursor = Some(cursor);
        self
    }
}

impl Widget for HeatmapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let raster = Raster::new(area.width, area.height);
        let cursor_index = self.cursor.and_then(|cursor| cursor.cell_index(self.chart));

        for row in 0..area.height {
            for column in 0..area.width {
                let Some(index) = raster.cell_at(self.chart, column, row) else {
                    continue;
                };
                let Some(target) = buf.cell_mut((area.x + column, area.y + row)) else {
                    continue;
                };

                let chart_cell = &self.chart.cells()[index];
                target.set_bg(bucket_color(chart_cell.bucket)).set_symbol(" ");

                if Some(index) == cursor_index {
                    target.set_symbol("▒").set_style(
                        Style::default()
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_heatmap::{Canvas, Dataset, Record};

    fn chart() -> HeatmapChart {
        let records = (1900..1904)
            .flat_map(|year| {
                (1..=12).map(move |month| Record {
                    year,
                    month,
                    variance: if year < 1902 { -2.0 } else { 2.0 },
                })
            })
            .collect();
        HeatmapChart::build(&Dataset::new(8.66, records).unwrap(), Canvas::default()).unwrap()
    }

    #[test]
    fn paints_bucket_colors() {
        let chart = chart();
        let area = Rect::new(0, 0, 16, 12);
        let mut buf = Buffer::empty(area);

        HeatmapWidget::new(&chart).render(area, &mut buf);

        assert_eq!(
            buf.cell((0, 0)).map(|cell| cell.bg),
            Some(bucket_color(ColorBucket::Coldest))
        );
        assert_eq!(
            buf.cell((15, 11)).map(|cell| cell.bg),
            Some(bucket_color(ColorBucket::Hottest))
        );
    }

    #[test]
    fn marks_cursor_cell() {
        let chart = chart();
        let area = Rect::new(0, 0, 16, 12);
        let mut buf = Buffer::empty(area);
        let cursor = GridCursor::new(&chart);

        HeatmapWidget::new(&chart).cursor(cursor).render(area, &mut buf);

        assert_eq!(buf.cell((0, 0)).map(|cell| cell.symbol().to_string()), Some("▒".to_string()));
        assert_eq!(buf.cell((15, 11)).map(|cell| cell.symbol().to_string()), Some(" ".to_string()));
    }
}
