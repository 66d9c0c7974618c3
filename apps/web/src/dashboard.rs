use ratzilla::event::KeyCode;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line as TextLine, Span};
use temp_heatmap::{
    Canvas, ColorBucket, CursorMove, Dataset, GridCursor, HeatmapChart, HoverState, Raster, Result,
};

/// Loaded chart plus the keyboard pointer and tooltip.
pub struct Dashboard {
    pub chart: HeatmapChart,
    pub hover: HoverState,
    pub cursor: GridCursor,
}

impl Dashboard {
    pub fn new(dataset: &Dataset) -> Result<Self> {
        let chart = HeatmapChart::build(dataset, Canvas::default())?;
        let cursor = GridCursor::new(&chart);
        Ok(Self {
            chart,
            hover: HoverState::new(),
            cursor,
        })
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Esc) {
            self.chart.pointer_exit(&mut self.hover);
            return;
        }

        let movement = match code {
            KeyCode::Left => CursorMove::Left,
            KeyCode::Right => CursorMove::Right,
            KeyCode::Up => CursorMove::Up,
            KeyCode::Down => CursorMove::Down,
            KeyCode::PageUp => CursorMove::PageLeft,
            KeyCode::PageDown => CursorMove::PageRight,
            KeyCode::Home => CursorMove::Home,
            KeyCode::End => CursorMove::End,
            _ => return,
        };

        self.cursor = self.cursor.step(&self.chart, movement);
        self.cursor.hover(&self.chart, &mut self.hover);
    }

    /// One text line per grid row, each character cell colored by the chart
    /// cell drawn there.
    pub fn heatmap_lines(&self, columns: u16, rows: u16) -> Vec<TextLine<'static>> {
        let raster = Raster::new(columns, rows);
        let samples = raster.sample(&self.chart);
        let cursor_index = self.cursor.cell_index(&self.chart);

        samples
            .chunks(usize::from(columns.max(1)))
            .map(|row| {
                let spans = row
                    .iter()
                    .map(|sample| match sample {
                        Some(index) => {
                            let bucket = self.chart.cells()[*index].bucket;
                            let style = Style::default().bg(bucket_color(bucket));
                            if Some(*index) == cursor_index {
                                Span::styled("▒", style.fg(Color::Black))
                            } else {
                                Span::styled(" ", style)
                            }
                        }
                        None => Span::raw(" "),
                    })
                    .collect::<Vec<_>>();
                TextLine::from(spans)
            })
            .collect()
    }

    pub fn tooltip_line(&self) -> TextLine<'static> {
        let tooltip = self.hover.tooltip();
        if !tooltip.is_visible() {
            return TextLine::from(Span::styled(
                "Arrows move over the cells, Esc hides the tooltip",
                Style::default().fg(Color::Gray),
            ));
        }

        let temperature = self
            .hover
            .hovered()
            .and_then(|index| self.chart.cells().get(index))
            .map(|cell| format!("   {:.3}℃", cell.temperature))
            .unwrap_or_default();

        TextLine::from(vec![
            Span::styled(tooltip.text().to_string(), Style::default().fg(Color::White)),
            Span::styled(temperature, Style::default().fg(Color::Gray)),
        ])
    }
}

pub const fn bucket_color(bucket: ColorBucket) -> Color {
    let (r, g, b) = bucket.rgb();
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_heatmap::Record;

    fn dashboard() -> Dashboard {
        let records = (1950..1960)
            .flat_map(|year| {
                (1..=12).map(move |month| Record {
                    year,
                    month,
                    variance: if month <= 6 { -1.5 } else { 0.5 },
                })
            })
            .collect();
        Dashboard::new(&Dataset::new(8.66, records).unwrap()).unwrap()
    }

    #[test]
    fn arrows_hover_and_escape_hides() {
        let mut dashboard = dashboard();

        dashboard.handle_key(KeyCode::Down);
        assert_eq!(dashboard.hover.tooltip().text(), "1950 February : -1.5");

        dashboard.handle_key(KeyCode::End);
        assert_eq!(dashboard.hover.tooltip().data_year(), Some(1959));

        dashboard.handle_key(KeyCode::Esc);
        assert!(!dashboard.hover.tooltip().is_visible());
    }

    #[test]
    fn heatmap_lines_match_grid() {
        let dashboard = dashboard();
        let lines = dashboard.heatmap_lines(20, 12);

        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|line| line.spans.len() == 20));
        assert_eq!(
            lines[11].spans[5].style.bg,
            Some(bucket_color(ColorBucket::Warm))
        );
        assert_eq!(
            lines[1].spans[5].style.bg,
            Some(bucket_color(ColorBucket::Coldest))
        );
        assert_eq!(lines[0].spans[0].content, "▒");
    }
}
