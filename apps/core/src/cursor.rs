use crate::chart::HeatmapChart;
use crate::scale::MONTHS_PER_YEAR;
use crate::tooltip::HoverState;

/// Keyboard pointer over the year/month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pub year: i32,
    /// Zero-indexed.
    pub month: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    /// Ten years at a time.
    PageLeft,
    PageRight,
    Home,
    End,
}

const PAGE_YEARS: i32 = 10;

impl GridCursor {
    /// Starts on the first year, January.
    pub const fn new(chart: &HeatmapChart) -> Self {
        Self {
            year: chart.scales().min_year,
            month: 0,
        }
    }

    /// Applies a move, clamped to the chart's year range and the 12 months.
    pub fn step(self, chart: &HeatmapChart, movement: CursorMove) -> Self {
        let scales = chart.scales();
        let clamp_year = |year: i32| year.clamp(scales.min_year, scales.max_year);

        match movement {
            CursorMove::Left => Self {
                year: clamp_year(self.year.saturating_sub(1)),
                ..self
            },
            CursorMove::Right => Self {
                year: clamp_year(self.year.saturating_add(1)),
                ..self
            },
            CursorMove::PageLeft => Self {
                year: clamp_year(self.year.saturating_sub(PAGE_YEARS)),
                ..self
            },
            CursorMove::PageRight => Self {
                year: clamp_year(self.year.saturating_add(PAGE_YEARS)),
                ..self
            },
            CursorMove::Up => Self {
                month: self.month.saturating_sub(1),
                ..self
            },
            CursorMove::Down => Self {
                month: (self.month + 1).min(MONTHS_PER_YEAR - 1),
                ..self
            },
            CursorMove::Home => Self {
                year: scales.min_year,
                ..self
            },
            CursorMove::End => Self {
                year: scales.max_year,
                ..self
            },
        }
    }

    pub fn cell_index(self, chart: &HeatmapChart) -> Option<usize> {
        chart.cell_index(self.year, self.month)
    }

    /// Hovers the cell under the cursor, or leaves when the grid has a gap.
    pub fn hover(self, chart: &HeatmapChart, hover: &mut HoverState) {
        hover.move_to(self.cell_index(chart), |index| chart.record(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Record};
    use crate::geometry::Canvas;

    fn chart() -> HeatmapChart {
        let records = vec![
            Record {
                year: 1900,
                month: 1,
                variance: 0.1,
            },
            Record {
                year: 1920,
                month: 12,
                variance: -0.2,
            },
        ];
        HeatmapChart::build(&Dataset::new(8.66, records).unwrap(), Canvas::default()).unwrap()
    }

    #[test]
    fn moves_are_clamped() {
        let chart = chart();
        let cursor = GridCursor::new(&chart);

        assert_eq!(cursor.step(&chart, CursorMove::Left), cursor);
        assert_eq!(cursor.step(&chart, CursorMove::Up), cursor);
        assert_eq!(cursor.step(&chart, CursorMove::PageRight).year, 1910);
        assert_eq!(cursor.step(&chart, CursorMove::End).year, 1920);

        let bottom = (0..20).fold(cursor, |cursor, _| cursor.step(&chart, CursorMove::Down));
        assert_eq!(bottom.month, 11);
    }

    #[test]
    fn moves_at_extreme_years_saturate() {
        let records = vec![
            Record {
                year: i32::MIN,
                month: 1,
                variance: 0.1,
            },
            Record {
                year: i32::MAX,
                month: 1,
                variance: 0.2,
            },
        ];
        let chart =
            HeatmapChart::build(&Dataset::new(8.66, records).unwrap(), Canvas::default()).unwrap();
        let first = GridCursor::new(&chart);
        let last = first.step(&chart, CursorMove::End);

        assert_eq!(first.step(&chart, CursorMove::Left).year, i32::MIN);
        assert_eq!(first.step(&chart, CursorMove::PageLeft).year, i32::MIN);
        assert_eq!(last.step(&chart, CursorMove::Right).year, i32::MAX);
        assert_eq!(last.step(&chart, CursorMove::PageRight).year, i32::MAX);
    }

    #[test]
    fn hover_follows_cursor_and_leaves_gaps() {
        let chart = chart();
        let mut hover = HoverState::new();
        let cursor = GridCursor::new(&chart);

        cursor.hover(&chart, &mut hover);
        assert_eq!(hover.tooltip().text(), "1900 January : 0.1");

        let gap = cursor.step(&chart, CursorMove::Right);
        gap.hover(&chart, &mut hover);
        assert!(!hover.tooltip().is_visible());

        let last = GridCursor {
            year: 1920,
            month: 11,
        };
        last.hover(&chart, &mut hover);
        assert!(hover.tooltip().is_visible());
        assert_eq!(hover.tooltip().data_year(), Some(1920));
    }
}
