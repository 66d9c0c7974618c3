use serde::Serialize;

use crate::bucket::ColorBucket;
use crate::dataset::{Dataset, Record};
use crate::error::{HeatmapError, Result};
use crate::geometry::Canvas;
use crate::scale::{Scales, MONTHS_PER_YEAR};

/// One rectangle of the heatmap. Derived from a record and the scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cell {
    pub record: Record,
    pub bucket: ColorBucket,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `data-year`
    pub year: i32,
    /// `data-month`, zero-indexed.
    pub month: u32,
    /// `data-temp`: base temperature plus variance.
    pub temperature: f64,
}

impl Cell {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Width and height shared by every cell of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl CellSize {
    pub fn new(scales: &Scales, canvas: &Canvas) -> Result<Self> {
        let year_span = scales.year_span();
        if year_span <= 0 {
            return Err(HeatmapError::InsufficientData(
                "at least two distinct years are needed to size cells",
            ));
        }

        Ok(Self {
            width: canvas.inner_width() / year_span as f64,
            height: canvas.inner_height() / f64::from(MONTHS_PER_YEAR),
        })
    }
}

/// Lays out one cell per record, in record order.
pub fn layout_cells(dataset: &Dataset, scales: &Scales, canvas: &Canvas) -> Result<Vec<Cell>> {
    let size = CellSize::new(scales, canvas)?;

    let cells = dataset
        .records()
        .iter()
        .map(|record| Cell {
            record: *record,
            bucket: ColorBucket::from_variance(record.variance),
            x: scales.year_to_x(record.year),
            y: scales.month_to_y(record.month_index()),
            width: size.width,
            height: size.height,
            year: record.year,
            month: record.month_index(),
            temperature: dataset.absolute_temperature(record),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        cells = cells.len(),
        width = size.width,
        height = size.height,
        "laid out cells"
    );

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, month: u32, variance: f64) -> Record {
        Record {
            year,
            month,
            variance,
        }
    }

    fn build(records: Vec<Record>) -> Result<Vec<Cell>> {
        let canvas = Canvas::default();
        let dataset = Dataset::new(8.66, records)?;
        let scales = Scales::build(dataset.records(), &canvas)?;
        layout_cells(&dataset, &scales, &canvas)
    }

    #[test]
    fn cell_width_times_span_fills_inner_width() {
        let cells = build(vec![record(1753, 1, 0.0), record(2015, 12, 0.0)]).unwrap();
        let canvas = Canvas::default();

        let total = cells[0].width * f64::from(2015 - 1753);
        assert!((total - canvas.inner_width()).abs() < 1e-9);
        assert!((cells[0].height - canvas.inner_height() / 12.0).abs() < 1e-9);
    }

    #[test]
    fn position_and_metadata() {
        let cells = build(vec![record(1900, 1, -0.5), record(2000, 6, 0.5)]).unwrap();

        let first = &cells[0];
        assert_eq!(first.x, 50.0);
        assert_eq!(first.y, 50.0);
        assert_eq!(first.year, 1900);
        assert_eq!(first.month, 0);
        assert_eq!(first.bucket, ColorBucket::Cool);

        let second = &cells[1];
        assert_eq!(second.month, 5);
        assert!((second.temperature - 9.16).abs() < 1e-9);
        assert!((second.y - (50.0 + 5.0 * 500.0 / 12.0)).abs() < 1e-9);
        assert_eq!(second.bucket, ColorBucket::Warm);
    }

    #[test]
    fn single_year_is_insufficient() {
        let error = build(vec![record(1900, 1, 0.0), record(1900, 2, 0.0)]).unwrap_err();
        assert!(matches!(error, HeatmapError::InsufficientData(_)));
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        let cells = build(vec![record(i32::MIN, 1, 0.0), record(i32::MAX, 12, 0.0)]).unwrap();
        let canvas = Canvas::default();

        assert!(cells[0].width > 0.0 && cells[0].width.is_finite());
        let total = cells[0].width * (f64::from(i32::MAX) - f64::from(i32::MIN));
        assert!((total - canvas.inner_width()).abs() < 1e-6);
    }

    #[test]
    fn empty_is_insufficient() {
        assert!(matches!(
            build(Vec::new()),
            Err(HeatmapError::InsufficientData(_))
        ));
    }

    #[test]
    fn contains_is_half_open() {
        let cells = build(vec![record(1900, 1, 0.0), record(1910, 1, 0.0)]).unwrap();
        let cell = cells[0];

        assert!(cell.contains(cell.x, cell.y));
        assert!(!cell.contains(cell.x + cell.width, cell.y));
        assert!(!cell.contains(cell.x, cell.y + cell.height));
    }
}
