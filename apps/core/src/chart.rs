use std::collections::HashMap;

use crate::axis::{month_axis, year_axis, Axis};
use crate::cell::{layout_cells, Cell};
use crate::dataset::{Dataset, Record};
use crate::error::Result;
use crate::geometry::Canvas;
use crate::legend::{description, legend, LegendEntry, CHART_TITLE};
use crate::scale::Scales;
use crate::tooltip::HoverState;

/// Everything the render phase produces from a loaded dataset: scales, cells
/// and both axes. Pure and synchronous; built once per load.
#[derive(Debug, Clone)]
pub struct HeatmapChart {
    canvas: Canvas,
    base_temperature: f64,
    scales: Scales,
    cells: Vec<Cell>,
    x_axis: Axis,
    y_axis: Axis,
    by_position: HashMap<(i32, u32), usize>,
}

impl HeatmapChart {
    pub fn build(dataset: &Dataset, canvas: Canvas) -> Result<Self> {
        let scales = Scales::build(dataset.records(), &canvas)?;
        let cells = layout_cells(dataset, &scales, &canvas)?;
        let x_axis = year_axis(&scales, &canvas);
        let y_axis = month_axis(&scales, &canvas);

        // later records win, matching draw order
        let by_position = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| ((cell.year, cell.month), index))
            .collect();

        tracing::info!(
            cells = cells.len(),
            min_year = scales.min_year,
            max_year = scales.max_year,
            "heatmap chart ready"
        );

        Ok(Self {
            canvas,
            base_temperature: dataset.base_temperature(),
            scales,
            cells,
            x_axis,
            y_axis,
            by_position,
        })
    }

    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub const fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub const fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub const fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    pub const fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    pub const fn title(&self) -> &'static str {
        CHART_TITLE
    }

    pub fn description(&self) -> String {
        description(
            self.scales.min_year,
            self.scales.max_year,
            self.base_temperature,
        )
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        legend()
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.cells.get(index).map(|cell| &cell.record)
    }

    /// Index of the cell for a year and zero-indexed month, if one exists.
    pub fn cell_index(&self, year: i32, month: u32) -> Option<usize> {
        self.by_position.get(&(year, month)).copied()
    }

    /// Topmost cell under a canvas point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.cells.iter().rposition(|cell| cell.contains(x, y))
    }

    /// Moves the pointer to a canvas point and updates the tooltip.
    pub fn pointer_move(&self, hover: &mut HoverState, x: f64, y: f64) {
        hover.move_to(self.hit_test(x, y), |index| self.record(index));
    }

    /// Pointer left the drawing surface entirely.
    pub fn pointer_exit(&self, hover: &mut HoverState) {
        hover.move_to(None, |index| self.record(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeatmapError;

    fn dataset() -> Dataset {
        let mut records = Vec::new();
        for year in 1900..=1903 {
            for month in 1..=12 {
                records.push(Record {
                    year,
                    month,
                    variance: f64::from(month) / 4.0 - 1.5,
                });
            }
        }
        Dataset::new(8.66, records).unwrap()
    }

    #[test]
    fn builds_cells_and_axes() {
        let chart = HeatmapChart::build(&dataset(), Canvas::default()).unwrap();

        assert_eq!(chart.cells().len(), 48);
        assert_eq!(chart.y_axis().ticks.len(), 12);
        assert!(!chart.x_axis().ticks.is_empty());
        assert_eq!(chart.description(), "1900 - 1903: base temperature 8.66℃");
    }

    #[test]
    fn hit_test_finds_cell_under_point() {
        let chart = HeatmapChart::build(&dataset(), Canvas::default()).unwrap();
        let index = chart.cell_index(1901, 4).unwrap();
        let cell = chart.cells()[index];

        let found = chart.hit_test(cell.x + 1.0, cell.y + 1.0).unwrap();
        assert_eq!(chart.cells()[found].year, 1901);
        assert_eq!(chart.cells()[found].month, 4);
        assert_eq!(chart.hit_test(1.0, 1.0), None);
    }

    #[test]
    fn pointer_move_shows_and_exit_hides() {
        let chart = HeatmapChart::build(&dataset(), Canvas::default()).unwrap();
        let mut hover = HoverState::new();

        let index = chart.cell_index(1900, 0).unwrap();
        let cell = chart.cells()[index];
        chart.pointer_move(&mut hover, cell.x + 0.5, cell.y + 0.5);

        assert!(hover.tooltip().is_visible());
        assert_eq!(hover.tooltip().text(), "1900 January : -1.25");
        assert_eq!(hover.tooltip().data_year(), Some(1900));

        chart.pointer_exit(&mut hover);
        assert!(!hover.tooltip().is_visible());
    }

    #[test]
    fn empty_dataset_reports_insufficient_data() {
        let empty = Dataset::new(8.66, Vec::new()).unwrap();
        let error = HeatmapChart::build(&empty, Canvas::default()).unwrap_err();
        assert!(matches!(error, HeatmapError::InsufficientData(_)));
    }
}
