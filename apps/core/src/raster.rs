//! Sampling of the chart's plot area onto a coarse character grid, for
//! front ends that draw with terminal cells instead of pixels.

use crate::chart::HeatmapChart;

/// Maps a `columns x rows` grid onto the plot area of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raster {
    pub columns: u16,
    pub rows: u16,
}

impl Raster {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Canvas point at the center of grid cell `(column, row)`.
    pub fn canvas_point(&self, chart: &HeatmapChart, column: u16, row: u16) -> Option<(f64, f64)> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        let canvas = chart.canvas();
        let x = (f64::from(column) + 0.5)
            .mul_add(canvas.inner_width() / f64::from(self.columns), canvas.left());
        let y = (f64::from(row) + 0.5)
            .mul_add(canvas.inner_height() / f64::from(self.rows), canvas.top());
        Some((x, y))
    }

    /// Grid cell containing a canvas point.
    pub fn grid_position(&self, chart: &HeatmapChart, x: f64, y: f64) -> Option<(u16, u16)> {
        let canvas = chart.canvas();
        if self.columns == 0 || self.rows == 0 {
            return None;
        }
        if x < canvas.left() || x >= canvas.right() || y < canvas.top() || y >= canvas.bottom() {
            return None;
        }
        let column = ((x - canvas.left()) / canvas.inner_width() * f64::from(self.columns)) as u16;
        let row = ((y - canvas.top()) / canvas.inner_height() * f64::from(self.rows)) as u16;
        Some((column.min(self.columns - 1), row.min(self.rows - 1)))
    }

    /// Cell drawn at grid position `(column, row)`, if any.
    pub fn cell_at(&self, chart: &HeatmapChart, column: u16, row: u16) -> Option<usize> {
        let (x, y) = self.canvas_point(chart, column, row)?;
        chart.hit_test(x, y)
    }

    /// Row-major cell indices for the whole grid.
    pub fn sample(&self, chart: &HeatmapChart) -> Vec<Option<usize>> {
        (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |column| (column, row)))
            .map(|(column, row)| self.cell_at(chart, column, row))
            .collect()
    }
}
