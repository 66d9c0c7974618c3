use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, Result};

/// Fixed size of the drawable area in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            padding: 50.0,
        }
    }
}

impl Canvas {
    /// Builds a canvas, rejecting geometry that leaves no room to draw.
    pub fn new(width: f64, height: f64, padding: f64) -> Result<Self> {
        let canvas = Self {
            width,
            height,
            padding,
        };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(&self) -> Result<()> {
        if ![self.width, self.height, self.padding]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(HeatmapError::InvalidGeometry(
                "dimensions must be finite".to_string(),
            ));
        }

        if self.width <= 0.0 || self.height <= 0.0 || self.padding < 0.0 {
            return Err(HeatmapError::InvalidGeometry(format!(
                "{}x{} with padding {} is not drawable",
                self.width, self.height, self.padding
            )));
        }

        if self.padding >= self.width / 2.0 || self.padding >= self.height / 2.0 {
            return Err(HeatmapError::InvalidGeometry(format!(
                "padding {} must be less than half of {}x{}",
                self.padding, self.width, self.height
            )));
        }

        Ok(())
    }

    /// Width available to cells once padding is removed from both sides.
    pub fn inner_width(&self) -> f64 {
        2.0f64.mul_add(-self.padding, self.width)
    }

    pub fn inner_height(&self) -> f64 {
        2.0f64.mul_add(-self.padding, self.height)
    }

    pub fn left(&self) -> f64 {
        self.padding
    }

    pub fn right(&self) -> f64 {
        self.width - self.padding
    }

    pub fn top(&self) -> f64 {
        self.padding
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }
}
