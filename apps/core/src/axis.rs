use serde::Serialize;

use crate::calendar::month_name;
use crate::geometry::Canvas;
use crate::scale::{Scales, MONTHS_PER_YEAR};

/// Requested tick count for the year axis.
pub const YEAR_TICK_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Position along the axis, in canvas pixels.
    pub position: f64,
    pub label: String,
}

/// A rendered axis: where it sits and which ticks it carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub id: &'static str,
    pub orientation: AxisOrientation,
    /// `(dx, dy)` translation applied to the whole axis group.
    pub translate: (f64, f64),
    /// Start and end of the axis line along its direction.
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.translate.0, self.translate.1)
    }
}

/// Year axis along the bottom edge, integer labels.
pub fn year_axis(scales: &Scales, canvas: &Canvas) -> Axis {
    let ticks = scales
        .x
        .ticks(YEAR_TICK_COUNT)
        .into_iter()
        .map(|value| Tick {
            position: scales.x.apply(value),
            label: format_integer(value),
        })
        .collect();

    Axis {
        id: "x-axis",
        orientation: AxisOrientation::Bottom,
        translate: (0.0, canvas.bottom()),
        extent: scales.x.range(),
        ticks,
    }
}

/// Month axis along the left edge, one full month name per band.
pub fn month_axis(scales: &Scales, canvas: &Canvas) -> Axis {
    let ticks = (0..MONTHS_PER_YEAR)
        .map(|month| Tick {
            position: scales.month_to_y(month),
            label: month_name(month).to_string(),
        })
        .collect();

    Axis {
        id: "y-axis",
        orientation: AxisOrientation::Left,
        translate: (canvas.left(), 0.0),
        extent: scales.y.range(),
        ticks,
    }
}

/// Rounds to an integer with no grouping separators.
pub fn format_integer(value: f64) -> String {
    format!("{}", value.round() as i64)
}
