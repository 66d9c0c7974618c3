// Monthly temperature variance heatmap.
// Load phase: parse and validate the dataset. Render phase: scales, cells,
// axes and tooltip state, all pure and synchronous.

pub mod axis;
pub mod bucket;
pub mod calendar;
pub mod cell;
pub mod chart;
pub mod cursor;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod raster;
pub mod scale;
pub mod stats;
pub mod svg;
pub mod tooltip;

pub use bucket::ColorBucket;
pub use cell::Cell;
pub use chart::HeatmapChart;
pub use cursor::{CursorMove, GridCursor};
pub use dataset::{Dataset, Record, DEFAULT_DATA_URL};
pub use error::{HeatmapError, Result};
pub use geometry::Canvas;
pub use raster::Raster;
pub use scale::{LinearScale, MonthScale, Scales};
pub use stats::DatasetStats;
pub use tooltip::{HoverState, PointerEvent, Tooltip};
