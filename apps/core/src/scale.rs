use crate::dataset::Record;
use crate::error::{HeatmapError, Result};
use crate::geometry::Canvas;

pub const MONTHS_PER_YEAR: u32 = 12;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear map from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        t.mul_add(r1 - r0, r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (pixel - r0) / span };
        t.mul_add(d1 - d0, d0)
    }

    /// Roughly `count` evenly spaced, human-friendly values inside the domain.
    ///
    /// Steps are 1, 2 or 5 times a power of ten, picked the same way d3's
    /// `ticks` does so that a year axis reads 1760, 1780, ... 2000.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let Some((i1, i2, inc)) = tick_range(start, stop, count as f64) else {
            return Vec::new();
        };

        let mut ticks = (i1..=i2)
            .map(|i| {
                let i = i as f64;
                if inc < 0.0 {
                    i / -inc
                } else {
                    i * inc
                }
            })
            .collect::<Vec<_>>();

        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

fn tick_range(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scaled = 10f64.powf(-power) / factor;
        i1 = (start * scaled).round() as i64;
        i2 = (stop * scaled).round() as i64;
        if (i1 as f64) / scaled < start {
            i1 += 1;
        }
        if (i2 as f64) / scaled > stop {
            i2 -= 1;
        }
        inc = -scaled;
    } else {
        let scaled = 10f64.powf(power) * factor;
        i1 = (start / scaled).round() as i64;
        i2 = (stop / scaled).round() as i64;
        if (i1 as f64) * scaled < start {
            i1 += 1;
        }
        if (i2 as f64) * scaled > stop {
            i2 -= 1;
        }
        inc = scaled;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }

    (i2 >= i1).then_some((i1, i2, inc))
}

/// Vertical scale over one synthetic year measured in whole months.
///
/// Month offset `m` (zero-indexed) maps to the top edge of the `m`-th of
/// twelve equal bands; offset 12 maps to the bottom of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthScale {
    range: (f64, f64),
}

impl MonthScale {
    pub const fn new(range: (f64, f64)) -> Self {
        Self { range }
    }

    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn band_height(&self) -> f64 {
        (self.range.1 - self.range.0) / f64::from(MONTHS_PER_YEAR)
    }

    pub fn apply(&self, month_index: u32) -> f64 {
        f64::from(month_index).mul_add(self.band_height(), self.range.0)
    }

    /// Zero-indexed month whose band contains `pixel`.
    pub fn invert(&self, pixel: f64) -> Option<u32> {
        let band = self.band_height();
        if band <= 0.0 || pixel < self.range.0 || pixel >= self.range.1 {
            return None;
        }
        let index = ((pixel - self.range.0) / band).floor() as u32;
        Some(index.min(MONTHS_PER_YEAR - 1))
    }
}

/// Both chart scales plus the year range they were derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub min_year: i32,
    pub max_year: i32,
    pub x: LinearScale,
    pub y: MonthScale,
}

impl Scales {
    pub fn build(records: &[Record], canvas: &Canvas) -> Result<Self> {
        let min_year = records.iter().map(|record| record.year).min();
        let max_year = records.iter().map(|record| record.year).max();
        let (Some(min_year), Some(max_year)) = (min_year, max_year) else {
            return Err(HeatmapError::InsufficientData(
                "cannot build scales from an empty dataset",
            ));
        };

        canvas.validate()?;

        let x = LinearScale::new(
            (f64::from(min_year), f64::from(max_year) + 1.0),
            (canvas.left(), canvas.right()),
        );
        let y = MonthScale::new((canvas.top(), canvas.bottom()));

        tracing::debug!(min_year, max_year, "built chart scales");

        Ok(Self {
            min_year,
            max_year,
            x,
            y,
        })
    }

    pub fn year_to_x(&self, year: i32) -> f64 {
        self.x.apply(f64::from(year))
    }

    pub fn month_to_y(&self, month_index: u32) -> f64 {
        self.y.apply(month_index)
    }

    /// `max_year - min_year`, widened so extreme years cannot overflow.
    pub fn year_span(&self) -> i64 {
        i64::from(self.max_year) - i64::from(self.min_year)
    }
}
