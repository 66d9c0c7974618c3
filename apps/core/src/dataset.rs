use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, Result};

/// Location of the monthly global land-surface temperature dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// One monthly deviation from the base temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    /// 1-indexed, January is 1.
    pub month: u32,
    pub variance: f64,
}

impl Record {
    /// Zero-indexed month offset, as used by the vertical scale.
    pub const fn month_index(&self) -> u32 {
        self.month - 1
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetWire {
    base_temperature: f64,
    monthly_variance: Vec<RecordWire>,
}

#[derive(Debug, Deserialize)]
struct RecordWire {
    year: Option<i32>,
    month: Option<i64>,
    variance: Option<f64>,
}

/// The loaded dataset. Built once when loading completes and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    base_temperature: f64,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(base_temperature: f64, records: Vec<Record>) -> Result<Self> {
        if !base_temperature.is_finite() {
            return Err(HeatmapError::InvalidBaseTemperature(base_temperature));
        }

        for (index, record) in records.iter().enumerate() {
            validate_record(index, record)?;
        }

        Ok(Self {
            base_temperature,
            records,
        })
    }

    /// Parses the `{ baseTemperature, monthlyVariance }` document.
    pub fn from_json(body: &str) -> Result<Self> {
        let wire: DatasetWire = serde_json::from_str(body)?;
        Self::from_wire(wire)
    }

    /// Same as [`Dataset::from_json`] for callers that already hold a parsed value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let wire: DatasetWire = serde_json::from_value(value)?;
        Self::from_wire(wire)
    }

    fn from_wire(wire: DatasetWire) -> Result<Self> {
        let records = wire
            .monthly_variance
            .into_iter()
            .enumerate()
            .map(|(index, raw)| record_from_wire(index, raw))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            records = records.len(),
            base_temperature = wire.base_temperature,
            "parsed dataset"
        );

        Self::new(wire.base_temperature, records)
    }

    pub const fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Base temperature plus the record's variance.
    pub fn absolute_temperature(&self, record: &Record) -> f64 {
        self.base_temperature + record.variance
    }

    /// `(min, max)` year, or `None` for an empty dataset.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|record| record.year).min()?;
        let max = self.records.iter().map(|record| record.year).max()?;
        Some((min, max))
    }
}

fn record_from_wire(index: usize, raw: RecordWire) -> Result<Record> {
    let missing = |field: &str| HeatmapError::InvalidRecord {
        index,
        reason: format!("missing field `{field}`"),
    };

    let year = raw.year.ok_or_else(|| missing("year"))?;
    let month = raw.month.ok_or_else(|| missing("month"))?;
    let variance = raw.variance.ok_or_else(|| missing("variance"))?;

    let month = u32::try_from(month)
        .ok()
        .filter(|month| (1..=12).contains(month))
        .ok_or_else(|| HeatmapError::InvalidRecord {
            index,
            reason: format!("month {month} is outside 1..=12"),
        })?;

    Ok(Record {
        year,
        month,
        variance,
    })
}

fn validate_record(index: usize, record: &Record) -> Result<()> {
    if !(1..=12).contains(&record.month) {
        return Err(HeatmapError::InvalidRecord {
            index,
            reason: format!("month {} is outside 1..=12", record.month),
        });
    }

    if !record.variance.is_finite() {
        return Err(HeatmapError::InvalidRecord {
            index,
            reason: format!("variance {} is not a finite number", record.variance),
        });
    }

    Ok(())
}
