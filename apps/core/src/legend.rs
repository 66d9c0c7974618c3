use serde::Serialize;

use crate::bucket::ColorBucket;

pub const CHART_TITLE: &str = "Monthly Global Land-Surface Temperature";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub bucket: ColorBucket,
    pub color: &'static str,
    pub label: &'static str,
}

/// One entry per color bucket, coldest first.
pub fn legend() -> Vec<LegendEntry> {
    ColorBucket::ALL
        .iter()
        .map(|&bucket| LegendEntry {
            bucket,
            color: bucket.css_name(),
            label: bucket.range_label(),
        })
        .collect()
}

/// `"<minYear> - <maxYear>: base temperature <base>℃"`
pub fn description(min_year: i32, max_year: i32, base_temperature: f64) -> String {
    format!("{min_year} - {max_year}: base temperature {base_temperature}℃")
}
