use serde::Serialize;

use crate::bucket::ColorBucket;
use crate::dataset::Dataset;

/// Summary of a loaded dataset, printed by headless runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub records: usize,
    pub base_temperature: f64,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_variance: Option<f64>,
    pub max_variance: Option<f64>,
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
    pub by_bucket: Vec<(String, usize)>,
}

impl DatasetStats {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let variances = dataset.records().iter().map(|record| record.variance);
        let min_variance = variances.clone().reduce(f64::min);
        let max_variance = variances.clone().reduce(f64::max);

        let mut counts = [0_usize; 4];
        for variance in variances {
            counts[ColorBucket::from_variance(variance).index()] += 1;
        }

        let by_bucket = ColorBucket::ALL
            .iter()
            .map(|bucket| (bucket.as_str().to_string(), counts[bucket.index()]))
            .collect();

        let base = dataset.base_temperature();
        let (min_year, max_year) = dataset.year_range().unzip();

        Self {
            records: dataset.len(),
            base_temperature: base,
            min_year,
            max_year,
            min_variance,
            max_variance,
            min_temperature: min_variance.map(|variance| base + variance),
            max_temperature: max_variance.map(|variance| base + variance),
            by_bucket,
        }
    }
}
