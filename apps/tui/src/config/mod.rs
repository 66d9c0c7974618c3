#[allow(clippy::module_inception)]
mod config;

pub use config::{init_app_config, DataSource, HeatmapConfig};
#[cfg(test)]
pub(crate) use config::config_from_lookup;
