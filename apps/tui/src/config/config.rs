use color_eyre::eyre::{eyre, WrapErr};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use temp_heatmap::{Canvas, DEFAULT_DATA_URL};

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapConfig {
    pub source: DataSource,
    pub canvas: Canvas,
    pub debug: bool,
}

/// Initializes the application configuration from `.env` and the process
/// environment.
pub fn init_app_config() -> color_eyre::eyre::Result<HeatmapConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    config_from_lookup(|key| env::var(key).ok())
}

/// Builds the configuration from any key lookup. A local file wins over a URL.
pub(crate) fn config_from_lookup<F>(lookup: F) -> color_eyre::eyre::Result<HeatmapConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let source = match lookup("HEATMAP_DATA_FILE") {
        Some(path) if !path.trim().is_empty() => DataSource::File(PathBuf::from(path)),
        _ => DataSource::Url(
            lookup("HEATMAP_DATA_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATA_URL.to_string()),
        ),
    };

    let defaults = Canvas::default();
    let width = number_or(&lookup, "HEATMAP_WIDTH", defaults.width)?;
    let height = number_or(&lookup, "HEATMAP_HEIGHT", defaults.height)?;
    let padding = number_or(&lookup, "HEATMAP_PADDING", defaults.padding)?;

    let canvas = Canvas::new(width, height, padding).wrap_err("Invalid canvas settings")?;

    let debug = lookup("DEBUG").is_some_and(|value| value == "1" || value == "true");

    Ok(HeatmapConfig {
        source,
        canvas,
        debug,
    })
}

fn number_or<F>(lookup: &F, key: &str, default: f64) -> color_eyre::eyre::Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<f64>()
            .map_err(|e| eyre!("{key} must be a number, got {raw:?}: {e}"))
    })
}
