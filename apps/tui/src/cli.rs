use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(
    name = "temp-heatmap",
    version,
    about = "Monthly global land-surface temperature heatmap"
)]
pub struct CliArgs {
    /// Print dataset stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the dataset URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Read the dataset from a local JSON file instead of the network
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Canvas width in logical pixels
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in logical pixels
    #[arg(long)]
    pub height: Option<f64>,

    /// Padding reserved around the plot for axes
    #[arg(long)]
    pub padding: Option<f64>,

    /// Write the chart as SVG
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Write the chart as a standalone HTML page with hover tooltips
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.url {
            std::env::set_var("HEATMAP_DATA_URL", url);
        }
        if let Some(file) = &self.file {
            std::env::set_var("HEATMAP_DATA_FILE", file);
        }
        if let Some(width) = self.width {
            std::env::set_var("HEATMAP_WIDTH", width.to_string());
        }
        if let Some(height) = self.height {
            std::env::set_var("HEATMAP_HEIGHT", height.to_string());
        }
        if let Some(padding) = self.padding {
            std::env::set_var("HEATMAP_PADDING", padding.to_string());
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Exports only, no stats and no terminal UI.
    pub const fn export_only(&self) -> bool {
        (self.svg.is_some() || self.html.is_some()) && !self.headless && !self.json
    }
}
