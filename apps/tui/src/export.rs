use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use temp_heatmap::svg::{render_html, render_svg};
use temp_heatmap::HeatmapChart;

/// Default target of the in-app export key.
pub const DEFAULT_EXPORT_PATH: &str = "heatmap.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Html,
}

impl ExportFormat {
    /// Picks the format from the file extension, SVG unless it says HTML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
                Self::Html
            }
            _ => Self::Svg,
        }
    }
}

pub fn write_chart(chart: &HeatmapChart, path: &Path, format: ExportFormat) -> Result<PathBuf> {
    let document = match format {
        ExportFormat::Svg => render_svg(chart),
        ExportFormat::Html => render_html(chart),
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(path, document)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), ?format, "exported chart");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_heatmap::{Canvas, Dataset, Record};

    fn chart() -> HeatmapChart {
        let records = vec![
            Record {
                year: 1900,
                month: 1,
                variance: -0.5,
            },
            Record {
                year: 1901,
                month: 2,
                variance: 0.5,
            },
        ];
        HeatmapChart::build(&Dataset::new(8.66, records).unwrap(), Canvas::default()).unwrap()
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.html")), ExportFormat::Html);
        assert_eq!(ExportFormat::from_path(Path::new("a.HTM")), ExportFormat::Html);
        assert_eq!(ExportFormat::from_path(Path::new("a.svg")), ExportFormat::Svg);
        assert_eq!(ExportFormat::from_path(Path::new("chart")), ExportFormat::Svg);
    }

    #[test]
    fn writes_into_new_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out").join("heatmap.html");

        write_chart(&chart(), &path, ExportFormat::Html)?;

        let written = std::fs::read_to_string(&path)?;
        assert!(written.contains(r#"id="tooltip""#));
        assert!(written.contains("1901 February : 0.5"));
        Ok(())
    }
}
