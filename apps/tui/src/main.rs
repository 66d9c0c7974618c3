use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use temp_heatmap::{DatasetStats, HeatmapChart};
use temp_heatmap_tui::app::App;
use temp_heatmap_tui::cli::CliArgs;
use temp_heatmap_tui::config::init_app_config;
use temp_heatmap_tui::export::{write_chart, ExportFormat};
use temp_heatmap_tui::{event, load_dataset, logging, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let interactive = is_terminal() && !args.headless && !args.json && !args.export_only();
    let config = init_app_config()?;
    logging::init(config.debug, interactive);
    tracing::debug!(?config, "loaded configuration");

    // Load phase: one fetch, nothing drawn until it succeeds
    let dataset = match load_dataset(&config.source).await {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("failed to load dataset: {e}");
            return Err(e).wrap_err("Could not load the temperature dataset");
        }
    };

    // Render phase
    let stats = DatasetStats::from_dataset(&dataset);
    let chart = HeatmapChart::build(&dataset, config.canvas)
        .wrap_err("Could not build the heatmap")?;

    let exports = [
        (args.svg.as_ref(), ExportFormat::Svg),
        (args.html.as_ref(), ExportFormat::Html),
    ];
    for (path, format) in exports {
        if let Some(path) = path {
            write_chart(&chart, path, format)?;
            eprintln!("Wrote {}", path.display());
        }
    }

    if args.export_only() {
        return Ok(());
    }

    if !interactive {
        return event::run_headless(&stats, args.json);
    }

    let mut app = App::new(chart, stats);
    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app);

    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
