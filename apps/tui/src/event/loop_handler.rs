use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use temp_heatmap::DatasetStats;

use crate::app::{handle_input, handle_mouse, App};
use crate::ui;

/// Print the dataset summary instead of opening the UI.
pub fn run_headless(stats: &DatasetStats, json: bool) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(stats)?;
        println!("{json}");
    } else {
        print!("{}", format_headless_stats(stats));
    }
    Ok(())
}

fn format_headless_stats(stats: &DatasetStats) -> String {
    let mut out = String::new();

    out.push_str("\nGlobal Temperature Stats\n");
    out.push_str("========================\n");
    out.push_str(&format!("Records: {}\n", stats.records));
    out.push_str(&format!("Base temperature: {}℃\n", stats.base_temperature));

    if let (Some(min), Some(max)) = (stats.min_year, stats.max_year) {
        out.push_str(&format!("Years: {min} - {max}\n"));
    }
    if let (Some(min), Some(max)) = (stats.min_variance, stats.max_variance) {
        out.push_str(&format!("Variance: {min:.3} to {max:.3}\n"));
    }
    if let (Some(min), Some(max)) = (stats.min_temperature, stats.max_temperature) {
        out.push_str(&format!("Temperature: {min:.3}℃ to {max:.3}℃\n"));
    }

    out.push_str("\nRecords by color bucket:\n");
    for (bucket, count) in &stats.by_bucket {
        out.push_str(&format!("- {bucket}: {count}\n"));
    }

    out
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code);
                if !app.running {
                    break;
                }
            }
            Ok(Event::Mouse(mouse)) => handle_mouse(app, mouse),
            Ok(Event::Resize(width, height)) => app.resize(width, height),
            Ok(_) => {}
            Err(e) => tracing::warn!("failed to read terminal event: {e}"),
        }
    }

    Ok(())
}
