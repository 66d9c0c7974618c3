use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` wins over the defaults.
///
/// The interactive UI owns the screen, so it only lets warnings through
/// unless debug logging was asked for. Call before anything else logs;
/// events emitted earlier are dropped.
pub fn init(debug: bool, interactive: bool) {
    let level = default_level(debug, interactive);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

const fn default_level(debug: bool, interactive: bool) -> &'static str {
    match (debug, interactive) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config_from_lookup;

    #[test]
    fn debug_flag_from_config_selects_debug_level() {
        let config =
            config_from_lookup(|key| (key == "DEBUG").then(|| "1".to_string())).unwrap();

        assert_eq!(default_level(config.debug, true), "debug");
        assert_eq!(default_level(false, true), "warn");
        assert_eq!(default_level(false, false), "info");
    }
}
