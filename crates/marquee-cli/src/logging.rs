//! Subscriber setup for the `marquee` binary

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Filter precedence: `--log-level`/`-v`, then `RUST_LOG`, then `directive`
/// (`logging.level`, already merged with `MARQUEE_LOG`). An unparsable
/// directive falls back to `info`.
pub fn init(level_override: Option<LevelFilter>, directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level_override, directive))
        .with_target(false)
        .init();
}

fn build_filter(level_override: Option<LevelFilter>, directive: &str) -> EnvFilter {
    if let Some(level) = level_override {
        return EnvFilter::default().add_directive(level.into());
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {directive:?} ({e}), using info");
        EnvFilter::new("info")
    })
}
