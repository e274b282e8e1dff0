use std::io::IsTerminal;
use tagfind::config::log_level_from;
use tagfind::error::ConfigError;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` overrides the `-v` count.
pub fn init(verbose: u8) -> Result<(), ConfigError> {
    let level = log_level_from(verbose)?;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
    Ok(())
}
