use anyhow::Result;
use camelsnake::cli::{self, Cli};
use camelsnake::{Plugin, debug};
use camelsnake_config::Config;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level takes precedence, then RUST_LOG, then config (applied below).
    debug::init_log_bridge(cli.log_level.map(|level| level.to_level_filter()));

    log::info!("Starting camelsnake {}", camelsnake::VERSION);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug::apply_config_level(config.log_level.to_level_filter());

    let plugin = Plugin::new(config);
    let result = cli::execute(cli.command, &plugin);

    if let Err(ref e) = result {
        log::error!("camelsnake failed: {e:#}");
    }
    log::logger().flush();
    result
}
