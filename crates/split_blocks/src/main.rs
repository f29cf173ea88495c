// crates/split_blocks/src/main.rs

use anyhow::Result;

use split_blocks::cli::{build_command, normalize_args};
use split_blocks::{init_logging, run, AppConfig};

fn main() -> Result<()> {
    let matches = build_command().get_matches_from(normalize_args(std::env::args_os()));
    let config = AppConfig::from_matches(&matches);

    init_logging(config.verbosity);
    log::info!("in main");
    log::debug!("config: {:?}", config);

    run(&config)?;

    log::info!("leaving main");
    Ok(())
}
