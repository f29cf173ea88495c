// crates/split_blocks/src/lib.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader, LineWriter, Write};

use anyhow::{Context, Result};
use block_selector::processor::{process_stream_with_processor, DefaultBlockProcessor};
use log::LevelFilter;

pub mod cli;
pub mod config;

pub use config::AppConfig;

/// Maps the numeric trace level onto a log filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. Call once, before `run`.
pub fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Opens the configured input and output and writes the selected blocks.
pub fn run(config: &AppConfig) -> Result<()> {
    log::info!("in run");

    let mut input: Box<dyn BufRead> = match &config.input {
        Some(path) => {
            log::info!("opening {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Error opening input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    // Line-buffered so each selected line reaches the sink before the next is read.
    let mut output: Box<dyn Write> = match &config.output {
        Some(path) => {
            log::info!("opening {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("Error creating output file {}", path.display()))?;
            Box::new(LineWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    let processor = DefaultBlockProcessor::new(config.filter());
    process_stream_with_processor(&processor, &mut *input, &mut *output)?;

    output.flush().with_context(|| match &config.output {
        Some(path) => format!("closing {}", path.display()),
        None => "closing stdout".to_string(),
    })?;

    log::info!("leaving run");
    Ok(())
}
