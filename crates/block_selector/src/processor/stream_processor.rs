// crates/block_selector/src/processor/stream_processor.rs

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{select_blocks_to_writer, Filter};

/// Trait that abstracts stream processing.
pub trait StreamProcessor {
    /// Processes the lines read from `input`, writing the kept lines to `output`.
    fn process_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()>;
}

/// Default implementation of the `StreamProcessor` trait.
/// Uses the block selector to keep only the blocks its filter accepts.
#[derive(Debug, Clone, Default)]
pub struct DefaultBlockProcessor {
    pub filter: Filter,
}

impl DefaultBlockProcessor {
    pub fn new(filter: Filter) -> Self {
        DefaultBlockProcessor { filter }
    }
}

impl StreamProcessor for DefaultBlockProcessor {
    fn process_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        log::info!("selecting blocks with {:?}", self.filter);
        select_blocks_to_writer(input, output, &self.filter)
    }
}

/// Public API function to process a stream using a provided `StreamProcessor` implementation.
pub fn process_stream_with_processor(
    processor: &dyn StreamProcessor,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<()> {
    processor.process_stream(input, output)
}
