// crates/block_selector/src/processor/mod.rs

mod stream_processor;

pub use stream_processor::{process_stream_with_processor, DefaultBlockProcessor, StreamProcessor};
