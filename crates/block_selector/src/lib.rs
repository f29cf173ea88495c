// crates/block_selector/src/lib.rs

//! Extracts `before`/`after` marker blocks from a stream of lines.
//!
//! A block is an activating marker line plus every following line up to and
//! including the next blank line (or end of input). Blocks whose marker passes
//! the [`Filter`] are emitted verbatim; everything else is dropped.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

mod filter;
mod scan_state;
mod selector;

pub mod processor;

pub use block_marker::{activating_marker, parse_marker, Marker};
pub use filter::Filter;
pub use scan_state::ScanState;
pub use selector::{select_blocks, BlockSelector, SelectBlocks};

/// Streams `reader` through the selector and writes every emitted line, followed
/// by `\n`, to `writer`.
///
/// Lines are raw bytes split on `\n`, with a trailing `\r` dropped; they are
/// written back unchanged whether or not they are UTF-8. Each line is written
/// before the next one is read. The first read or write error stops the scan
/// and is returned.
pub fn select_blocks_to_writer<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    filter: &Filter,
) -> Result<()> {
    let mut selector = BlockSelector::new(filter.clone());
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Error reading input line {}", line_no + 1))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = strip_line_ending(&buf);
        if selector.feed(line) {
            writer
                .write_all(line)
                .and_then(|()| writer.write_all(b"\n"))
                .with_context(|| format!("Error writing output for input line {}", line_no))?;
        }
    }
    log::debug!("scanned {} lines, final state {}", line_no, selector.state());
    Ok(())
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}
