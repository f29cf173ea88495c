// crates/block_selector/src/scan_state.rs

use std::fmt;

/// Where the scanner is relative to the blocks of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Outside any block. Initial state, and the state after a block's blank line.
    #[default]
    Between,
    /// Inside a block whose marker passed the filter.
    Selecting,
    /// Inside a block whose marker was rejected.
    Skipping,
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanState::Between => "between",
            ScanState::Selecting => "selecting",
            ScanState::Skipping => "skipping",
        };
        f.write_str(name)
    }
}
