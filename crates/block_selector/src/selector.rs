// crates/block_selector/src/selector.rs

use block_marker::activating_marker;

use crate::filter::Filter;
use crate::scan_state::ScanState;

/// One-pass block selection state machine.
///
/// Feed it lines in input order; it answers whether each line belongs to an
/// accepted block. Markers are only recognized in `Between`, so blocks never nest.
#[derive(Debug, Clone)]
pub struct BlockSelector {
    filter: Filter,
    state: ScanState,
}

impl BlockSelector {
    pub fn new(filter: Filter) -> Self {
        BlockSelector {
            filter,
            state: ScanState::Between,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Consumes one line (without its terminator) and returns true if it should be emitted.
    pub fn feed(&mut self, line: &[u8]) -> bool {
        log::trace!("state {} line is {:?}", self.state, String::from_utf8_lossy(line));
        match self.state {
            ScanState::Between => match activating_marker(line) {
                Some(marker) => {
                    let accepted = self.filter.accepts(&marker);
                    log::debug!(
                        "marker {} ({})",
                        String::from_utf8_lossy(line),
                        if accepted { "selected" } else { "skipped" }
                    );
                    self.state = if accepted {
                        ScanState::Selecting
                    } else {
                        ScanState::Skipping
                    };
                    accepted
                }
                None => false,
            },
            ScanState::Selecting => {
                if line.is_empty() {
                    self.state = ScanState::Between;
                }
                true
            }
            ScanState::Skipping => {
                if line.is_empty() {
                    self.state = ScanState::Between;
                }
                false
            }
        }
    }
}

/// Lazy iterator over the lines of accepted blocks. See [`select_blocks`].
pub struct SelectBlocks<I> {
    lines: I,
    selector: BlockSelector,
}

impl<I> SelectBlocks<I> {
    /// Current scan state, after the most recently consumed line.
    pub fn state(&self) -> ScanState {
        self.selector.state()
    }
}

impl<I, S> Iterator for SelectBlocks<I>
where
    I: Iterator<Item = S>,
    S: AsRef<[u8]>,
{
    type Item = S;

    fn next(&mut self) -> Option<S> {
        for line in self.lines.by_ref() {
            if self.selector.feed(line.as_ref()) {
                return Some(line);
            }
        }
        None
    }
}

/// Selects the blocks accepted by `filter` from `lines`, keeping input order.
///
/// Lines are pulled from the source only as the result is consumed. Any byte
/// line type works (`&str`, `String`, `Vec<u8>`, ...).
pub fn select_blocks<I, S>(lines: I, filter: Filter) -> SelectBlocks<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    SelectBlocks {
        lines: lines.into_iter(),
        selector: BlockSelector::new(filter),
    }
}
