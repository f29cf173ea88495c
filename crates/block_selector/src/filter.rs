// crates/block_selector/src/filter.rs

use block_marker::Marker;

/// Phase and identifier constraints applied to each activating marker.
/// `None` accepts any value; `Some` requires an exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub phase: Option<String>,
    pub identifier: Option<String>,
}

impl Filter {
    /// Builds a filter from raw option values, treating an empty string as unconstrained.
    pub fn new(phase: &str, identifier: &str) -> Self {
        Filter {
            phase: non_empty(phase),
            identifier: non_empty(identifier),
        }
    }

    /// A filter that accepts every activating marker.
    pub fn any() -> Self {
        Filter::default()
    }

    /// Returns true if the marker passes both constraints.
    ///
    /// The phase is compared as a whole token, never as a substring.
    pub fn accepts(&self, marker: &Marker<'_>) -> bool {
        let identifier_ok = self
            .identifier
            .as_deref()
            .map_or(true, |wanted| wanted.as_bytes() == marker.identifier);
        let phase_ok = self
            .phase
            .as_deref()
            .map_or(true, |wanted| wanted.as_bytes() == marker.phase);
        identifier_ok && phase_ok
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
