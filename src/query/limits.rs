//! Traversal bounds.

use serde::{Deserialize, Serialize};

/// Bounds applied to every recursive query.
///
/// The defaults never affect an acyclic taxonomy of realistic depth; they
/// turn runaway recursion on malformed input into an error.
///
/// # Example
///
/// ```
/// use wnquery::query::TraversalLimits;
///
/// let strict = TraversalLimits::default().with_max_depth(64).with_cycle_detection(true);
/// assert_eq!(strict.max_depth, Some(64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalLimits {
    /// Deepest edge count allowed below the start synset. `None` removes
    /// the cap.
    pub max_depth: Option<usize>,
    /// Fail as soon as a synset reappears on its own path. Reaching a
    /// synset again through a different path is not a cycle.
    pub detect_cycles: bool,
}

impl Default for TraversalLimits {
    fn default() -> Self {
        TraversalLimits {
            max_depth: Some(10_000),
            detect_cycles: false,
        }
    }
}

impl TraversalLimits {
    /// No depth cap and no cycle detection.
    pub fn unbounded() -> Self {
        TraversalLimits {
            max_depth: None,
            detect_cycles: false,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_cycle_detection(mut self, detect_cycles: bool) -> Self {
        self.detect_cycles = detect_cycles;
        self
    }
}
