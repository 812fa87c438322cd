//! Configuration for the query engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordNetError};
use crate::query::TraversalLimits;
use crate::similarity::leacock_chodorow::NO_CONNECTION;
use crate::synset::PartOfSpeech;

/// Settings of a [`WordNet`](crate::engine::WordNet).
///
/// Loaded from JSON, every field is optional:
/// ```json
/// {
///   "traversal": { "max_depth": 200, "detect_cycles": true },
///   "no_connection_score": -1.0,
///   "eager_depth_constants": [["n", "hypernym"]]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Depth cap and cycle policy of every walk.
    pub traversal: TraversalLimits,
    /// Similarity score of two synsets without a common reachable node.
    pub no_connection_score: f64,
    /// Depth constants computed while the engine is built instead of on the
    /// first similarity query.
    pub eager_depth_constants: Vec<(PartOfSpeech, String)>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            traversal: TraversalLimits::default(),
            no_connection_score: NO_CONNECTION,
            eager_depth_constants: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Create a new builder for EngineConfig.
    ///
    /// # Example
    ///
    /// ```
    /// use wnquery::engine::EngineConfig;
    /// use wnquery::synset::PartOfSpeech;
    ///
    /// let config = EngineConfig::builder()
    ///     .max_depth(500)
    ///     .detect_cycles(true)
    ///     .eager_depth_constant(PartOfSpeech::Noun, "hypernym")
    ///     .build();
    /// assert_eq!(config.traversal.max_depth, Some(500));
    /// ```
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Read a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordNetError::config(format!(
                "Could not read config file {}: {e}",
                path.display()
            ))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            WordNetError::config(format!(
                "Invalid config file {}: {e}",
                path.display()
            ))
        })
    }
}

/// Builder for EngineConfig.
pub struct EngineConfigBuilder {
    max_depth: Option<Option<usize>>,
    detect_cycles: Option<bool>,
    no_connection_score: Option<f64>,
    eager_depth_constants: Vec<(PartOfSpeech, String)>,
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: None,
            detect_cycles: None,
            no_connection_score: None,
            eager_depth_constants: Vec::new(),
        }
    }

    /// Set the maximum edge count of a walk.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(Some(max_depth));
        self
    }

    /// Remove the depth cap. Walks over cyclic data then never end unless
    /// cycle detection is on.
    pub fn unbounded(mut self) -> Self {
        self.max_depth = Some(None);
        self
    }

    /// Fail walks that revisit a synset on the current path.
    pub fn detect_cycles(mut self, detect: bool) -> Self {
        self.detect_cycles = Some(detect);
        self
    }

    /// Set the score of unconnected synset pairs.
    pub fn no_connection_score(mut self, score: f64) -> Self {
        self.no_connection_score = Some(score);
        self
    }

    /// Precompute the depth constant of `(pos, relation)` at build time.
    pub fn eager_depth_constant<S: Into<String>>(mut self, pos: PartOfSpeech, relation: S) -> Self {
        self.eager_depth_constants.push((pos, relation.into()));
        self
    }

    /// Build the EngineConfig.
    pub fn build(self) -> EngineConfig {
        let defaults = EngineConfig::default();
        let traversal = TraversalLimits {
            max_depth: self.max_depth.unwrap_or(defaults.traversal.max_depth),
            detect_cycles: self.detect_cycles.unwrap_or(defaults.traversal.detect_cycles),
        };
        EngineConfig {
            traversal,
            no_connection_score: self
                .no_connection_score
                .unwrap_or(defaults.no_connection_score),
            eager_depth_constants: self.eager_depth_constants,
        }
    }
}
