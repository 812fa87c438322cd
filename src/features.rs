//! Semantic feature compatibility.
//!
//! A feature map assigns synset ids to named semantic features (e.g.
//! `"animate"`). A literal is compatible with a feature when one of its
//! senses reaches one of the feature's synsets along `hypernym`.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{Result, WordNetError};
use crate::query::GraphQuery;
use crate::synset::PartOfSpeech;

/// Feature name → synset ids. Ids are not validated against any index.
#[derive(Debug, Clone, Default)]
pub struct FeatureMap {
    features: AHashMap<String, BTreeSet<String>>,
}

impl FeatureMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a feature map from a JSON file.
    ///
    /// The file holds one object mapping each feature name to its synset
    /// ids:
    /// ```json
    /// {
    ///   "animate": ["ENG20-00004123-n", "ENG20-00015024-n"],
    ///   "artifact": ["ENG20-00019244-n"]
    /// }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordNetError::other(format!(
                "Could not open file: {} because: {e}",
                path.display()
            ))
        })?;
        let features: HashMap<String, BTreeSet<String>> = serde_json::from_str(&content)?;
        Ok(FeatureMap {
            features: features.into_iter().collect(),
        })
    }

    /// Build a feature map from `(feature, synset id)` pairs.
    pub fn from_pairs<I, F, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, S)>,
        F: Into<String>,
        S: Into<String>,
    {
        let mut map = FeatureMap::new();
        for (feature, id) in pairs {
            map.insert(feature, id);
        }
        map
    }

    pub fn insert<F: Into<String>, S: Into<String>>(&mut self, feature: F, id: S) {
        self.features
            .entry(feature.into())
            .or_default()
            .insert(id.into());
    }

    /// Synset ids of `feature`, `None` for an unknown feature.
    pub fn look_up(&self, feature: &str) -> Option<&BTreeSet<String>> {
        self.features.get(feature)
    }

    /// Total number of (feature, synset id) pairs.
    pub fn pair_count(&self) -> usize {
        self.features.values().map(BTreeSet::len).sum()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Check whether any sense of `literal` is a (distant) hyponym of one of
    /// the synsets of `feature`.
    ///
    /// Returns `(sense_id, feature_synset_id)` of the first compatible pair;
    /// `None` if the feature is unknown or empty, or nothing is compatible.
    pub fn is_literal_compatible<'a>(
        &self,
        query: &GraphQuery<'a>,
        literal: &str,
        pos: PartOfSpeech,
        feature: &str,
    ) -> Result<Option<(&'a str, &'a str)>> {
        match self.look_up(feature) {
            Some(ids) if !ids.is_empty() => query.is_literal_connected(literal, pos, "hypernym", ids),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::index::{Diagnostics, RelationIndex};
    use crate::ingest::numbered;
    use crate::query::TraversalLimits;
    use crate::synset::SynsetRecord;

    fn index() -> RelationIndex {
        let records = vec![
            SynsetRecord::new("n1", "n").with_synonym("organism", 1),
            SynsetRecord::new("n2", "n")
                .with_synonym("dog", 1)
                .with_pointer("n1", "hypernym"),
            SynsetRecord::new("n3", "n").with_synonym("dog", 2),
        ];
        let mut diagnostics = Diagnostics::new();
        let mut index = RelationIndex::build(numbered(records), &mut diagnostics).unwrap();
        index.invert_relations(&mut diagnostics).unwrap();
        index
    }

    #[test]
    fn test_compatible_with_feature() {
        let index = index();
        let query = GraphQuery::new(&index, TraversalLimits::default());
        let features = FeatureMap::from_pairs([("animate", "n1"), ("animate", "n7")]);

        assert_eq!(features.pair_count(), 2);
        assert_eq!(
            features
                .is_literal_compatible(&query, "dog", PartOfSpeech::Noun, "animate")
                .unwrap(),
            Some(("n2", "n1"))
        );
        assert_eq!(
            features
                .is_literal_compatible(&query, "organism", PartOfSpeech::Noun, "abstract")
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"animate": ["n1", "n2"], "empty": []}}"#).unwrap();

        let features = FeatureMap::load_from_file(file.path()).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features.pair_count(), 2);
        assert!(features.look_up("animate").unwrap().contains("n2"));

        let index = index();
        let query = GraphQuery::new(&index, TraversalLimits::default());
        assert_eq!(
            features
                .is_literal_compatible(&query, "dog", PartOfSpeech::Noun, "empty")
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_load_missing_file() {
        assert!(FeatureMap::load_from_file("/nonexistent/features.json").is_err());
    }
}
