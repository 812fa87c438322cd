//! Cached taxonomy depth constants.

use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::error::Result;
use crate::query::GraphQuery;
use crate::synset::PartOfSpeech;

/// Lazily computed depth constant per (part of speech, relation).
///
/// The constant is the largest [`GraphQuery::max_depth`] over every id of
/// the noun partition, evaluated in the requested partition. Noun ids are
/// used whatever the requested part of speech. Entries are computed at most
/// once per key; the cache is safe to share between query threads.
#[derive(Debug, Default)]
pub struct DepthConstants {
    cache: RwLock<AHashMap<(PartOfSpeech, String), usize>>,
}

impl DepthConstants {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached constant, computing and storing it on first use.
    pub fn get(&self, query: &GraphQuery<'_>, pos: PartOfSpeech, relation: &str) -> Result<usize> {
        let key = (pos, relation.to_string());
        if let Some(depth) = self.cache.read().get(&key) {
            return Ok(*depth);
        }

        let depth = Self::compute(query, pos, relation)?;
        debug!("Depth constant for ({pos}, {relation}) is {depth}");

        // Another thread may have stored the same value meanwhile.
        Ok(*self.cache.write().entry(key).or_insert(depth))
    }

    /// The cached constant without computing it.
    pub fn cached(&self, pos: PartOfSpeech, relation: &str) -> Option<usize> {
        self.cache.read().get(&(pos, relation.to_string())).copied()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    fn compute(query: &GraphQuery<'_>, pos: PartOfSpeech, relation: &str) -> Result<usize> {
        let nouns: Vec<&str> = query.index().partition(PartOfSpeech::Noun).ids().collect();
        nouns
            .par_iter()
            .map(|id| query.max_depth(id, pos, relation))
            .try_reduce(|| 0, |a, b| Ok(a.max(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{Diagnostics, RelationIndex};
    use crate::ingest::numbered;
    use crate::query::TraversalLimits;
    use crate::synset::SynsetRecord;

    fn index() -> RelationIndex {
        let records = vec![
            SynsetRecord::new("n1", "n"),
            SynsetRecord::new("n2", "n").with_pointer("n1", "hypernym"),
            SynsetRecord::new("n3", "n").with_pointer("n2", "hypernym"),
            SynsetRecord::new("v1", "v"),
            SynsetRecord::new("v2", "v").with_pointer("v1", "hypernym"),
        ];
        let mut diagnostics = Diagnostics::new();
        let mut index = RelationIndex::build(numbered(records), &mut diagnostics).unwrap();
        index.invert_relations(&mut diagnostics).unwrap();
        index
    }

    #[test]
    fn test_depth_constant_is_cached() {
        let index = index();
        let query = GraphQuery::new(&index, TraversalLimits::default());
        let depths = DepthConstants::new();

        assert!(depths.cached(PartOfSpeech::Noun, "hypernym").is_none());
        assert_eq!(depths.get(&query, PartOfSpeech::Noun, "hypernym").unwrap(), 3);
        assert_eq!(depths.cached(PartOfSpeech::Noun, "hypernym"), Some(3));
        assert_eq!(depths.get(&query, PartOfSpeech::Noun, "hyponym").unwrap(), 3);
        assert_eq!(depths.len(), 2);
    }

    #[test]
    fn test_depth_constant_uses_noun_ids() {
        // Verb ids v1/v2 are never visited: the noun ids n1..n3 are looked up
        // in the verb partition, where none of them exists.
        let index = index();
        let query = GraphQuery::new(&index, TraversalLimits::default());
        let depths = DepthConstants::new();
        assert_eq!(depths.get(&query, PartOfSpeech::Verb, "hypernym").unwrap(), 1);
    }

    #[test]
    fn test_empty_noun_partition() {
        let index = RelationIndex::new();
        let query = GraphQuery::new(&index, TraversalLimits::default());
        let depths = DepthConstants::new();
        assert_eq!(depths.get(&query, PartOfSpeech::Noun, "hypernym").unwrap(), 0);
    }
}
