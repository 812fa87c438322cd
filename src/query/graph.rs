//! Traversal, reachability and connectivity queries.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::index::RelationIndex;
use crate::query::limits::TraversalLimits;
use crate::query::walker::{Flow, Walker};
use crate::synset::PartOfSpeech;

/// Synthetic node appended by [`GraphQuery::reach`] below synsets without
/// out-edges of the traced relation.
pub const TOP: &str = "#TOP#";

/// Read-only graph queries over a [`RelationIndex`].
///
/// Queries never fail for unknown ids or relations: they return empty or
/// `None` results. They fail only when a walk breaks the configured
/// [`TraversalLimits`].
#[derive(Debug, Clone, Copy)]
pub struct GraphQuery<'a> {
    index: &'a RelationIndex,
    limits: TraversalLimits,
}

impl<'a> GraphQuery<'a> {
    pub fn new(index: &'a RelationIndex, limits: TraversalLimits) -> Self {
        GraphQuery { index, limits }
    }

    pub fn index(&self) -> &'a RelationIndex {
        self.index
    }

    pub fn limits(&self) -> TraversalLimits {
        self.limits
    }

    fn walker(&self, pos: PartOfSpeech, relation: &'a str) -> Walker<'a> {
        Walker::new(self.index.partition(pos), relation, self.limits)
    }

    /// Ids of the immediate `relation` targets of `id`, in adjacency order.
    pub fn relation_targets(&self, id: &str, pos: PartOfSpeech, relation: &str) -> Vec<&'a str> {
        self.index
            .by_id(id, pos)
            .map(|synset| {
                synset
                    .pointers
                    .iter()
                    .filter(|p| p.relation == relation)
                    .map(|p| p.target.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Preorder trace along `relation`.
    ///
    /// The start id always comes first, even when it is not stored. Synsets
    /// reachable over several paths appear once per path.
    pub fn trace(&self, id: &'a str, pos: PartOfSpeech, relation: &'a str) -> Result<Vec<&'a str>> {
        let mut ids = Vec::new();
        self.walker(pos, relation).walk(id, |visit| {
            ids.push(visit.id);
            Flow::Continue
        })?;
        Ok(ids)
    }

    /// Like [`GraphQuery::trace`], pairing each id with its recursion level,
    /// counted from `base` at the start id.
    pub fn trace_levels(
        &self,
        id: &'a str,
        pos: PartOfSpeech,
        relation: &'a str,
        base: usize,
    ) -> Result<Vec<(&'a str, usize)>> {
        let mut levels = Vec::new();
        self.walker(pos, relation).walk(id, |visit| {
            levels.push((visit.id, base + visit.depth));
            Flow::Continue
        })?;
        Ok(levels)
    }

    /// The distinct ids of [`GraphQuery::trace`].
    pub fn trace_unique(
        &self,
        id: &'a str,
        pos: PartOfSpeech,
        relation: &'a str,
    ) -> Result<BTreeSet<&'a str>> {
        Ok(self.trace(id, pos, relation)?.into_iter().collect())
    }

    /// Stored synsets reachable along `relation` with their distance,
    /// counted from `dist` at the start id.
    ///
    /// Ids missing from the partition are left out together with everything
    /// below them. With `add_top`, every reached synset without `relation`
    /// out-edges is followed by a [`TOP`] entry one step further.
    pub fn reach(
        &self,
        id: &'a str,
        pos: PartOfSpeech,
        relation: &'a str,
        add_top: bool,
        dist: usize,
    ) -> Result<Vec<(&'a str, usize)>> {
        let mut reached = Vec::new();
        self.walker(pos, relation).walk(id, |visit| {
            if visit.synset.is_none() {
                return Flow::SkipChildren;
            }
            let distance = dist + visit.depth;
            reached.push((visit.id, distance));
            if add_top && !visit.has_relation(relation) {
                reached.push((TOP, distance + 1));
            }
            Flow::Continue
        })?;
        Ok(reached)
    }

    /// Node count of the longest path along `relation` starting at `id`:
    /// 1 for a synset without such out-edges, 2 for a direct child of one,
    /// and so on.
    pub fn max_depth(&self, id: &'a str, pos: PartOfSpeech, relation: &'a str) -> Result<usize> {
        let mut deepest = 0;
        self.walker(pos, relation).walk(id, |visit| {
            deepest = deepest.max(visit.depth);
            Flow::Continue
        })?;
        Ok(deepest + 1)
    }

    /// Number of distinct synsets reachable along `relation`, start included.
    pub fn sub_graph_size(&self, id: &'a str, pos: PartOfSpeech, relation: &'a str) -> Result<usize> {
        Ok(self.trace_unique(id, pos, relation)?.len())
    }

    /// Depth-first search along `relation` for any of `targets`.
    ///
    /// Each synset is checked before its children; the first target met is
    /// returned.
    pub fn is_connected<S>(
        &self,
        id: &'a str,
        pos: PartOfSpeech,
        relation: &'a str,
        targets: &BTreeSet<S>,
    ) -> Result<Option<&'a str>>
    where
        S: std::borrow::Borrow<str> + Ord,
    {
        let mut found = None;
        self.walker(pos, relation).walk(id, |visit| {
            if targets.contains(visit.id) {
                found = Some(visit.id);
                Flow::Stop
            } else {
                Flow::Continue
            }
        })?;
        Ok(found)
    }

    /// Try every sense of `literal` in literal-index order; return the first
    /// `(sense_id, target_id)` for which [`GraphQuery::is_connected`] succeeds.
    pub fn is_literal_connected<S>(
        &self,
        literal: &str,
        pos: PartOfSpeech,
        relation: &'a str,
        targets: &BTreeSet<S>,
    ) -> Result<Option<(&'a str, &'a str)>>
    where
        S: std::borrow::Borrow<str> + Ord,
    {
        for synset in self.index.by_literal(literal, pos) {
            let sense_id = synset.id.as_str();
            if let Some(found) = self.is_connected(sense_id, pos, relation, targets)? {
                return Ok(Some((sense_id, found)));
            }
        }
        Ok(None)
    }

    /// Whether synset `id` contains `literal`, or, with `include_hyponyms`,
    /// whether any synset below it along `hyponym` does.
    pub fn is_literal_compatible(
        &self,
        literal: &str,
        pos: PartOfSpeech,
        id: &'a str,
        include_hyponyms: bool,
    ) -> Result<bool> {
        let mut compatible = false;
        self.walker(pos, "hyponym").walk(id, |visit| match visit.synset {
            None => Flow::SkipChildren,
            Some(synset) if synset.contains_literal(literal) => {
                compatible = true;
                Flow::Stop
            }
            Some(_) if include_hyponyms => Flow::Continue,
            Some(_) => Flow::Stop,
        })?;
        Ok(compatible)
    }

    /// The first sense of `literal1` that also contains `literal2`.
    pub fn are_synonyms(&self, literal1: &str, literal2: &str, pos: PartOfSpeech) -> Option<&'a str> {
        self.index
            .by_literal(literal1, pos)
            .into_iter()
            .find(|synset| synset.contains_literal(literal2))
            .map(|synset| synset.id.as_str())
    }
}
