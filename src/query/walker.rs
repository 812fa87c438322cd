//! Explicit-stack preorder walk along one relation.

use crate::error::{Result, WordNetError};
use crate::index::Partition;
use crate::query::limits::TraversalLimits;
use crate::synset::Synset;

/// What the walk does after visiting a synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Descend into the synset's relation targets.
    Continue,
    /// Do not descend below this synset.
    SkipChildren,
    /// End the walk.
    Stop,
}

/// A node handed to the visitor.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub id: &'a str,
    /// Edge count from the start synset.
    pub depth: usize,
    /// The stored synset, `None` when the id is not in the partition.
    pub synset: Option<&'a Synset>,
}

impl Visit<'_> {
    /// Whether the synset has out-edges labelled `relation`.
    pub fn has_relation(&self, relation: &str) -> bool {
        self.synset.is_some_and(|s| s.has_relation(relation))
    }
}

/// Preorder walk: a synset is visited before its targets, targets in
/// adjacency order. Synsets reachable over several paths are visited once
/// per path.
pub struct Walker<'a> {
    partition: &'a Partition,
    relation: &'a str,
    limits: TraversalLimits,
}

impl<'a> Walker<'a> {
    pub fn new(partition: &'a Partition, relation: &'a str, limits: TraversalLimits) -> Self {
        Walker {
            partition,
            relation,
            limits,
        }
    }

    /// Walk from `start`, calling `visit` for every node reached.
    pub fn walk<F>(&self, start: &'a str, mut visit: F) -> Result<()>
    where
        F: FnMut(Visit<'a>) -> Flow,
    {
        let mut stack: Vec<(&'a str, usize)> = vec![(start, 0)];
        let mut path: Vec<&'a str> = Vec::new();

        while let Some((id, depth)) = stack.pop() {
            if let Some(max_depth) = self.limits.max_depth
                && depth > max_depth
            {
                return Err(WordNetError::TraversalLimit {
                    id: start.to_string(),
                    depth: max_depth,
                });
            }

            if self.limits.detect_cycles {
                path.truncate(depth);
                if path.contains(&id) {
                    return Err(WordNetError::CycleDetected {
                        id: id.to_string(),
                        relation: self.relation.to_string(),
                    });
                }
                path.push(id);
            }

            let synset = self.partition.get(id);
            match visit(Visit { id, depth, synset }) {
                Flow::Stop => return Ok(()),
                Flow::SkipChildren => continue,
                Flow::Continue => {}
            }

            if let Some(synset) = synset {
                let children: Vec<&'a str> = synset.targets(self.relation).collect();
                stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
            }
        }
        Ok(())
    }
}
