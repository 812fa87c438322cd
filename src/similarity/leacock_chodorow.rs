//! Leacock-Chodorow scoring of synset and literal pairs.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::query::GraphQuery;
use crate::similarity::depth::DepthConstants;
use crate::synset::PartOfSpeech;

/// Score returned when two synsets share no reachable node.
pub const NO_CONNECTION: f64 = -1.0;

/// Similarity of one sense of each literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensePairScore {
    pub score: f64,
    /// Id of the sense of the first literal.
    pub id1: String,
    /// Id of the sense of the second literal.
    pub id2: String,
}

/// Leacock-Chodorow scorer with its depth-constant cache.
#[derive(Debug)]
pub struct LeacockChodorow {
    depths: DepthConstants,
    no_connection: f64,
}

impl Default for LeacockChodorow {
    fn default() -> Self {
        Self::new(NO_CONNECTION)
    }
}

impl LeacockChodorow {
    /// Create a scorer reporting `no_connection` for unconnected pairs.
    pub fn new(no_connection: f64) -> Self {
        LeacockChodorow {
            depths: DepthConstants::new(),
            no_connection,
        }
    }

    pub fn depths(&self) -> &DepthConstants {
        &self.depths
    }

    pub fn no_connection(&self) -> f64 {
        self.no_connection
    }

    /// The depth constant `D` for `(pos, relation)`.
    pub fn depth_constant(
        &self,
        query: &GraphQuery<'_>,
        pos: PartOfSpeech,
        relation: &str,
    ) -> Result<usize> {
        self.depths.get(query, pos, relation)
    }

    /// Similarity of two synsets.
    ///
    /// Both synsets are expanded with [`GraphQuery::reach`] (distance 1 at
    /// the start). Over every node reached from both, the smallest distance
    /// sum counts the common node twice, so the path length is that sum
    /// minus one: 1 for identical synsets, 2 for parent and child, 3 for
    /// siblings. Without a common node the configured no-connection score
    /// is returned, which only happens when `add_top` is false.
    pub fn sim<'a>(
        &self,
        query: &GraphQuery<'a>,
        id1: &'a str,
        id2: &'a str,
        pos: PartOfSpeech,
        relation: &'a str,
        add_top: bool,
    ) -> Result<f64> {
        let depth = self.depth_constant(query, pos, relation)?;
        let reach1 = query.reach(id1, pos, relation, add_top, 1)?;
        let reach2 = query.reach(id2, pos, relation, add_top, 1)?;

        let mut shortest: Option<usize> = None;
        for (node1, dist1) in &reach1 {
            for (node2, dist2) in &reach2 {
                if node1 == node2 && shortest.is_none_or(|s| dist1 + dist2 < s) {
                    shortest = Some(dist1 + dist2);
                }
            }
        }

        Ok(match shortest {
            Some(sum) if depth > 0 => {
                let path_length = (sum - 1) as f64;
                -(path_length / (2.0 * depth as f64)).log10()
            }
            _ => self.no_connection,
        })
    }

    /// Similarity of every (sense of `literal1`, sense of `literal2`) pair,
    /// in literal-index order. Empty when either literal is unknown.
    pub fn similarity<'a>(
        &self,
        query: &GraphQuery<'a>,
        literal1: &str,
        literal2: &str,
        pos: PartOfSpeech,
        relation: &'a str,
        add_top: bool,
    ) -> Result<Vec<SensePairScore>> {
        let index = query.index();
        let senses1 = index.by_literal(literal1, pos);
        let senses2 = index.by_literal(literal2, pos);

        let mut scores = Vec::with_capacity(senses1.len() * senses2.len());
        for s1 in &senses1 {
            for s2 in &senses2 {
                let score = self.sim(query, &s1.id, &s2.id, pos, relation, add_top)?;
                scores.push(SensePairScore {
                    score,
                    id1: s1.id.clone(),
                    id2: s2.id.clone(),
                });
            }
        }
        Ok(scores)
    }
}

/// Collapse pair scores into a score → pair mapping.
///
/// Keys keep their first-seen order; a pair whose score equals an earlier
/// one replaces it, so the last pair wins.
pub fn collapse_by_score(scores: &[SensePairScore]) -> Vec<(f64, String, String)> {
    let mut collapsed: Vec<(f64, String, String)> = Vec::new();
    for pair in scores {
        match collapsed
            .iter_mut()
            .find(|(score, _, _)| score.to_bits() == pair.score.to_bits())
        {
            Some(entry) => {
                entry.1 = pair.id1.clone();
                entry.2 = pair.id2.clone();
            }
            None => collapsed.push((pair.score, pair.id1.clone(), pair.id2.clone())),
        }
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{Diagnostics, RelationIndex};
    use crate::ingest::numbered;
    use crate::query::TraversalLimits;
    use crate::synset::SynsetRecord;

    const N: PartOfSpeech = PartOfSpeech::Noun;

    /// n1 <- n2 <- n4, n1 <- n3 <- n5, and an isolated n6.
    fn index() -> RelationIndex {
        let records = vec![
            SynsetRecord::new("n1", "n").with_synonym("entity", 1),
            SynsetRecord::new("n2", "n")
                .with_synonym("animal", 1)
                .with_pointer("n1", "hypernym"),
            SynsetRecord::new("n3", "n")
                .with_synonym("plant", 1)
                .with_pointer("n1", "hypernym"),
            SynsetRecord::new("n4", "n")
                .with_synonym("dog", 1)
                .with_pointer("n2", "hypernym"),
            SynsetRecord::new("n5", "n")
                .with_synonym("tree", 1)
                .with_synonym("dog", 2)
                .with_pointer("n3", "hypernym"),
            SynsetRecord::new("n6", "n").with_synonym("idea", 1),
        ];
        let mut diagnostics = Diagnostics::new();
        let mut index = RelationIndex::build(numbered(records), &mut diagnostics).unwrap();
        index.invert_relations(&mut diagnostics).unwrap();
        index
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_synsets() {
        let index = index();
        let query = GraphQuery::new(&index, TraversalLimits::default());
        let lch = LeacockChodorow::default();

        let d = lch.depth_constant(&query, N, "hypernym").unwrap();
        assert_eq!(d, 3);
        let score = lch.sim(&query, "n4", "n4", N, "hypernym", false).unwrap();
        assert!(close(score, (2.0 * d as f64).log10()));
    }

    #[test]
    fn test_path_lengths() {
        let index = index();
        let query = GraphQuery::new(&index, TraversalLimits::default());
        let lch = LeacockChodorow::default();

        // parent and child: path length 2
        let parent = lch.sim(&query, "n4", "n2", N, "hypernym", false).unwrap();
        assert!(close(parent, -(2.0f64 / 6.0).log10()));

        // cousins through n1: n4 n2 n1 n3 n5
        let cousins = lch.sim(&query, "n4", "n5", N, "hypernym", false).unwrap();
        assert!(close(cousins, -(5.0f64 / 6.0).log10()));
        assert!(parent > cousins);
    }

    #[test]
    fn test_no_connection_without_top() {
        let index = index();
        let query = GraphQuery::new(&index, TraversalLimits::default());
        let lch = LeacockChodorow::default();

        let score = lch.sim(&query, "n4", "n6", N, "hypernym", false).unwrap();
        assert_eq!(score, NO_CONNECTION);

        // With the artificial top: n4 n2 n1 #TOP# n6
        let score = lch.sim(&query, "n4", "n6", N, "hypernym", true).unwrap();
        assert!(close(score, -(5.0f64 / 6.0).log10()));
    }

    #[test]
    fn test_custom_no_connection_score() {
        let index = index();
        let query = GraphQuery::new(&index, TraversalLimits::default());
        let lch = LeacockChodorow::new(0.0);
        assert_eq!(lch.sim(&query, "n2", "n6", N, "hypernym", false).unwrap(), 0.0);
    }

    #[test]
    fn test_similarity_keeps_every_sense_pair() {
        let index = index();
        let query = GraphQuery::new(&index, TraversalLimits::default());
        let lch = LeacockChodorow::default();

        let scores = lch
            .similarity(&query, "dog", "entity", N, "hypernym", false)
            .unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!((scores[0].id1.as_str(), scores[0].id2.as_str()), ("n4", "n1"));
        assert_eq!((scores[1].id1.as_str(), scores[1].id2.as_str()), ("n5", "n1"));
        // Both senses sit two levels below n1 and score the same.
        assert_eq!(scores[0].score, scores[1].score);

        let collapsed = collapse_by_score(&scores);
        assert_eq!(collapsed.len(), 1);
        assert_eq!(collapsed[0].1, "n5");

        assert!(lch
            .similarity(&query, "dog", "unicorn", N, "hypernym", false)
            .unwrap()
            .is_empty());
    }
}
