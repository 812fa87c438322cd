//! One-time relation inversion.
//!
//! For every invertible relation `source --rel--> target`, the inverse edge
//! `target --inverse(rel)--> source` is appended to the target. Partitions
//! are processed in partition order, synsets in ascending id order and edges
//! in list order, so the resulting adjacency lists and diagnostics are
//! reproducible. Edges appended to a synset before it is itself processed
//! take part in its pass, which is how self-inverse relations end up with
//! duplicate pairs.

use log::info;

use crate::error::{Result, WordNetError};
use crate::index::diagnostics::{Diagnostic, Diagnostics};
use crate::index::relation_index::RelationIndex;
use crate::synset::{PartOfSpeech, Pointer};

/// Invertible relations and their inverses.
pub const INVERSE_RELATIONS: &[(&str, &str)] = &[
    ("hypernym", "hyponym"),
    ("holo_member", "mero_member"),
    ("holo_part", "mero_part"),
    ("holo_portion", "mero_portion"),
    ("region_domain", "region_member"),
    ("usage_domain", "usage_member"),
    ("category_domain", "category_member"),
    ("near_antonym", "near_antonym"),
    ("middle", "middle"),
    ("verb_group", "verb_group"),
    ("similar_to", "similar_to"),
    ("also_see", "also_see"),
    ("be_in_state", "be_in_state"),
    ("eng_derivative", "eng_derivative"),
    ("is_consequent_state_of", "has_consequent_state"),
    ("is_preparatory_phase_of", "has_preparatory_phase"),
    ("is_telos_of", "has_telos"),
    ("subevent", "has_subevent"),
    ("causes", "caused_by"),
];

/// The inverse of `relation`, if it is invertible.
pub fn inverse_of(relation: &str) -> Option<&'static str> {
    INVERSE_RELATIONS
        .iter()
        .find(|(rel, _)| *rel == relation)
        .map(|(_, inverse)| *inverse)
}

impl RelationIndex {
    /// Add the inverse edges of all invertible relations in all partitions.
    ///
    /// Must run exactly once, after ingestion: a second run would append
    /// every inverse edge again, so it is rejected with
    /// [`WordNetError::InvalidOperation`] and leaves the index untouched.
    pub fn invert_relations(&mut self, diagnostics: &mut Diagnostics) -> Result<()> {
        if self.is_inverted() {
            return Err(WordNetError::invalid_operation(
                "relations have already been inverted",
            ));
        }
        for pos in PartOfSpeech::ALL {
            info!("Inverting relations for {}...", pos.plural_name());
            self.invert_partition(pos, diagnostics);
        }
        self.mark_inverted();
        Ok(())
    }

    fn invert_partition(&mut self, pos: PartOfSpeech, diagnostics: &mut Diagnostics) {
        let partition = self.partition_mut(pos);
        let ids: Vec<String> = partition.ids().map(str::to_string).collect();

        for source in ids {
            // Snapshot: this synset's list may already hold inverse edges
            // added by synsets with smaller ids.
            let edges = match partition.get(&source) {
                Some(synset) => synset.pointers.clone(),
                None => continue,
            };

            for Pointer { target, relation } in edges {
                let Some(inverse) = inverse_of(&relation) else {
                    continue;
                };

                if target == source {
                    diagnostics.push(Diagnostic::SelfReferencingRelation {
                        pos,
                        id: source.clone(),
                        relation,
                        inverse: inverse.to_string(),
                    });
                    continue;
                }

                match partition.get_mut(&target) {
                    None => diagnostics.push(Diagnostic::MissingRelationTarget {
                        pos,
                        source: source.clone(),
                        target,
                        relation,
                    }),
                    Some(synset) => {
                        synset.pointers.push(Pointer::new(source.clone(), inverse));
                        diagnostics.push(Diagnostic::AddedInverseRelation {
                            pos,
                            synset: target,
                            target: source.clone(),
                            relation: inverse.to_string(),
                        });
                    }
                }
            }
        }
    }
}
