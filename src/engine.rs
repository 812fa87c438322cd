//! The query engine facade.
//!
//! [`WordNet`] owns a finished [`RelationIndex`] together with the
//! similarity scorer and its depth-constant cache. It is built once from a
//! record stream, inverted exactly once, and read-only afterwards, so a
//! shared reference can serve queries from several threads.

pub mod config;

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::index::{Diagnostics, PartitionStats, RelationIndex};
use crate::ingest::SynsetSource;
use crate::ingest::jsonl::JsonlSynsetReader;
use crate::query::GraphQuery;
use crate::similarity::{LeacockChodorow, SensePairScore};
use crate::synset::visdic::{write_xml_footer, write_xml_header};
use crate::synset::{PartOfSpeech, Synset, SynsetRecord};

pub use config::{EngineConfig, EngineConfigBuilder};

/// An inverted, queryable wordnet.
#[derive(Debug)]
pub struct WordNet {
    index: RelationIndex,
    config: EngineConfig,
    scorer: LeacockChodorow,
}

impl WordNet {
    /// Build an engine from numbered records.
    ///
    /// Records are consumed up to the first sentinel; relations are then
    /// inverted and the configured depth constants computed. Rejected
    /// records and inversion events are returned as diagnostics.
    pub fn from_records<I>(records: I, config: EngineConfig) -> Result<(Self, Diagnostics)>
    where
        I: IntoIterator<Item = Result<(SynsetRecord, usize)>>,
    {
        let mut diagnostics = Diagnostics::new();
        let mut index = RelationIndex::build(records, &mut diagnostics)?;
        index.invert_relations(&mut diagnostics)?;

        let wordnet = WordNet {
            index,
            scorer: LeacockChodorow::new(config.no_connection_score),
            config,
        };
        for (pos, relation) in &wordnet.config.eager_depth_constants {
            let depth = wordnet.depth_constant(*pos, relation)?;
            info!("Depth constant for ({pos}, {relation}): {depth}");
        }
        info!(
            "WordNet ready with {} diagnostic(s), {} warning(s)",
            diagnostics.len(),
            diagnostics.warnings().count()
        );
        Ok((wordnet, diagnostics))
    }

    /// Build an engine from any [`SynsetSource`].
    pub fn from_source<S: SynsetSource>(source: &S, config: EngineConfig) -> Result<(Self, Diagnostics)> {
        Self::from_records(source.records()?, config)
    }

    /// Build an engine from a JSON Lines file.
    pub fn open<P: AsRef<Path>>(path: P, config: EngineConfig) -> Result<(Self, Diagnostics)> {
        let path = path.as_ref();
        info!("Loading wordnet from {}", path.display());
        Self::from_source(&JsonlSynsetReader::new(path), config)
    }

    pub fn index(&self) -> &RelationIndex {
        &self.index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scorer(&self) -> &LeacockChodorow {
        &self.scorer
    }

    /// Graph queries bound to the configured traversal limits.
    pub fn query(&self) -> GraphQuery<'_> {
        GraphQuery::new(&self.index, self.config.traversal)
    }

    pub fn by_id(&self, id: &str, pos: PartOfSpeech) -> Option<&Synset> {
        self.index.by_id(id, pos)
    }

    pub fn by_literal(&self, literal: &str, pos: PartOfSpeech) -> Vec<&Synset> {
        self.index.by_literal(literal, pos)
    }

    pub fn by_sense(&self, literal: &str, sense: u32, pos: PartOfSpeech) -> Option<&Synset> {
        self.index.by_sense(literal, sense, pos)
    }

    pub fn relation_targets<'a>(&'a self, id: &str, pos: PartOfSpeech, relation: &str) -> Vec<&'a str> {
        self.query().relation_targets(id, pos, relation)
    }

    pub fn trace<'a>(&'a self, id: &'a str, pos: PartOfSpeech, relation: &'a str) -> Result<Vec<&'a str>> {
        self.query().trace(id, pos, relation)
    }

    pub fn trace_levels<'a>(
        &'a self,
        id: &'a str,
        pos: PartOfSpeech,
        relation: &'a str,
        base: usize,
    ) -> Result<Vec<(&'a str, usize)>> {
        self.query().trace_levels(id, pos, relation, base)
    }

    pub fn trace_unique<'a>(
        &'a self,
        id: &'a str,
        pos: PartOfSpeech,
        relation: &'a str,
    ) -> Result<BTreeSet<&'a str>> {
        self.query().trace_unique(id, pos, relation)
    }

    pub fn reach<'a>(
        &'a self,
        id: &'a str,
        pos: PartOfSpeech,
        relation: &'a str,
        add_top: bool,
        dist: usize,
    ) -> Result<Vec<(&'a str, usize)>> {
        self.query().reach(id, pos, relation, add_top, dist)
    }

    pub fn max_depth<'a>(&'a self, id: &'a str, pos: PartOfSpeech, relation: &'a str) -> Result<usize> {
        self.query().max_depth(id, pos, relation)
    }

    pub fn sub_graph_size<'a>(&'a self, id: &'a str, pos: PartOfSpeech, relation: &'a str) -> Result<usize> {
        self.query().sub_graph_size(id, pos, relation)
    }

    pub fn is_connected<'a, S>(
        &'a self,
        id: &'a str,
        pos: PartOfSpeech,
        relation: &'a str,
        targets: &BTreeSet<S>,
    ) -> Result<Option<&'a str>>
    where
        S: std::borrow::Borrow<str> + Ord,
    {
        self.query().is_connected(id, pos, relation, targets)
    }

    pub fn is_literal_connected<'a, S>(
        &'a self,
        literal: &str,
        pos: PartOfSpeech,
        relation: &'a str,
        targets: &BTreeSet<S>,
    ) -> Result<Option<(&'a str, &'a str)>>
    where
        S: std::borrow::Borrow<str> + Ord,
    {
        self.query().is_literal_connected(literal, pos, relation, targets)
    }

    pub fn is_literal_compatible<'a>(
        &'a self,
        literal: &str,
        pos: PartOfSpeech,
        id: &'a str,
        include_hyponyms: bool,
    ) -> Result<bool> {
        self.query().is_literal_compatible(literal, pos, id, include_hyponyms)
    }

    pub fn are_synonyms(&self, literal1: &str, literal2: &str, pos: PartOfSpeech) -> Option<&str> {
        self.query().are_synonyms(literal1, literal2, pos)
    }

    /// The cached depth constant of `(pos, relation)`.
    pub fn depth_constant(&self, pos: PartOfSpeech, relation: &str) -> Result<usize> {
        self.scorer.depth_constant(&self.query(), pos, relation)
    }

    /// Leacock-Chodorow similarity of two synsets.
    pub fn sim<'a>(
        &'a self,
        id1: &'a str,
        id2: &'a str,
        pos: PartOfSpeech,
        relation: &'a str,
        add_top: bool,
    ) -> Result<f64> {
        self.scorer.sim(&self.query(), id1, id2, pos, relation, add_top)
    }

    /// Leacock-Chodorow similarity of every sense pair of two literals.
    pub fn similarity<'a>(
        &'a self,
        literal1: &str,
        literal2: &str,
        pos: PartOfSpeech,
        relation: &'a str,
        add_top: bool,
    ) -> Result<Vec<SensePairScore>> {
        self.scorer
            .similarity(&self.query(), literal1, literal2, pos, relation, add_top)
    }

    pub fn stats(&self) -> Vec<PartitionStats> {
        self.index.stats()
    }

    /// Write the partition statistics as text, one block per partition.
    pub fn write_stats<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for stats in self.stats() {
            writeln!(out, "PoS: {}", stats.pos.plural_name())?;
            writeln!(out, "  #synsets: {}", stats.synsets)?;
            writeln!(out, "  #word senses: {}", stats.word_senses)?;
            writeln!(out, "  #words: {}", stats.words)?;
        }
        Ok(())
    }

    /// Write every synset as a VisDic XML document, partitions in
    /// noun, verb, adjective, adverb order and ids ascending.
    pub fn write_visdic_xml<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_xml_header(out)?;
        for pos in PartOfSpeech::ALL {
            for synset in self.index.partition(pos).synsets() {
                synset.write_visdic_xml(out)?;
                writeln!(out)?;
            }
        }
        write_xml_footer(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DiagnosticKind;
    use crate::ingest::numbered;

    fn records() -> Vec<SynsetRecord> {
        vec![
            SynsetRecord::new("n1", "n").with_synonym("entity", 1),
            SynsetRecord::new("n2", "n")
                .with_synonym("dog", 1)
                .with_synonym("domestic_dog", 1)
                .with_pointer("n1", "hypernym"),
            SynsetRecord::new("n3", "n")
                .with_synonym("cat", 1)
                .with_pointer("n1", "hypernym")
                .with_pointer("n99", "hypernym"),
            SynsetRecord::new("v1", "v").with_synonym("run", 1),
        ]
    }

    #[test]
    fn test_from_records_inverts_once() {
        let (wordnet, diagnostics) =
            WordNet::from_records(numbered(records()), EngineConfig::default()).unwrap();

        assert!(wordnet.index().is_inverted());
        assert_eq!(diagnostics.count(DiagnosticKind::MissingRelationTarget), 1);
        assert_eq!(
            wordnet.relation_targets("n1", PartOfSpeech::Noun, "hyponym"),
            vec!["n2", "n3"]
        );
        assert_eq!(wordnet.sub_graph_size("n1", PartOfSpeech::Noun, "hyponym").unwrap(), 3);
        assert_eq!(
            wordnet.are_synonyms("dog", "domestic_dog", PartOfSpeech::Noun),
            Some("n2")
        );
    }

    #[test]
    fn test_eager_depth_constants() {
        let config = EngineConfig::builder()
            .eager_depth_constant(PartOfSpeech::Noun, "hypernym")
            .build();
        let (wordnet, _) = WordNet::from_records(numbered(records()), config).unwrap();

        assert_eq!(
            wordnet.scorer().depths().cached(PartOfSpeech::Noun, "hypernym"),
            Some(2)
        );
        let score = wordnet
            .sim("n2", "n2", PartOfSpeech::Noun, "hypernym", false)
            .unwrap();
        assert!((score - 4.0f64.log10()).abs() < 1e-9);
    }

    #[test]
    fn test_concurrent_sim_on_cold_cache() {
        let (wordnet, _) =
            WordNet::from_records(numbered(records()), EngineConfig::default()).unwrap();
        assert!(wordnet.scorer().depths().is_empty());

        let wordnet = &wordnet;
        let scores: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(move || {
                        wordnet
                            .sim("n2", "n3", PartOfSpeech::Noun, "hypernym", false)
                            .unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        // Siblings under n1: path length 3, D = 2.
        let expected = -(3.0f64 / 4.0).log10();
        for score in &scores {
            assert!((score - expected).abs() < 1e-9);
        }
        assert_eq!(wordnet.scorer().depths().len(), 1);
        assert_eq!(
            wordnet.scorer().depths().cached(PartOfSpeech::Noun, "hypernym"),
            Some(2)
        );
    }

    #[test]
    fn test_no_connection_score_from_config() {
        let config = EngineConfig::builder().no_connection_score(0.0).build();
        let (wordnet, _) = WordNet::from_records(numbered(records()), config).unwrap();
        let scores = wordnet
            .similarity("dog", "run", PartOfSpeech::Noun, "hypernym", false)
            .unwrap();
        assert!(scores.is_empty());
        assert_eq!(
            wordnet
                .sim("n2", "missing", PartOfSpeech::Noun, "hypernym", false)
                .unwrap(),
            0.0
        );
    }

    #[test]
    fn test_write_stats() {
        let (wordnet, _) =
            WordNet::from_records(numbered(records()), EngineConfig::default()).unwrap();
        let mut out = Vec::new();
        wordnet.write_stats(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("PoS: nouns\n  #synsets: 3\n  #word senses: 4\n  #words: 4\n"));
        assert!(text.contains("PoS: verbs\n  #synsets: 1\n"));
    }

    #[test]
    fn test_write_visdic_xml() {
        let (wordnet, _) =
            WordNet::from_records(numbered(records()), EngineConfig::default()).unwrap();
        let mut out = Vec::new();
        wordnet.write_visdic_xml(&mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], "<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
        assert_eq!(lines[2], "<WNXML>");
        assert!(lines[3].starts_with("<SYNSET><ID>n1</ID>"));
        assert!(lines[6].starts_with("<SYNSET><ID>v1</ID>"));
        assert_eq!(lines[7], "</WNXML>");
        // n1 gained both hyponyms during inversion.
        assert!(lines[3].contains("<ILR>n2<TYPE>hyponym</TYPE></ILR><ILR>n3<TYPE>hyponym</TYPE></ILR>"));
    }
}
