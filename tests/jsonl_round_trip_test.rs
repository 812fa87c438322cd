use std::collections::BTreeSet;
use std::io::Write;

use tempfile::Builder;

use wnquery::engine::{EngineConfig, WordNet};
use wnquery::error::WordNetError;
use wnquery::features::FeatureMap;
use wnquery::index::DiagnosticKind;
use wnquery::synset::{PartOfSpeech, Pointer, SynsetRecord};

const N: PartOfSpeech = PartOfSpeech::Noun;

fn write_jsonl(records: &[SynsetRecord]) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".jsonl").tempfile().unwrap();
    for record in records {
        writeln!(file, "{}", serde_json::to_string(record).unwrap()).unwrap();
    }
    file.flush().unwrap();
    file
}

fn taxonomy() -> Vec<SynsetRecord> {
    vec![
        SynsetRecord::new("ENG20-00001740-n", "n")
            .with_synonym("entity", 1)
            .with_definition("that which is perceived or known or inferred to have its own distinct existence"),
        SynsetRecord::new("ENG20-00002086-n", "n")
            .with_synonym("life_form", 1)
            .with_synonym("organism", 1)
            .with_pointer("ENG20-00001740-n", "hypernym"),
        SynsetRecord::new("ENG20-02084071-n", "n")
            .with_synonym("dog", 1)
            .with_synonym("domestic_dog", 1)
            .with_pointer("ENG20-00002086-n", "hypernym"),
        SynsetRecord::new("ENG20-02121620-n", "n")
            .with_synonym("cat", 1)
            .with_pointer("ENG20-00002086-n", "hypernym"),
        SynsetRecord::new("ENG20-03575240-n", "n")
            .with_synonym("dog", 2)
            .with_synonym("andiron", 1)
            .with_pointer("ENG20-00001740-n", "hypernym"),
    ]
}

#[test]
fn test_open_and_query() {
    let file = write_jsonl(&taxonomy());
    let (wordnet, diagnostics) = WordNet::open(file.path(), EngineConfig::default()).unwrap();

    assert_eq!(diagnostics.warnings().count(), 0);
    assert_eq!(wordnet.by_literal("dog", N).len(), 2);
    assert_eq!(
        wordnet.by_sense("dog", 2, N).map(|s| s.id.as_str()),
        Some("ENG20-03575240-n")
    );
    assert_eq!(
        wordnet.relation_targets("ENG20-00002086-n", N, "hyponym"),
        vec!["ENG20-02084071-n", "ENG20-02121620-n"]
    );

    let animate: BTreeSet<&str> = ["ENG20-00002086-n"].into_iter().collect();
    assert_eq!(
        wordnet.is_literal_connected("dog", N, "hypernym", &animate).unwrap(),
        Some(("ENG20-02084071-n", "ENG20-00002086-n"))
    );

    let scores = wordnet.similarity("dog", "cat", N, "hypernym", false).unwrap();
    assert_eq!(scores.len(), 2);
    assert!(scores[0].score > scores[1].score);

    let stats = wordnet.stats();
    assert_eq!(stats[0].synsets, 5);
    assert_eq!(stats[0].words, 7);
    assert_eq!(stats[0].word_senses, 8);
}

#[test]
fn test_feature_compatibility_from_files() {
    let file = write_jsonl(&taxonomy());
    let (wordnet, _) = WordNet::open(file.path(), EngineConfig::default()).unwrap();

    let mut features_file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(features_file, r#"{{"animate": ["ENG20-00002086-n"], "nothing": []}}"#).unwrap();
    let features = FeatureMap::load_from_file(features_file.path()).unwrap();

    let query = wordnet.query();
    assert_eq!(
        features.is_literal_compatible(&query, "cat", N, "animate").unwrap(),
        Some(("ENG20-02121620-n", "ENG20-00002086-n"))
    );
    assert_eq!(
        features.is_literal_compatible(&query, "andiron", N, "animate").unwrap(),
        None
    );
    assert_eq!(
        features.is_literal_compatible(&query, "cat", N, "nothing").unwrap(),
        None
    );
}

#[test]
fn test_stored_edges_round_trip_as_a_set() {
    // The inverse of a self-inverse relation already present is added again,
    // leaving duplicate edges in the adjacency list.
    let records = vec![
        SynsetRecord::new("n1", "n")
            .with_synonym("near", 1)
            .with_pointer("n2", "near_antonym"),
        SynsetRecord::new("n2", "n")
            .with_synonym("close", 1)
            .with_pointer("n1", "near_antonym"),
    ];
    let file = write_jsonl(&records);
    let (wordnet, _) = WordNet::open(file.path(), EngineConfig::default()).unwrap();

    let stored = wordnet.by_id("n2", N).unwrap();
    assert_eq!(stored.pointers.len(), 2);

    // Write every stored synset back out and load the result again.
    let written: Vec<SynsetRecord> = wordnet
        .index()
        .partition(N)
        .synsets()
        .map(SynsetRecord::from)
        .collect();
    let second = write_jsonl(&written);
    let (reloaded, _) = WordNet::open(second.path(), EngineConfig::default()).unwrap();

    for id in ["n1", "n2"] {
        let original: BTreeSet<Pointer> =
            wordnet.by_id(id, N).unwrap().pointers.iter().cloned().collect();
        let serialized: BTreeSet<Pointer> = written
            .iter()
            .find(|r| r.id == id)
            .unwrap()
            .pointers
            .iter()
            .cloned()
            .collect();
        assert_eq!(original, serialized);
        assert_eq!(
            written.iter().find(|r| r.id == id).unwrap().pointers.len(),
            serialized.len()
        );

        let reloaded_edges: BTreeSet<Pointer> =
            reloaded.by_id(id, N).unwrap().pointers.iter().cloned().collect();
        assert_eq!(original, reloaded_edges);
    }
}

#[test]
fn test_malformed_line_aborts_loading() {
    let mut file = Builder::new().suffix(".jsonl").tempfile().unwrap();
    writeln!(file, r#"{{"id": "n1", "pos": "n"}}"#).unwrap();
    writeln!(file).unwrap();
    writeln!(file, "{{not json").unwrap();
    file.flush().unwrap();

    let err = WordNet::open(file.path(), EngineConfig::default()).unwrap_err();
    assert!(matches!(err, WordNetError::Ingest { line: 3, .. }));
}

#[test]
fn test_missing_file() {
    let err = WordNet::open("/nonexistent/wordnet.jsonl", EngineConfig::default()).unwrap_err();
    assert!(matches!(err, WordNetError::Io(_)));
}

#[test]
fn test_diagnostics_carry_input_lines() {
    let mut records = taxonomy();
    records.push(SynsetRecord::new("ENG20-02084071-n", "n").with_synonym("hound", 1));
    let file = write_jsonl(&records);
    let (_, diagnostics) = WordNet::open(file.path(), EngineConfig::default()).unwrap();

    let duplicate = diagnostics.of_kind(DiagnosticKind::DuplicateId).next().unwrap();
    assert_eq!(
        duplicate.to_string(),
        "Warning W01: synset with this id (ENG20-02084071-n) already exists (input line 6)"
    );
}
