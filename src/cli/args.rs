//! Command line argument parsing for the wnquery CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::synset::PartOfSpeech;

/// wnquery - query a WordNet-style lexical database
#[derive(Parser, Debug, Clone)]
#[command(name = "wnquery")]
#[command(about = "Query a WordNet-style lexical database")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WnQueryArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// WordNet file, one JSON synset record per line
    #[arg(value_name = "WORDNET")]
    pub wordnet: PathBuf,

    /// Semantic feature file (JSON object of feature name to synset ids)
    #[arg(long, value_name = "FEATURE_FILE", env = "WNQUERY_FEATURES")]
    pub features: Option<PathBuf>,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WNQUERY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WnQueryArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the synset with the given id
    Id(IdArgs),

    /// Show every synset containing a literal
    Literal(LiteralArgs),

    /// Show the synset of a literal with a given sense number
    Sense(SenseArgs),

    /// List the immediate targets of a relation
    Relations(RelationArgs),

    /// List the relations of every sense of a literal, or the targets of one relation
    #[command(name = "literal-relations")]
    LiteralRelations(LiteralRelationsArgs),

    /// Trace a relation recursively from a synset
    Trace(TraceArgs),

    /// Check whether a synset reaches any of the target synsets
    Connected(ConnectedArgs),

    /// Check whether any sense of a literal reaches any of the target synsets
    #[command(name = "literal-connected")]
    LiteralConnected(LiteralConnectedArgs),

    /// Check whether a synset (or one of its hyponyms) contains a literal
    Compatible(CompatibleArgs),

    /// Check whether two literals share a synset
    Synonyms(SynonymsArgs),

    /// Leacock-Chodorow similarity of two literals or synsets
    Similarity(SimilarityArgs),

    /// Length of the longest relation path starting at a synset
    #[command(name = "max-depth")]
    MaxDepth(RelationArgs),

    /// Number of distinct synsets reachable from a synset
    #[command(name = "subgraph-size")]
    SubgraphSize(RelationArgs),

    /// List the synsets of a semantic feature
    Feature(FeatureArgs),

    /// Check whether a literal is compatible with a semantic feature
    #[command(name = "feature-compatible")]
    FeatureCompatible(FeatureCompatibleArgs),

    /// Show partition statistics
    Stats,

    /// Show the diagnostics reported while loading
    Diagnostics(DiagnosticsArgs),

    /// Write the whole wordnet as VisDic XML
    Export,
}

/// Arguments for looking up a synset by id
#[derive(Args, Debug, Clone)]
pub struct IdArgs {
    /// Synset id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Part of speech (n, v, a, b)
    #[arg(value_name = "POS")]
    pub pos: PartOfSpeech,

    /// Write the synset as VisDic XML
    #[arg(long)]
    pub xml: bool,
}

/// Arguments for looking up a literal
#[derive(Args, Debug, Clone)]
pub struct LiteralArgs {
    #[arg(value_name = "LITERAL")]
    pub literal: String,

    /// Part of speech (n, v, a, b); all partitions when omitted
    #[arg(value_name = "POS")]
    pub pos: Option<PartOfSpeech>,
}

/// Arguments for looking up a word sense
#[derive(Args, Debug, Clone)]
pub struct SenseArgs {
    #[arg(value_name = "LITERAL")]
    pub literal: String,

    /// Sense number
    #[arg(value_name = "SENSE")]
    pub sense: u32,

    /// Part of speech (n, v, a, b)
    #[arg(value_name = "POS")]
    pub pos: PartOfSpeech,
}

/// A synset, its partition and a relation
#[derive(Args, Debug, Clone)]
pub struct RelationArgs {
    /// Synset id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Part of speech (n, v, a, b)
    #[arg(value_name = "POS")]
    pub pos: PartOfSpeech,

    /// Relation name
    #[arg(value_name = "RELATION")]
    pub relation: String,
}

/// Arguments for tracing a relation
#[derive(Args, Debug, Clone)]
pub struct TraceArgs {
    #[command(flatten)]
    pub target: RelationArgs,

    /// Print each synset once, in id order
    #[arg(long, conflicts_with = "levels")]
    pub unique: bool,

    /// Indent each synset by its distance from the start
    #[arg(long)]
    pub levels: bool,

    /// Treat ID as a literal and trace from each of its senses
    #[arg(long)]
    pub literal: bool,
}

/// Arguments for listing the relations of a literal
#[derive(Args, Debug, Clone)]
pub struct LiteralRelationsArgs {
    #[arg(value_name = "LITERAL")]
    pub literal: String,

    /// Part of speech (n, v, a, b)
    #[arg(value_name = "POS")]
    pub pos: PartOfSpeech,

    /// Relation whose targets are listed
    #[arg(value_name = "RELATION")]
    pub relation: Option<String>,
}

/// Arguments for checking connectivity of a synset
#[derive(Args, Debug, Clone)]
pub struct ConnectedArgs {
    #[command(flatten)]
    pub source: RelationArgs,

    /// Target synset ids
    #[arg(value_name = "TARGET", required = true, num_args = 1..)]
    pub targets: Vec<String>,
}

/// Arguments for checking connectivity of a literal
#[derive(Args, Debug, Clone)]
pub struct LiteralConnectedArgs {
    #[arg(value_name = "LITERAL")]
    pub literal: String,

    /// Part of speech (n, v, a, b)
    #[arg(value_name = "POS")]
    pub pos: PartOfSpeech,

    /// Relation name
    #[arg(value_name = "RELATION")]
    pub relation: String,

    /// Target synset ids
    #[arg(value_name = "TARGET", required = true, num_args = 1..)]
    pub targets: Vec<String>,
}

/// Arguments for checking literal compatibility
#[derive(Args, Debug, Clone)]
pub struct CompatibleArgs {
    #[arg(value_name = "LITERAL")]
    pub literal: String,

    /// Part of speech (n, v, a, b)
    #[arg(value_name = "POS")]
    pub pos: PartOfSpeech,

    /// Synset id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Also search the hyponyms of the synset
    #[arg(long)]
    pub hyponyms: bool,
}

/// Arguments for checking synonymy
#[derive(Args, Debug, Clone)]
pub struct SynonymsArgs {
    #[arg(value_name = "LITERAL1")]
    pub literal1: String,

    #[arg(value_name = "LITERAL2")]
    pub literal2: String,

    /// Part of speech (n, v, a, b)
    #[arg(value_name = "POS")]
    pub pos: PartOfSpeech,
}

/// Arguments for similarity scoring
#[derive(Args, Debug, Clone)]
pub struct SimilarityArgs {
    /// First literal, or synset id with --ids
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second literal, or synset id with --ids
    #[arg(value_name = "SECOND")]
    pub second: String,

    /// Part of speech (n, v, a, b)
    #[arg(value_name = "POS")]
    pub pos: PartOfSpeech,

    /// Relation defining the taxonomy
    #[arg(short, long, default_value = "hypernym")]
    pub relation: String,

    /// Join unconnected hierarchies under an artificial top node
    #[arg(long)]
    pub add_top: bool,

    /// Compare two synset ids instead of two literals
    #[arg(long)]
    pub ids: bool,

    /// Keep only the last sense pair of each distinct score
    #[arg(long, conflicts_with = "ids")]
    pub collapse: bool,
}

/// Arguments for listing a feature
#[derive(Args, Debug, Clone)]
pub struct FeatureArgs {
    #[arg(value_name = "FEATURE")]
    pub feature: String,
}

/// Arguments for checking feature compatibility
#[derive(Args, Debug, Clone)]
pub struct FeatureCompatibleArgs {
    #[arg(value_name = "LITERAL")]
    pub literal: String,

    /// Part of speech (n, v, a, b)
    #[arg(value_name = "POS")]
    pub pos: PartOfSpeech,

    #[arg(value_name = "FEATURE")]
    pub feature: String,
}

/// Arguments for the diagnostics report
#[derive(Args, Debug, Clone)]
pub struct DiagnosticsArgs {
    /// Leave out informational entries
    #[arg(long)]
    pub warnings_only: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_command() {
        let args = WnQueryArgs::try_parse_from([
            "wnquery",
            "wn.jsonl",
            "trace",
            "ENG20-00001740-n",
            "n",
            "hyponym",
            "--levels",
        ])
        .unwrap();

        assert_eq!(args.wordnet, PathBuf::from("wn.jsonl"));
        if let Command::Trace(trace_args) = args.command {
            assert_eq!(trace_args.target.id, "ENG20-00001740-n");
            assert_eq!(trace_args.target.pos, PartOfSpeech::Noun);
            assert_eq!(trace_args.target.relation, "hyponym");
            assert!(trace_args.levels);
            assert!(!trace_args.unique);
            assert!(!trace_args.literal);
        } else {
            panic!("Expected Trace command");
        }
    }

    #[test]
    fn test_literal_relations_command() {
        let args =
            WnQueryArgs::try_parse_from(["wnquery", "wn.jsonl", "literal-relations", "dog", "n"])
                .unwrap();
        if let Command::LiteralRelations(relation_args) = args.command {
            assert_eq!(relation_args.literal, "dog");
            assert_eq!(relation_args.relation, None);
        } else {
            panic!("Expected LiteralRelations command");
        }

        let args = WnQueryArgs::try_parse_from([
            "wnquery",
            "wn.jsonl",
            "literal-relations",
            "dog",
            "n",
            "hypernym",
        ])
        .unwrap();
        if let Command::LiteralRelations(relation_args) = args.command {
            assert_eq!(relation_args.relation.as_deref(), Some("hypernym"));
        } else {
            panic!("Expected LiteralRelations command");
        }
    }

    #[test]
    fn test_connected_command() {
        let args = WnQueryArgs::try_parse_from([
            "wnquery", "wn.jsonl", "connected", "n4", "n", "hypernym", "n1", "n2",
        ])
        .unwrap();

        if let Command::Connected(connected_args) = args.command {
            assert_eq!(connected_args.source.id, "n4");
            assert_eq!(connected_args.targets, vec!["n1", "n2"]);
        } else {
            panic!("Expected Connected command");
        }

        assert!(
            WnQueryArgs::try_parse_from(["wnquery", "wn.jsonl", "connected", "n4", "n", "hypernym"])
                .is_err()
        );
    }

    #[test]
    fn test_similarity_command() {
        let args = WnQueryArgs::try_parse_from([
            "wnquery",
            "--features",
            "features.json",
            "wn.jsonl",
            "similarity",
            "dog",
            "cat",
            "n",
            "--add-top",
        ])
        .unwrap();

        assert_eq!(args.features, Some(PathBuf::from("features.json")));
        if let Command::Similarity(similarity_args) = args.command {
            assert_eq!(similarity_args.first, "dog");
            assert_eq!(similarity_args.relation, "hypernym");
            assert!(similarity_args.add_top);
            assert!(!similarity_args.ids);
        } else {
            panic!("Expected Similarity command");
        }
    }

    #[test]
    fn test_invalid_part_of_speech() {
        assert!(WnQueryArgs::try_parse_from(["wnquery", "wn.jsonl", "id", "n1", "x"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = WnQueryArgs::try_parse_from(["wnquery", "wn.jsonl", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = WnQueryArgs::try_parse_from(["wnquery", "-vv", "wn.jsonl", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = WnQueryArgs::try_parse_from(["wnquery", "--quiet", "wn.jsonl", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            WnQueryArgs::try_parse_from(["wnquery", "--format", "json", "wn.jsonl", "stats"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
