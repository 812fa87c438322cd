//! Command implementations for the wnquery CLI.

use std::collections::BTreeSet;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::{EngineConfig, WordNet};
use crate::error::{Result, WordNetError};
use crate::features::FeatureMap;
use crate::index::Diagnostics;
use crate::similarity::{SensePairScore, collapse_by_score};
use crate::synset::{PartOfSpeech, Synset};

/// Execute a CLI command.
pub fn execute_command(args: WnQueryArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            EngineConfig::load_from_file(path)?
        }
        None => EngineConfig::default(),
    };

    let (wordnet, diagnostics) = WordNet::open(&args.wordnet, config)?;

    let features = match &args.features {
        Some(path) => {
            let features = FeatureMap::load_from_file(path)?;
            info!(
                "Loaded {} semantic features ({} pairs) from {}",
                features.len(),
                features.pair_count(),
                path.display()
            );
            Some(features)
        }
        None => None,
    };

    let result = run_command(&args.command, &wordnet, features.as_ref(), &diagnostics)?;
    output_result(&result, &args)
}

/// Run one command against a loaded wordnet.
pub fn run_command(
    command: &Command,
    wordnet: &WordNet,
    features: Option<&FeatureMap>,
    diagnostics: &Diagnostics,
) -> Result<CommandOutput> {
    match command {
        Command::Id(args) => show_id(args, wordnet),
        Command::Literal(args) => Ok(synsets(match args.pos {
            Some(pos) => wordnet.by_literal(&args.literal, pos),
            None => wordnet
                .index()
                .by_literal_in(&args.literal, &PartOfSpeech::ALL),
        })),
        Command::Sense(args) => Ok(synsets(
            wordnet.by_sense(&args.literal, args.sense, args.pos).into_iter().collect(),
        )),
        Command::Relations(args) => {
            let targets = wordnet.relation_targets(&args.id, args.pos, &args.relation);
            Ok(entries(wordnet, args.pos, targets.into_iter().map(|id| (id, 0))))
        }
        Command::LiteralRelations(args) => Ok(literal_relations(args, wordnet)),
        Command::Trace(args) => trace(args, wordnet),
        Command::Connected(args) => {
            let targets: BTreeSet<&str> = args.targets.iter().map(String::as_str).collect();
            let source = &args.source;
            let found = wordnet.is_connected(&source.id, source.pos, &source.relation, &targets)?;
            Ok(connection(found.map(|target| (source.id.as_str(), target))))
        }
        Command::LiteralConnected(args) => {
            let targets: BTreeSet<&str> = args.targets.iter().map(String::as_str).collect();
            let found =
                wordnet.is_literal_connected(&args.literal, args.pos, &args.relation, &targets)?;
            Ok(connection(found))
        }
        Command::Compatible(args) => Ok(CommandOutput::Compatibility(Compatibility {
            compatible: wordnet.is_literal_compatible(
                &args.literal,
                args.pos,
                &args.id,
                args.hyponyms,
            )?,
        })),
        Command::Synonyms(args) => Ok(ids(
            wordnet
                .are_synonyms(&args.literal1, &args.literal2, args.pos)
                .into_iter()
                .collect(),
        )),
        Command::Similarity(args) => similarity(args, wordnet),
        Command::MaxDepth(args) => Ok(CommandOutput::Count(Count {
            label: "Max depth",
            value: wordnet.max_depth(&args.id, args.pos, &args.relation)?,
        })),
        Command::SubgraphSize(args) => Ok(CommandOutput::Count(Count {
            label: "Subgraph size",
            value: wordnet.sub_graph_size(&args.id, args.pos, &args.relation)?,
        })),
        Command::Feature(args) => {
            let features = require_features(features)?;
            Ok(CommandOutput::Ids(IdList {
                ids: features
                    .look_up(&args.feature)
                    .map(|ids| ids.iter().cloned().collect())
                    .unwrap_or_default(),
            }))
        }
        Command::FeatureCompatible(args) => {
            let features = require_features(features)?;
            let found = features.is_literal_compatible(
                &wordnet.query(),
                &args.literal,
                args.pos,
                &args.feature,
            )?;
            Ok(connection(found))
        }
        Command::Stats => Ok(CommandOutput::Stats(StatsReport {
            partitions: wordnet.stats(),
        })),
        Command::Diagnostics(args) => Ok(CommandOutput::Diagnostics(DiagnosticsReport {
            diagnostics: diagnostics
                .iter()
                .filter(|d| !args.warnings_only || d.is_warning())
                .cloned()
                .collect(),
        })),
        Command::Export => {
            let mut buffer = Vec::new();
            wordnet.write_visdic_xml(&mut buffer)?;
            let xml = String::from_utf8(buffer).map_err(|e| WordNetError::other(e.to_string()))?;
            Ok(CommandOutput::Xml(XmlOutput {
                xml: xml.trim_end().to_string(),
            }))
        }
    }
}

fn show_id(args: &IdArgs, wordnet: &WordNet) -> Result<CommandOutput> {
    let Some(synset) = wordnet.by_id(&args.id, args.pos) else {
        return Ok(synsets(Vec::new()));
    };
    if !args.xml {
        return Ok(synsets(vec![synset]));
    }

    let mut buffer = Vec::new();
    synset.write_visdic_xml(&mut buffer)?;
    let xml = String::from_utf8(buffer).map_err(|e| WordNetError::other(e.to_string()))?;
    Ok(CommandOutput::Xml(XmlOutput { xml }))
}

fn trace(args: &TraceArgs, wordnet: &WordNet) -> Result<CommandOutput> {
    let target = &args.target;
    let starts: Vec<&str> = if args.literal {
        wordnet
            .by_literal(&target.id, target.pos)
            .into_iter()
            .map(|synset| synset.id.as_str())
            .collect()
    } else {
        vec![target.id.as_str()]
    };

    let mut found = Vec::new();
    for start in starts {
        if args.levels {
            found.extend(wordnet.trace_levels(start, target.pos, &target.relation, 0)?);
        } else if args.unique {
            let unique = wordnet.trace_unique(start, target.pos, &target.relation)?;
            found.extend(unique.into_iter().map(|id| (id, 0)));
        } else {
            let trace = wordnet.trace(start, target.pos, &target.relation)?;
            found.extend(trace.into_iter().map(|id| (id, 0)));
        }
    }
    Ok(entries(wordnet, target.pos, found))
}

fn literal_relations(args: &LiteralRelationsArgs, wordnet: &WordNet) -> CommandOutput {
    let senses = wordnet
        .by_literal(&args.literal, args.pos)
        .into_iter()
        .map(|synset| {
            let (relations, targets) = match &args.relation {
                None => (
                    synset.relation_names().into_iter().map(str::to_string).collect(),
                    Vec::new(),
                ),
                Some(relation) => {
                    let targets = wordnet.relation_targets(&synset.id, args.pos, relation);
                    let targets = targets.into_iter().map(|id| (id, 1));
                    (Vec::new(), synset_entries(wordnet, args.pos, targets))
                }
            };
            SenseRelations {
                id: synset.id.clone(),
                summary: synset.summary(),
                relations,
                targets,
            }
        })
        .collect();
    CommandOutput::SenseRelations(SenseRelationsReport { senses })
}

fn similarity(args: &SimilarityArgs, wordnet: &WordNet) -> Result<CommandOutput> {
    let scores = if args.ids {
        let score = wordnet.sim(&args.first, &args.second, args.pos, &args.relation, args.add_top)?;
        vec![SensePairScore {
            score,
            id1: args.first.clone(),
            id2: args.second.clone(),
        }]
    } else {
        let scores =
            wordnet.similarity(&args.first, &args.second, args.pos, &args.relation, args.add_top)?;
        if args.collapse {
            collapse_by_score(&scores)
                .into_iter()
                .map(|(score, id1, id2)| SensePairScore { score, id1, id2 })
                .collect()
        } else {
            scores
        }
    };
    Ok(CommandOutput::Scores(ScoreList { scores }))
}

fn require_features(features: Option<&FeatureMap>) -> Result<&FeatureMap> {
    features.ok_or_else(|| WordNetError::config("no semantic feature file given (use --features)"))
}

fn synsets(found: Vec<&Synset>) -> CommandOutput {
    CommandOutput::Synsets(SynsetList {
        synsets: found.into_iter().cloned().collect(),
    })
}

fn synset_entries<'a, I>(wordnet: &WordNet, pos: PartOfSpeech, found: I) -> Vec<SynsetEntry>
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    found
        .into_iter()
        .map(|(id, level)| SynsetEntry {
            id: id.to_string(),
            level,
            summary: wordnet.by_id(id, pos).map(Synset::summary),
        })
        .collect()
}

fn entries<'a, I>(wordnet: &WordNet, pos: PartOfSpeech, found: I) -> CommandOutput
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    CommandOutput::Entries(EntryList {
        entries: synset_entries(wordnet, pos, found),
    })
}

fn ids(found: Vec<&str>) -> CommandOutput {
    CommandOutput::Ids(IdList {
        ids: found.into_iter().map(str::to_string).collect(),
    })
}

fn connection(found: Option<(&str, &str)>) -> CommandOutput {
    CommandOutput::Connection(Connection {
        connected: found.is_some(),
        source: found.map(|(source, _)| source.to_string()),
        target: found.map(|(_, target)| target.to_string()),
    })
}
