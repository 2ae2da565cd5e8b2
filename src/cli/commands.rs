//! Command implementations for the typotrie CLI.

use std::time::Instant;

use anyhow::Context;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::cost::{KeyboardCostModel, UnitCostModel};
use crate::engine::TypoEngine;
use crate::levenshtein;
use crate::lexicon::Lexicon;
use crate::search;

/// Execute a CLI command.
pub fn execute_command(args: TypotrieArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Lookup(lookup_args) => run_lookup(lookup_args, &config, &args),
        Command::Distance(distance_args) => run_distance(distance_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Engine configuration from `--config`, or the defaults.
fn load_config(args: &TypotrieArgs) -> anyhow::Result<EngineConfig> {
    match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

fn load_dictionary(path: &std::path::Path) -> anyhow::Result<Lexicon<String>> {
    Lexicon::from_file(path)
        .with_context(|| format!("failed to load dictionary {}", path.display()))
}

/// Suggest dictionary entries for a typed string.
fn run_lookup(
    args: &LookupArgs,
    config: &EngineConfig,
    cli_args: &TypotrieArgs,
) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(max_distance) = args.max_distance {
        config.lookup.max_distance = max_distance;
    }
    if let Some(expected_distance) = args.expected_distance {
        config.lookup.expected_distance = expected_distance;
    }
    if let Some(min_probability) = args.min_probability {
        config.lookup.min_probability = min_probability;
    }
    if let Some(limit) = args.limit {
        config.lookup.max_results = Some(limit);
    }

    let lexicon = load_dictionary(&args.dictionary)?;
    let exact_match = lexicon.contains(&args.typed);
    let engine = TypoEngine::from_config(lexicon, &config)?;

    let start_time = Instant::now();
    let mut matches = engine.matches(&args.typed);
    let duration = start_time.elapsed();

    search::rank(&mut matches);
    if let Some(limit) = config.lookup.max_results {
        matches.truncate(limit);
    }

    let results = LookupResults {
        typed: args.typed.clone(),
        exact_match,
        suggestions: matches
            .into_iter()
            .map(|m| Suggestion {
                spelling: m.spelling,
                distance: m.distance,
                probability: m.probability,
            })
            .collect(),
        duration_us: duration.as_micros() as u64,
    };

    output_result(
        &format!("Lookup of '{}' in {}", args.typed, args.dictionary.display()),
        &results,
        cli_args,
    )?;
    Ok(())
}

/// Compute the distance between two strings.
fn run_distance(
    args: &DistanceArgs,
    config: &EngineConfig,
    cli_args: &TypotrieArgs,
) -> anyhow::Result<()> {
    let (cost_model, distance) = if args.unit {
        let costs = UnitCostModel {
            transpositions: args.transpositions,
        };
        let name = if args.transpositions { "unit+swap" } else { "unit" };
        (name, levenshtein::distance(&costs, &args.meant, &args.typed))
    } else {
        let costs = KeyboardCostModel::new(config.costs.clone());
        ("keyboard", levenshtein::distance(&costs, &args.meant, &args.typed))
    };

    let result = DistanceResult {
        meant: args.meant.clone(),
        typed: args.typed.clone(),
        cost_model: cost_model.to_string(),
        distance,
    };

    output_result("Typo distance", &result, cli_args)?;
    Ok(())
}

/// Show dictionary statistics.
fn show_stats(args: &StatsArgs, cli_args: &TypotrieArgs) -> anyhow::Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Gathering statistics for: {}", args.dictionary.display());
    }

    let start_time = Instant::now();
    let lexicon = load_dictionary(&args.dictionary)?;
    let build_ms = start_time.elapsed().as_millis() as u64;

    let structure = lexicon.structure();
    let total_characters: usize = lexicon.names().iter().map(|n| n.chars().count()).sum();
    let average_length = if lexicon.is_empty() {
        0.0
    } else {
        total_characters as f64 / lexicon.len() as f64
    };

    let stats = DictionaryStats {
        entries: lexicon.len(),
        trie_nodes: structure.node_count(),
        max_depth: structure.max_depth(),
        total_characters,
        average_length,
        build_ms,
    };

    output_result("Dictionary statistics", &stats, cli_args)?;
    Ok(())
}
