pub mod analyzer;
pub mod classifier;
pub mod extractor;
pub mod manifest;
pub mod patches;
pub mod recommend;
pub mod registry;

use crate::analyzer::BzlmodAudit;
use crate::classifier::PatchHandling;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::PathBuf;

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the repository root to analyze.
    /// The three inputs are read from fixed locations under it:
    /// bazel/repository_locations.bzl, bazel/repositories.bzl, MODULE.bazel.
    path: PathBuf,

    /// Keep patched dependencies in the "available, not migrated" bucket.
    /// By default a patched dependency is never considered migration-ready;
    /// with this flag it classifies as available but carries an explicit
    /// "has patches" reason.
    #[arg(long)]
    include_patched: bool,

    /// Output raw JSON.
    /// If true, the output will be in JSON format for machine parsing.
    /// This is useful for integrating with other tools or CI/CD pipelines.
    #[arg(long)]
    json: bool,
}

/// Main entry point of the application.
///
/// This function handles argument parsing, reading the three input files,
/// execution of the analysis, and output formatting. Any missing input file
/// aborts the run; no partial report is produced.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Read the three input texts fully into memory up front. A failure here
    // is fatal: the analysis needs all three sources.
    let repo_locations_path = cli.path.join("bazel").join("repository_locations.bzl");
    let repositories_path = cli.path.join("bazel").join("repositories.bzl");
    let module_bazel_path = cli.path.join("MODULE.bazel");

    let repo_locations = fs::read_to_string(&repo_locations_path)
        .with_context(|| format!("failed to read {}", repo_locations_path.display()))?;
    let repositories = fs::read_to_string(&repositories_path)
        .with_context(|| format!("failed to read {}", repositories_path.display()))?;
    let module_bazel = fs::read_to_string(&module_bazel_path)
        .with_context(|| format!("failed to read {}", module_bazel_path.display()))?;

    // Select the classification mode from the CLI flag.
    let mode = if cli.include_patched {
        PatchHandling::IncludeWithReason
    } else {
        PatchHandling::ExcludeFromAvailable
    };

    // Run the engine over the in-memory texts. The core is pure; all I/O
    // stays in this function.
    let audit = BzlmodAudit::new(mode);
    let result = audit.analyze(&repo_locations, &repositories, &module_bazel);

    if cli.json {
        // Serialize the result struct to a pretty-printed JSON string.
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    // Human-readable report, one section per bucket plus the plan.
    println!("\n{}", "Bzlmod Migration Analysis".bold());
    println!("=========================\n");

    println!("Summary:");
    println!(
        " * Total dependencies: {}",
        result.summary.total_dependencies
    );
    println!(" * With patches: {}", result.summary.patched_count);
    println!(" * Migrated to bazel_dep: {}", result.summary.migrated_count);
    println!(
        " * Available in BCR, not migrated: {}",
        result.summary.available_not_migrated_count
    );
    println!(
        " * Should be added to BCR: {}",
        result.summary.should_add_count
    );
    println!(
        " * Keep in extensions: {}",
        result.summary.keep_external_count
    );

    if !result.migrated.is_empty() {
        println!("\n{}", "Migrated to MODULE.bazel".green().bold());
        println!("========================");
        for c in &result.migrated {
            match &c.registry_name {
                Some(bcr) => println!(" - {} -> {}", c.name, bcr),
                None => println!(" - {}", c.name),
            }
        }
    }

    if !result.available_not_migrated.is_empty() {
        println!("\n{}", "Available in BCR, not yet migrated".yellow().bold());
        println!("==================================");
        for c in &result.available_not_migrated {
            let bcr = c.registry_name.as_deref().unwrap_or(&c.name);
            match &c.reason {
                Some(reason) => println!(" - {} -> {} ({})", c.name, bcr, reason),
                None => println!(" - {} -> {}", c.name, bcr),
            }
        }
    }

    if !result.should_add_to_registry.is_empty() {
        println!("\n{}", "Should be added to BCR".cyan().bold());
        println!("======================");
        for c in &result.should_add_to_registry {
            let suggested = c.registry_name.as_deref().unwrap_or(&c.name);
            println!(" - {} (suggested name: {})", c.name, suggested);
        }
    }

    if !result.keep_external.is_empty() {
        println!("\n{}", "Keep in extensions".red().bold());
        println!("==================");
        for c in &result.keep_external {
            let reason = c.reason.as_deref().unwrap_or("");
            println!(" - {} ({})", c.name, reason);
        }
    }

    println!("\n{}", "Recommendations".bold());
    println!("===============");
    println!("1. Immediate: migrate these clean dependencies to bazel_dep:");
    if result.recommendations.immediate.is_empty() {
        println!("   (none - all available BCR modules have been migrated)");
    } else {
        for action in &result.recommendations.immediate {
            println!("   - {} -> {}", action.name, action.registry_name);
        }
    }
    println!("2. Medium-term: submit these libraries to BCR:");
    if result.recommendations.medium_term.is_empty() {
        println!("   (none)");
    } else {
        for action in &result.recommendations.medium_term {
            println!("   - {} -> {}", action.name, action.registry_name);
        }
    }
    println!("3. Long-term:");
    for line in &result.recommendations.long_term {
        println!("   - {}", line);
    }

    Ok(())
}
