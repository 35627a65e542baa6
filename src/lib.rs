// Lib file to expose modules for testing and external usage.
// This file serves as the root for the library crate.

/// Module containing the analysis engine.
/// This includes the `BzlmodAudit` struct and the `AnalysisResult` it
/// produces.
pub mod analyzer;

/// Module containing the classifier.
/// This assigns every extracted dependency to exactly one migration bucket.
pub mod classifier;

/// Module containing the declaration extractor.
/// This pulls the ordered dependency list out of repository_locations.bzl.
pub mod extractor;

/// Module containing the migration-set loader for MODULE.bazel.
pub mod manifest;

/// Module containing the patch scanner.
/// This walks repositories.bzl with a small state machine to find fetch
/// calls that carry patch directives.
pub mod patches;

/// Module containing the recommendation generator.
pub mod recommend;

/// Module containing the static registry knowledge base.
pub mod registry;
