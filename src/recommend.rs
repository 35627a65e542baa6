use crate::classifier::{Category, Classification};
use serde::Serialize;
use std::collections::HashSet;

/// A single migration or submission step: move (or publish) `name` under
/// `registry_name`.
#[derive(Debug, Clone, Serialize)]
pub struct Action {
    pub name: String,
    pub registry_name: String,
}

/// Prioritized action plan derived from an existing classification. Nothing
/// here re-derives categories.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    /// Clean, registry-published dependencies ready to migrate now.
    pub immediate: Vec<Action>,
    /// Submission candidates worth sending to the registry, highest value
    /// first.
    pub medium_term: Vec<Action>,
    /// Standing process guidance, independent of this run's data.
    pub long_term: Vec<String>,
}

/// Process guidance that applies to every run.
const LONG_TERM_GUIDANCE: &[&str] = &[
    "Continue monitoring the registry for new modules",
    "Evaluate dependencies with patches for upstream fixes",
    "Keep project-specific dependencies in extensions",
];

/// Builds the action plan from a classification partition.
///
/// Immediate actions are the `AvailableNotMigrated` bucket minus anything in
/// the patched set. The classifier's default mode already keeps patched
/// dependencies out of that bucket, but the filter is applied here as well so
/// the plan stays correct under the mode that lets them through.
///
/// Medium-term actions are the `ShouldAddToRegistry` bucket filtered to and
/// ordered by the curated priority list.
pub fn recommend(
    classifications: &[Classification],
    patched: &HashSet<String>,
    submission_priority: &[String],
) -> Recommendations {
    let immediate = classifications
        .iter()
        .filter(|c| c.category == Category::AvailableNotMigrated)
        .filter(|c| !patched.contains(&c.name))
        .map(to_action)
        .collect();

    let candidates: Vec<&Classification> = classifications
        .iter()
        .filter(|c| c.category == Category::ShouldAddToRegistry)
        .collect();
    let medium_term = submission_priority
        .iter()
        .filter_map(|name| candidates.iter().find(|c| &c.name == name))
        .map(|c| to_action(c))
        .collect();

    Recommendations {
        immediate,
        medium_term,
        long_term: LONG_TERM_GUIDANCE.iter().map(|s| s.to_string()).collect(),
    }
}

fn to_action(c: &Classification) -> Action {
    Action {
        name: c.name.clone(),
        // Both source buckets always carry a registry name; the dependency's
        // own name is a serviceable fallback.
        registry_name: c.registry_name.clone().unwrap_or_else(|| c.name.clone()),
    }
}
