use crate::registry::KnowledgeBase;
use serde::Serialize;
use std::collections::HashSet;

/// Migration status buckets. Every extracted dependency lands in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Already pulled from the registry via the module manifest.
    Migrated,
    /// Published in the BCR but still fetched the legacy way.
    AvailableNotMigrated,
    /// General-purpose library worth submitting to the BCR.
    ShouldAddToRegistry,
    /// Stays on the legacy fetch path (patched, project-specific, or
    /// complex/specialized).
    KeepExternal,
}

/// How patched dependencies interact with the `AvailableNotMigrated` bucket.
///
/// Maintainers disagree on whether a patched-but-published dependency counts
/// as "available", so both behaviors are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchHandling {
    /// A patched dependency never classifies as `AvailableNotMigrated`; it
    /// falls through to the later rules and typically ends up
    /// `KeepExternal` with a "has patches" reason.
    #[default]
    ExcludeFromAvailable,
    /// Patch status is ignored when matching the available-mapping; a
    /// patched dependency may classify as `AvailableNotMigrated` and then
    /// carries an explicit "has patches" reason.
    IncludeWithReason,
}

/// One dependency's migration verdict. Constructed only by [`classify`];
/// nothing mutates these afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// The dependency's legacy workspace name.
    pub name: String,
    /// Assigned bucket.
    pub category: Category,
    /// Resolved or suggested registry module name, when one is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_name: Option<String>,
    /// Why the dependency stays external (or, in
    /// [`PatchHandling::IncludeWithReason`] mode, why an available one is
    /// not ready to move).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Classifies every extracted dependency.
///
/// First match wins, and the rules are total:
/// 1. the name, or its mapped registry name, is already in the migrated set;
/// 2. the name is in the available-mapping (patch interaction per `mode`);
/// 3. the name is in the candidate-for-submission table;
/// 4. everything else keeps the legacy fetch path, with a composed reason.
///
/// Pure function of its inputs; the output is a strict partition of `deps`.
pub fn classify(
    deps: &[String],
    patched: &HashSet<String>,
    migrated: &HashSet<String>,
    kb: &KnowledgeBase,
    mode: PatchHandling,
) -> Vec<Classification> {
    deps.iter()
        .map(|dep| classify_one(dep, patched, migrated, kb, mode))
        .collect()
}

fn classify_one(
    name: &str,
    patched: &HashSet<String>,
    migrated: &HashSet<String>,
    kb: &KnowledgeBase,
    mode: PatchHandling,
) -> Classification {
    let mapped = kb.available.get(name);

    // Rule 1: already migrated, either under its own name or under the
    // registry name it maps to.
    if migrated.contains(name) || mapped.is_some_and(|bcr| migrated.contains(bcr)) {
        return Classification {
            name: name.to_string(),
            category: Category::Migrated,
            registry_name: mapped
                .cloned()
                .or_else(|| migrated.contains(name).then(|| name.to_string())),
            reason: None,
        };
    }

    // Rule 2: published in the registry, not yet moved over.
    if let Some(bcr_name) = mapped {
        let is_patched = patched.contains(name);
        match mode {
            PatchHandling::ExcludeFromAvailable if is_patched => {
                // Fall through; patched deps are not migration-ready.
            }
            _ => {
                return Classification {
                    name: name.to_string(),
                    category: Category::AvailableNotMigrated,
                    registry_name: Some(bcr_name.clone()),
                    reason: is_patched.then(|| "has patches".to_string()),
                };
            }
        }
    }

    // Rule 3: submission candidate, carrying the suggested registry name.
    if let Some(suggested) = kb.candidates.get(name) {
        return Classification {
            name: name.to_string(),
            category: Category::ShouldAddToRegistry,
            registry_name: Some(suggested.clone()),
            reason: None,
        };
    }

    // Rule 4: keep external. Compose the reason from whatever applies.
    let mut reasons = Vec::new();
    if patched.contains(name) {
        reasons.push("has patches");
    }
    if kb.project_specific.contains(name) {
        reasons.push("project-specific");
    }
    if reasons.is_empty() {
        reasons.push("complex/specialized");
    }

    Classification {
        name: name.to_string(),
        category: Category::KeepExternal,
        registry_name: None,
        reason: Some(reasons.join(", ")),
    }
}
