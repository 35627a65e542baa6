use crate::classifier::{classify, Category, Classification, PatchHandling};
use crate::extractor::extract_dependencies;
use crate::manifest::load_migrated_set;
use crate::patches::scan_patched_dependencies;
use crate::recommend::{recommend, Recommendations};
use crate::registry::KnowledgeBase;
use serde::Serialize;

/// Full result of one analysis run.
/// This struct is serialized to JSON if requested.
#[derive(Serialize)]
pub struct AnalysisResult {
    /// Summary statistics of the run.
    pub summary: AnalysisSummary,
    /// Dependencies already pulled via the module manifest.
    pub migrated: Vec<Classification>,
    /// Dependencies published in the registry but still fetched the legacy
    /// way.
    pub available_not_migrated: Vec<Classification>,
    /// Dependencies worth submitting to the registry.
    pub should_add_to_registry: Vec<Classification>,
    /// Dependencies staying on the legacy fetch path, with reasons.
    pub keep_external: Vec<Classification>,
    /// Names of dependencies whose fetch call carries a patch directive.
    pub patched: Vec<String>,
    /// Prioritized action plan derived from the buckets above.
    pub recommendations: Recommendations,
}

/// Summary counters for the run.
#[derive(Serialize)]
pub struct AnalysisSummary {
    /// Total dependencies extracted from the declaration source.
    pub total_dependencies: usize,
    /// How many of them carry patches.
    pub patched_count: usize,
    /// Size of each classification bucket.
    pub migrated_count: usize,
    pub available_not_migrated_count: usize,
    pub should_add_count: usize,
    pub keep_external_count: usize,
}

/// The analysis engine.
///
/// One engine, parameterized by the patch-handling mode and a knowledge-base
/// snapshot, serves every report variant.
pub struct BzlmodAudit {
    /// How patched dependencies interact with the available bucket.
    pub patch_handling: PatchHandling,
    /// Registry tables used for this run. Immutable once constructed.
    pub knowledge: KnowledgeBase,
}

impl BzlmodAudit {
    /// Creates an engine over the shipped registry tables.
    pub fn new(patch_handling: PatchHandling) -> Self {
        Self::with_knowledge(patch_handling, KnowledgeBase::builtin())
    }

    /// Creates an engine over caller-supplied registry tables.
    pub fn with_knowledge(patch_handling: PatchHandling, knowledge: KnowledgeBase) -> Self {
        Self {
            patch_handling,
            knowledge,
        }
    }

    /// Runs the analysis over the three input texts.
    ///
    /// This method:
    /// 1. Extracts the ordered dependency list from the declaration source.
    /// 2. Scans the fetch-macro source for patch directives.
    /// 3. Loads the migrated set from the module manifest.
    /// 4. Classifies every dependency into exactly one bucket.
    /// 5. Derives the recommendation plan from the buckets.
    ///
    /// Pure in-memory text processing: no I/O, no shared state, and identical
    /// inputs always produce an identical result. Bucket lists are sorted by
    /// name so set iteration order never leaks into the output.
    pub fn analyze(
        &self,
        repo_locations: &str,
        repositories: &str,
        module_bazel: &str,
    ) -> AnalysisResult {
        let deps = extract_dependencies(repo_locations);
        let patched = scan_patched_dependencies(repositories);
        let migrated_set = load_migrated_set(module_bazel);

        let classifications = classify(
            &deps,
            &patched,
            &migrated_set,
            &self.knowledge,
            self.patch_handling,
        );

        // Partition into the four buckets.
        let mut migrated = Vec::new();
        let mut available_not_migrated = Vec::new();
        let mut should_add_to_registry = Vec::new();
        let mut keep_external = Vec::new();
        for c in classifications {
            match c.category {
                Category::Migrated => migrated.push(c),
                Category::AvailableNotMigrated => available_not_migrated.push(c),
                Category::ShouldAddToRegistry => should_add_to_registry.push(c),
                Category::KeepExternal => keep_external.push(c),
            }
        }
        for bucket in [
            &mut migrated,
            &mut available_not_migrated,
            &mut should_add_to_registry,
            &mut keep_external,
        ] {
            bucket.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut patched_sorted: Vec<String> = patched.iter().cloned().collect();
        patched_sorted.sort();

        // The plan is derived from the already-sorted buckets, so it is
        // deterministic too.
        let mut ordered = Vec::new();
        ordered.extend(available_not_migrated.iter().cloned());
        ordered.extend(should_add_to_registry.iter().cloned());
        let recommendations = recommend(&ordered, &patched, &self.knowledge.submission_priority);

        AnalysisResult {
            summary: AnalysisSummary {
                total_dependencies: deps.len(),
                patched_count: patched_sorted.len(),
                migrated_count: migrated.len(),
                available_not_migrated_count: available_not_migrated.len(),
                should_add_count: should_add_to_registry.len(),
                keep_external_count: keep_external.len(),
            },
            migrated,
            available_not_migrated,
            should_add_to_registry,
            keep_external,
            patched: patched_sorted,
            recommendations,
        }
    }
}
