use bzlmod_audit::classifier::{classify, Category, PatchHandling};
use bzlmod_audit::patches::scan_patched_dependencies;
use bzlmod_audit::recommend::recommend;
use bzlmod_audit::registry::KnowledgeBase;
use std::collections::{HashMap, HashSet};

fn deps(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Small knowledge base for tests that need to control the tables directly.
fn kb(available: &[(&str, &str)], candidates: &[(&str, &str)], specific: &[&str]) -> KnowledgeBase {
    KnowledgeBase {
        available: available
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        candidates: candidates
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        project_specific: specific.iter().map(|s| s.to_string()).collect(),
        submission_priority: Vec::new(),
    }
}

#[test]
fn test_migrated_via_mapped_registry_name() {
    // Scenario: com_google_absl is not in MODULE.bazel under its legacy
    // name, but its BCR name abseil-cpp is.
    let deps = deps(&["com_google_absl", "foo_bar"]);
    let migrated = set(&["abseil-cpp"]);
    let result = classify(
        &deps,
        &HashSet::new(),
        &migrated,
        &KnowledgeBase::builtin(),
        PatchHandling::ExcludeFromAvailable,
    );

    let absl = &result[0];
    assert_eq!(absl.name, "com_google_absl");
    assert_eq!(absl.category, Category::Migrated);
    assert_eq!(absl.registry_name.as_deref(), Some("abseil-cpp"));

    // An unknown dependency always lands in KeepExternal with the default
    // reason.
    let foo = &result[1];
    assert_eq!(foo.category, Category::KeepExternal);
    assert_eq!(foo.reason.as_deref(), Some("complex/specialized"));
}

#[test]
fn test_patched_available_dependency_is_not_migration_ready() {
    // Scenario: zlib_ng is published in the BCR but its fetch call carries
    // a patch, so it must not classify as AvailableNotMigrated.
    let source = r#"
    external_http_archive(
        name = "zlib_ng",
        patches = ["p1.patch"],
    )
"#;
    let patched = scan_patched_dependencies(source);
    assert!(patched.contains("zlib_ng"));

    let knowledge = kb(&[("zlib_ng", "zlib-ng")], &[], &[]);
    let result = classify(
        &deps(&["zlib_ng"]),
        &patched,
        &HashSet::new(),
        &knowledge,
        PatchHandling::ExcludeFromAvailable,
    );

    assert_eq!(result[0].category, Category::KeepExternal);
    assert_eq!(result[0].reason.as_deref(), Some("has patches"));
}

#[test]
fn test_keep_external_reason_joins_all_applicable_parts() {
    // Scenario: envoy_examples is both patched and project-specific.
    let patched = set(&["envoy_examples"]);
    let result = classify(
        &deps(&["envoy_examples"]),
        &patched,
        &HashSet::new(),
        &KnowledgeBase::builtin(),
        PatchHandling::ExcludeFromAvailable,
    );

    assert_eq!(result[0].category, Category::KeepExternal);
    assert_eq!(
        result[0].reason.as_deref(),
        Some("has patches, project-specific")
    );
}

#[test]
fn test_submission_candidate_carries_suggested_name() {
    // Scenario: highway exists only in the candidate-for-submission table.
    let result = classify(
        &deps(&["highway"]),
        &HashSet::new(),
        &HashSet::new(),
        &KnowledgeBase::builtin(),
        PatchHandling::ExcludeFromAvailable,
    );

    assert_eq!(result[0].category, Category::ShouldAddToRegistry);
    assert_eq!(result[0].registry_name.as_deref(), Some("highway"));

    // It is on the curated priority list, so it shows up in the medium-term
    // plan too.
    let knowledge = KnowledgeBase::builtin();
    let plan = recommend(&result, &HashSet::new(), &knowledge.submission_priority);
    assert!(plan.medium_term.iter().any(|a| a.name == "highway"));
}

#[test]
fn test_non_priority_candidate_stays_out_of_medium_term_plan() {
    let result = classify(
        &deps(&["dragonbox"]),
        &HashSet::new(),
        &HashSet::new(),
        &KnowledgeBase::builtin(),
        PatchHandling::ExcludeFromAvailable,
    );
    assert_eq!(result[0].category, Category::ShouldAddToRegistry);

    let knowledge = KnowledgeBase::builtin();
    let plan = recommend(&result, &HashSet::new(), &knowledge.submission_priority);
    assert!(plan.medium_term.is_empty());
}

#[test]
fn test_migration_wins_over_patch_and_exclusion_status() {
    // Migrated status dominates: even a patched, project-specific dependency
    // counts as migrated once it appears in the manifest.
    let patched = set(&["envoy_toolshed"]);
    let migrated = set(&["envoy_toolshed"]);
    let result = classify(
        &deps(&["envoy_toolshed"]),
        &patched,
        &migrated,
        &KnowledgeBase::builtin(),
        PatchHandling::ExcludeFromAvailable,
    );
    assert_eq!(result[0].category, Category::Migrated);
}

#[test]
fn test_include_with_reason_mode_annotates_patched_available_deps() {
    let knowledge = kb(&[("zlib_ng", "zlib-ng")], &[], &[]);
    let patched = set(&["zlib_ng"]);

    let result = classify(
        &deps(&["zlib_ng"]),
        &patched,
        &HashSet::new(),
        &knowledge,
        PatchHandling::IncludeWithReason,
    );
    assert_eq!(result[0].category, Category::AvailableNotMigrated);
    assert_eq!(result[0].reason.as_deref(), Some("has patches"));

    // Even in this mode the immediate plan filters patched dependencies, so
    // the annotated entry never becomes an immediate action.
    let plan = recommend(&result, &patched, &[]);
    assert!(plan.immediate.is_empty());
}

#[test]
fn test_clean_available_dependency_has_no_reason_in_either_mode() {
    let knowledge = kb(&[("net_zlib", "zlib")], &[], &[]);
    for mode in [
        PatchHandling::ExcludeFromAvailable,
        PatchHandling::IncludeWithReason,
    ] {
        let result = classify(
            &deps(&["net_zlib"]),
            &HashSet::new(),
            &HashSet::new(),
            &knowledge,
            mode,
        );
        assert_eq!(result[0].category, Category::AvailableNotMigrated);
        assert_eq!(result[0].registry_name.as_deref(), Some("zlib"));
        assert!(result[0].reason.is_none());
    }
}

#[test]
fn test_classification_is_a_partition_of_the_input() {
    // A mix of every kind of dependency: each input name must appear exactly
    // once in the output, whatever its status.
    let names = [
        "com_google_absl",
        "net_zlib",
        "highway",
        "envoy_examples",
        "mystery_dep",
        "boringssl",
    ];
    let patched = set(&["envoy_examples", "boringssl"]);
    let migrated = set(&["abseil-cpp"]);

    let result = classify(
        &deps(&names),
        &patched,
        &migrated,
        &KnowledgeBase::builtin(),
        PatchHandling::ExcludeFromAvailable,
    );

    assert_eq!(result.len(), names.len());
    let mut produced: HashMap<String, usize> = HashMap::new();
    for c in &result {
        *produced.entry(c.name.clone()).or_insert(0) += 1;
    }
    for name in names {
        assert_eq!(produced.get(name), Some(&1), "{} not partitioned", name);
    }
}
