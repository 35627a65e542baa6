use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// Matches `name = "X"` declarations in MODULE.bazel. Both `module(...)`
    /// and `bazel_dep(...)` stanzas declare names this way.
    static ref MODULE_NAME: Regex = Regex::new(r#"name = "([^"]+)""#).unwrap();

    /// Placeholder entries that use the module-manifest syntax but are not
    /// external dependencies (pip requirement lockfiles and the like).
    static ref PSEUDO_ENTRIES: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("base_pip3");
        s.insert("dev_pip3");
        s.insert("fuzzing_pip3");
        s
    };
}

/// Prefix reserved for the project's own published artifacts; entries under
/// it are internal modules, not migrated third-party dependencies.
const INTERNAL_PREFIX: &str = "envoy";

/// Extracts the set of already-migrated dependency names from MODULE.bazel
/// source text, excluding internal modules and placeholder pseudo-entries.
pub fn load_migrated_set(module_bazel: &str) -> HashSet<String> {
    MODULE_NAME
        .captures_iter(module_bazel)
        .map(|cap| cap[1].to_string())
        .filter(|name| !name.starts_with(INTERNAL_PREFIX))
        .filter(|name| !PSEUDO_ENTRIES.contains(name.as_str()))
        .collect()
}
