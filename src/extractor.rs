use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// Matches a top-level dependency declaration in repository_locations.bzl.
    /// Every external dependency is declared as `<name> = dict(...)`.
    static ref DECLARATION: Regex = Regex::new(r"(\w+)\s*=\s*dict\(").unwrap();

    /// Symbols that match the declaration pattern but are not dependencies.
    /// These are schema/spec markers living in the same file.
    static ref NON_DEPENDENCY_SYMBOLS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("PROTOC_VERSIONS");
        s.insert("REPOSITORY_LOCATIONS_SPEC");
        s
    };
}

/// Extracts the ordered set of dependency names from repository_locations.bzl
/// source text.
///
/// Order is first occurrence in the source; later repeats of the same name are
/// ignored. An empty or malformed source simply yields an empty list, since
/// absence of matches is not an error.
pub fn extract_dependencies(repo_locations: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut deps = Vec::new();

    for cap in DECLARATION.captures_iter(repo_locations) {
        let name = &cap[1];
        if NON_DEPENDENCY_SYMBOLS.contains(name) {
            continue;
        }
        if seen.insert(name.to_string()) {
            deps.push(name.to_string());
        }
    }

    deps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_declaration_order() {
        let source = r#"
REPOSITORY_LOCATIONS_SPEC = dict(
    com_google_absl = dict(
        project_name = "abseil-cpp",
    ),
    boringssl = dict(
        project_name = "BoringSSL",
    ),
)
"#;
        let deps = extract_dependencies(source);
        assert_eq!(deps, vec!["com_google_absl", "boringssl"]);
    }

    #[test]
    fn test_excludes_sentinel_symbols() {
        let source = "PROTOC_VERSIONS = dict()\nzlib = dict()\n";
        let deps = extract_dependencies(source);
        assert_eq!(deps, vec!["zlib"]);
    }

    #[test]
    fn test_deduplicates_keeping_first_occurrence() {
        let source = "foo = dict()\nbar = dict()\nfoo = dict()\n";
        let deps = extract_dependencies(source);
        assert_eq!(deps, vec!["foo", "bar"]);
    }

    #[test]
    fn test_empty_source_yields_empty_list() {
        assert!(extract_dependencies("").is_empty());
        assert!(extract_dependencies("not a bzl file at all").is_empty());
    }
}
