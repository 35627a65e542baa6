use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// How many lines past the call token we search for a name argument before
/// giving up on the call.
const NAME_LOOKAHEAD_LINES: usize = 4;

lazy_static! {
    /// Matches an explicit `name = "..."` keyword argument.
    static ref NAME_ARG: Regex = Regex::new(r#"name\s*=\s*["']([^"']+)["']"#).unwrap();

    /// Matches any quoted string literal on a line.
    static ref QUOTED_LITERAL: Regex = Regex::new(r#"["']([^"']+)["']"#).unwrap();
}

/// Scanner state. The scanner tracks exactly one active fetch call at a time;
/// nested or overlapping calls are unsupported.
#[derive(Debug, PartialEq)]
enum ScanState {
    /// Outside any fetch call.
    Idle,
    /// Inside a fetch call. The name is `None` when it could not be resolved
    /// within the lookahead window, in which case patch keywords inside the
    /// call are ignored rather than misattributed.
    InCall { active: Option<String> },
}

/// Scans repositories.bzl source text for `external_http_archive(` calls that
/// carry a patch directive, returning the set of patched dependency names.
///
/// A fetch call spans multiple lines and may not place its `name` argument on
/// the same line as the call token, so the scanner binds the name either from
/// the call line itself or from the first quoted literal within the next few
/// lines that is not a URL, digest, or strip_prefix field. Presence of a
/// `patches = [` or `patch_args = [` keyword is what marks a dependency as
/// patched; whether the list that follows is empty does not matter.
pub fn scan_patched_dependencies(repositories: &str) -> HashSet<String> {
    let lines: Vec<&str> = repositories.lines().collect();
    let mut patched = HashSet::new();
    let mut state = ScanState::Idle;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if line.contains("external_http_archive(") {
            state = ScanState::InCall {
                active: resolve_call_name(line, &lines, i),
            };
        }

        if let ScanState::InCall { active: Some(dep) } = &state {
            if line.contains("patches = [") || line.contains("patch_args = [") {
                patched.insert(dep.clone());
            }
        }

        // A line consisting solely of the closing delimiter ends the call.
        if line == ")" && state != ScanState::Idle {
            state = ScanState::Idle;
        }
    }

    patched
}

/// Resolves the dependency name for a fetch call starting at `call_idx`.
///
/// Prefers an explicit `name = "..."` on the call line. Otherwise looks ahead
/// up to `NAME_LOOKAHEAD_LINES` lines for the first quoted literal that is not
/// a URL, sha256 digest, or strip_prefix value. Returns `None` when no
/// plausible name is found; the call is then skipped, not reported.
fn resolve_call_name(call_line: &str, lines: &[&str], call_idx: usize) -> Option<String> {
    if call_line.contains("name") {
        if let Some(cap) = NAME_ARG.captures(call_line) {
            return Some(cap[1].to_string());
        }
    }

    for offset in 1..=NAME_LOOKAHEAD_LINES {
        let Some(next) = lines.get(call_idx + offset) else {
            break;
        };
        let next = next.trim();
        if ["https://", "http://", "sha256", "strip_prefix"]
            .iter()
            .any(|field| next.contains(field))
        {
            continue;
        }
        if let Some(cap) = QUOTED_LITERAL.captures(next) {
            return Some(cap[1].to_string());
        }
    }

    None
}
