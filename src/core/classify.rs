//! Classification of failed git invocations.
//!
//! Git reports recoverable situations only as stderr text, so the recovery
//! flows need a deterministic mapping from that text to a small taxonomy.
//! The mapping is an explicit ordered rule table: the tie-break between
//! overlapping patterns is a visible, testable artifact, not implicit
//! branch order.
//!
//! # Public API
//! - [`FailureKind`]: taxonomy of recognized failure conditions
//! - [`classify`]: pure function from a captured result to a [`FailureKind`]
//!
//! [`FailureKind::DirtyWorktree`] is never derived from stderr. A dirty
//! working tree is detected by the flows up front via `status --porcelain`;
//! the variant exists so flows can report that precondition through the same
//! taxonomy.

use crate::core::runner::CmdOutput;

/// Known recoverable conditions derived from a failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NoUpstreamBranch,
    NonFastForward,
    PermissionDenied,
    RepositoryNotFound,
    DirtyWorktree,
    Unknown,
}

/// Ordered rule table. Patterns are matched case-insensitively against
/// stderr; the first match wins. `"not found"` deliberately comes last so
/// the more specific patterns take precedence.
const RULES: &[(&str, FailureKind)] = &[
    ("no upstream branch", FailureKind::NoUpstreamBranch),
    ("non-fast-forward", FailureKind::NonFastForward),
    ("permission denied", FailureKind::PermissionDenied),
    ("repository not found", FailureKind::RepositoryNotFound),
    ("not found", FailureKind::RepositoryNotFound),
];

/// Map a failed invocation to a [`FailureKind`]. Pure function of the
/// captured stderr; never re-invokes any command.
pub fn classify(result: &CmdOutput) -> FailureKind {
    let stderr = result.stderr.to_lowercase();
    for (pattern, kind) in RULES {
        if stderr.contains(pattern) {
            return *kind;
        }
    }
    FailureKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(stderr: &str) -> CmdOutput {
        CmdOutput {
            exit_code: 1,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_no_upstream_branch() {
        let out = failed("fatal: The current branch feature has no upstream branch.");
        assert_eq!(classify(&out), FailureKind::NoUpstreamBranch);
    }

    #[test]
    fn test_non_fast_forward() {
        let out = failed("! [rejected] main -> main (non-fast-forward)");
        assert_eq!(classify(&out), FailureKind::NonFastForward);
    }

    #[test]
    fn test_permission_denied() {
        let out = failed("git@github.com: Permission denied (publickey).");
        assert_eq!(classify(&out), FailureKind::PermissionDenied);
    }

    #[test]
    fn test_repository_not_found() {
        let out = failed("ERROR: Repository not found.");
        assert_eq!(classify(&out), FailureKind::RepositoryNotFound);
    }

    #[test]
    fn test_generic_not_found_maps_to_repository_not_found() {
        let out = failed("fatal: remote error: upstream not found");
        assert_eq!(classify(&out), FailureKind::RepositoryNotFound);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let out = failed("FATAL: THE CURRENT BRANCH HAS NO UPSTREAM BRANCH.");
        assert_eq!(classify(&out), FailureKind::NoUpstreamBranch);
    }

    #[test]
    fn test_first_match_wins_over_later_rules() {
        // Both "no upstream branch" and "permission denied" are present;
        // the rule order makes NoUpstreamBranch win.
        let out = failed("error: no upstream branch; also permission denied somewhere");
        assert_eq!(classify(&out), FailureKind::NoUpstreamBranch);

        let out = failed("permission denied while checking: no upstream branch");
        assert_eq!(classify(&out), FailureKind::NoUpstreamBranch);
    }

    #[test]
    fn test_specific_not_found_beats_generic() {
        let out = failed("ERROR: Repository not found. (and other things not found)");
        assert_eq!(classify(&out), FailureKind::RepositoryNotFound);
    }

    #[test]
    fn test_unrecognized_is_unknown() {
        let out = failed("error: failed to push some refs");
        assert_eq!(classify(&out), FailureKind::Unknown);
    }

    #[test]
    fn test_empty_stderr_is_unknown() {
        let out = failed("");
        assert_eq!(classify(&out), FailureKind::Unknown);
    }
}
