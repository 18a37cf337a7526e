//! EzGit - an interactive, menu-driven front end for everyday git work.
//!
//! The tool renders a numbered menu, maps each selection to a family of git
//! operations, and runs git as a subprocess. Failed invocations are
//! classified from their stderr and, where a safe corrective action exists,
//! recovered interactively: a missing upstream gets `--set-upstream`, a
//! rejected non-fast-forward push offers a pull-then-retry, a dirty
//! worktree offers commit/stash before push and pull.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Git process execution and failure classification
//! - Push / pull / commit recovery flows
//! - Menu configuration model and persistence
//! - Error handling and result types
//! - Prompting and output formatting

pub mod commands;
pub mod core;
pub mod shell;

// Re-export the core public API for external users
pub use core::{
    classify,
    commit_with_recovery,
    print_error,
    print_info,
    print_section_header,
    print_success,
    print_warning,
    pull_with_recovery,
    push_with_recovery,
    // Prompting
    ConsolePrompter,
    // Git process execution
    CmdOutput,
    // Error handling
    EzGitError,
    // Failure classification
    FailureKind,
    FlowOutcome,
    GitCli,
    GitRunner,
    // Menu configuration
    MenuConfiguration,
    MenuEntry,
    MenuMode,
    MenuStore,
    Prompter,
    Result,
    // Tool configuration
    ToolConfig,
};
