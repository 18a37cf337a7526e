//! Core functionality for ezgit.
//!
//! This module provides the building blocks the interactive shell and the
//! command handlers are assembled from: the git process runner, failure
//! classification, recovery flows, menu configuration persistence, error
//! handling and UI output helpers.

pub mod classify;
pub mod config;
pub mod dirs;
pub mod error;
pub mod flows;
pub mod menu;
pub mod output;
pub mod prompt;
pub mod runner;

#[cfg(test)]
pub mod testing;

// === Error handling ===
// Core error type and result alias used throughout the application
pub use error::{EzGitError, Result};

// === Git process execution ===
// Subprocess runner and the captured invocation outcome
pub use runner::{CmdOutput, GitCli, GitRunner};

// === Failure classification ===
// Maps captured stderr to a known failure kind for the recovery flows
pub use classify::{classify, FailureKind};

// === Recovery flows ===
// Push / pull / commit state machines with corrective retries
pub use flows::{commit_with_recovery, pull_with_recovery, push_with_recovery, FlowOutcome};

// === Menu configuration ===
// Persisted menu model and its validating store
pub use menu::{
    category_choice, CategoryChoice, MenuCategory, MenuConfiguration, MenuEntry, MenuMode,
    MenuStore, BUILTIN_CATEGORY,
};

// === Tool configuration ===
pub use config::ToolConfig;

// === Interactive input ===
pub use prompt::{ConsolePrompter, Prompter};

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success, print_warning};
