//! External git process execution.
//!
//! Every repository mutation this tool performs goes through an external
//! `git` process. This module provides the single doorway for those
//! invocations: a [`GitRunner`] trait so flows can be exercised against a
//! scripted runner in tests, and [`GitCli`] which spawns the real binary.
//!
//! # Contract
//! - The child environment forces a UTF-8 locale so output is decodable
//!   regardless of the host locale.
//! - A non-zero exit code is a normal, expected outcome (e.g. "nothing to
//!   commit") and is returned inside [`CmdOutput`], never as an `Err`.
//! - Only genuine spawn failures (binary missing, OS-level error) produce
//!   [`EzGitError::GitSpawnFailed`].
//! - Invocations block until the subprocess exits; no timeout is applied.

use crate::core::error::{EzGitError, Result};
use std::process::{Command, Stdio};

/// Captured result of one git invocation. Owned by the caller that issued
/// the invocation; never shared or mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CmdOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CmdOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Print whatever the command wrote, stdout first, mirroring what the
    /// user would have seen running git directly.
    pub fn echo(&self) {
        if !self.stdout.is_empty() {
            print!("{}", self.stdout);
        }
        if !self.stderr.is_empty() {
            eprint!("{}", self.stderr);
        }
    }
}

/// Abstraction over git invocation so recovery flows can be unit tested
/// without a repository.
pub trait GitRunner {
    /// Run `git <args>` to completion and capture its output.
    fn run(&self, args: &[&str]) -> Result<CmdOutput>;

    /// Run `git <args>` with stdin/stdout/stderr inherited from this
    /// process. Needed for genuinely interactive subcommands such as
    /// `add -p`, where git itself drives the terminal. Returns only the
    /// exit code; there is no captured output to classify.
    fn run_interactive(&self, args: &[&str]) -> Result<i32>;
}

/// Runner backed by the real `git` executable.
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Override the executable name. Used by tests to simulate a missing
    /// git installation.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .env("LANG", "en_US.UTF-8")
            .env("LC_ALL", "en_US.UTF-8");
        cmd
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for GitCli {
    fn run(&self, args: &[&str]) -> Result<CmdOutput> {
        log::debug!("running: {} {}", self.program, args.join(" "));

        let output = self
            .command(args)
            .output()
            .map_err(EzGitError::git_spawn_failed)?;

        // A child killed by a signal has no exit code.
        let exit_code = output.status.code().unwrap_or(-1);
        log::debug!("exit code: {}", exit_code);

        Ok(CmdOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_interactive(&self, args: &[&str]) -> Result<i32> {
        log::debug!("running interactively: {} {}", self.program, args.join(" "));

        let status = self
            .command(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(EzGitError::git_spawn_failed)?;

        Ok(status.code().unwrap_or(-1))
    }
}
