//! Scripted collaborators for unit tests.
//!
//! The recovery flows are pure orchestration over a [`GitRunner`] and a
//! [`Prompter`]; these doubles let tests script both sides and assert the
//! exact invocation sequence afterwards.

use crate::core::error::Result;
use crate::core::prompt::Prompter;
use crate::core::runner::{CmdOutput, GitRunner};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Runner that replays a queue of scripted outputs and records every
/// argument vector it was asked to run.
pub struct RecordingRunner {
    outputs: RefCell<VecDeque<CmdOutput>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl RecordingRunner {
    pub fn new(outputs: Vec<CmdOutput>) -> Self {
        Self {
            outputs: RefCell::new(outputs.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Scripted successful invocation.
    pub fn ok(stdout: &str) -> CmdOutput {
        CmdOutput {
            exit_code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// Scripted failed invocation.
    pub fn fail(stderr: &str) -> CmdOutput {
        CmdOutput {
            exit_code: 1,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    /// Every argv this runner executed, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// The argvs whose first argument equals `subcommand`.
    pub fn calls_to(&self, subcommand: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|argv| argv.first().map(String::as_str) == Some(subcommand))
            .collect()
    }
}

impl GitRunner for RecordingRunner {
    fn run(&self, args: &[&str]) -> Result<CmdOutput> {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|s| s.to_string()).collect());
        Ok(self
            .outputs
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted git invocation: {:?}", args)))
    }

    fn run_interactive(&self, args: &[&str]) -> Result<i32> {
        self.run(args).map(|out| out.exit_code)
    }
}

/// Prompter answering from a fixed script.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, _prompt: &str) -> Result<String> {
        Ok(self.answers.pop_front().unwrap_or_else(|| "0".to_string()))
    }

    fn pause(&mut self) -> Result<()> {
        // Scripted sessions never block on enter.
        Ok(())
    }
}
