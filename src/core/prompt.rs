//! Blocking user prompts.
//!
//! All user input goes through the [`Prompter`] trait so recovery flows and
//! menu handlers can be driven by scripted answers in tests. The console
//! implementation is a plain blocking read on stdin; there is no line
//! editing and no async.

use crate::core::error::Result;
use colored::*;
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Show `prompt` (no trailing newline) and read one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Ask for an explicit y/n confirmation. Only an answer of `y`/`Y`
    /// confirms; anything else declines. Destructive actions must go
    /// through this before executing.
    fn confirm(&mut self, message: &str) -> Result<bool> {
        println!("\n{}", message.yellow());
        let answer = self.ask("确认执行？(y/n): ")?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Block until the user presses enter, so command output stays visible.
    fn pause(&mut self) -> Result<()> {
        self.ask("\n按回车键继续...")?;
        Ok(())
    }
}

/// Prompter reading from the process stdin.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // stdin closed (EOF); answer "0" so every menu loop takes its
            // cancel/exit path instead of spinning on empty reads.
            println!();
            return Ok("0".to_string());
        }
        Ok(line.trim().to_string())
    }
}
