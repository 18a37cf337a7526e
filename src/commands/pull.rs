//! 拉取更新: entry point over the pull recovery flow.

use crate::core::{pull_with_recovery, GitRunner, Prompter, Result};

pub fn handle_pull(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    pull_with_recovery(runner, prompt)?;
    Ok(())
}
