//! 推送更改: entry point over the push recovery flow.

use crate::core::{push_with_recovery, FlowOutcome, GitRunner, Prompter, Result};

pub fn handle_push(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    if push_with_recovery(runner, prompt)? == FlowOutcome::Success {
        let last = runner.run(&["log", "-1", "--oneline"])?;
        if last.success() {
            println!("\n已推送至: {}", last.stdout.trim());
        }
    }
    Ok(())
}
