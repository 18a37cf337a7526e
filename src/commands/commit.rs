//! 提交更改: the commit flow with its single no-verify retry.

use crate::core::{
    commit_with_recovery, print_info, print_warning, push_with_recovery, FlowOutcome, GitRunner,
    Prompter, Result,
};

pub fn handle_commit(
    runner: &dyn GitRunner,
    prompt: &mut dyn Prompter,
    auto_push: bool,
) -> Result<()> {
    let staged = runner.run(&["status", "-s"])?;
    if staged.success() && staged.stdout.trim().is_empty() {
        print_info("没有需要提交的更改");
        return Ok(());
    }
    println!("\n当前更改:");
    print!("{}", staged.stdout);

    let message = prompt.ask("\n请输入提交信息 (0 取消): ")?;
    if message.is_empty() || message == "0" {
        print_warning("已取消提交");
        return Ok(());
    }

    if commit_with_recovery(runner, prompt, &message)? == FlowOutcome::Success {
        let last = runner.run(&["log", "-1", "--oneline"])?;
        if last.success() {
            println!("\n最新提交: {}", last.stdout.trim());
        }
        if auto_push {
            print_info("已开启提交后自动推送");
            push_with_recovery(runner, prompt)?;
        }
    }
    Ok(())
}
