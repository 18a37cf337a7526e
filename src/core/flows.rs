//! Recovery flows for the push, pull and commit operation families.
//!
//! Each flow is a small state machine: check preconditions, invoke git,
//! classify a failure, run one corrective action, retry once. The flows own
//! no state of their own; every side effect is a git state mutation made
//! through the [`GitRunner`], and every corrective step's own result is
//! re-classified or surfaced the same way as the original. Nothing is
//! retried more than once and nothing destructive happens without an
//! explicit confirmation.
//!
//! # Public API
//! - [`FlowOutcome`]: how a flow ended
//! - [`push_with_recovery`]: push with upstream / non-fast-forward recovery
//! - [`pull_with_recovery`]: pull with dirty-tree handling and stash pop
//! - [`commit_with_recovery`]: commit with a single `--no-verify` retry

use crate::core::classify::{classify, FailureKind};
use crate::core::error::Result;
use crate::core::output::{print_error, print_info, print_success, print_warning};
use crate::core::prompt::Prompter;
use crate::core::runner::{CmdOutput, GitRunner};

/// Terminal state of a recovery flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The operation and every corrective step succeeded.
    Success,
    /// The user backed out before the next invocation step.
    Cancelled,
    /// The operation failed in a way this flow does not retry.
    Fatal,
}

/// How the dirty-worktree precondition was resolved.
enum DirtyResolution {
    Proceed { stashed: bool },
    Cancelled,
    Failed,
}

/// Push the current branch, recovering from a missing upstream and
/// non-fast-forward rejections. A missing remote and credential/URL
/// problems are fatal: they need fixes outside this tool.
pub fn push_with_recovery(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<FlowOutcome> {
    let remotes = runner.run(&["remote"])?;
    if !remotes.success() || remotes.stdout.trim().is_empty() {
        print_error("当前仓库没有配置任何远程仓库");
        print_info("提示: 请先在 [远程配置] 中添加远程仓库");
        return Ok(FlowOutcome::Fatal);
    }

    let choices = [
        "1. 提交所有更改",
        "2. 提交所有更改 (跳过检查)",
        "3. 储藏更改 (stash)",
    ];
    match resolve_dirty_worktree(runner, prompt, &choices, PushDirtyChoices)? {
        DirtyResolution::Proceed { .. } => {}
        DirtyResolution::Cancelled => return Ok(FlowOutcome::Cancelled),
        DirtyResolution::Failed => return Ok(FlowOutcome::Fatal),
    }

    let push = runner.run(&["push"])?;
    push.echo();
    if push.success() {
        print_success("推送成功!");
        return Ok(FlowOutcome::Success);
    }

    match classify(&push) {
        FailureKind::NoUpstreamBranch => {
            print_info("首次推送该分支，尚未设置上游分支");
            if !prompt.confirm("设置上游分支 (origin) 并重新推送？")? {
                return Ok(FlowOutcome::Cancelled);
            }
            let head = runner.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
            if !head.success() {
                head.echo();
                return Ok(FlowOutcome::Fatal);
            }
            let branch = head.stdout.trim().to_string();
            let retry = runner.run(&["push", "--set-upstream", "origin", &branch])?;
            retry.echo();
            if retry.success() {
                print_success("推送成功!");
                Ok(FlowOutcome::Success)
            } else {
                report_push_failure(&retry);
                Ok(FlowOutcome::Fatal)
            }
        }
        FailureKind::NonFastForward => {
            print_warning("推送被拒绝: 远程分支包含本地没有的提交 (non-fast-forward)");
            if !prompt.confirm("先拉取远程更新，再重新推送？")? {
                return Ok(FlowOutcome::Cancelled);
            }
            let pull = runner.run(&["pull"])?;
            pull.echo();
            if !pull.success() {
                print_error("拉取失败，请先手动处理远程差异");
                return Ok(FlowOutcome::Fatal);
            }
            let retry = runner.run(&["push"])?;
            retry.echo();
            if retry.success() {
                print_success("推送成功!");
                Ok(FlowOutcome::Success)
            } else {
                report_push_failure(&retry);
                Ok(FlowOutcome::Fatal)
            }
        }
        _ => {
            report_push_failure(&push);
            Ok(FlowOutcome::Fatal)
        }
    }
}

/// Pull with the dirty-tree precondition. When the user chose to stash, a
/// successful pull is followed by `stash pop`; conflict output from the pop
/// is surfaced verbatim and never auto-resolved.
pub fn pull_with_recovery(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<FlowOutcome> {
    let choices = [
        "1. 提交更改",
        "2. 储藏更改 (stash)",
        "3. 放弃更改 (硬重置)",
    ];
    let stashed = match resolve_dirty_worktree(runner, prompt, &choices, PullDirtyChoices)? {
        DirtyResolution::Proceed { stashed } => stashed,
        DirtyResolution::Cancelled => return Ok(FlowOutcome::Cancelled),
        DirtyResolution::Failed => return Ok(FlowOutcome::Fatal),
    };

    let pull = runner.run(&["pull"])?;
    pull.echo();
    if !pull.success() {
        match classify(&pull) {
            FailureKind::PermissionDenied => {
                print_error("没有访问权限，请检查 SSH 密钥或访问令牌配置")
            }
            FailureKind::RepositoryNotFound => {
                print_error("找不到远程仓库，请检查远程 URL 是否正确")
            }
            _ => print_error(pull.stderr.trim()),
        }
        return Ok(FlowOutcome::Fatal);
    }

    if stashed {
        let pop = runner.run(&["stash", "pop"])?;
        // Conflict text, if any, goes to the user untouched.
        pop.echo();
        if !pop.success() {
            print_warning("恢复储藏时发生冲突，请手动解决冲突后提交");
            return Ok(FlowOutcome::Fatal);
        }
    }

    print_success("拉取成功!");
    Ok(FlowOutcome::Success)
}

/// Commit with exactly one `--no-verify` retry offer. A second failure is
/// terminal for this attempt.
pub fn commit_with_recovery(
    runner: &dyn GitRunner,
    prompt: &mut dyn Prompter,
    message: &str,
) -> Result<FlowOutcome> {
    let first = runner.run(&["commit", "-m", message])?;
    first.echo();
    if first.success() {
        print_success("提交成功!");
        return Ok(FlowOutcome::Success);
    }

    if !prompt.confirm("提交失败，是否跳过检查重试 (--no-verify)？")? {
        return Ok(FlowOutcome::Cancelled);
    }

    let retry = runner.run(&["commit", "-m", message, "--no-verify"])?;
    retry.echo();
    if retry.success() {
        print_success("提交成功! (跳过检查)");
        Ok(FlowOutcome::Success)
    } else {
        print_error("提交失败");
        Ok(FlowOutcome::Fatal)
    }
}

/// Marker types selecting which corrective actions a dirty worktree offers.
struct PushDirtyChoices;
struct PullDirtyChoices;

trait DirtyChoiceSet {
    /// Map the chosen menu number to the corrective argv, prompting for
    /// whatever the action needs. `Ok(None)` means cancel.
    fn corrective_args(
        &self,
        choice: &str,
        prompt: &mut dyn Prompter,
    ) -> Result<Option<(Vec<String>, bool)>>;
}

impl DirtyChoiceSet for PushDirtyChoices {
    fn corrective_args(
        &self,
        choice: &str,
        prompt: &mut dyn Prompter,
    ) -> Result<Option<(Vec<String>, bool)>> {
        match choice {
            "1" => {
                let message = prompt.ask("\n请输入提交信息: ")?;
                Ok(Some((svec(&["commit", "-am", &message]), false)))
            }
            "2" => {
                let message = prompt.ask("\n请输入提交信息: ")?;
                Ok(Some((svec(&["commit", "-am", &message, "--no-verify"]), false)))
            }
            "3" => Ok(Some((svec(&["stash"]), true))),
            _ => Ok(None),
        }
    }
}

impl DirtyChoiceSet for PullDirtyChoices {
    fn corrective_args(
        &self,
        choice: &str,
        prompt: &mut dyn Prompter,
    ) -> Result<Option<(Vec<String>, bool)>> {
        match choice {
            "1" => {
                let message = prompt.ask("\n请输入提交信息: ")?;
                Ok(Some((svec(&["commit", "-am", &message]), false)))
            }
            "2" => Ok(Some((svec(&["stash"]), true))),
            "3" => {
                if !prompt.confirm("警告：硬重置将丢失所有未提交的修改！确定要继续吗？")? {
                    return Ok(None);
                }
                Ok(Some((svec(&["reset", "--hard"]), false)))
            }
            _ => Ok(None),
        }
    }
}

/// Check `status --porcelain` and, when the tree is dirty, offer the given
/// corrective choices before the main operation proceeds. This precondition
/// check is the only source of the DirtyWorktree condition; push/pull
/// stderr is never pattern-matched for it.
fn resolve_dirty_worktree(
    runner: &dyn GitRunner,
    prompt: &mut dyn Prompter,
    choices: &[&str],
    set: impl DirtyChoiceSet,
) -> Result<DirtyResolution> {
    let status = runner.run(&["status", "--porcelain"])?;
    if status.stdout.trim().is_empty() {
        return Ok(DirtyResolution::Proceed { stashed: false });
    }

    print_warning("⚠ 工作区有未提交的更改");
    print!("{}", status.stdout);
    println!("\n可选操作:");
    for choice in choices {
        println!("{}", choice);
    }
    println!("\n0. 取消");

    let choice = prompt.ask("\n请选择: ")?;
    let Some((args, stashed)) = set.corrective_args(&choice, prompt)? else {
        return Ok(DirtyResolution::Cancelled);
    };

    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    let out = runner.run(&argv)?;
    out.echo();
    if !out.success() {
        print_error("处理未提交更改失败，已中止");
        return Ok(DirtyResolution::Failed);
    }
    Ok(DirtyResolution::Proceed { stashed })
}

fn report_push_failure(out: &CmdOutput) {
    match classify(out) {
        FailureKind::PermissionDenied => {
            print_error("没有推送权限，请检查 SSH 密钥或访问令牌配置");
        }
        FailureKind::RepositoryNotFound => {
            print_error("找不到远程仓库，请检查远程 URL 是否正确");
        }
        _ => print_error(out.stderr.trim()),
    }
}

fn svec(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{RecordingRunner, ScriptedPrompter};

    fn position_of(calls: &[Vec<String>], argv: &[&str]) -> usize {
        calls
            .iter()
            .position(|c| c.iter().map(String::as_str).eq(argv.iter().copied()))
            .unwrap_or_else(|| panic!("{:?} was never invoked; calls: {:?}", argv, calls))
    }

    #[test]
    fn test_push_without_remote_is_fatal() -> Result<()> {
        let runner = RecordingRunner::new(vec![RecordingRunner::ok("")]);
        let mut prompt = ScriptedPrompter::new(&[]);

        let outcome = push_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Fatal);
        assert_eq!(runner.calls().len(), 1);
        Ok(())
    }

    #[test]
    fn test_push_clean_tree_success() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok("origin\n"),
            RecordingRunner::ok(""),
            RecordingRunner::ok("Everything up-to-date\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&[]);

        let outcome = push_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Success);
        assert_eq!(runner.calls_to("push").len(), 1);
        Ok(())
    }

    #[test]
    fn test_push_dirty_stash_then_set_upstream_in_order() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok("origin\n"),
            RecordingRunner::ok(" M src/main.rs\n"),
            RecordingRunner::ok("Saved working directory\n"),
            RecordingRunner::fail("fatal: The current branch main has no upstream branch.\n"),
            RecordingRunner::ok("main\n"),
            RecordingRunner::ok("Branch 'main' set up to track 'origin/main'.\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&["3", "y"]);

        let outcome = push_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Success);

        let calls = runner.calls();
        let status = position_of(&calls, &["status", "--porcelain"]);
        let stash = position_of(&calls, &["stash"]);
        let set_upstream = position_of(&calls, &["push", "--set-upstream", "origin", "main"]);
        assert!(status < stash && stash < set_upstream);
        Ok(())
    }

    #[test]
    fn test_push_dirty_stash_failure_aborts_before_push() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok("origin\n"),
            RecordingRunner::ok(" M src/main.rs\n"),
            RecordingRunner::fail("error: unable to stash\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&["3"]);

        let outcome = push_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Fatal);
        assert!(runner.calls_to("push").is_empty());
        Ok(())
    }

    #[test]
    fn test_push_dirty_cancel_invokes_nothing_else() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok("origin\n"),
            RecordingRunner::ok(" M src/main.rs\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&["0"]);

        let outcome = push_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Cancelled);
        assert!(runner.calls_to("push").is_empty());
        Ok(())
    }

    #[test]
    fn test_push_permission_denied_is_fatal_without_retry() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok("origin\n"),
            RecordingRunner::ok(""),
            RecordingRunner::fail("git@github.com: Permission denied (publickey).\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&[]);

        let outcome = push_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Fatal);
        assert_eq!(runner.calls_to("push").len(), 1);
        Ok(())
    }

    #[test]
    fn test_push_non_fast_forward_pulls_then_retries_once() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok("origin\n"),
            RecordingRunner::ok(""),
            RecordingRunner::fail("! [rejected] main -> main (non-fast-forward)\n"),
            RecordingRunner::ok("Updating abc..def\n"),
            RecordingRunner::ok(""),
        ]);
        let mut prompt = ScriptedPrompter::new(&["y"]);

        let outcome = push_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Success);
        assert_eq!(runner.calls_to("push").len(), 2);
        assert_eq!(runner.calls_to("pull").len(), 1);
        Ok(())
    }

    #[test]
    fn test_push_upstream_retry_declined_is_cancelled() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok("origin\n"),
            RecordingRunner::ok(""),
            RecordingRunner::fail("fatal: The current branch dev has no upstream branch.\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&["n"]);

        let outcome = push_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Cancelled);
        assert_eq!(runner.calls_to("push").len(), 1);
        Ok(())
    }

    #[test]
    fn test_commit_hook_failure_retry_succeeds_two_invocations() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::fail("pre-commit hook rejected\n"),
            RecordingRunner::ok(""),
        ]);
        let mut prompt = ScriptedPrompter::new(&["y"]);

        let outcome = commit_with_recovery(&runner, &mut prompt, "fix: something")?;
        assert_eq!(outcome, FlowOutcome::Success);
        assert_eq!(runner.calls_to("commit").len(), 2);
        assert_eq!(
            runner.calls_to("commit")[1],
            vec!["commit", "-m", "fix: something", "--no-verify"]
        );
        Ok(())
    }

    #[test]
    fn test_commit_retry_declined_is_single_invocation() -> Result<()> {
        let runner = RecordingRunner::new(vec![RecordingRunner::fail("hook rejected\n")]);
        let mut prompt = ScriptedPrompter::new(&["n"]);

        let outcome = commit_with_recovery(&runner, &mut prompt, "msg")?;
        assert_eq!(outcome, FlowOutcome::Cancelled);
        assert_eq!(runner.calls_to("commit").len(), 1);
        Ok(())
    }

    #[test]
    fn test_commit_second_failure_is_terminal() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::fail("hook rejected\n"),
            RecordingRunner::fail("hook rejected again\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&["y"]);

        let outcome = commit_with_recovery(&runner, &mut prompt, "msg")?;
        assert_eq!(outcome, FlowOutcome::Fatal);
        assert_eq!(runner.calls_to("commit").len(), 2);
        Ok(())
    }

    #[test]
    fn test_pull_dirty_stash_pops_after_success() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok(" M src/lib.rs\n"),
            RecordingRunner::ok("Saved working directory\n"),
            RecordingRunner::ok("Updating abc..def\n"),
            RecordingRunner::ok("Dropped refs/stash@{0}\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&["2"]);

        let outcome = pull_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Success);

        let calls = runner.calls();
        let stash = position_of(&calls, &["stash"]);
        let pull = position_of(&calls, &["pull"]);
        let pop = position_of(&calls, &["stash", "pop"]);
        assert!(stash < pull && pull < pop);
        Ok(())
    }

    #[test]
    fn test_pull_stash_pop_conflict_is_surfaced_not_resolved() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok(" M src/lib.rs\n"),
            RecordingRunner::ok(""),
            RecordingRunner::ok(""),
            RecordingRunner::fail("CONFLICT (content): Merge conflict in src/lib.rs\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&["2"]);

        let outcome = pull_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Fatal);
        // Nothing after the pop: no auto-resolution commands.
        assert_eq!(runner.calls().len(), 4);
        Ok(())
    }

    #[test]
    fn test_pull_discard_requires_confirmation() -> Result<()> {
        let runner = RecordingRunner::new(vec![RecordingRunner::ok(" M src/lib.rs\n")]);
        let mut prompt = ScriptedPrompter::new(&["3", "n"]);

        let outcome = pull_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Cancelled);
        assert!(runner.calls_to("reset").is_empty());
        assert!(runner.calls_to("pull").is_empty());
        Ok(())
    }

    #[test]
    fn test_pull_clean_tree_failure_is_fatal() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok(""),
            RecordingRunner::fail("fatal: unable to access remote\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&[]);

        let outcome = pull_with_recovery(&runner, &mut prompt)?;
        assert_eq!(outcome, FlowOutcome::Fatal);
        Ok(())
    }
}
