//! 分支操作: branch management, checkout, merge and rebase.

use crate::core::{
    print_error, print_info, print_section_header, print_success, print_warning, GitRunner,
    Prompter, Result,
};

pub fn handle_branch(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("分支管理");
        let branches = runner.run(&["branch", "-av"])?;
        if branches.success() && !branches.stdout.trim().is_empty() {
            println!("当前分支列表:");
            print!("{}", branches.stdout);
        }

        println!("\n1. 创建新分支");
        println!("2. 删除分支");
        println!("3. 重命名分支");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                let name = prompt.ask("\n请输入新分支名: ")?;
                if name.is_empty() {
                    print_warning("分支名不能为空");
                    continue;
                }
                let switch = prompt.confirm("创建后立即切换到新分支？")?;
                let out = if switch {
                    runner.run(&["checkout", "-b", &name])?
                } else {
                    runner.run(&["branch", &name])?
                };
                out.echo();
                if out.success() {
                    print_success(&format!("分支 {} 已创建", name));
                }
            }
            "2" => {
                let name = prompt.ask("\n请输入要删除的分支名: ")?;
                if name.is_empty() {
                    print_warning("分支名不能为空");
                    continue;
                }
                if !prompt.confirm(&format!("确定要删除分支 {} 吗？", name))? {
                    continue;
                }
                let out = runner.run(&["branch", "-d", &name])?;
                out.echo();
                if out.success() {
                    print_success(&format!("分支 {} 已删除", name));
                } else {
                    print_info("提示: 分支包含未合并的提交时需要使用 git branch -D 强制删除");
                }
            }
            "3" => {
                let old = prompt.ask("\n请输入当前分支名: ")?;
                let new = prompt.ask("请输入新分支名: ")?;
                if old.is_empty() || new.is_empty() {
                    print_warning("分支名不能为空");
                    continue;
                }
                let out = runner.run(&["branch", "-m", &old, &new])?;
                out.echo();
                if out.success() {
                    print_success(&format!("分支 {} 已重命名为 {}", old, new));
                }
            }
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

pub fn handle_checkout(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("切换分支");
        println!("1. 切换到已有分支");
        println!("2. 创建并切换到新分支");
        println!("3. 检出指定提交 (游离 HEAD)");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                let name = prompt.ask("\n请输入分支名: ")?;
                if name.is_empty() {
                    print_warning("分支名不能为空");
                    continue;
                }
                let out = runner.run(&["checkout", &name])?;
                out.echo();
                if out.success() {
                    print_success(&format!("已切换到分支 {}", name));
                }
            }
            "2" => {
                let name = prompt.ask("\n请输入新分支名: ")?;
                if name.is_empty() {
                    print_warning("分支名不能为空");
                    continue;
                }
                let out = runner.run(&["checkout", "-b", &name])?;
                out.echo();
                if out.success() {
                    print_success(&format!("已创建并切换到分支 {}", name));
                }
            }
            "3" => {
                let hash = prompt.ask("\n请输入提交哈希: ")?;
                if hash.is_empty() {
                    print_warning("提交哈希不能为空");
                    continue;
                }
                print_warning("检出提交将进入游离 HEAD 状态，后续提交不属于任何分支");
                let out = runner.run(&["checkout", &hash])?;
                out.echo();
            }
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

pub fn handle_merge(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    print_section_header("合并分支");
    let branches = runner.run(&["branch", "-a"])?;
    if branches.success() {
        println!("可用分支:");
        print!("{}", branches.stdout);
    }

    let name = prompt.ask("\n请输入要合并进当前分支的分支名 (0 取消): ")?;
    if name.is_empty() || name == "0" {
        return Ok(());
    }

    let squash = prompt.confirm("使用 --squash 压缩为单个提交？")?;
    let out = if squash {
        runner.run(&["merge", "--squash", &name])?
    } else {
        runner.run(&["merge", &name])?
    };
    out.echo();
    if out.success() {
        print_success("合并完成");
    } else {
        // Conflict markers and hints come straight from git.
        print_error("合并未完成，请解决冲突后提交，或使用 git merge --abort 回退");
    }
    Ok(())
}

pub fn handle_rebase(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("变基操作");
        println!("1. 变基到指定分支");
        println!("2. 终止变基       (--abort)");
        println!("3. 继续变基       (--continue)");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                let name = prompt.ask("\n请输入目标分支名: ")?;
                if name.is_empty() {
                    print_warning("分支名不能为空");
                    continue;
                }
                if !prompt.confirm("变基会重写提交历史，已推送的分支不建议变基。继续吗？")? {
                    continue;
                }
                let out = runner.run(&["rebase", &name])?;
                out.echo();
                if out.success() {
                    print_success("变基完成");
                } else {
                    print_error("变基未完成，请解决冲突后选择 [继续变基]，或选择 [终止变基]");
                }
            }
            "2" => {
                let out = runner.run(&["rebase", "--abort"])?;
                out.echo();
                if out.success() {
                    print_success("变基已终止");
                }
            }
            "3" => {
                let out = runner.run(&["rebase", "--continue"])?;
                out.echo();
            }
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{RecordingRunner, ScriptedPrompter};

    #[test]
    fn test_branch_delete_requires_confirmation() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok("* main\n"),
            RecordingRunner::ok("* main\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&["2", "feature", "n", "0"]);

        handle_branch(&runner, &mut prompt)?;
        assert!(runner
            .calls()
            .iter()
            .all(|argv| !argv.contains(&"-d".to_string())));
        Ok(())
    }

    #[test]
    fn test_branch_create_with_switch_uses_checkout() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok("* main\n"),
            RecordingRunner::ok("Switched to a new branch 'dev'\n"),
            RecordingRunner::ok("* dev\n"),
        ]);
        let mut prompt = ScriptedPrompter::new(&["1", "dev", "y", "0"]);

        handle_branch(&runner, &mut prompt)?;
        assert_eq!(runner.calls_to("checkout"), vec![vec!["checkout", "-b", "dev"]]);
        Ok(())
    }

    #[test]
    fn test_merge_squash_flag() -> Result<()> {
        let runner = RecordingRunner::new(vec![
            RecordingRunner::ok("* main\n  dev\n"),
            RecordingRunner::ok(""),
        ]);
        let mut prompt = ScriptedPrompter::new(&["dev", "y"]);

        handle_merge(&runner, &mut prompt)?;
        assert_eq!(
            runner.calls_to("merge"),
            vec![vec!["merge", "--squash", "dev"]]
        );
        Ok(())
    }

    #[test]
    fn test_rebase_declined_confirmation_runs_nothing() -> Result<()> {
        let runner = RecordingRunner::new(vec![]);
        let mut prompt = ScriptedPrompter::new(&["1", "main", "n", "0"]);

        handle_rebase(&runner, &mut prompt)?;
        assert!(runner.calls().is_empty());
        Ok(())
    }
}
