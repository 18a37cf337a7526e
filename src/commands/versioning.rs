//! 版本管理: reset, revert and restore. Everything here rewrites or
//! discards work, so every branch goes through an explicit confirmation.

use crate::core::{
    print_error, print_section_header, print_success, print_warning, GitRunner, Prompter, Result,
};

pub fn handle_versioning(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("版本管理");
        println!("1. 回退版本       (git reset)");
        println!("2. 撤销提交       (git revert)");
        println!("3. 恢复文件       (git restore)");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => reset_to_commit(runner, prompt)?,
            "2" => revert_commit(runner, prompt)?,
            "3" => restore_files(runner, prompt)?,
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

fn reset_to_commit(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    let Some(target) = pick_commit(runner, prompt)? else {
        return Ok(());
    };

    println!("\n1. 软回退 (--soft, 保留更改到暂存区)");
    println!("2. 混合回退 (--mixed, 保留更改到工作区)");
    println!("3. 硬回退 (--hard, 丢弃所有更改)");
    println!("\n0. 取消");

    let flag = match prompt.ask("\n请选择回退方式: ")?.as_str() {
        "1" => "--soft",
        "2" => "--mixed",
        "3" => {
            print_warning("⚠ 硬回退将永久丢弃目标提交之后的所有更改！");
            "--hard"
        }
        _ => return Ok(()),
    };

    if !prompt.confirm(&format!("确定要执行 git reset {} {} 吗？", flag, target))? {
        return Ok(());
    }
    let out = runner.run(&["reset", flag, &target])?;
    out.echo();
    if out.success() {
        print_success("回退完成");
    }
    Ok(())
}

fn revert_commit(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    let Some(target) = pick_commit(runner, prompt)? else {
        return Ok(());
    };

    if !prompt.confirm(&format!("撤销提交 {} 会生成一个新的反向提交，继续吗？", target))? {
        return Ok(());
    }
    let out = runner.run(&["revert", "--no-edit", &target])?;
    out.echo();
    if out.success() {
        print_success("撤销完成，已生成反向提交");
    } else if out.stderr.contains("is a merge") {
        // Reverting a merge needs the mainline parent.
        print_warning("目标是合并提交，需要指定主线");
        let out = runner.run(&["revert", "--no-edit", "-m", "1", &target])?;
        out.echo();
        if out.success() {
            print_success("撤销完成 (以第一个父提交为主线)");
        }
    } else {
        print_error("撤销未完成，请解决冲突后提交，或使用 git revert --abort 回退");
    }
    Ok(())
}

fn restore_files(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    println!("\n1. 恢复工作区文件 (丢弃未暂存修改)");
    println!("2. 取消暂存       (--staged)");
    println!("3. 恢复已删除的文件");
    println!("\n0. 取消");

    match prompt.ask("\n请选择: ")?.as_str() {
        "1" => {
            let path = prompt.ask("\n请输入文件路径 (. 表示全部): ")?;
            if path.is_empty() {
                print_warning("文件路径不能为空");
                return Ok(());
            }
            if !prompt.confirm(&format!("将丢弃 {} 的未暂存修改，继续吗？", path))? {
                return Ok(());
            }
            let out = runner.run(&["restore", &path])?;
            out.echo();
            if out.success() {
                print_success("文件已恢复");
            }
        }
        "2" => {
            let path = prompt.ask("\n请输入文件路径 (. 表示全部): ")?;
            if path.is_empty() {
                print_warning("文件路径不能为空");
                return Ok(());
            }
            let out = runner.run(&["restore", "--staged", &path])?;
            out.echo();
            if out.success() {
                print_success("已取消暂存");
            }
        }
        "3" => {
            let path = prompt.ask("\n请输入已删除文件的路径: ")?;
            if path.is_empty() {
                print_warning("文件路径不能为空");
                return Ok(());
            }
            let out = runner.run(&["checkout", "HEAD", "--", &path])?;
            out.echo();
            if out.success() {
                print_success("文件已恢复");
            }
        }
        _ => {}
    }
    Ok(())
}

/// Show the recent history and resolve the user's pick to a commit-ish.
/// Accepts a 1-based list index or a literal reference; `None` cancels.
fn pick_commit(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<Option<String>> {
    let log = runner.run(&["log", "--oneline", "-10"])?;
    if !log.success() || log.stdout.trim().is_empty() {
        print_warning("没有可用的提交记录");
        return Ok(None);
    }

    let commits: Vec<&str> = log.stdout.lines().collect();
    println!("\n最近的提交:");
    for (i, line) in commits.iter().enumerate() {
        println!("{}. {}", i + 1, line);
    }

    let input = prompt.ask("\n请输入序号或提交哈希 (q 取消): ")?;
    if input.is_empty() || input == "q" || input == "0" {
        return Ok(None);
    }

    if let Ok(index) = input.parse::<usize>() {
        if index >= 1 && index <= commits.len() {
            let hash = commits[index - 1]
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();
            return Ok(Some(hash));
        }
        print_warning(&format!("无效的序号: {}", input));
        return Ok(None);
    }

    Ok(Some(input))
}
