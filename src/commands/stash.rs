//! 储藏操作: the stash family.

use crate::core::{
    print_info, print_section_header, print_success, print_warning, GitRunner, Prompter, Result,
};

pub fn handle_stash(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("储藏操作");
        println!("1. 查看储藏列表");
        println!("2. 储藏当前更改");
        println!("3. 恢复储藏       (apply / pop)");
        println!("4. 删除储藏");
        println!("5. 创建分支并应用储藏");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                let out = runner.run(&["stash", "list"])?;
                out.echo();
                if out.success() && out.stdout.trim().is_empty() {
                    print_info("储藏列表为空");
                }
                prompt.pause()?;
            }
            "2" => {
                let message = prompt.ask("\n请输入储藏说明 (可留空): ")?;
                let out = if message.is_empty() {
                    runner.run(&["stash"])?
                } else {
                    runner.run(&["stash", "push", "-m", &message])?
                };
                out.echo();
                if out.success() {
                    print_success("更改已储藏");
                }
            }
            "3" => {
                let Some(reference) = pick_stash(runner, prompt)? else {
                    continue;
                };
                let keep = prompt.confirm("恢复后保留储藏记录 (apply)？否则弹出 (pop)")?;
                let out = if keep {
                    runner.run(&["stash", "apply", &reference])?
                } else {
                    runner.run(&["stash", "pop", &reference])?
                };
                out.echo();
                if out.success() {
                    print_success("储藏已恢复");
                } else {
                    print_warning("恢复储藏时发生冲突，请手动解决冲突后提交");
                }
            }
            "4" => {
                let Some(reference) = pick_stash(runner, prompt)? else {
                    continue;
                };
                if !prompt.confirm(&format!("确定要删除 {} 吗？删除后无法恢复", reference))? {
                    continue;
                }
                let out = runner.run(&["stash", "drop", &reference])?;
                out.echo();
                if out.success() {
                    print_success("储藏已删除");
                }
            }
            "5" => {
                let Some(reference) = pick_stash(runner, prompt)? else {
                    continue;
                };
                let branch = prompt.ask("请输入新分支名: ")?;
                if branch.is_empty() {
                    print_warning("分支名不能为空");
                    continue;
                }
                let out = runner.run(&["stash", "branch", &branch, &reference])?;
                out.echo();
                if out.success() {
                    print_success(&format!("已在新分支 {} 上应用储藏", branch));
                }
            }
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

/// Show the stash list and ask for an index. Returns the `stash@{n}`
/// reference, or `None` when the list is empty or the user cancels.
fn pick_stash(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<Option<String>> {
    let out = runner.run(&["stash", "list"])?;
    if !out.success() || out.stdout.trim().is_empty() {
        print_info("储藏列表为空");
        return Ok(None);
    }
    println!("\n储藏列表:");
    print!("{}", out.stdout);

    let index = prompt.ask("\n请输入储藏编号 (如 0，0 号为最新；q 取消): ")?;
    if index.is_empty() || index == "q" {
        return Ok(None);
    }
    if !index.chars().all(|c| c.is_ascii_digit()) {
        print_warning(&format!("无效的储藏编号: {}", index));
        return Ok(None);
    }
    Ok(Some(format!("stash@{{{}}}", index)))
}
