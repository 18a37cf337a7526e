//! 远程配置: remote listing and management.

use crate::core::{
    print_info, print_section_header, print_success, print_warning, GitRunner, Prompter, Result,
};

pub fn handle_remote(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("远程配置");
        println!("1. 查看远程仓库");
        println!("2. 添加远程仓库");
        println!("3. 修改远程仓库 URL");
        println!("4. 删除远程仓库");
        println!("5. 重命名远程仓库");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                let out = runner.run(&["remote", "-v"])?;
                out.echo();
                if out.success() && out.stdout.trim().is_empty() {
                    print_info("尚未配置远程仓库，使用选项 2 添加");
                }
                prompt.pause()?;
            }
            "2" => {
                let name = prompt.ask("\n请输入远程名称 (默认 origin): ")?;
                let name = if name.is_empty() { "origin".to_string() } else { name };
                let url = prompt.ask("请输入远程地址: ")?;
                if url.is_empty() {
                    print_warning("远程地址不能为空");
                    continue;
                }
                let out = runner.run(&["remote", "add", &name, &url])?;
                out.echo();
                if out.success() {
                    print_success(&format!("远程仓库 {} 已添加", name));
                }
            }
            "3" => {
                let Some(name) = pick_remote(runner, prompt)? else {
                    continue;
                };
                let url = prompt.ask("请输入新地址: ")?;
                if url.is_empty() {
                    print_warning("远程地址不能为空");
                    continue;
                }
                let out = runner.run(&["remote", "set-url", &name, &url])?;
                out.echo();
                if out.success() {
                    print_success(&format!("远程仓库 {} 的地址已更新", name));
                }
            }
            "4" => {
                let Some(name) = pick_remote(runner, prompt)? else {
                    continue;
                };
                if !prompt.confirm(&format!("确定要删除远程仓库 {} 吗？", name))? {
                    continue;
                }
                let out = runner.run(&["remote", "remove", &name])?;
                out.echo();
                if out.success() {
                    print_success(&format!("远程仓库 {} 已删除", name));
                }
            }
            "5" => {
                let Some(old) = pick_remote(runner, prompt)? else {
                    continue;
                };
                let new = prompt.ask("请输入新名称: ")?;
                if new.is_empty() {
                    print_warning("名称不能为空");
                    continue;
                }
                let out = runner.run(&["remote", "rename", &old, &new])?;
                out.echo();
                if out.success() {
                    print_success(&format!("远程仓库 {} 已重命名为 {}", old, new));
                }
            }
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

/// Show the configured remotes and ask for one by name. `None` means there
/// is nothing to pick or the user gave no name.
fn pick_remote(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<Option<String>> {
    let out = runner.run(&["remote", "-v"])?;
    if !out.success() || out.stdout.trim().is_empty() {
        print_info("尚未配置远程仓库，请先添加");
        return Ok(None);
    }
    println!("\n当前远程仓库列表:");
    print!("{}", out.stdout);

    let name = prompt.ask("\n请输入远程名称 (0 取消): ")?;
    if name.is_empty() || name == "0" {
        return Ok(None);
    }
    Ok(Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{RecordingRunner, ScriptedPrompter};

    #[test]
    fn test_add_defaults_to_origin() -> Result<()> {
        let runner = RecordingRunner::new(vec![RecordingRunner::ok("")]);
        let mut prompt =
            ScriptedPrompter::new(&["2", "", "https://example.com/repo.git", "0"]);

        handle_remote(&runner, &mut prompt)?;
        assert_eq!(
            runner.calls(),
            vec![vec!["remote", "add", "origin", "https://example.com/repo.git"]]
        );
        Ok(())
    }

    #[test]
    fn test_remove_without_remotes_does_nothing() -> Result<()> {
        let runner = RecordingRunner::new(vec![RecordingRunner::ok("")]);
        let mut prompt = ScriptedPrompter::new(&["4", "0"]);

        handle_remote(&runner, &mut prompt)?;
        assert_eq!(runner.calls(), vec![vec!["remote", "-v"]]);
        Ok(())
    }

    #[test]
    fn test_remove_declined_confirmation() -> Result<()> {
        let runner = RecordingRunner::new(vec![RecordingRunner::ok(
            "origin\thttps://example.com/repo.git (fetch)\n",
        )]);
        let mut prompt = ScriptedPrompter::new(&["4", "origin", "n", "0"]);

        handle_remote(&runner, &mut prompt)?;
        assert!(runner.calls_to("remote").len() == 1);
        Ok(())
    }
}
