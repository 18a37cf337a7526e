//! 标签管理: listing, creating, deleting, pushing and checking out tags.

use crate::core::{
    print_info, print_section_header, print_success, print_warning, GitRunner, Prompter, Result,
};

pub fn handle_tag(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("标签管理");
        println!("1. 查看所有标签");
        println!("2. 创建新标签");
        println!("3. 删除标签");
        println!("4. 推送标签");
        println!("5. 检出标签");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                let out = runner.run(&["tag", "-n"])?;
                out.echo();
                if out.success() && out.stdout.trim().is_empty() {
                    print_info("还没有任何标签");
                }
                prompt.pause()?;
            }
            "2" => {
                let name = prompt.ask("\n请输入标签名 (如 v1.0.0): ")?;
                if name.is_empty() {
                    print_warning("标签名不能为空");
                    continue;
                }
                let message = prompt.ask("请输入标签说明: ")?;
                let out = runner.run(&["tag", "-a", &name, "-m", &message])?;
                out.echo();
                if out.success() {
                    print_success(&format!("标签 {} 已创建", name));
                }
            }
            "3" => {
                let name = prompt.ask("\n请输入要删除的标签名: ")?;
                if name.is_empty() {
                    print_warning("标签名不能为空");
                    continue;
                }
                if !prompt.confirm(&format!("确定要删除标签 {} 吗？", name))? {
                    continue;
                }
                let out = runner.run(&["tag", "-d", &name])?;
                out.echo();
                if out.success() {
                    print_success(&format!("标签 {} 已删除", name));
                }
            }
            "4" => {
                let name = prompt.ask("\n请输入要推送的标签名 (留空推送全部): ")?;
                let out = if name.is_empty() {
                    runner.run(&["push", "origin", "--tags"])?
                } else {
                    runner.run(&["push", "origin", &name])?
                };
                out.echo();
                if out.success() {
                    print_success("标签推送完成");
                }
            }
            "5" => {
                let name = prompt.ask("\n请输入要检出的标签名: ")?;
                if name.is_empty() {
                    print_warning("标签名不能为空");
                    continue;
                }
                print_warning("检出标签将进入游离 HEAD 状态");
                let out = runner.run(&["checkout", &name])?;
                out.echo();
            }
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}
