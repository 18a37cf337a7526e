//! 配置管理: git configuration, aliases and the menu display mode.

use crate::core::{
    print_info, print_section_header, print_success, print_warning, GitRunner, MenuMode, MenuStore,
    Prompter, Result, ToolConfig,
};

pub fn handle_settings(
    runner: &dyn GitRunner,
    prompt: &mut dyn Prompter,
    store: &mut MenuStore,
) -> Result<()> {
    loop {
        print_section_header("配置管理");
        println!("1. 查看所有配置");
        println!("2. 设置用户信息");
        println!("3. 设置默认编辑器");
        println!("4. 设置默认分支名");
        println!("5. 别名管理");
        println!("6. 菜单模式       (当前: {})", store.mode().as_str());
        println!("7. 工具选项");
        println!("8. 自定义菜单");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                let out = runner.run(&["config", "--list"])?;
                out.echo();
                prompt.pause()?;
            }
            "2" => {
                let name = prompt.ask("\n请输入用户名: ")?;
                let email = prompt.ask("请输入邮箱: ")?;
                if name.is_empty() || email.is_empty() {
                    print_warning("用户名和邮箱不能为空");
                    continue;
                }
                let set_name = runner.run(&["config", "--global", "user.name", &name])?;
                let set_email = runner.run(&["config", "--global", "user.email", &email])?;
                if set_name.success() && set_email.success() {
                    print_success("用户信息已更新");
                } else {
                    set_name.echo();
                    set_email.echo();
                }
            }
            "3" => {
                let editor = prompt.ask("\n请输入编辑器命令 (如 vim、code --wait): ")?;
                if editor.is_empty() {
                    print_warning("编辑器命令不能为空");
                    continue;
                }
                let out = runner.run(&["config", "--global", "core.editor", &editor])?;
                out.echo();
                if out.success() {
                    print_success("默认编辑器已更新");
                }
            }
            "4" => {
                let branch = prompt.ask("\n请输入默认分支名 (如 main): ")?;
                if branch.is_empty() {
                    print_warning("分支名不能为空");
                    continue;
                }
                let out = runner.run(&["config", "--global", "init.defaultBranch", &branch])?;
                out.echo();
                if out.success() {
                    print_success(&format!("新仓库的默认分支已设为 {}", branch));
                }
            }
            "5" => manage_aliases(runner, prompt)?,
            "6" => switch_menu_mode(prompt, store)?,
            "7" => edit_tool_options(prompt)?,
            // Simple and custom mode reach the menu editor through here;
            // the full menu also has it as a top-level item.
            "8" => super::menu_edit::handle_custom_menu(store, prompt)?,
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

fn manage_aliases(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        println!("\n1. 查看所有别名");
        println!("2. 添加别名");
        println!("3. 删除别名");
        println!("\n0. 返回上级菜单");

        match prompt.ask("\n请选择: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                let out = runner.run(&["config", "--global", "--get-regexp", "^alias\\."])?;
                out.echo();
                if !out.success() || out.stdout.trim().is_empty() {
                    print_info("还没有配置任何别名");
                }
            }
            "2" => {
                let name = prompt.ask("\n请输入别名 (如 co): ")?;
                let command = prompt.ask("请输入对应的命令 (如 checkout): ")?;
                if name.is_empty() || command.is_empty() {
                    print_warning("别名和命令不能为空");
                    continue;
                }
                let key = format!("alias.{}", name);
                let out = runner.run(&["config", "--global", &key, &command])?;
                out.echo();
                if out.success() {
                    print_success(&format!("别名 {} -> {} 已添加", name, command));
                }
            }
            "3" => {
                let name = prompt.ask("\n请输入要删除的别名: ")?;
                if name.is_empty() {
                    print_warning("别名不能为空");
                    continue;
                }
                let key = format!("alias.{}", name);
                let out = runner.run(&["config", "--global", "--unset", &key])?;
                out.echo();
                if out.success() {
                    print_success(&format!("别名 {} 已删除", name));
                } else {
                    print_warning(&format!("别名 {} 不存在", name));
                }
            }
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

fn switch_menu_mode(prompt: &mut dyn Prompter, store: &mut MenuStore) -> Result<()> {
    println!("\n1. 完整模式 (full): 显示全部功能菜单");
    println!("2. 简洁模式 (simple): 只显示五个常用操作");
    println!("3. 自定义模式 (custom): 显示自定义菜单配置");
    println!("\n0. 取消");

    let mode = match prompt.ask("\n请选择模式: ")?.as_str() {
        "1" => MenuMode::Full,
        "2" => MenuMode::Simple,
        "3" => MenuMode::Custom,
        _ => return Ok(()),
    };
    store.set_mode(mode)?;
    print_success(&format!("菜单模式已切换为 {}", mode.as_str()));
    Ok(())
}

fn edit_tool_options(prompt: &mut dyn Prompter) -> Result<()> {
    let mut config = ToolConfig::load_or_create()?;

    println!("\n1. 默认分支       (当前: {})", config.default_branch);
    println!(
        "2. 提交后自动推送 (当前: {})",
        if config.auto_push { "开" } else { "关" }
    );
    println!("\n0. 取消");

    match prompt.ask("\n请选择: ")?.as_str() {
        "1" => {
            let branch = prompt.ask("\n请输入默认分支名: ")?;
            if branch.is_empty() {
                print_warning("分支名不能为空");
                return Ok(());
            }
            config.default_branch = branch;
        }
        "2" => {
            config.auto_push = !config.auto_push;
            print_info(&format!(
                "提交后自动推送已{}",
                if config.auto_push { "开启" } else { "关闭" }
            ));
        }
        _ => return Ok(()),
    }

    config.save()?;
    print_success("工具选项已保存，下次启动后生效");
    Ok(())
}
