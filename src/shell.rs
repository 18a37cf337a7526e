//! The interactive shell: renders the menu for the active mode, reads a
//! selection and dispatches to the matching handler.
//!
//! The shell itself holds no git state. Handlers receive the runner and
//! prompter and return to the loop when the user backs out; `0` at the top
//! level exits the program.

use crate::commands;
use crate::core::{
    print_info, print_warning, GitRunner, MenuMode, MenuStore, Prompter, Result, BUILTIN_CATEGORY,
};

/// Run the interactive loop until the user exits.
pub fn run_shell(
    runner: &dyn GitRunner,
    prompt: &mut dyn Prompter,
    store: &mut MenuStore,
    auto_push: bool,
) -> Result<()> {
    loop {
        match store.mode() {
            MenuMode::Full => render_full_menu(),
            MenuMode::Simple => render_simple_menu(store),
            MenuMode::Custom => render_custom_menu(store),
        }

        let choice = prompt.ask("\n请输入选项: ")?;
        match choice.as_str() {
            "0" => {
                print_info("感谢使用 EzGit，再见！");
                return Ok(());
            }
            "h" | "H" => show_help(prompt)?,
            "u" | "U" => {
                if let Err(e) = commands::handle_update() {
                    crate::core::print_error(&e.to_string());
                }
            }
            "m" | "M" => commands::handle_settings(runner, prompt, store)?,
            other => match store.mode() {
                MenuMode::Full => dispatch_full(runner, prompt, store, other, auto_push)?,
                MenuMode::Simple | MenuMode::Custom => {
                    match store.config().find_entry(other).map(|e| e.command.clone()) {
                        Some(command) => dispatch_command(runner, prompt, &command, auto_push)?,
                        None => print_warning(&format!("无效的选择: {}", other)),
                    }
                }
            },
        }
    }
}

fn render_full_menu() {
    println!("\n{}", "=".repeat(50));
    println!("EzGit v{} - 让 Git 操作变得简单", env!("CARGO_PKG_VERSION"));
    println!("{}", "=".repeat(50));

    println!("\n常用操作:");
    println!("1. 仓库状态     (git status/init/clone)");
    println!("2. 暂存更改     (git add)");
    println!("3. 提交更改     (git commit)");
    println!("4. 历史查看     (git log)");
    println!("5. 推送更改     (git push)");
    println!("6. 拉取更新     (git pull)");

    println!("\n分支操作:");
    println!("7. 分支管理     (git branch)");
    println!("8. 切换分支     (git checkout)");
    println!("9. 合并分支     (git merge)");
    println!("10. 变基操作    (git rebase)");

    println!("\n远程与标签:");
    println!("11. 远程配置    (git remote)");
    println!("12. 标签管理    (git tag)");

    println!("\n高级操作:");
    println!("13. 储藏操作    (git stash)");
    println!("14. 版本管理    (reset/revert/restore)");
    println!("15. 仓库维护    (clean/gc)");

    println!("\n工具设置:");
    println!("16. 配置管理    (config/alias)");
    println!("17. 自定义菜单");

    println!("\nh. 显示帮助");
    println!("u. 检查更新");
    println!("0. 退出程序");
    println!("\n{}", "=".repeat(50));
}

fn render_simple_menu(store: &MenuStore) {
    println!("\n{}", "=".repeat(50));
    println!("EzGit v{} (简洁模式)", env!("CARGO_PKG_VERSION"));
    println!("{}", "=".repeat(50));

    if let Some(builtin) = store
        .config()
        .categories
        .iter()
        .find(|c| c.name == BUILTIN_CATEGORY)
    {
        println!();
        for entry in &builtin.entries {
            println!("{}. {}     ({})", entry.id, entry.label, entry.command);
        }
    }

    println!("\nm. 配置管理");
    println!("h. 显示帮助");
    println!("0. 退出程序");
}

fn render_custom_menu(store: &MenuStore) {
    println!("\n{}", "=".repeat(50));
    println!("EzGit v{} (自定义模式)", env!("CARGO_PKG_VERSION"));
    println!("{}", "=".repeat(50));

    for category in &store.config().categories {
        println!("\n[{}]", category.name);
        for entry in &category.entries {
            println!("{}. {}     ({})", entry.id, entry.label, entry.command);
        }
    }

    println!("\nm. 配置管理");
    println!("h. 显示帮助");
    println!("0. 退出程序");
}

fn dispatch_full(
    runner: &dyn GitRunner,
    prompt: &mut dyn Prompter,
    store: &mut MenuStore,
    choice: &str,
    auto_push: bool,
) -> Result<()> {
    match choice {
        "1" => commands::handle_status(runner, prompt),
        "2" => commands::handle_add(runner, prompt),
        "3" => commands::handle_commit(runner, prompt, auto_push),
        "4" => commands::handle_log(runner, prompt),
        "5" => commands::handle_push(runner, prompt),
        "6" => commands::handle_pull(runner, prompt),
        "7" => commands::handle_branch(runner, prompt),
        "8" => commands::handle_checkout(runner, prompt),
        "9" => commands::handle_merge(runner, prompt),
        "10" => commands::handle_rebase(runner, prompt),
        "11" => commands::handle_remote(runner, prompt),
        "12" => commands::handle_tag(runner, prompt),
        "13" => commands::handle_stash(runner, prompt),
        "14" => commands::handle_versioning(runner, prompt),
        "15" => commands::handle_maintenance(runner, prompt),
        "16" => commands::handle_settings(runner, prompt, store),
        "17" => commands::handle_custom_menu(store, prompt),
        other => {
            print_warning(&format!("无效的选择: {}", other));
            Ok(())
        }
    }
}

/// Dispatch a menu entry's command template. Known templates route to their
/// full interactive handler; anything else runs verbatim through the runner.
pub fn dispatch_command(
    runner: &dyn GitRunner,
    prompt: &mut dyn Prompter,
    command: &str,
    auto_push: bool,
) -> Result<()> {
    match command.trim() {
        "git status" => commands::handle_status(runner, prompt),
        "git add" => commands::handle_add(runner, prompt),
        "git commit" => commands::handle_commit(runner, prompt, auto_push),
        "git log" => commands::handle_log(runner, prompt),
        "git push" => commands::handle_push(runner, prompt),
        "git pull" => commands::handle_pull(runner, prompt),
        "git branch" => commands::handle_branch(runner, prompt),
        "git checkout" => commands::handle_checkout(runner, prompt),
        "git merge" => commands::handle_merge(runner, prompt),
        "git rebase" => commands::handle_rebase(runner, prompt),
        "git remote" => commands::handle_remote(runner, prompt),
        "git tag" => commands::handle_tag(runner, prompt),
        "git stash" => commands::handle_stash(runner, prompt),
        other => run_verbatim(runner, other),
    }
}

fn run_verbatim(runner: &dyn GitRunner, command: &str) -> Result<()> {
    let mut parts = split_template(command);
    if parts.first().map(String::as_str) == Some("git") {
        parts.remove(0);
    }
    if parts.is_empty() {
        print_warning("菜单项没有配置命令");
        return Ok(());
    }

    let args: Vec<&str> = parts.iter().map(String::as_str).collect();
    let out = runner.run(&args)?;
    out.echo();
    Ok(())
}

/// Split a command template into arguments. Single and double quotes group
/// words, so a template like `git commit -m "wip msg"` keeps its message as
/// one argument; an unterminated quote runs to the end of the template.
fn split_template(command: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in command.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        args.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }
    if in_word {
        args.push(current);
    }
    args
}

fn show_help(prompt: &mut dyn Prompter) -> Result<()> {
    println!("\n基本操作说明:");
    println!("1. 使用数字键选择对应的功能");
    println!("2. 大部分操作都有详细的子菜单和提示");
    println!("3. 子菜单中输入 0 返回上级菜单");

    println!("\n常见工作流程:");
    println!("  修改代码 -> 暂存更改(2) -> 提交更改(3) -> 推送更改(5)");
    println!("  推送失败时工具会给出可行的恢复选项");

    println!("\n注意事项:");
    println!("  带 ⚠ 的操作会丢弃数据，执行前都需要确认");
    println!("  可在 [配置管理] 中切换菜单模式，在 [自定义菜单] 中添加常用命令");

    prompt.pause()
}
