//! 自定义菜单: editing the persisted menu configuration.
//!
//! Validation failures (reserved or duplicate ids, malformed input) abort
//! only the current edit step; the menu re-renders with prior state intact.

use crate::core::{
    category_choice, print_error, print_info, print_section_header, print_success, print_warning,
    CategoryChoice, MenuStore, Prompter, Result, BUILTIN_CATEGORY,
};

pub fn handle_custom_menu(store: &mut MenuStore, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("自定义菜单");
        println!("1. 查看当前配置");
        println!("2. 添加菜单项");
        println!("3. 删除菜单项");
        println!("4. 恢复默认配置");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                show_configuration(store);
                prompt.pause()?;
            }
            "2" => {
                if let Err(e) = add_entry(store, prompt) {
                    if e.is_validation() {
                        print_error(&e.to_string());
                    } else {
                        return Err(e);
                    }
                }
            }
            "3" => {
                if let Err(e) = remove_entry(store, prompt) {
                    if e.is_validation() {
                        print_error(&e.to_string());
                    } else {
                        return Err(e);
                    }
                }
            }
            "4" => {
                if prompt.confirm("将删除所有自定义菜单项并恢复默认配置，确定吗？")? {
                    store.reset_to_default()?;
                    print_success("已恢复默认配置");
                }
            }
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

fn show_configuration(store: &MenuStore) {
    println!("\n当前菜单模式: {}", store.mode().as_str());
    for category in &store.config().categories {
        let marker = if category.name == BUILTIN_CATEGORY {
            " (系统保留)"
        } else {
            ""
        };
        println!("\n[{}]{}", category.name, marker);
        for entry in &category.entries {
            println!("  {}. {}  ({})", entry.id, entry.label, entry.command);
        }
    }
}

/// Ready-made commands offered when adding a menu item, so common additions
/// need no typing.
const COMMAND_CATALOG: &[(&str, &str)] = &[
    ("拣选提交", "git cherry-pick"),
    ("查看差异", "git diff"),
    ("查看引用日志", "git reflog"),
    ("贡献统计", "git shortlog -sn HEAD"),
    ("二分查找", "git bisect"),
    ("更新子模块", "git submodule update --init"),
];

fn add_entry(store: &mut MenuStore, prompt: &mut dyn Prompter) -> Result<()> {
    // Selectable categories exclude the immutable built-in one.
    let selectable: Vec<String> = store
        .config()
        .categories
        .iter()
        .filter(|c| c.name != BUILTIN_CATEGORY)
        .map(|c| c.name.clone())
        .collect();

    println!("\n选择分类:");
    for (i, name) in selectable.iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }
    println!("0. 新建分类");

    let input = prompt.ask("\n请选择分类: ")?;
    let category = match category_choice(selectable.len(), &input)? {
        CategoryChoice::Existing(index) => selectable[index].clone(),
        CategoryChoice::CreateNew => {
            let name = prompt.ask("\n请输入新分类名: ")?;
            if name.is_empty() || name == BUILTIN_CATEGORY {
                print_warning("无效的分类名");
                return Ok(());
            }
            name
        }
    };

    println!("\n常用命令:");
    for (i, (label, command)) in COMMAND_CATALOG.iter().enumerate() {
        println!("{}. {}  ({})", i + 1, label, command);
    }
    println!("0. 手动输入");

    let picked = prompt.ask("\n请选择命令: ")?;
    let (label, command) = match picked.parse::<usize>() {
        Ok(n) if (1..=COMMAND_CATALOG.len()).contains(&n) => {
            let (label, command) = COMMAND_CATALOG[n - 1];
            (label.to_string(), command.to_string())
        }
        _ => {
            let label = prompt.ask("\n请输入菜单名称: ")?;
            let command = prompt.ask("请输入对应的 git 命令 (如 git cherry-pick): ")?;
            if label.is_empty() || command.is_empty() {
                print_warning("名称和命令不能为空");
                return Ok(());
            }
            (label, command)
        }
    };

    let id = prompt.ask("\n请输入菜单编号 (数字，从 6 开始): ")?;
    let entry = store.add_entry(&category, &label, &command, &id)?;
    print_success(&format!(
        "菜单项 {}. {} 已添加到 [{}]",
        entry.id, entry.label, category
    ));
    Ok(())
}

fn remove_entry(store: &mut MenuStore, prompt: &mut dyn Prompter) -> Result<()> {
    show_configuration(store);

    let id = prompt.ask("\n请输入要删除的菜单编号 (q 取消): ")?;
    if id.is_empty() || id == "q" {
        return Ok(());
    }

    if store.remove_entry(&id)? {
        print_success(&format!("菜单项 {} 已删除", id));
    } else {
        print_info(&format!("没有找到编号为 {} 的菜单项", id));
    }
    Ok(())
}
