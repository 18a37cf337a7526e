//! 仓库维护: clean, gc, fsck and remote prune.

use crate::core::{
    print_info, print_section_header, print_success, print_warning, GitRunner, Prompter, Result,
};

pub fn handle_maintenance(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("仓库维护");
        println!("1. 清理未跟踪文件 (git clean)");
        println!("2. 垃圾回收       (git gc)");
        println!("3. 完整性检查     (git fsck)");
        println!("4. 清理远程引用   (git remote prune)");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => clean_untracked(runner, prompt)?,
            "2" => {
                print_info("正在执行垃圾回收...");
                let out = runner.run(&["gc"])?;
                out.echo();
                if out.success() {
                    print_success("垃圾回收完成");
                }
            }
            "3" => {
                let out = runner.run(&["fsck"])?;
                out.echo();
                if out.success() {
                    print_success("完整性检查完成");
                }
                prompt.pause()?;
            }
            "4" => {
                let out = runner.run(&["remote", "prune", "origin"])?;
                out.echo();
                if out.success() {
                    print_success("远程引用已清理");
                }
            }
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

/// Dry-run first, then delete only after the user has seen the exact list.
fn clean_untracked(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    let preview = runner.run(&["clean", "-nd"])?;
    if !preview.success() {
        preview.echo();
        return Ok(());
    }
    if preview.stdout.trim().is_empty() {
        print_info("没有需要清理的未跟踪文件");
        return Ok(());
    }

    println!("\n将要删除的文件:");
    print!("{}", preview.stdout);
    if !prompt.confirm("⚠ 以上文件将被永久删除，确定吗？")? {
        return Ok(());
    }

    let out = runner.run(&["clean", "-fd"])?;
    out.echo();
    if out.success() {
        print_success("清理完成");
    }
    Ok(())
}
