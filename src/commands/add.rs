//! 暂存更改: staging files, including interactive hunk selection.

use crate::core::{print_info, print_section_header, print_success, print_warning, GitRunner, Prompter, Result};

pub fn handle_add(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("暂存更改");
        println!("1. 暂存所有更改   (git add .)");
        println!("2. 暂存指定文件   (git add <file>)");
        println!("3. 交互式暂存     (git add -p)");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                let out = runner.run(&["add", "."])?;
                out.echo();
                if out.success() {
                    print_success("已暂存所有更改");
                    show_staged(runner)?;
                }
            }
            "2" => {
                let path = prompt.ask("\n请输入文件路径 (可用空格分隔多个): ")?;
                if path.is_empty() {
                    print_warning("文件路径不能为空");
                    continue;
                }
                let mut args = vec!["add"];
                args.extend(path.split_whitespace());
                let out = runner.run(&args)?;
                out.echo();
                if out.success() {
                    print_success("已暂存指定文件");
                    show_staged(runner)?;
                }
            }
            "3" => {
                print_info("进入交互式暂存，你可以逐块审查更改 (y 暂存 / n 跳过 / s 拆分 / q 退出)");
                // git drives the terminal itself here; output is not captured.
                runner.run_interactive(&["add", "-p"])?;
            }
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

fn show_staged(runner: &dyn GitRunner) -> Result<()> {
    let out = runner.run(&["status", "-s"])?;
    if out.success() && !out.stdout.trim().is_empty() {
        println!("\n当前暂存区:");
        print!("{}", out.stdout);
    }
    Ok(())
}
