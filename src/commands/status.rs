//! 仓库状态: status display, repository init and clone.

use crate::core::{
    print_error, print_info, print_section_header, print_success, print_warning, GitRunner,
    Prompter, Result,
};

pub fn handle_status(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("仓库状态");
        println!("1. 查看仓库状态   (git status)");
        println!("2. 初始化仓库     (git init)");
        println!("3. 克隆仓库       (git clone)");
        println!("\n0. 返回主菜单");

        match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => show_status(runner, prompt)?,
            "2" => init_repository(runner, prompt)?,
            "3" => clone_repository(runner, prompt)?,
            other => print_warning(&format!("无效的选择: {}", other)),
        }
    }
}

fn show_status(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    let branch = runner.run(&["branch", "--show-current"])?;
    if branch.success() && !branch.stdout.trim().is_empty() {
        print_info(&format!("当前分支: {}", branch.stdout.trim()));
    }

    let status = runner.run(&["status"])?;
    status.echo();
    if !status.success() {
        print_error("无法获取仓库状态，请确认当前目录是一个 git 仓库");
    }
    prompt.pause()
}

fn init_repository(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    println!("\n1. 在当前目录初始化");
    println!("2. 创建新目录并初始化");
    println!("\n0. 返回上级菜单");

    match prompt.ask("\n请选择: ")?.as_str() {
        "1" => {
            let out = runner.run(&["init"])?;
            out.echo();
            if out.success() {
                print_success("仓库初始化完成");
            }
        }
        "2" => {
            let name = prompt.ask("\n请输入新目录名: ")?;
            if name.is_empty() {
                print_warning("目录名不能为空");
                return Ok(());
            }
            let out = runner.run(&["init", &name])?;
            out.echo();
            if out.success() {
                print_success(&format!("仓库已创建于 {}/", name));
            }
        }
        _ => {}
    }
    Ok(())
}

fn clone_repository(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    println!("\n1. 克隆远程仓库");
    println!("2. 克隆指定分支");
    println!("3. 克隆指定标签");
    println!("\n0. 返回上级菜单");

    let choice = prompt.ask("\n请选择: ")?;
    if !matches!(choice.as_str(), "1" | "2" | "3") {
        return Ok(());
    }

    let url = prompt.ask("\n请输入仓库地址: ")?;
    if url.is_empty() {
        print_warning("仓库地址不能为空");
        return Ok(());
    }

    let out = match choice.as_str() {
        "1" => runner.run(&["clone", &url])?,
        "2" => {
            let branch = prompt.ask("请输入分支名: ")?;
            runner.run(&["clone", "-b", &branch, &url])?
        }
        _ => {
            let tag = prompt.ask("请输入标签名: ")?;
            runner.run(&["clone", "-b", &tag, &url])?
        }
    };
    out.echo();
    if out.success() {
        print_success("克隆完成");
    } else {
        print_error("克隆失败，请检查地址和网络连接");
    }
    Ok(())
}
