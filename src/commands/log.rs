//! 历史查看: the read-only log family.

use crate::core::{print_section_header, print_warning, GitRunner, Prompter, Result};

pub fn handle_log(runner: &dyn GitRunner, prompt: &mut dyn Prompter) -> Result<()> {
    loop {
        print_section_header("历史查看");
        println!("1. 查看完整历史");
        println!("2. 查看简化历史    (--oneline)");
        println!("3. 查看分支历史    (--graph)");
        println!("4. 查看文件历史");
        println!("5. 搜索历史记录");
        println!("6. 查看指定作者的提交");
        println!("\n0. 返回主菜单");

        let out = match prompt.ask("\n请选择操作: ")?.as_str() {
            "0" => return Ok(()),
            "1" => runner.run(&["log", "--stat"])?,
            "2" => runner.run(&["log", "--oneline", "-20"])?,
            "3" => runner.run(&["log", "--graph", "--oneline", "--all"])?,
            "4" => {
                let file = prompt.ask("\n请输入文件路径: ")?;
                if file.is_empty() {
                    print_warning("文件路径不能为空");
                    continue;
                }
                runner.run(&["log", "--follow", "--oneline", "--", &file])?
            }
            "5" => {
                let keyword = prompt.ask("\n请输入搜索关键词: ")?;
                if keyword.is_empty() {
                    print_warning("关键词不能为空");
                    continue;
                }
                runner.run(&["log", "--oneline", "--grep", &keyword])?
            }
            "6" => {
                let author = prompt.ask("\n请输入作者名: ")?;
                if author.is_empty() {
                    print_warning("作者名不能为空");
                    continue;
                }
                runner.run(&["log", "--oneline", "--author", &author])?
            }
            other => {
                print_warning(&format!("无效的选择: {}", other));
                continue;
            }
        };

        out.echo();
        if out.success() && out.stdout.trim().is_empty() {
            println!("\n(没有匹配的提交记录)");
        }
        prompt.pause()?;
    }
}
