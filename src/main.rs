use clap::Parser;
use ezgit::core::{dirs, print_error, ConsolePrompter, GitCli, MenuStore, ToolConfig};
use ezgit::shell;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ezgit")]
#[command(about = "交互式 Git 命令行工具，让 Git 操作变得简单")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Use an alternate menu configuration file
    #[arg(long, value_name = "FILE")]
    menu_config: Option<PathBuf>,

    /// Run a single menu command template and exit (e.g. "git status")
    #[arg(short = 'c', long, value_name = "COMMAND")]
    command: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let runner = GitCli::new();
    let mut prompt = ConsolePrompter;
    let config_path = cli.menu_config.unwrap_or_else(dirs::menu_config_path);
    let mut store = MenuStore::open(config_path);
    let auto_push = ToolConfig::load_if_present().map_or(false, |c| c.auto_push);

    let result = match cli.command {
        Some(command) => shell::dispatch_command(&runner, &mut prompt, &command, auto_push),
        None => shell::run_shell(&runner, &mut prompt, &mut store, auto_push),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
