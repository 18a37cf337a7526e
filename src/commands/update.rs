//! 检查更新: queries the latest GitHub release and compares versions.
//! The tool never replaces its own binary; it points at the release page.

use crate::core::{print_info, print_section_header, print_success, EzGitError, Result, ToolConfig};
use colored::*;
use semver::Version;

pub fn handle_update() -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    print_info("正在检查更新...");

    let mut config = ToolConfig::load_or_create()?;
    let latest = self_update::backends::github::Update::configure()
        .repo_owner(&config.repository.owner)
        .repo_name(&config.repository.name)
        .bin_name(&config.repository.bin_name)
        .current_version(current_version)
        .build()?
        .get_latest_release()?;

    display_update_check(&config, current_version, &latest)?;

    config.mark_checked();
    config.save()?;
    Ok(())
}

fn display_update_check(
    config: &ToolConfig,
    current: &str,
    latest: &self_update::update::Release,
) -> Result<()> {
    print_section_header("版本信息");
    println!("   当前版本: {}", format!("v{current}").blue());
    println!("   最新版本: {}", format!("v{}", latest.version).blue());

    if needs_update(current, &latest.version)? {
        println!("   状态:     {}", "有新版本可用".yellow());

        if let Some(notes) = &latest.body {
            print_section_header("更新内容");
            for line in notes.lines().take(5) {
                let clean_line = line.trim_start_matches("- ").trim_start_matches("* ");
                if !clean_line.is_empty() {
                    println!("   {} {}", "•".bright_black(), clean_line.white());
                }
            }
        }

        print_info(&format!(
            "请前往 https://github.com/{}/{}/releases 下载最新版本",
            config.repository.owner, config.repository.name
        ));
    } else {
        print_success(&format!("已是最新版本 (v{current})"));
    }

    Ok(())
}

fn needs_update(current: &str, latest: &str) -> Result<bool> {
    let current_version = Version::parse(current).map_err(|e| EzGitError::InvalidVersion {
        version: current.to_string(),
        source: e,
    })?;
    let latest_version = Version::parse(latest).map_err(|e| EzGitError::InvalidVersion {
        version: latest.to_string(),
        source: e,
    })?;

    Ok(latest_version > current_version)
}
