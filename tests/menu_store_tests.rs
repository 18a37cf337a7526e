//! End-to-end checks of the persisted menu configuration through the
//! public API: every mutation must survive a fresh open of the same file.

use ezgit::core::{EzGitError, MenuMode, MenuStore};
use tempfile::TempDir;

fn config_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("menu_config.json")
}

#[test]
fn test_mutations_survive_reopen() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let mut store = MenuStore::open(config_path(&dir));
    store.add_entry("高级操作", "拣选提交", "git cherry-pick", "6")?;
    store.add_entry("高级操作", "二分查找", "git bisect", "7")?;
    store.set_mode(MenuMode::Custom)?;
    drop(store);

    let reopened = MenuStore::open(config_path(&dir));
    assert_eq!(reopened.mode(), MenuMode::Custom);
    assert_eq!(
        reopened.config().find_entry("7").map(|e| e.command.clone()),
        Some("git bisect".to_string())
    );
    Ok(())
}

#[test]
fn test_duplicate_id_rejected_across_categories() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let mut store = MenuStore::open(config_path(&dir));
    store.add_entry("高级操作", "拣选提交", "git cherry-pick", "6")?;

    let result = store.add_entry("另一分类", "其他", "git bisect", "6");
    assert!(matches!(result, Err(EzGitError::DuplicateMenuId { .. })));

    // The failed add must not have touched the stored configuration.
    let reopened = MenuStore::open(config_path(&dir));
    assert_eq!(
        reopened.config().find_entry("6").map(|e| e.label.clone()),
        Some("拣选提交".to_string())
    );
    Ok(())
}

#[test]
fn test_removing_last_entry_drops_category() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let mut store = MenuStore::open(config_path(&dir));
    store.add_entry("高级操作", "拣选提交", "git cherry-pick", "6")?;
    assert!(store.remove_entry("6")?);

    let reopened = MenuStore::open(config_path(&dir));
    assert_eq!(reopened.config().categories.len(), 1);
    assert!(reopened.config().find_entry("6").is_none());
    Ok(())
}

#[test]
fn test_failed_persist_leaves_memory_and_disk_unchanged() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let mut store = MenuStore::open(config_path(&dir));
    store.add_entry("高级操作", "拣选提交", "git cherry-pick", "6")?;
    let before = store.config().clone();

    // A directory squatting on the temp-file path makes the next persist
    // fail mid-write.
    std::fs::create_dir(dir.path().join("menu_config.json.tmp"))?;

    let result = store.add_entry("高级操作", "二分查找", "git bisect", "7");
    assert!(matches!(result, Err(EzGitError::ConfigWriteFailed { .. })));
    assert_eq!(store.config(), &before);

    let reopened = MenuStore::open(config_path(&dir));
    assert_eq!(reopened.config(), &before);
    Ok(())
}

#[test]
fn test_reset_restores_builtin_only_full_mode() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let mut store = MenuStore::open(config_path(&dir));
    store.add_entry("高级操作", "拣选提交", "git cherry-pick", "6")?;
    store.set_mode(MenuMode::Simple)?;
    store.reset_to_default()?;

    let reopened = MenuStore::open(config_path(&dir));
    assert_eq!(reopened.mode(), MenuMode::Full);
    assert_eq!(reopened.config().categories.len(), 1);
    assert_eq!(reopened.config().categories[0].entries.len(), 5);
    Ok(())
}
