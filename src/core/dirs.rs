use std::path::PathBuf;

/// Directory holding the persisted configuration files.
///
/// A project-local `.ezgit/` takes precedence when it already exists, so a
/// repository can carry its own menu setup; otherwise the user-scoped
/// `~/.ezgit` is used.
pub fn get_config_directory() -> PathBuf {
    let local = PathBuf::from(".ezgit");
    if local.exists() {
        return local;
    }

    dirs::home_dir().unwrap_or_default().join(".ezgit")
}

/// Path of the persisted menu configuration.
pub fn menu_config_path() -> PathBuf {
    get_config_directory().join("menu_config.json")
}

/// Path of the persisted tool configuration.
pub fn tool_config_path() -> PathBuf {
    get_config_directory().join("config.json")
}
