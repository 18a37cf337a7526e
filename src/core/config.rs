use crate::core::dirs::tool_config_path;
use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RepositoryConfig {
    pub owner: String,
    pub name: String,
    pub bin_name: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            owner: "SoKeiKei".to_string(),
            name: "EzGit".to_string(),
            bin_name: "ezgit".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateConfig {
    pub last_check: Option<chrono::DateTime<chrono::Utc>>,
    pub auto_check_enabled: bool,
    pub skip_version: Option<String>,
}

fn default_branch_name() -> String {
    "main".to_string()
}

/// Tool-level settings persisted next to the menu configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ToolConfig {
    pub installed_version: String,
    pub install_date: chrono::DateTime<chrono::Utc>,
    #[serde(default = "default_branch_name")]
    pub default_branch: String,
    #[serde(default)]
    pub auto_push: bool,
    pub repository: RepositoryConfig,
    pub update_config: UpdateConfig,
}

impl ToolConfig {
    pub fn load_or_create() -> Result<Self> {
        Self::load_or_create_at(&tool_config_path())
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let config = Self {
                installed_version: env!("CARGO_PKG_VERSION").to_string(),
                install_date: chrono::Utc::now(),
                default_branch: default_branch_name(),
                auto_push: false,
                repository: RepositoryConfig::default(),
                update_config: UpdateConfig::default(),
            };
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Read the configuration if the file exists, without creating one.
    /// Unreadable or malformed files fall back to `None` so startup
    /// never fails on a bad config.
    pub fn load_if_present() -> Option<Self> {
        Self::load_if_present_at(&tool_config_path())
    }

    pub fn load_if_present_at(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return None,
        };
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("工具配置 {} 解析失败: {}", path.display(), e);
                None
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&tool_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Record a completed update check.
    pub fn mark_checked(&mut self) {
        self.update_config.last_check = Some(chrono::Utc::now());
    }
}
