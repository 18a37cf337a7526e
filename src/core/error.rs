//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`EzGitError`] which covers every failure mode of the
//! tool. It uses `thiserror` for ergonomic error definitions and provides
//! constructor helpers for the parameterized variants.
//!
//! # Public API
//! - [`EzGitError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, EzGitError>`
//!
//! # Error Categories
//! - **Execution**: the `git` binary could not be spawned at all. A git
//!   process that runs and exits non-zero is *not* an error; that outcome is
//!   returned as a normal [`crate::core::runner::CmdOutput`].
//! - **Validation**: bad menu-edit input (reserved/duplicate/malformed ids,
//!   unknown menu mode, invalid category selection). Aborts only the current
//!   edit step.
//! - **Persistence**: configuration read/write/parse failures.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for ezgit
#[derive(Error, Debug)]
pub enum EzGitError {
    // Process execution errors
    #[error("无法启动 git，请确认已安装并在 PATH 中: {source}")]
    GitSpawnFailed { source: std::io::Error },

    // Menu-edit validation errors
    #[error("编号 {id} 为系统保留编号(1-5)，不可使用")]
    ReservedMenuId { id: String },

    #[error("编号 {id} 已被使用")]
    DuplicateMenuId { id: String },

    #[error("无效的编号: {id} (必须是数字)")]
    MalformedMenuId { id: String },

    #[error("编号 {id} 过小，自定义菜单编号必须从 6 开始")]
    MenuIdBelowMinimum { id: String },

    #[error("未知的菜单模式: {mode}")]
    UnknownMenuMode { mode: String },

    #[error("分类 '{category}' 为系统保留分类，不可修改")]
    BuiltinCategoryImmutable { category: String },

    #[error("无效的分类编号: {input}")]
    InvalidCategoryChoice { input: String },

    // Persistence errors
    #[error("读取配置文件 '{path}' 失败: {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("写入配置文件 '{path}' 失败: {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("解析配置文件 '{path}' 失败: {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Update check errors
    #[error("检查更新失败: {0}")]
    UpdateCheckFailed(#[from] self_update::errors::Error),

    #[error("无效的版本号 '{version}': {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },

    // Passthrough
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using EzGitError
pub type Result<T> = std::result::Result<T, EzGitError>;

impl EzGitError {
    /// Create a git spawn failure error
    pub fn git_spawn_failed(source: std::io::Error) -> Self {
        Self::GitSpawnFailed { source }
    }

    /// Create a reserved menu id error
    pub fn reserved_menu_id(id: impl Into<String>) -> Self {
        Self::ReservedMenuId { id: id.into() }
    }

    /// Create a duplicate menu id error
    pub fn duplicate_menu_id(id: impl Into<String>) -> Self {
        Self::DuplicateMenuId { id: id.into() }
    }

    /// Create a malformed menu id error
    pub fn malformed_menu_id(id: impl Into<String>) -> Self {
        Self::MalformedMenuId { id: id.into() }
    }

    /// Create a menu id below minimum error
    pub fn menu_id_below_minimum(id: impl Into<String>) -> Self {
        Self::MenuIdBelowMinimum { id: id.into() }
    }

    /// Create an unknown menu mode error
    pub fn unknown_menu_mode(mode: impl Into<String>) -> Self {
        Self::UnknownMenuMode { mode: mode.into() }
    }

    /// Create an invalid category choice error
    pub fn invalid_category_choice(input: impl Into<String>) -> Self {
        Self::InvalidCategoryChoice {
            input: input.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a menu-edit validation failure. Validation
    /// failures abort only the current edit step; the shell returns to the
    /// same menu with prior state preserved.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ReservedMenuId { .. }
                | Self::DuplicateMenuId { .. }
                | Self::MalformedMenuId { .. }
                | Self::MenuIdBelowMinimum { .. }
                | Self::UnknownMenuMode { .. }
                | Self::BuiltinCategoryImmutable { .. }
                | Self::InvalidCategoryChoice { .. }
        )
    }
}
