//! Persisted menu configuration model and store.
//!
//! The menu a user sees is driven by a single JSON document at a fixed
//! user-scoped location:
//!
//! ```json
//! {
//!   "mode": "full",
//!   "custom_menu": {
//!     "常用操作": [["1", "查看状态", "git status"], ...],
//!     "我的分类": [["6", "查看历史", "git log"]]
//!   }
//! }
//! ```
//!
//! The dynamic shape is normalized into the typed
//! [`MenuConfiguration`]/[`MenuCategory`]/[`MenuEntry`] model by a
//! validating loader that backfills defaults field by field instead of
//! trusting the on-disk shape at every use site.
//!
//! # Invariants
//! - The built-in category `常用操作` is always present, always holds the
//!   five fixed entries with ids 1-5, and is never changed by user edits.
//! - Ids 1-5 never appear in any other category.
//! - User-assigned ids are digit strings >= 6 and globally unique across
//!   all categories.
//! - A category left empty by a removal is deleted.
//! - Every mutation persists the whole configuration atomically
//!   (write-temp-then-rename); on persist failure both the in-memory and
//!   on-disk configurations stay as they were.

use crate::core::error::{EzGitError, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Name of the immutable built-in category.
pub const BUILTIN_CATEGORY: &str = "常用操作";

/// Highest id reserved for built-in entries.
pub const RESERVED_ID_MAX: u32 = 5;

/// First id available to user-added entries.
pub const FIRST_FREE_ID: u32 = 6;

/// Which menu the shell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    Full,
    Simple,
    Custom,
}

impl MenuMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuMode::Full => "full",
            MenuMode::Simple => "simple",
            MenuMode::Custom => "custom",
        }
    }

    /// Strict parse used when the user asks for a mode explicitly.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "full" => Ok(MenuMode::Full),
            "simple" => Ok(MenuMode::Simple),
            "custom" => Ok(MenuMode::Custom),
            other => Err(EzGitError::unknown_menu_mode(other)),
        }
    }

    /// Lenient parse used on load: an unrecognized persisted value is
    /// normalized to `Full` rather than failing.
    fn normalize(s: &str) -> Self {
        MenuMode::parse(s).unwrap_or(MenuMode::Full)
    }
}

/// One selectable menu item. Identity is `id`; the uniqueness invariant
/// spans the whole configuration, not just one category.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub id: String,
    pub label: String,
    pub command: String,
}

impl MenuEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            command: command.into(),
        }
    }
}

/// A named, ordered group of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory {
    pub name: String,
    pub entries: Vec<MenuEntry>,
}

/// The whole persisted configuration: active mode plus an ordered list of
/// categories, built-in first.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfiguration {
    pub mode: MenuMode,
    pub categories: Vec<MenuCategory>,
}

impl MenuConfiguration {
    /// The five fixed entries of the built-in category.
    pub fn builtin_entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry::new("1", "查看状态", "git status"),
            MenuEntry::new("2", "暂存更改", "git add"),
            MenuEntry::new("3", "提交更改", "git commit"),
            MenuEntry::new("4", "推送更改", "git push"),
            MenuEntry::new("5", "拉取更新", "git pull"),
        ]
    }

    /// Configuration used on first run and after a reset: built-in category
    /// only, mode `Full`.
    pub fn default_config() -> Self {
        Self {
            mode: MenuMode::Full,
            categories: vec![MenuCategory {
                name: BUILTIN_CATEGORY.to_string(),
                entries: Self::builtin_entries(),
            }],
        }
    }

    /// Validating loader. Accepts any JSON shape and backfills defaults
    /// field by field: unknown mode becomes `Full`, a missing or malformed
    /// `custom_menu` becomes the built-in defaults, malformed entries are
    /// dropped, ids that are duplicated or stray into the reserved range
    /// are dropped, and the built-in category is pinned to its canonical
    /// contents in first position.
    pub fn from_value(value: &Value) -> Self {
        let mode = value
            .get("mode")
            .and_then(Value::as_str)
            .map(MenuMode::normalize)
            .unwrap_or(MenuMode::Full);

        let mut categories = vec![MenuCategory {
            name: BUILTIN_CATEGORY.to_string(),
            entries: Self::builtin_entries(),
        }];

        let mut seen_ids: Vec<String> =
            Self::builtin_entries().into_iter().map(|e| e.id).collect();

        if let Some(menu) = value.get("custom_menu").and_then(Value::as_object) {
            for (name, items) in menu {
                if name == BUILTIN_CATEGORY {
                    // Built-in contents are never taken from disk.
                    continue;
                }
                let mut entries = Vec::new();
                for item in items.as_array().map(Vec::as_slice).unwrap_or(&[]) {
                    let Some(entry) = parse_entry(item) else {
                        continue;
                    };
                    if !is_valid_user_id(&entry.id) || seen_ids.contains(&entry.id) {
                        continue;
                    }
                    seen_ids.push(entry.id.clone());
                    entries.push(entry);
                }
                if !entries.is_empty() {
                    categories.push(MenuCategory {
                        name: name.clone(),
                        entries,
                    });
                }
            }
        }

        Self { mode, categories }
    }

    /// Wire representation, category order preserved.
    pub fn to_value(&self) -> Value {
        let mut menu = Map::new();
        for category in &self.categories {
            let items: Vec<Value> = category
                .entries
                .iter()
                .map(|e| {
                    Value::Array(vec![
                        Value::String(e.id.clone()),
                        Value::String(e.label.clone()),
                        Value::String(e.command.clone()),
                    ])
                })
                .collect();
            menu.insert(category.name.clone(), Value::Array(items));
        }

        let mut root = Map::new();
        root.insert(
            "mode".to_string(),
            Value::String(self.mode.as_str().to_string()),
        );
        root.insert("custom_menu".to_string(), Value::Object(menu));
        Value::Object(root)
    }

    /// Look up an entry by id anywhere in the configuration.
    pub fn find_entry(&self, id: &str) -> Option<&MenuEntry> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter())
            .find(|e| e.id == id)
    }

    fn id_in_use(&self, id: &str) -> bool {
        self.find_entry(id).is_some()
    }
}

fn parse_entry(item: &Value) -> Option<MenuEntry> {
    let fields = item.as_array()?;
    if fields.len() < 3 {
        return None;
    }
    Some(MenuEntry::new(
        fields[0].as_str()?,
        fields[1].as_str()?,
        fields[2].as_str()?,
    ))
}

fn is_valid_user_id(id: &str) -> bool {
    !id.is_empty()
        && id.chars().all(|c| c.is_ascii_digit())
        && id.parse::<u32>().map(|n| n >= FIRST_FREE_ID).unwrap_or(false)
}

/// Validate an id a user wants to add or remove. Distinguishes malformed
/// ids, the reserved built-in range, and ids below the first free id.
fn validate_user_id(id: &str) -> Result<u32> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(EzGitError::malformed_menu_id(id));
    }
    let number: u32 = id
        .parse()
        .map_err(|_| EzGitError::malformed_menu_id(id))?;
    if (1..=RESERVED_ID_MAX).contains(&number) {
        return Err(EzGitError::reserved_menu_id(id));
    }
    if number < FIRST_FREE_ID {
        return Err(EzGitError::menu_id_below_minimum(id));
    }
    Ok(number)
}

/// Result of validating a "pick a category by number" selection, kept
/// separate from any rendering so it is unit-testable without console I/O.
#[derive(Debug, PartialEq, Eq)]
pub enum CategoryChoice {
    /// Zero-based index into the selectable (non-built-in) categories.
    Existing(usize),
    CreateNew,
}

/// Validate a category selection against `count` selectable categories.
/// `"0"` means create a new category; `1..=count` picks an existing one.
pub fn category_choice(count: usize, input: &str) -> Result<CategoryChoice> {
    if input == "0" {
        return Ok(CategoryChoice::CreateNew);
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(CategoryChoice::Existing(n - 1)),
        _ => Err(EzGitError::invalid_category_choice(input)),
    }
}

/// The store: owns the in-memory configuration and its on-disk location,
/// and funnels every mutation through a persist-then-commit step.
pub struct MenuStore {
    path: PathBuf,
    config: MenuConfiguration,
}

impl MenuStore {
    /// Load the persisted configuration, creating it with built-in defaults
    /// on first run. Read or parse problems degrade to in-memory defaults
    /// rather than failing: the tool stays usable, the menu just reverts.
    pub fn open(path: PathBuf) -> Self {
        let config = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Value>(&content) {
                Ok(value) => MenuConfiguration::from_value(&value),
                Err(e) => {
                    log::warn!("menu config at {} is not valid JSON ({}); using defaults", path.display(), e);
                    MenuConfiguration::default_config()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = MenuConfiguration::default_config();
                if let Err(e) = Self::persist(&config, &path) {
                    log::warn!("could not write initial menu config: {}", e);
                }
                config
            }
            Err(e) => {
                log::warn!("could not read menu config at {} ({}); using defaults", path.display(), e);
                MenuConfiguration::default_config()
            }
        };

        Self { path, config }
    }

    pub fn config(&self) -> &MenuConfiguration {
        &self.config
    }

    pub fn mode(&self) -> MenuMode {
        self.config.mode
    }

    /// Add a user entry under `category` (created if absent) with the given
    /// id. The id must be a digit string >= 6 and unused anywhere in the
    /// configuration; the built-in category cannot be targeted.
    pub fn add_entry(
        &mut self,
        category: &str,
        label: &str,
        command: &str,
        id: &str,
    ) -> Result<MenuEntry> {
        validate_user_id(id)?;
        if category == BUILTIN_CATEGORY {
            return Err(EzGitError::BuiltinCategoryImmutable {
                category: category.to_string(),
            });
        }
        if self.config.id_in_use(id) {
            return Err(EzGitError::duplicate_menu_id(id));
        }

        let entry = MenuEntry::new(id, label, command);
        let mut next = self.config.clone();
        match next.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.entries.push(entry.clone()),
            None => next.categories.push(MenuCategory {
                name: category.to_string(),
                entries: vec![entry.clone()],
            }),
        }

        self.commit(next)?;
        Ok(entry)
    }

    /// Remove the entry with the given id from any non-built-in category.
    /// Returns whether a removal occurred. Ids in the reserved range are
    /// rejected outright; built-ins are never deleted.
    pub fn remove_entry(&mut self, id: &str) -> Result<bool> {
        validate_user_id(id)?;

        let mut next = self.config.clone();
        let mut removed = false;
        for category in &mut next.categories {
            if category.name == BUILTIN_CATEGORY {
                continue;
            }
            let before = category.entries.len();
            category.entries.retain(|e| e.id != id);
            removed |= category.entries.len() < before;
        }
        if !removed {
            return Ok(false);
        }

        // A category emptied by the removal disappears with it.
        next.categories
            .retain(|c| c.name == BUILTIN_CATEGORY || !c.entries.is_empty());

        self.commit(next)?;
        Ok(true)
    }

    /// Replace everything with the built-in defaults and mode `Full`.
    pub fn reset_to_default(&mut self) -> Result<()> {
        self.commit(MenuConfiguration::default_config())
    }

    pub fn set_mode(&mut self, mode: MenuMode) -> Result<()> {
        let mut next = self.config.clone();
        next.mode = mode;
        self.commit(next)
    }

    /// Persist `next`, then make it current. If the write fails the
    /// in-memory configuration is untouched, matching the on-disk copy.
    fn commit(&mut self, next: MenuConfiguration) -> Result<()> {
        Self::persist(&next, &self.path)?;
        self.config = next;
        Ok(())
    }

    /// Whole-file atomic rewrite: serialize to a sibling temp file, then
    /// rename over the target so an interrupted write never leaves a
    /// half-written configuration behind.
    fn persist(config: &MenuConfiguration, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| EzGitError::config_write_failed(path, e))?;
            }
        }

        let content = serde_json::to_string_pretty(&config.to_value())?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(|e| EzGitError::config_write_failed(&tmp, e))?;
        std::fs::rename(&tmp, path).map_err(|e| EzGitError::config_write_failed(path, e))?;

        log::debug!("menu config persisted to {}", path.display());
        Ok(())
    }
}
