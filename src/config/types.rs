use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the directory core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Rows per page in list view (default: 10).
    #[serde(default = "default_list_page_size")]
    pub list_page_size: usize,
    /// Cards per page in card view (default: 6).
    #[serde(default = "default_card_page_size")]
    pub card_page_size: usize,
    /// Locale used when no preference has been stored (default: "en").
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Report updates to unknown employee ids as errors (default: false).
    #[serde(default)]
    pub strict_updates: bool,
    /// Where preferences are persisted. Defaults to the platform data dir.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

fn default_list_page_size() -> usize {
    10
}

fn default_card_page_size() -> usize {
    6
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            list_page_size: default_list_page_size(),
            card_page_size: default_card_page_size(),
            default_locale: default_locale(),
            strict_updates: false,
            storage_path: None,
        }
    }
}

impl DirectoryConfig {
    /// Resolved location of the preference file.
    ///
    /// Uses `storage_path` when set, else
    /// `dirs::data_dir()/employee-directory/storage.toml`, falling back to
    /// the current directory if no data dir is available.
    pub fn storage_path(&self) -> PathBuf {
        if let Some(path) = &self.storage_path {
            return path.clone();
        }
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("employee-directory").join("storage.toml")
    }
}
