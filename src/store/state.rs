use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Employee, EmployeeId};
use crate::mvi::SliceState;

/// Language tag of the active locale (e.g. `"en"`, `"tr"`).
///
/// The store accepts any tag; checking it against the available catalogs is
/// the caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTag(String);

impl LocaleTag {
    pub const DEFAULT: &'static str = "en";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl SliceState for LocaleTag {}

/// Presentation layout of the employee list. Each mode paginates on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Table rows.
    #[default]
    List,
    /// Grid of cards.
    Card,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Card => "card",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "list" => Some(Self::List),
            "card" => Some(Self::Card),
            _ => None,
        }
    }
}

impl SliceState for ViewMode {}

/// Snapshot of the whole application state.
///
/// Subscribers and `Store::get_state` hand out clones; mutating one never
/// reaches the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub employees: Vec<Employee>,
    pub locale: LocaleTag,
    pub view_mode: ViewMode,
}

impl SliceState for AppState {}

impl AppState {
    pub fn find_employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
}
