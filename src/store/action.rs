use crate::model::Employee;
use crate::mvi::Intent;

use super::state::{LocaleTag, ViewMode};

/// Every state change goes through one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the whole employee collection.
    SetEmployees(Vec<Employee>),
    /// Append a record. The caller has already assigned a unique id.
    AddEmployee(Employee),
    /// Replace the record with the same id. Unknown ids leave the
    /// collection as it is.
    UpdateEmployee(Employee),
    /// Switch the active locale. The store persists it before reducing.
    ChangeLocale(LocaleTag),
    SetViewMode(ViewMode),
}

impl Intent for Action {}

impl Action {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetEmployees(_) => "set_employees",
            Self::AddEmployee(_) => "add_employee",
            Self::UpdateEmployee(_) => "update_employee",
            Self::ChangeLocale(_) => "change_locale",
            Self::SetViewMode(_) => "set_view_mode",
        }
    }
}
