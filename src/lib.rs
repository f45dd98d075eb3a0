//! State and data-integrity core of an employee directory.
//!
//! - [`store`]: the record store (employees, locale, view mode) with
//!   synchronous subscriptions
//! - [`validation`]: required/format/duplicate checks for a candidate record
//! - [`listing`]: filtering and per-view-mode pagination
//! - [`form`]: add/edit submission
//! - [`i18n`]: translation lookup following the store's locale

pub mod config;
pub mod form;
pub mod i18n;
pub mod listing;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod seed;
pub mod storage;
pub mod store;
pub mod validation;

pub use config::{ConfigError, DirectoryConfig};
pub use model::{Employee, EmployeeDraft, EmployeeField, EmployeeId};
pub use store::{Action, AppState, LocaleTag, Store, StoreError, ViewMode};
pub use validation::{validate, ValidationError, ValidationErrors};
