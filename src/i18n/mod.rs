//! Locale service: active language, translation lookup, change listeners.
//!
//! The store's `locale` slice is the source of truth; [`LocaleService::bind`]
//! keeps the service in step with it. Catalog contents are supplied by the
//! embedding application.

mod catalog;
mod service;

pub use catalog::Catalog;
pub use service::{LocaleListener, LocaleService};
