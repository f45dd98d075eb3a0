//! Marker trait for the actions a reducer consumes.

/// Marker trait for intent objects.
///
/// Intents are closed enums: every reducer matches all variants, so adding a
/// variant is a compile error until each slice decides how to treat it.
pub trait Intent: Send + 'static {}
