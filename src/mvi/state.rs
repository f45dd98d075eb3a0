//! Marker trait for reducible state.

use crate::model::Employee;

/// Marker trait for a slice of state.
///
/// Slices are:
/// - Owned snapshots (Clone to hand out to readers)
/// - Comparable (PartialEq, so tests and callers can detect changes)
/// - Constructible in their initial form (Default)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}

impl SliceState for Vec<Employee> {}
