//! List view-model: filtering, per-mode pagination and delete confirmation.

mod controller;
mod delete;
mod intent;
mod reducer;
mod state;
pub mod view;

pub use controller::{EmployeeList, ListPage};
pub use delete::DeleteConfirmation;
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::ListViewState;
pub use view::ListView;
