//! The record store: single source of truth for employees, locale and view
//! mode.
//!
//! The store is an explicit instance handed to whoever needs it. Cloning a
//! `Store` yields another handle to the same state and subscriber list.

mod action;
mod reducers;
mod state;

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use thiserror::Error;

use crate::config::DirectoryConfig;
use crate::model::{Employee, EmployeeId};
use crate::mvi::Reducer;
use crate::storage::{KeyValueStorage, StorageError, LOCALE_KEY};

pub use action::Action;
pub use reducers::{EmployeesReducer, LocaleReducer, RootReducer, ViewModeReducer};
pub use state::{AppState, LocaleTag, ViewMode};

/// Errors returned by [`Store::dispatch`] and store construction.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to persist or load preferences: {0}")]
    Storage(#[from] StorageError),

    /// Only raised when [`StoreOptions::strict_updates`] is enabled.
    #[error("Employee '{id}' not found")]
    EmployeeNotFound { id: EmployeeId },
}

/// Behavior switches for a store instance.
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Reject `UpdateEmployee` for ids that are not in the collection
    /// instead of silently ignoring it.
    pub strict_updates: bool,
    /// Locale used when storage holds none. `None` means `"en"`.
    pub default_locale: Option<LocaleTag>,
}

impl From<&DirectoryConfig> for StoreOptions {
    fn from(config: &DirectoryConfig) -> Self {
        Self {
            strict_updates: config.strict_updates,
            default_locale: Some(LocaleTag::new(config.default_locale.clone())),
        }
    }
}

type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping the handle keeps the subscription alive; call
/// [`Subscription::unsubscribe`] to remove it.
#[must_use = "keep the handle to be able to unsubscribe"]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Mutex<Subscribers>>,
}

impl Subscription {
    /// Remove the callback. Returns false if the store is already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(subscribers) = self.subscribers.upgrade() else {
            return false;
        };
        let mut subscribers = subscribers.lock();
        let before = subscribers.entries.len();
        subscribers.entries.retain(|(id, _)| *id != self.id);
        subscribers.entries.len() != before
    }
}

/// Shared state container with synchronous publish/subscribe.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    subscribers: Arc<Mutex<Subscribers>>,
    storage: Arc<dyn KeyValueStorage>,
    options: StoreOptions,
}

impl Store {
    /// Create a store with default options.
    ///
    /// The locale slice starts from the value persisted in `storage`, or
    /// `"en"` if there is none.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Result<Self, StoreError> {
        Self::with_options(storage, StoreOptions::default())
    }

    pub fn with_options(
        storage: Arc<dyn KeyValueStorage>,
        options: StoreOptions,
    ) -> Result<Self, StoreError> {
        let locale = match storage.get(LOCALE_KEY)? {
            Some(tag) => LocaleTag::new(tag),
            None => options.default_locale.clone().unwrap_or_default(),
        };

        tracing::debug!(locale = %locale, "store initialized");

        let state = AppState {
            locale,
            ..AppState::default()
        };

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(Mutex::new(Subscribers::default())),
            storage,
            options,
        })
    }

    /// Create a store configured from a [`DirectoryConfig`].
    pub fn from_config(
        config: &DirectoryConfig,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Result<Self, StoreError> {
        Self::with_options(storage, StoreOptions::from(config))
    }

    /// Get a snapshot of the current state.
    pub fn get_state(&self) -> AppState {
        self.state.read().clone()
    }

    /// Apply an action and notify every subscriber.
    ///
    /// Subscribers run after every successful dispatch, in registration
    /// order, whether or not the action changed anything.
    ///
    /// # Errors
    /// - `Storage` if persisting a locale change fails. State is unchanged
    ///   and nobody is notified.
    /// - `EmployeeNotFound` for an unknown id in strict update mode.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        tracing::debug!(action = action.kind(), "dispatch");

        match &action {
            Action::ChangeLocale(tag) => {
                self.storage.set(LOCALE_KEY, tag.as_str())?;
                tracing::info!(locale = %tag, "locale changed");
            }
            Action::SetEmployees(_)
            | Action::AddEmployee(_)
            | Action::UpdateEmployee(_)
            | Action::SetViewMode(_) => {}
        }

        let snapshot = {
            let mut state = self.state.write();
            // Checked under the write lock so no other handle can replace the
            // collection between the lookup and the reduce.
            if let Action::UpdateEmployee(record) = &action {
                if state.find_employee(&record.id).is_none() {
                    if self.options.strict_updates {
                        return Err(StoreError::EmployeeNotFound {
                            id: record.id.clone(),
                        });
                    }
                    tracing::warn!(id = %record.id, "update for unknown employee ignored");
                }
            }
            let current = std::mem::take(&mut *state);
            *state = RootReducer::reduce(current, &action);
            state.clone()
        };

        self.notify(&snapshot);
        Ok(())
    }

    /// Register a callback invoked with a snapshot after each dispatch.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        let mut subscribers = self.subscribers.lock();
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.entries.push((id, Arc::new(callback)));
        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Install `records` as the collection if it is currently empty.
    ///
    /// Returns whether the records were installed.
    pub fn seed_if_empty(&self, records: Vec<Employee>) -> Result<bool, StoreError> {
        if !self.state.read().employees.is_empty() {
            return Ok(false);
        }
        tracing::info!(count = records.len(), "seeding employee collection");
        self.dispatch(Action::SetEmployees(records))?;
        Ok(true)
    }

    fn notify(&self, snapshot: &AppState) {
        // Callbacks run without the lock held so they may dispatch or
        // subscribe themselves.
        let listeners: Vec<Listener> = self
            .subscribers
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}
