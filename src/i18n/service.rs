use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use crate::store::{LocaleTag, Store, Subscription};
use crate::validation::ValidationError;

use super::catalog::Catalog;

type LocaleCallback = Arc<dyn Fn(&LocaleTag) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, LocaleCallback)>,
}

struct Inner {
    locale: LocaleTag,
    catalogs: HashMap<LocaleTag, Catalog>,
}

/// Handle returned by [`LocaleService::on_locale_change`].
#[must_use = "keep the handle to be able to unsubscribe"]
pub struct LocaleListener {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl LocaleListener {
    pub fn unsubscribe(self) -> bool {
        let Some(listeners) = self.listeners.upgrade() else {
            return false;
        };
        let mut listeners = listeners.lock();
        let before = listeners.entries.len();
        listeners.entries.retain(|(id, _)| *id != self.id);
        listeners.entries.len() != before
    }
}

/// Current language plus the translation catalogs it can switch between.
///
/// Cloning yields another handle to the same service.
#[derive(Clone)]
pub struct LocaleService {
    inner: Arc<RwLock<Inner>>,
    listeners: Arc<Mutex<Listeners>>,
}

impl LocaleService {
    pub fn new(locale: LocaleTag) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                locale,
                catalogs: HashMap::new(),
            })),
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }

    /// Register the catalog for `tag`, replacing any previous one.
    pub fn with_catalog(self, tag: impl Into<LocaleTag>, catalog: Catalog) -> Self {
        self.inner.write().catalogs.insert(tag.into(), catalog);
        self
    }

    pub fn locale(&self) -> LocaleTag {
        self.inner.read().locale.clone()
    }

    pub fn has_catalog(&self, tag: &LocaleTag) -> bool {
        self.inner.read().catalogs.contains_key(tag)
    }

    /// Resolve `key` in the active catalog, falling back to the key itself.
    pub fn t(&self, key: &str) -> String {
        let inner = self.inner.read();
        inner
            .catalogs
            .get(&inner.locale)
            .and_then(|catalog| catalog.get(key))
            .unwrap_or(key)
            .to_string()
    }

    /// Display text for a validation error.
    pub fn message(&self, error: ValidationError) -> String {
        self.t(error.message_key())
    }

    /// Switch to `tag` and notify listeners.
    ///
    /// Does nothing and returns false when `tag` has no catalog or is
    /// already active.
    pub fn change_locale(&self, tag: &LocaleTag) -> bool {
        {
            let mut inner = self.inner.write();
            if !inner.catalogs.contains_key(tag) || &inner.locale == tag {
                return false;
            }
            inner.locale = tag.clone();
        }

        tracing::debug!(locale = %tag, "translations switched");

        let callbacks: Vec<LocaleCallback> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(tag);
        }
        true
    }

    pub fn on_locale_change<F>(&self, callback: F) -> LocaleListener
    where
        F: Fn(&LocaleTag) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(callback)));
        LocaleListener {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Follow the store's locale slice.
    ///
    /// Applies the store's current locale right away and again after every
    /// dispatch. A store locale with no registered catalog is not applied:
    /// `t` keeps resolving against the last catalog that was, rather than
    /// falling back to raw keys.
    pub fn bind(&self, store: &Store) -> Subscription {
        self.change_locale(&store.get_state().locale);
        let service = self.clone();
        store.subscribe(move |state| {
            service.change_locale(&state.locale);
        })
    }
}
