mod common;

use std::sync::Arc;

use common::{recorder, FailingStorage};
use employee_directory::i18n::{Catalog, LocaleService};
use employee_directory::storage::{FileStorage, KeyValueStorage, MemoryStorage, LOCALE_KEY};
use employee_directory::store::{Action, LocaleTag, Store, StoreError};
use employee_directory::validation::ValidationError;
use tempfile::TempDir;

#[test]
fn locale_defaults_to_english() {
    let store = Store::new(Arc::new(MemoryStorage::new())).unwrap();
    assert_eq!(store.get_state().locale.as_str(), "en");
}

#[test]
fn locale_change_survives_reload() {
    let storage = Arc::new(MemoryStorage::new());
    let store = Store::new(storage.clone()).unwrap();
    store
        .dispatch(Action::ChangeLocale(LocaleTag::new("tr")))
        .unwrap();
    drop(store);

    let reloaded = Store::new(storage).unwrap();
    assert_eq!(reloaded.get_state().locale.as_str(), "tr");
}

#[test]
fn locale_change_survives_reload_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs").join("storage.toml");

    let store = Store::new(Arc::new(FileStorage::new(&path))).unwrap();
    store
        .dispatch(Action::ChangeLocale(LocaleTag::new("tr")))
        .unwrap();

    let reloaded = Store::new(Arc::new(FileStorage::new(&path))).unwrap();
    assert_eq!(reloaded.get_state().locale.as_str(), "tr");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("locale = \"tr\""));
}

#[test]
fn locale_is_written_under_fixed_key() {
    let storage = Arc::new(MemoryStorage::new());
    let store = Store::new(storage.clone()).unwrap();
    store
        .dispatch(Action::ChangeLocale(LocaleTag::new("de")))
        .unwrap();
    assert_eq!(storage.get(LOCALE_KEY).unwrap().as_deref(), Some("de"));
}

#[test]
fn storage_failure_propagates_and_keeps_state() {
    let store = Store::new(Arc::new(FailingStorage)).unwrap();
    let (seen, sink) = recorder::<String>();
    let _subscription = store.subscribe(move |state| sink.lock().push(state.locale.to_string()));

    let result = store.dispatch(Action::ChangeLocale(LocaleTag::new("tr")));

    assert!(matches!(result, Err(StoreError::Storage(_))));
    assert_eq!(store.get_state().locale.as_str(), "en");
    assert!(seen.lock().is_empty());
}

#[test]
fn bound_service_follows_store_locale() {
    let store = Store::new(Arc::new(MemoryStorage::new())).unwrap();
    let service = LocaleService::new(LocaleTag::default())
        .with_catalog(
            "en",
            Catalog::from_iter([("validationRequired", "This field is required")]),
        )
        .with_catalog(
            "tr",
            Catalog::from_iter([("validationRequired", "Bu alan zorunludur")]),
        );
    let _binding = service.bind(&store);

    assert_eq!(
        service.message(ValidationError::Required),
        "This field is required"
    );

    store
        .dispatch(Action::ChangeLocale(LocaleTag::new("tr")))
        .unwrap();
    assert_eq!(service.locale().as_str(), "tr");
    assert_eq!(service.message(ValidationError::Required), "Bu alan zorunludur");

    // No catalog for this tag: the store takes it, translations stay put.
    store
        .dispatch(Action::ChangeLocale(LocaleTag::new("xx")))
        .unwrap();
    assert_eq!(store.get_state().locale.as_str(), "xx");
    assert_eq!(service.locale().as_str(), "tr");
    assert_eq!(service.message(ValidationError::Required), "Bu alan zorunludur");
}

#[test]
fn bind_applies_persisted_locale_immediately() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(LOCALE_KEY, "tr").unwrap();
    let store = Store::new(storage).unwrap();
    let service = LocaleService::new(LocaleTag::default())
        .with_catalog("en", Catalog::new())
        .with_catalog("tr", Catalog::new());

    let _binding = service.bind(&store);

    assert_eq!(service.locale().as_str(), "tr");
}
