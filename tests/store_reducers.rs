mod common;

use std::sync::Arc;

use common::{employee, memory_store, recorder, roster};
use employee_directory::config::DirectoryConfig;
use employee_directory::model::EmployeeId;
use employee_directory::storage::MemoryStorage;
use employee_directory::store::{Action, LocaleTag, Store, StoreError, ViewMode};

#[test]
fn set_employees_replaces_collection_exactly() {
    let store = memory_store();
    store.dispatch(Action::SetEmployees(roster(3))).unwrap();

    let replacement = vec![
        employee("b", "Grace", "Hopper", "5550000002", "grace@example.com"),
        employee("a", "Ada", "Lovelace", "5550000001", "ada@example.com"),
    ];
    store
        .dispatch(Action::SetEmployees(replacement.clone()))
        .unwrap();

    assert_eq!(store.get_state().employees, replacement);
}

#[test]
fn add_employee_appends_one_record_at_end() {
    let store = memory_store();
    store.dispatch(Action::SetEmployees(roster(2))).unwrap();
    let before = store.get_state().employees.len();

    let added = employee("99", "Ada", "Lovelace", "5550000001", "ada@example.com");
    store.dispatch(Action::AddEmployee(added.clone())).unwrap();

    let employees = store.get_state().employees;
    assert_eq!(employees.len(), before + 1);
    assert_eq!(employees.last(), Some(&added));
}

#[test]
fn update_replaces_matching_record() {
    let store = memory_store();
    store.dispatch(Action::SetEmployees(roster(3))).unwrap();

    let mut changed = store.get_state().employees[1].clone();
    changed.department = "Finance".to_string();
    store
        .dispatch(Action::UpdateEmployee(changed.clone()))
        .unwrap();

    let employees = store.get_state().employees;
    assert_eq!(employees.len(), 3);
    assert_eq!(employees[1], changed);
}

#[test]
fn update_with_unknown_id_leaves_collection_unchanged() {
    let store = memory_store();
    store.dispatch(Action::SetEmployees(roster(3))).unwrap();
    let before = store.get_state().employees;

    store
        .dispatch(Action::UpdateEmployee(employee(
            "missing",
            "No",
            "Body",
            "5559999999",
            "nobody@example.com",
        )))
        .unwrap();

    assert_eq!(store.get_state().employees, before);
}

#[test]
fn strict_updates_report_unknown_id_without_notifying() {
    let config = DirectoryConfig {
        strict_updates: true,
        ..DirectoryConfig::default()
    };
    let store = Store::from_config(&config, Arc::new(MemoryStorage::new())).unwrap();
    let (seen, sink) = recorder::<usize>();
    let _subscription = store.subscribe(move |state| sink.lock().push(state.employees.len()));

    let result = store.dispatch(Action::UpdateEmployee(employee(
        "missing",
        "No",
        "Body",
        "5559999999",
        "nobody@example.com",
    )));

    match result {
        Err(StoreError::EmployeeNotFound { id }) => assert_eq!(id, EmployeeId::new("missing")),
        other => panic!("expected EmployeeNotFound, got {other:?}"),
    }
    assert!(seen.lock().is_empty());
}

#[test]
fn set_view_mode_replaces_mode() {
    let store = memory_store();
    store.dispatch(Action::SetViewMode(ViewMode::Card)).unwrap();
    assert_eq!(store.get_state().view_mode, ViewMode::Card);
}

#[test]
fn change_locale_accepts_unknown_tag() {
    let store = memory_store();
    store
        .dispatch(Action::ChangeLocale(LocaleTag::new("klingon")))
        .unwrap();
    assert_eq!(store.get_state().locale.as_str(), "klingon");
}

#[test]
fn subscribers_run_in_registration_order() {
    let store = memory_store();
    let (order, first) = recorder::<&'static str>();
    let second = Arc::clone(&first);
    let _a = store.subscribe(move |_| first.lock().push("first"));
    let _b = store.subscribe(move |_| second.lock().push("second"));

    store.dispatch(Action::SetViewMode(ViewMode::Card)).unwrap();

    assert_eq!(*order.lock(), vec!["first", "second"]);
}

#[test]
fn subscribers_are_notified_for_noop_actions() {
    let store = memory_store();
    let (seen, sink) = recorder::<ViewMode>();
    let _subscription = store.subscribe(move |state| sink.lock().push(state.view_mode));

    store.dispatch(Action::SetViewMode(ViewMode::List)).unwrap();
    store.dispatch(Action::SetViewMode(ViewMode::List)).unwrap();

    assert_eq!(*seen.lock(), vec![ViewMode::List, ViewMode::List]);
}

#[test]
fn subscriber_snapshot_reflects_dispatched_action() {
    let store = memory_store();
    let (seen, sink) = recorder::<usize>();
    let _subscription = store.subscribe(move |state| sink.lock().push(state.employees.len()));

    store.dispatch(Action::SetEmployees(roster(4))).unwrap();
    store
        .dispatch(Action::AddEmployee(employee(
            "x",
            "Ada",
            "Lovelace",
            "5550000001",
            "ada@example.com",
        )))
        .unwrap();

    assert_eq!(*seen.lock(), vec![4, 5]);
}

#[test]
fn seed_if_empty_only_fills_empty_collection() {
    let store = memory_store();
    assert!(store.seed_if_empty(roster(3)).unwrap());
    assert!(!store.seed_if_empty(roster(5)).unwrap());
    assert_eq!(store.get_state().employees.len(), 3);
}

#[test]
fn clones_share_state() {
    let store = memory_store();
    let other = store.clone();
    other.dispatch(Action::SetEmployees(roster(2))).unwrap();
    assert_eq!(store.get_state().employees.len(), 2);
}

#[test]
fn strict_update_is_only_acknowledged_when_applied() {
    let config = DirectoryConfig {
        strict_updates: true,
        ..DirectoryConfig::default()
    };
    let store = Store::from_config(&config, Arc::new(MemoryStorage::new())).unwrap();
    let original = employee("7", "Ada", "Lovelace", "5550000001", "ada@example.com");
    store
        .dispatch(Action::SetEmployees(vec![original.clone()]))
        .unwrap();

    let (seen, sink) = recorder::<String>();
    let _subscription = store.subscribe(move |state| {
        if let Some(record) = state.employees.first() {
            sink.lock().push(record.email.clone());
        }
    });

    let replacer = {
        let store = store.clone();
        let original = original.clone();
        std::thread::spawn(move || {
            for round in 0..500 {
                let employees = if round % 2 == 0 {
                    Vec::new()
                } else {
                    vec![original.clone()]
                };
                store.dispatch(Action::SetEmployees(employees)).unwrap();
            }
        })
    };

    let mut acknowledged = Vec::new();
    for n in 0..500 {
        let mut update = original.clone();
        update.email = format!("ada{n}@example.com");
        if store.dispatch(Action::UpdateEmployee(update.clone())).is_ok() {
            acknowledged.push(update.email);
        }
    }
    replacer.join().unwrap();

    let seen = seen.lock();
    for email in &acknowledged {
        assert!(seen.contains(email), "{email} acknowledged but not applied");
    }
}
