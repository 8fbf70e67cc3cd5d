//! Integration tests for configuration and cleanup wiring
//!
//! Registry validation plus the entry point's cleanup-mode behavior.

use std::cell::RefCell;
use std::rc::Rc;

use substate_foundation::{ErrorKind, Kind, Value};
use substate_scope::{CleanupCallback, CleanupHook, MANUAL_UNSUB, SharedState};

#[test]
fn non_map_config_names_received_kind() {
    let shared = SharedState::new();
    let err = shared
        .use_state_with(&Value::from("not-an-object"))
        .unwrap_err();

    assert!(matches!(
        err.kind,
        ErrorKind::ConfigType { actual: Kind::String }
    ));
    let msg = err.to_string();
    assert!(msg.contains("\"map\""));
    assert!(msg.contains("\"string\""));
}

#[test]
fn unknown_and_wrong_kind_failures_are_aggregated() {
    let shared = SharedState::new();
    let err = shared
        .use_state_with(&Value::entries([
            ("bogus", Value::Int(1)),
            (MANUAL_UNSUB, Value::from("yes")),
        ]))
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("unknown option \"bogus\""));
    assert!(msg.contains("\"manual-unsub\" expected \"bool\", received \"string\""));
}

#[test]
fn manual_unsub_exposes_explicit_release() {
    let shared = SharedState::new();
    let handle = shared
        .use_state_with(&Value::entries([(MANUAL_UNSUB, Value::Bool(true))]))
        .unwrap();

    assert!(handle.manual_cleanup());
    assert_eq!(shared.store().subscriber_count(), 1);

    handle.unsubscribe();
    handle.unsubscribe(); // twice is safe and does not panic

    assert_eq!(shared.store().subscriber_count(), 0);
}

#[test]
fn registry_override_applies_to_every_attach() {
    let shared = SharedState::new();
    shared
        .config()
        .set(&Value::entries([(MANUAL_UNSUB, Value::Bool(true))]))
        .unwrap();

    let handle = shared.use_state().unwrap();
    assert!(handle.manual_cleanup());
    handle.unsubscribe();

    shared.config().reset();
    assert!(!shared.config().get().manual_unsub);
}

#[test]
fn local_override_wins_over_registry() {
    let registrations = Rc::new(RefCell::new(Vec::<CleanupCallback>::new()));
    let sink = Rc::clone(&registrations);
    let shared = SharedState::new()
        .with_hook(CleanupHook::available(move |cb| sink.borrow_mut().push(cb)));

    // registry says automatic; the local override demands manual
    let handle = shared
        .use_state_with(&Value::entries([(MANUAL_UNSUB, Value::Bool(true))]))
        .unwrap();

    assert!(handle.manual_cleanup());
    assert!(registrations.borrow().is_empty());
}

#[test]
fn automatic_mode_releases_on_lifecycle_end() {
    let registrations = Rc::new(RefCell::new(Vec::<CleanupCallback>::new()));
    let sink = Rc::clone(&registrations);
    let shared = SharedState::new()
        .with_hook(CleanupHook::available(move |cb| sink.borrow_mut().push(cb)));

    let handle = shared.use_state().unwrap();
    assert!(!handle.manual_cleanup());
    assert_eq!(registrations.borrow().len(), 1);
    assert_eq!(shared.store().subscriber_count(), 1);

    for cb in registrations.borrow_mut().drain(..) {
        cb();
    }
    assert_eq!(shared.store().subscriber_count(), 0);
}

#[test]
fn hook_absence_is_not_fatal() {
    let shared = SharedState::new(); // Unavailable hook
    let handle = shared.use_state().unwrap();

    // automatic mode degraded to explicit release
    assert!(handle.manual_cleanup());
    handle.unsubscribe();
    assert_eq!(shared.store().subscriber_count(), 0);
}
