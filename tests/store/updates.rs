//! Integration tests for the state store
//!
//! The update/subscribe contract over real state values.

use std::cell::RefCell;
use std::rc::Rc;

use substate_foundation::{Path, Value, get_or, set_at};
use substate_store::Store;

fn recorder() -> (Rc<RefCell<Vec<Value>>>, impl Fn(&Value) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |v: &Value| sink.borrow_mut().push(v.clone()))
}

#[test]
fn subscriber_sees_initial_then_every_update() {
    let store = Store::default();
    let (log, listener) = recorder();
    let _sub = store.subscribe(listener);

    store.update(|_| Value::entries([("name", Value::from("test"))]));
    store.update(|_| Value::entries([("name", Value::from("test2"))]));

    assert_eq!(
        *log.borrow(),
        vec![
            Value::empty_map(),
            Value::entries([("name", Value::from("test"))]),
            Value::entries([("name", Value::from("test2"))]),
        ]
    );
}

#[test]
fn first_registered_is_first_notified() {
    let store = Store::default();
    let order = Rc::new(RefCell::new(Vec::new()));

    let f1 = Rc::clone(&order);
    let _s1 = store.subscribe(move |_| f1.borrow_mut().push(1));
    let f2 = Rc::clone(&order);
    let _s2 = store.subscribe(move |_| f2.borrow_mut().push(2));

    order.borrow_mut().clear();
    store.update(|_| Value::empty_map());

    assert_eq!(*order.borrow(), vec![1, 2]);
}

#[test]
fn update_composes_with_the_path_engine() {
    let store = Store::default();
    let p = Path::fields(["a", "b"]);

    store.update(|root| set_at(root, &p, Value::Int(1)));
    store.update(|root| set_at(root, &Path::fields(["a", "c"]), Value::Int(2)));

    let state = store.get();
    assert_eq!(get_or(&state, &p, &Value::Nil), Value::Int(1));
    assert_eq!(
        get_or(&state, &Path::fields(["a", "c"]), &Value::Nil),
        Value::Int(2)
    );
}

#[test]
fn cancelled_subscriber_misses_later_updates() {
    let store = Store::default();
    let (log, listener) = recorder();
    let sub = store.subscribe(listener);

    store.update(|_| Value::entries([("n", Value::Int(1))]));
    sub.cancel();
    store.update(|_| Value::entries([("n", Value::Int(2))]));

    assert_eq!(
        *log.borrow(),
        vec![Value::empty_map(), Value::entries([("n", Value::Int(1))])]
    );
    // the store's value still advanced
    assert_eq!(store.get(), Value::entries([("n", Value::Int(2))]));
}

#[test]
fn store_clones_share_one_state() {
    let store = Store::default();
    let alias = store.clone();

    alias.update(|_| Value::entries([("via", Value::from("alias"))]));

    assert_eq!(store.get(), Value::entries([("via", Value::from("alias"))]));
    assert_eq!(store.subscriber_count(), alias.subscriber_count());
}
