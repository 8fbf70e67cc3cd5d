//! Integration tests for the path accessor engine
//!
//! Covers the round-trip law, write isolation, fallback semantics, and
//! intermediate creation, including the property suites.

use proptest::prelude::*;
use substate_foundation::{Key, Path, Value, get_at, get_or, set_at};

fn sample_state() -> Value {
    Value::entries([
        (
            "user",
            Value::entries([
                ("name", Value::from("sam")),
                ("age", Value::Int(0)),
            ]),
        ),
        ("tags", vec!["a", "b"].into_iter().map(Value::from).collect::<Vec<_>>().into()),
    ])
}

// =============================================================================
// Reads
// =============================================================================

#[test]
fn read_preserves_falsy_leaf() {
    let s = sample_state();
    let fallback = Value::Int(99);
    assert_eq!(
        get_or(&s, &Path::fields(["user", "age"]), &fallback),
        Value::Int(0)
    );
}

#[test]
fn read_unreachable_is_noop_fallback() {
    let s = sample_state();
    // walking through a scalar cannot panic or mutate
    let p = Path::fields(["user", "name", "deeper", "still"]);
    assert_eq!(get_at(&s, &p), None);
    assert_eq!(get_or(&s, &p, &Value::from("none")), Value::from("none"));
    assert_eq!(s, sample_state());
}

#[test]
fn read_list_by_index() {
    let s = sample_state();
    assert_eq!(
        get_at(&s, &Path::root().field("tags").index(1)),
        Some(&Value::from("b"))
    );
    assert_eq!(get_at(&s, &Path::root().field("tags").index(5)), None);
}

// =============================================================================
// Writes
// =============================================================================

#[test]
fn write_is_an_absolute_replacement() {
    let s = sample_state();
    let p = Path::fields(["user"]);
    let next = set_at(&s, &p, Value::from("flattened"));

    assert_eq!(get_at(&next, &p), Some(&Value::from("flattened")));
    // the old subtree is gone from the new state but intact in the old one
    assert_eq!(get_at(&next, &Path::fields(["user", "name"])), None);
    assert_eq!(
        get_at(&s, &Path::fields(["user", "name"])),
        Some(&Value::from("sam"))
    );
}

#[test]
fn write_isolation_shares_siblings() {
    let s = sample_state();
    let next = set_at(&s, &Path::fields(["user", "name"]), Value::from("kit"));

    assert_ne!(next, s);
    let tags_before = get_at(&s, &Path::fields(["tags"])).and_then(Value::as_list).unwrap();
    let tags_after = get_at(&next, &Path::fields(["tags"])).and_then(Value::as_list).unwrap();
    assert!(tags_before.ptr_eq(tags_after));
}

#[test]
fn write_builds_missing_intermediates() {
    let next = set_at(
        &Value::empty_map(),
        &Path::root().field("a").index(1).field("b"),
        Value::Bool(true),
    );

    assert_eq!(
        get_at(&next, &Path::root().field("a").index(1).field("b")),
        Some(&Value::Bool(true))
    );
    // index creation pads with nil
    assert_eq!(
        get_at(&next, &Path::root().field("a").index(0)),
        Some(&Value::Nil)
    );
}

#[test]
fn whole_value_write_replaces_root() {
    let s = sample_state();
    let next = set_at(&s, &Path::root(), Value::Int(1));
    assert_eq!(next, Value::Int(1));
}

// =============================================================================
// Properties
// =============================================================================

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        "[a-z]{1,5}".prop_map(|s| Key::Field(s.into())),
        (0usize..3).prop_map(Key::Index),
    ]
}

fn arb_path() -> impl Strategy<Value = Path> {
    proptest::collection::vec(arb_key(), 1..5).prop_map(|keys| keys.into_iter().collect())
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z0-9]{0,6}".prop_map(|s| Value::from(s.as_str())),
    ]
}

proptest! {
    #[test]
    fn round_trip_from_any_start(p in arb_path(), x in arb_leaf(), start in arb_leaf()) {
        // whatever shape stood there before, a write makes the read exact
        let next = set_at(&start, &p, x.clone());
        prop_assert_eq!(get_at(&next, &p), Some(&x));
    }

    #[test]
    fn write_never_disturbs_unrelated_slot(p in arb_path(), x in arb_leaf()) {
        let pinned = Path::fields(["pinned-slot"]);
        // the first segment must be a map key that keeps the root a map
        prop_assume!(matches!(p.iter().next(), Some(Key::Field(name)) if &**name != "pinned-slot"));
        let state = set_at(&Value::empty_map(), &pinned, Value::Int(42));
        let next = set_at(&state, &p, x);
        prop_assert_eq!(get_at(&next, &pinned), Some(&Value::Int(42)));
    }
}
