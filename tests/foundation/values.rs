//! Integration tests for Value and Path
//!
//! Covers kind reporting, the absence predicate, and path composition.

use std::sync::Arc;
use substate_foundation::{Key, Kind, Path, Value};

// =============================================================================
// Value
// =============================================================================

#[test]
fn value_kinds() {
    assert_eq!(Value::Nil.kind(), Kind::Nil);
    assert_eq!(Value::Bool(true).kind(), Kind::Bool);
    assert_eq!(Value::Int(1).kind(), Kind::Int);
    assert_eq!(Value::Float(1.5).kind(), Kind::Float);
    assert_eq!(Value::from("x").kind(), Kind::String);
    assert_eq!(Value::from(vec![1i64]).kind(), Kind::List);
    assert_eq!(Value::empty_map().kind(), Kind::Map);
}

#[test]
fn absence_is_narrower_than_falsiness() {
    assert!(Value::Nil.is_absent());
    assert!(Value::Float(f64::NAN).is_absent());

    assert!(!Value::Bool(false).is_absent());
    assert!(!Value::Int(0).is_absent());
    assert!(!Value::Float(0.0).is_absent());
    assert!(!Value::from("").is_absent());
    assert!(!Value::empty_map().is_absent());
}

#[test]
fn entries_builds_nested_maps() {
    let v = Value::entries([(
        "outer",
        Value::entries([("inner", Value::Int(1))]),
    )]);

    let outer = v.as_map().unwrap();
    let inner = outer
        .get(&Arc::from("outer"))
        .and_then(Value::as_map)
        .unwrap();
    assert_eq!(inner.get(&Arc::from("inner")), Some(&Value::Int(1)));
}

#[test]
fn clone_is_cheap_and_independent() {
    let big: Value = (0..1000i64).map(Value::Int).collect::<Vec<_>>().into();
    let copy = big.clone();
    assert_eq!(big, copy);
}

// =============================================================================
// Path
// =============================================================================

#[test]
fn paths_are_composed_never_mutated() {
    let prefix = Path::fields(["a"]);
    let child = prefix.concat(&Path::fields(["b"]));
    let grandchild = child.concat(&Path::root().index(0));

    assert_eq!(prefix.len(), 1);
    assert_eq!(child.len(), 2);
    assert_eq!(grandchild.len(), 3);
}

#[test]
fn path_equality_and_iteration() {
    let p = Path::root().field("a").index(2);
    let same: Path = [Key::from("a"), Key::from(2usize)].into_iter().collect();

    assert_eq!(p, same);
    let keys: Vec<&Key> = p.iter().collect();
    assert_eq!(keys.len(), 2);
}

#[test]
fn empty_path_is_the_whole_value_address() {
    assert!(Path::root().is_empty());
    assert_eq!(Path::root(), Path::fields(Vec::<String>::new()));
}
