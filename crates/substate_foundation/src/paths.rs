//! The path accessor engine: pure reads and immutable writes by path.
//!
//! Both operations are pure functions over [`Value`]. A read walks the value
//! segment by segment and reports absence instead of failing; a write returns
//! a brand-new value with exactly one location replaced, persistently copying
//! the containers along the path while sharing every sibling subtree with the
//! input.
//!
//! Shape rules:
//! - [`Key::Field`] resolves inside a map, [`Key::Index`] inside a list;
//!   anything else is a miss on read.
//! - On write, a missing or mismatched intermediate is created: field
//!   segments create empty maps, index segments create lists padded with nil
//!   up to the index. A scalar standing in the way is replaced by the created
//!   container.

use crate::collections::{SMap, SVec};
use crate::path::{Key, Path};
use crate::value::Value;

/// Reads the value at `path`.
///
/// Returns `None` when any segment is missing or addresses the wrong shape.
/// The empty path returns `value` itself.
#[must_use]
pub fn get_at<'a>(value: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = value;
    for key in path.iter() {
        current = match (key, current) {
            (Key::Field(name), Value::Map(map)) => map.get(name)?,
            (Key::Index(index), Value::List(list)) => list.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Reads the value at `path`, substituting `fallback` for absence.
///
/// The fallback applies when the location is missing *or* when the resolved
/// value is absent per [`Value::is_absent`] (nil or NaN). `false`, `0`, and
/// `""` are preserved as real values.
#[must_use]
pub fn get_or(value: &Value, path: &Path, fallback: &Value) -> Value {
    match get_at(value, path) {
        Some(found) if !found.is_absent() => found.clone(),
        _ => fallback.clone(),
    }
}

/// Returns a new value identical to `value` except that the location at
/// `path` holds `new_value`.
///
/// Containers along the path are persistently copied; siblings are shared
/// with the input. Missing intermediates are created per the module shape
/// rules. The empty path replaces the whole value with `new_value`.
#[must_use]
pub fn set_at(value: &Value, path: &Path, new_value: Value) -> Value {
    let keys: Vec<&Key> = path.iter().collect();
    set_keys(value, &keys, new_value)
}

fn set_keys(value: &Value, keys: &[&Key], new_value: Value) -> Value {
    let Some((head, rest)) = keys.split_first() else {
        return new_value;
    };
    match head {
        Key::Field(name) => {
            let map = match value {
                Value::Map(map) => map.clone(),
                _ => SMap::new(),
            };
            let child = map.get(name).cloned().unwrap_or(Value::Nil);
            let updated = set_keys(&child, rest, new_value);
            Value::Map(map.insert(name.clone(), updated))
        }
        Key::Index(index) => {
            let list = match value {
                Value::List(list) => list.clone(),
                _ => SVec::new(),
            };
            let child = list.get(*index).cloned().unwrap_or(Value::Nil);
            let updated = set_keys(&child, rest, new_value);
            Value::List(list.set_padded(*index, updated, Value::Nil))
        }
    }
}
