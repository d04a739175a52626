//! Iterable adapter
//!
//! Wraps arrays, strings and plain objects in a uniform stateful cursor
//! supporting forward iteration, `previous()`, `reset()` and a reverse
//! iterator. Object entries become key/payload pairs; a nested object
//! payload is recursively wrapped in another adapter.
//!
//! Exhaustion is signaled by a `done` sentinel with no value; the adapter
//! never errors to signal end-of-sequence and never mutates the source.

use crate::value::Value;

/// One element yielded by the adapter
#[derive(Debug, Clone, PartialEq)]
pub enum IterItem {
    /// Plain element: array member, string character, set member
    Value(Value),
    /// Object or map entry: key plus payload
    Entry(String, Box<EntryValue>),
}

/// Payload of an object entry
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValue {
    Value(Value),
    /// Nested objects are wrapped again
    Iterable(Iterable),
}

/// Result of one cursor step
#[derive(Debug, Clone, PartialEq)]
pub struct IterResult {
    pub done: bool,
    pub value: Option<IterItem>,
}

impl IterResult {
    /// The exhaustion sentinel: done, no value
    pub const fn finished() -> IterResult {
        IterResult {
            done: true,
            value: None,
        }
    }

    fn item(item: IterItem) -> IterResult {
        IterResult {
            done: false,
            value: Some(item),
        }
    }
}

/// Stateful cursor over an adapted sequence
///
/// The cursor is owned exclusively by one adapter instance; cloning (or
/// `reverse_iterator`) produces an independent cursor over the same
/// backing items.
#[derive(Debug, Clone, PartialEq)]
pub struct Iterable {
    items: Vec<IterItem>,
    cursor: usize,
    last: Option<IterItem>,
    pub asynchronous: bool,
}

/// Adapt a value into a uniform iterable
///
/// Arrays yield their elements, strings their characters, sets their
/// members, typed arrays their numbers. Objects and maps yield entries,
/// with nested objects recursively adapted. Null and undefined adapt to
/// an empty sequence; any other scalar adapts to a one-element sequence.
pub fn to_iterable(value: &Value, asynchronous: bool) -> Iterable {
    let items = match value {
        Value::Undefined | Value::Null => Vec::new(),
        Value::Array(elements) => elements.iter().cloned().map(IterItem::Value).collect(),
        Value::Set(elements) => elements.iter().cloned().map(IterItem::Value).collect(),
        Value::Str(s) | Value::BoxedString(s) => s
            .chars()
            .map(|c| IterItem::Value(Value::Str(c.to_string())))
            .collect(),
        Value::TypedArray(ta) => ta
            .data
            .iter()
            .map(|&n| {
                if ta.kind.is_big() {
                    IterItem::Value(Value::BigInt(n))
                } else {
                    IterItem::Value(Value::Number(n as f64))
                }
            })
            .collect(),
        Value::Object(fields) | Value::Instance { fields, .. } => fields
            .iter()
            .map(|(key, field)| IterItem::Entry(key.clone(), Box::new(entry_payload(field, asynchronous))))
            .collect(),
        Value::Map(entries) => entries
            .iter()
            .map(|(key, field)| {
                IterItem::Entry(key.to_string(), Box::new(entry_payload(field, asynchronous)))
            })
            .collect(),
        Value::Iterable(inner) => {
            let mut copy = (**inner).clone();
            copy.reset();
            copy.asynchronous = asynchronous;
            return copy;
        }
        other => vec![IterItem::Value(other.clone())],
    };
    Iterable {
        items,
        cursor: 0,
        last: None,
        asynchronous,
    }
}

fn entry_payload(value: &Value, asynchronous: bool) -> EntryValue {
    match value {
        Value::Object(_) | Value::Instance { .. } | Value::Map(_) => {
            EntryValue::Iterable(to_iterable(value, asynchronous))
        }
        other => EntryValue::Value(other.clone()),
    }
}

impl Iterable {
    /// Number of items in the backing sequence
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advance the cursor
    ///
    /// Past the end this keeps returning the done sentinel.
    pub fn next(&mut self) -> IterResult {
        match self.items.get(self.cursor) {
            Some(item) => {
                self.cursor += 1;
                self.last = Some(item.clone());
                IterResult::item(item.clone())
            }
            None => IterResult::finished(),
        }
    }

    /// Last-yielded item without moving the cursor
    pub fn previous(&self) -> Option<IterItem> {
        self.last.clone()
    }

    /// Rewind to the start; works after exhaustion
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.last = None;
    }

    /// A NEW cursor walking the same backing sequence tail-to-head
    ///
    /// The original cursor's position is untouched.
    pub fn reverse_iterator(&self) -> Iterable {
        let mut items = self.items.clone();
        items.reverse();
        Iterable {
            items,
            cursor: 0,
            last: None,
            asynchronous: self.asynchronous,
        }
    }
}
