use serde_json::Value;

/// Walks `path` one key at a time through nested objects.
///
/// Returns `None` as soon as the current value is not an object or lacks the
/// next key. A key that is present with a `null` value yields `Some(Null)`.
/// An empty path returns the record itself.
pub fn read<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(record, |current, key| current.as_object()?.get(*key))
}

/// Like [`read`] but returns the value only when it is an array.
pub fn read_array<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    read(record, path).and_then(Value::as_array)
}
