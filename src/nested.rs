// Nested JSON access.
// Walks a key path through nested objects, one level per key.

use serde_json::Value;

use crate::error::{Error, Result};

/// Resolve `path` against `map`, returning the value at the end of the path.
///
/// Fails with [`Error::KeyNotFound`] naming the first key that cannot be
/// resolved: absent from the current object, or applied to a value that is
/// not an object. The final value may be of any kind. An empty path yields
/// `map` itself.
pub fn access_nested_map<'a, I, K>(map: &'a Value, path: I) -> Result<&'a Value>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    path.into_iter().try_fold(map, |current, key| {
        let key = key.as_ref();
        current
            .as_object()
            .and_then(|object| object.get(key))
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    })
}

/// Resolve `path` and require the result to be a string.
pub fn access_str<'a, I, K>(map: &'a Value, path: I) -> Result<&'a str>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let keys: Vec<String> = path.into_iter().map(|k| k.as_ref().to_string()).collect();
    let value = access_nested_map(map, &keys)?;
    value.as_str().ok_or_else(|| Error::UnexpectedType {
        key: keys.join("."),
        expected: "a string",
    })
}
