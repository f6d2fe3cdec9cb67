//! Schema-on-read decoding.
//!
//! Stored documents and cart bodies may hold any JSON. A known field is lifted
//! out of the raw object only when its value has the expected type; otherwise
//! it stays in the record's open field map and is written back unchanged.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::ExtraFields;

/// Removes `key` from `fields` and returns it as `T`, or leaves it in place
/// and returns `None` when it is absent or of another type.
pub(crate) fn take<T: DeserializeOwned>(fields: &mut ExtraFields, key: &str) -> Option<T> {
    let parsed = T::deserialize(fields.get(key)?).ok()?;
    fields.remove(key);
    Some(parsed)
}
