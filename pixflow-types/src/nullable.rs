//! Lenient decoding for fields the backend may send as `null`.

use serde::{Deserialize, Deserializer};

/// Decode `null` the same as a missing field: the type's default.
///
/// Pair with `#[serde(default)]` so absent fields are covered too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
