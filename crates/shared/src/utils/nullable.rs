use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing field. Pair with
/// `#[serde(default)]` so both end up as `T::default()`.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
