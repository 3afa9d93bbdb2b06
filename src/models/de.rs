use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the type's default value. Combined with
/// `#[serde(default)]` a field decodes to its zero value whether the key is
/// missing or null.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
