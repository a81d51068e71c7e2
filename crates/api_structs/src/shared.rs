use serde::{Deserialize, Deserializer};

/// Keeps an explicit `null` apart from a missing field: a missing field is
/// `None` through `#[serde(default)]`, `null` becomes `Some(None)`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
