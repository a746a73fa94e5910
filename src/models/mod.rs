use serde::{Deserialize, Deserializer};

pub mod asset;
pub mod employee;
pub mod repair;

/// Distinguishes an explicit JSON `null` from an absent field in the update
/// structs: absent keeps the serde default (`None`), `null` becomes
/// `Some(None)`, a value becomes `Some(Some(v))`. A bare `Option<Option<T>>`
/// cannot make that distinction because serde folds `null` into the outer
/// `None`.
pub(crate) fn deserialize_nullable<'de, T, D>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
