use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Wire shape of every stored record: the identifier next to its properties.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EntityDto<P> {
    #[serde(rename = "_id")]
    pub id: String,
    pub props: P,
}

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Pair with `#[serde(default)]` so a missing key stays `None` while `null` becomes
/// `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
