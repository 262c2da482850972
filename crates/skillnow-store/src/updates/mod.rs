//! Request payloads for record creation and update builders.
//!
//! Update structs carry `Option` fields; only `Some` fields are applied to the
//! stored record. They deserialize straight from request bodies, so unknown
//! keys (including `id`) are ignored.

pub mod assignment;
pub mod project;
pub mod user;

use serde::{Deserialize, Deserializer};

use crate::codec::{decode_list, normalize_list};

/// A list field as clients send it: a JSON array or one comma-joined string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ListInput {
    Tokens(Vec<String>),
    Joined(String),
}

impl ListInput {
    fn into_tokens(self) -> Vec<String> {
        match self {
            Self::Tokens(tokens) => normalize_list(&tokens),
            Self::Joined(cell) => decode_list(&cell),
        }
    }
}

/// Deserialize a list field, treating `null` as empty.
pub(crate) fn list_field<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ListInput>::deserialize(deserializer)?
        .map(ListInput::into_tokens)
        .unwrap_or_default())
}

/// Deserialize an optional list field for updates; `null` leaves it unchanged.
pub(crate) fn optional_list_field<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ListInput>::deserialize(deserializer)?.map(ListInput::into_tokens))
}
