use serde::{Deserialize, Serialize};

use crate::wire::null_as_default;

/// A todo entry. `id` is supplied by the client and never generated.
/// Missing or `null` fields decode to their zero values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub item: String,
    #[serde(deserialize_with = "null_as_default")]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, item: impl Into<String>, completed: bool) -> Self {
        Self { id: id.into(), item: item.into(), completed }
    }
}
