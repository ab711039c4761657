use serde::{Deserialize, Serialize};

/// Single-field body used for plain status messages, e.g. `{"message": "Todo not found"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
