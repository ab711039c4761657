//! Request body decoding under the configured [`BodyPolicy`].
//!
//! Handlers never call `serde_json` on a body directly; they go through
//! [`decode`] so the treatment of malformed input lives in one place. Field
//! names match case-insensitively and `null` means zero, see [`models::wire`].

use axum::http::StatusCode;
use configs::BodyPolicy;
use models::wire;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::JsonApiError;

/// `Ok(Some(v))` on success. On a decode error, lenient mode yields `Ok(None)` and
/// leaves the fallback to the caller; strict mode yields a 400.
pub fn decode<T: DeserializeOwned>(policy: BodyPolicy, body: &[u8]) -> Result<Option<T>, JsonApiError> {
    match wire::from_slice::<T>(body) {
        Ok(v) => Ok(Some(v)),
        Err(e) => match policy {
            BodyPolicy::Lenient => {
                warn!(error = %e, "ignoring malformed request body");
                Ok(None)
            }
            BodyPolicy::Strict => Err(JsonApiError::new(
                StatusCode::BAD_REQUEST,
                "Malformed Body",
                Some(e.to_string()),
            )),
        },
    }
}

/// Like [`decode`], but a swallowed error becomes `T::default()`.
pub fn decode_or_default<T: DeserializeOwned + Default>(policy: BodyPolicy, body: &[u8]) -> Result<T, JsonApiError> {
    Ok(decode(policy, body)?.unwrap_or_default())
}
