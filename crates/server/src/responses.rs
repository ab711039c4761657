use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

const JSON_UTF8: &str = "application/json; charset=utf-8";
const TEXT_UTF8: &str = "text/plain; charset=utf-8";

fn encode_failure(e: serde_json::Error) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, [(header::CONTENT_TYPE, TEXT_UTF8)], e.to_string()).into_response()
}

/// JSON body pretty-printed with four-space indentation.
pub struct IndentedJson<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        let mut buf = Vec::with_capacity(128);
        let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
        match self.1.serialize(&mut ser) {
            Ok(()) => (self.0, [(header::CONTENT_TYPE, JSON_UTF8)], buf).into_response(),
            Err(e) => encode_failure(e),
        }
    }
}

/// `{code, data, message}` wrapper used by every product response.
/// Always 200 unless the envelope itself fails to encode.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub data: Option<T>,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self { code: StatusCode::OK.as_u16(), data: Some(data), message: message.into() }
    }
}

impl Envelope<()> {
    /// Envelope without payload; `data` encodes as `null`.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self { code: StatusCode::OK.as_u16(), data: None, message: message.into() }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => encode_failure(e),
        }
    }
}
