pub mod path;
pub mod resource;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

/// Liveness probe. Answers the same way for every method.
pub async fn health() -> Response {
    write_json(
        StatusCode::OK,
        &json!({ "status": "OK", "message": "API Running" }),
    )
}

/// Serialize `value` as the JSON body of a `status` response.
///
/// Encoding is best effort: on failure the status still goes out, with an
/// empty body.
pub fn write_json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
    let body = match serde_json::to_vec(value) {
        Ok(mut bytes) => {
            bytes.push(b'\n');
            bytes
        }
        Err(err) => {
            warn!(error = %err, "Failed to encode response body");
            Vec::new()
        }
    };

    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
