use std::marker::PhantomData;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::models::Resource;

/// Parse the id held in the remainder of `path` after `prefix`.
///
/// `path` is percent-decoded first. The whole remainder must be a base-10
/// integer (an optional sign is accepted); an empty or non-numeric remainder,
/// or a malformed escape, gives `None`.
pub fn parse_id(path: &str, prefix: &str) -> Option<i64> {
    let path = percent_decode(path)?;
    let rest = path.strip_prefix(prefix).unwrap_or(&path);
    if rest.is_empty() {
        return None;
    }
    rest.parse().ok()
}

/// Decode `%XX` escapes. `None` on a truncated or non-hex escape, or when the
/// decoded bytes are not UTF-8.
fn percent_decode(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            if !hex.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            let hex = std::str::from_utf8(hex).ok()?;
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(decoded).ok()
}

/// Id of the record addressed by an item path such as `/api/produk/2`.
///
/// Rejects with `400 invalid <label> id` before any method dispatch or body
/// decoding takes place.
#[derive(Debug, Clone, Copy)]
pub struct RecordId<R> {
    pub id: i64,
    resource: PhantomData<fn() -> R>,
}

#[async_trait]
impl<R, S> FromRequestParts<S> for RecordId<R>
where
    R: Resource,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_id(parts.uri.path(), R::ITEM_PREFIX)
            .map(|id| Self {
                id,
                resource: PhantomData,
            })
            .ok_or_else(|| AppError::BadRequest(format!("invalid {} id", R::LABEL)))
    }
}
