mod category;
mod product;

pub use category::Category;
pub use product::Product;

use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer, Error as _, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record kind served by the generic collection/item handlers.
///
/// Implementors are plain serde structs; the trait only adds what the
/// handlers need to route, label and renumber them.
pub trait Resource:
    Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static
{
    /// Word used in error messages, e.g. `invalid produk id`.
    const LABEL: &'static str;
    /// Path serving list/create.
    const COLLECTION_PATH: &'static str;
    /// Prefix stripped from item paths before parsing the id.
    const ITEM_PREFIX: &'static str;
    /// Wire field names, as serialized.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

/// Top-level body: `null`, or an object with its entries in document order
/// (duplicates included). Any other JSON value is a decode error.
enum RawBody {
    Null,
    Object(Vec<(String, Value)>),
}

impl<'de> Deserialize<'de> for RawBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawBodyVisitor;

        impl<'de> Visitor<'de> for RawBodyVisitor {
            type Value = RawBody;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_unit<E: de::Error>(self) -> Result<RawBody, E> {
                Ok(RawBody::Null)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawBody, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(RawBody::Object(entries))
            }
        }

        deserializer.deserialize_any(RawBodyVisitor)
    }
}

/// Wire field a body key binds to: an exact match, else the first field equal
/// to it ignoring ASCII case.
fn match_field(fields: &'static [&'static str], key: &str) -> Option<&'static str> {
    fields
        .iter()
        .copied()
        .find(|field| *field == key)
        .or_else(|| fields.iter().copied().find(|field| field.eq_ignore_ascii_case(key)))
}

/// Decode the first JSON value in `body` as a record.
///
/// Only an object or a bare `null` (the zero record) is accepted. Keys bind to
/// fields case-insensitively and later keys overwrite earlier ones; `null`
/// values and unknown keys are skipped, and missing fields keep their zero
/// value. Anything after the first value is left unread.
pub fn decode_record<R: Resource>(body: &[u8]) -> Result<R, serde_json::Error> {
    let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<RawBody>();
    let entries = match stream.next() {
        Some(Ok(RawBody::Object(entries))) => entries,
        Some(Ok(RawBody::Null)) => return Ok(R::default()),
        Some(Err(err)) => return Err(err),
        None => return Err(serde_json::Error::custom("EOF")),
    };

    let mut fields = Map::new();
    for (key, value) in entries {
        if value.is_null() {
            continue;
        }
        if let Some(field) = match_field(R::FIELDS, &key) {
            fields.insert(field.to_string(), value);
        }
    }

    serde_json::from_value(Value::Object(fields))
}
