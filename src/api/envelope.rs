//! Decoding of the Robot response envelope.
//!
//! The webservice wraps every record in a single-key object named after the
//! resource, so a listing looks like `[{"server": {...}}, {"server": {...}}]`
//! and a detail call returns `{"server": {...}}`. The helpers here strip that
//! wrapper and hand back plain records.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

use super::error::{Error, Result};

/// A record type that travels inside a single-key envelope.
pub trait Enveloped: DeserializeOwned {
    /// Key of the wrapper object, e.g. `"product"`
    const ENVELOPE_KEY: &'static str;
}

/// Decode a JSON array of wrapper objects into records, preserving order.
///
/// `[]` decodes to an empty vector. Any element that is not an object with
/// exactly the expected key fails the whole decode.
pub fn decode_list<T: Enveloped>(body: &[u8]) -> Result<Vec<T>> {
    let items: Vec<Map<String, Value>> = serde_json::from_slice(body).map_err(Error::Decode)?;
    items.into_iter().map(unwrap_record::<T>).collect()
}

/// Decode a single wrapper object into its record.
pub fn decode_one<T: Enveloped>(body: &[u8]) -> Result<T> {
    let item: Map<String, Value> = serde_json::from_slice(body).map_err(Error::Decode)?;
    unwrap_record(item)
}

fn unwrap_record<T: Enveloped>(mut item: Map<String, Value>) -> Result<T> {
    if item.len() != 1 {
        return Err(Error::Decode(serde_json::Error::invalid_length(
            item.len(),
            &"an object with exactly one key",
        )));
    }
    let inner = item
        .remove(T::ENVELOPE_KEY)
        .ok_or_else(|| Error::Decode(serde_json::Error::missing_field(T::ENVELOPE_KEY)))?;
    serde_json::from_value(inner).map_err(Error::Decode)
}
