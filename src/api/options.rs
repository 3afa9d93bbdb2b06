use serde::Serialize;
use serde_json::Value;

use super::error::{Error, Result};
use crate::utils::{append_query, scalar_to_query_value};

/// Flatten a filter struct into query pairs.
///
/// Field names become parameter names. Fields that serialize to `null` are
/// dropped so an unset `Option` never shows up as `key=`. Nested arrays or
/// objects have no query form and fail with [`Error::Encode`]. Pairs come
/// out sorted by key.
pub fn query_pairs<T: Serialize + ?Sized>(options: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(options).map_err(Error::Encode)?;
    match value {
        Value::Object(map) => {
            let mut pairs = Vec::with_capacity(map.len());
            for (k, v) in map.iter().filter(|(_, v)| !v.is_null()) {
                let value = scalar_to_query_value(v).ok_or_else(|| {
                    Error::Encode(<serde_json::Error as serde::ser::Error>::custom(format!(
                        "query option `{}` must be a scalar, got {}",
                        k, v
                    )))
                })?;
                pairs.push((k.clone(), value));
            }
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            Ok(pairs)
        }
        Value::Null => Ok(Vec::new()),
        other => Err(Error::Encode(<serde_json::Error as serde::ser::Error>::custom(
            format!("query options must serialize to an object, got {}", other),
        ))),
    }
}

/// Append the encoded options to `path`. Without options the path comes back
/// unchanged.
pub fn add_options<T: Serialize + ?Sized>(path: &str, options: Option<&T>) -> Result<String> {
    let Some(options) = options else {
        return Ok(path.to_string());
    };
    let pairs = query_pairs(options)?;
    Ok(append_query(path, &pairs))
}
