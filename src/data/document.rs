//! Two-step structured document decode.
//!
//! ```text
//! text ──▶ serde_yaml::Value ──▶ required list check ──▶ typed document
//!          (DataFormat)          (Schema)                (DataFormat)
//! ```

use serde::de::DeserializeOwned;
use serde_yaml::Value;

use super::error::DataError;
use super::strip_bom;

pub(crate) fn decode_document<T: DeserializeOwned>(
    source_id: &str,
    text: &str,
    list_field: &'static str,
) -> Result<T, DataError> {
    let value: Value = serde_yaml::from_str(strip_bom(text)).map_err(|err| DataError::format(source_id, err))?;

    match value.get(list_field) {
        Some(Value::Sequence(items)) if items.is_empty() => {
            return Err(DataError::schema(source_id, list_field, "must contain at least one entry"));
        }
        Some(Value::Sequence(_)) => {}
        Some(_) => return Err(DataError::schema(source_id, list_field, "is not a sequence")),
        None => return Err(DataError::schema(source_id, list_field, "is missing")),
    }

    serde_yaml::from_value(value).map_err(|err| DataError::format(source_id, err))
}
