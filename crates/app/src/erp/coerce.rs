//! Coercion of dynamically shaped ERP replies into typed structures.
//!
//! The ERP answers with loosely typed JSON: `false` where a string is
//! missing, numbers where a code is expected, extra keys that change between
//! releases. Typed reply structs opt into that leniency with `#[serde(default)]`
//! and the field adapters in [`lenient`].

use serde::{Serialize, de::DeserializeOwned};

use crate::erp::CoerceError;

/// Shape any serializable value into `T`.
///
/// Missing fields take their defaults and unknown fields are ignored, as long
/// as `T` is declared with `#[serde(default)]`.
///
/// # Errors
///
/// Returns an error when a present field cannot be represented as `T`.
pub fn coerce<T, S>(value: &S) -> Result<T, CoerceError>
where
    T: DeserializeOwned,
    S: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)?;

    Ok(serde_json::from_value(value)?)
}

/// Decode a JSON document returned by a stored function.
///
/// Functions answer `NULL` when there is nothing to report, which arrives as
/// an empty string; that decodes to `T::default()`.
///
/// # Errors
///
/// Returns an error when the document is not valid JSON for `T`.
pub fn decode_json<T>(raw: &str) -> Result<T, CoerceError>
where
    T: DeserializeOwned + Default,
{
    if raw.trim().is_empty() {
        return Ok(T::default());
    }

    Ok(serde_json::from_str(raw)?)
}

/// Field adapters for `#[serde(deserialize_with = "...")]`.
pub mod lenient {
    use serde::{Deserialize, Deserializer, de::Error as _};
    use serde_json::Value;

    /// Accept strings, numbers and booleans; `null` and `false` become empty.
    ///
    /// # Errors
    ///
    /// Fails for arrays and objects.
    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(value) => Ok(value),
            Value::Number(value) => Ok(value.to_string()),
            Value::Bool(true) => Ok("true".to_string()),
            Value::Null | Value::Bool(false) => Ok(String::new()),
            other => Err(D::Error::custom(format!("expected a scalar, found {other}"))),
        }
    }

    /// Accept any numeric scalar as whole units; fractions are truncated.
    ///
    /// `null`, `false` and blanks become zero and `true` becomes one.
    ///
    /// # Errors
    ///
    /// Fails for non-numeric strings and containers.
    pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(value) => value
                .as_i64()
                .or_else(|| value.as_f64().map(whole_units))
                .ok_or_else(|| D::Error::custom(format!("expected a number, found {value}"))),
            Value::String(value) if value.trim().is_empty() => Ok(0),
            Value::String(value) => parse_whole(value.trim())
                .ok_or_else(|| D::Error::custom(format!("expected a number, found {value:?}"))),
            Value::Bool(value) => Ok(i64::from(value)),
            Value::Null => Ok(0),
            other => Err(D::Error::custom(format!("expected a number, found {other}"))),
        }
    }

    /// Accept booleans, `null`, numeric `0`/`1` and the strings
    /// `"true"`/`"false"`/`"1"`/`"0"`.
    ///
    /// # Errors
    ///
    /// Fails for anything else.
    pub fn bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Bool(value) => Ok(value),
            Value::Null => Ok(false),
            Value::Number(value) => match value.as_u64() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(D::Error::custom(format!("expected a boolean, found {value}"))),
            },
            Value::String(value) => match value.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" | "" => Ok(false),
                _ => Err(D::Error::custom(format!("expected a boolean, found {value:?}"))),
            },
            other => Err(D::Error::custom(format!("expected a boolean, found {other}"))),
        }
    }

    fn parse_whole(raw: &str) -> Option<i64> {
        raw.parse::<i64>().ok().or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(whole_units)
        })
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "amounts are whole currency units; fractions are dropped"
    )]
    fn whole_units(value: f64) -> i64 {
        value.trunc() as i64
    }
}
