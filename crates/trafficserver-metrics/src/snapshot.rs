//! Decoding of the upstream statistics document.
//!
//! The document looks like:
//!
//! ```text
//! {"global": {"proxy.process.cache.bytes_used": "104857600", ...}}
//! ```
//!
//! Values are numeric strings rather than JSON numbers. Only keys in
//! [`STATS`] are read; everything else is ignored.

use serde_json::{Map, Value};

use crate::error::{ScrapeError, ScrapeResult};
use crate::schema::{STATS, StatField};

/// Name of the top-level member holding the statistics.
const GLOBAL: &str = "global";

/// One decoded upstream document: a value for every known statistic.
///
/// Values are stored in [`STATS`] order. A statistic missing from the
/// document reads as `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    values: Vec<f64>,
}

impl Snapshot {
    /// A snapshot with every statistic at zero.
    pub fn zeroed() -> Self {
        Self {
            values: vec![0.0; STATS.len()],
        }
    }

    /// Decode a raw response body.
    pub fn decode(body: &[u8]) -> ScrapeResult<Self> {
        // Only the first JSON value counts; anything after it is ignored.
        let document = serde_json::Deserializer::from_slice(body)
            .into_iter::<Map<String, Value>>()
            .next()
            .ok_or_else(|| ScrapeError::Decode("empty body".to_string()))?
            .map_err(|e| ScrapeError::Decode(e.to_string()))?;

        let global = match document.get(GLOBAL) {
            None | Some(Value::Null) => return Ok(Self::zeroed()),
            Some(Value::Object(global)) => global,
            Some(other) => {
                return Err(ScrapeError::Decode(format!(
                    "\"{GLOBAL}\" must be an object, got {}",
                    json_type(other)
                )));
            }
        };

        let values = STATS
            .iter()
            .map(|field| match global.get(field.key) {
                Some(raw) => parse_value(field, raw),
                None => Ok(0.0),
            })
            .collect::<ScrapeResult<Vec<f64>>>()?;

        Ok(Self { values })
    }

    /// Value of a known statistic, or `None` if the key is not in [`STATS`].
    #[cfg(test)]
    fn get(&self, key: &str) -> Option<f64> {
        STATS
            .iter()
            .position(|f| f.key == key)
            .map(|idx| self.values[idx])
    }

    /// Raw values in table order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

fn parse_value(field: &StatField, raw: &Value) -> ScrapeResult<f64> {
    match raw {
        Value::Null => Ok(0.0),
        Value::String(s) if s.trim() == "null" => Ok(0.0),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            ScrapeError::Decode(format!("{}: {s:?} is not a number", field.key))
        }),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ScrapeError::Decode(format!("{}: {n} out of range", field.key))),
        other => Err(ScrapeError::Decode(format!(
            "{}: expected numeric string, got {}",
            field.key,
            json_type(other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
