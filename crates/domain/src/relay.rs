//! Relay commands: the two relay states a caller wants applied.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::content_instance::ContentInstanceEnvelope;
use crate::error::HomeRelayError;

/// Largest magnitude JavaScript still prints without an exponent.
const PLAIN_NOTATION_LIMIT: f64 = 1e21;

/// Desired state of the two relays.
///
/// Values are opaque: whatever JSON the caller sent is forwarded as-is.
/// A member missing from the request stays `None` and is left out of the
/// serialized content, while an explicit `null` is kept as `null`.
/// Members other than `relay1` and `relay2` are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RelayCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relay1: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relay2: Option<Value>,
}

impl RelayCommand {
    /// Build a command with both relays set.
    pub fn new(relay1: impl Into<Value>, relay2: impl Into<Value>) -> Self {
        Self {
            relay1: Some(relay1.into()),
            relay2: Some(relay2.into()),
        }
    }

    /// Pick `relay1` and `relay2` out of a JSON value.
    ///
    /// Anything other than an object yields an empty command.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let member = |key: &str| value.as_object().and_then(|obj| obj.get(key)).cloned();
        Self {
            relay1: member("relay1"),
            relay2: member("relay2"),
        }
    }

    /// Read a command from a raw request body.
    ///
    /// The body is not validated: bytes that do not parse as JSON, or parse
    /// to something other than an object, yield an empty command.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }

    /// Serialize the command into the string carried by `con`.
    ///
    /// Floats holding an integral value are written as integers, so `1.0`
    /// becomes `1` and `1e2` becomes `100`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeRelayError::Encode`] if serialization fails.
    pub fn to_content(&self) -> Result<String, HomeRelayError> {
        let mut normalized = self.clone();
        for value in [&mut normalized.relay1, &mut normalized.relay2]
            .into_iter()
            .flatten()
        {
            normalize_numbers(value);
        }
        serde_json::to_string(&normalized).map_err(HomeRelayError::Encode)
    }

    /// Wrap the command in a content instance envelope.
    ///
    /// # Errors
    ///
    /// Returns [`HomeRelayError::Encode`] if serialization fails.
    pub fn to_envelope(&self) -> Result<ContentInstanceEnvelope, HomeRelayError> {
        self.to_content().map(ContentInstanceEnvelope::new)
    }
}

fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(number) => {
            if let Some(integral) = number
                .as_f64()
                .filter(|_| number.is_f64())
                .and_then(integral_number)
            {
                *number = integral;
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(members) => members.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn integral_number(float: f64) -> Option<Number> {
    if float.fract().abs() > 0.0 || float.abs() >= PLAIN_NOTATION_LIMIT {
        return None;
    }
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(Number::from(float as i64))
    } else if float >= 0.0 && float < u64::MAX as f64 {
        Some(Number::from(float as u64))
    } else {
        None
    }
}
