//! The caller-owned "current value" of the control.
//!
//! Hosts hand the control whatever they stored last time: a bare zone id, an
//! object carrying only `value`, or a complete option. [`CurrentValue`] names
//! those shapes so the resolver can dispatch on them without guessing.

use super::option::TimezoneOption;
use serde_json::Value;

/// Current selection as supplied by the host.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CurrentValue {
    /// A zone id string, possibly empty and possibly not in the registry.
    Id(String),
    /// An object with a `value` but no `label`.
    Partial {
        value: String,
    },
    /// A complete option, trusted as-is.
    Full(TimezoneOption),
    /// Anything else, including "no value".
    #[default]
    Invalid,
}

impl CurrentValue {
    /// Classifies an arbitrary JSON value by shape.
    ///
    /// - string → [`CurrentValue::Id`]
    /// - object with non-empty `value` and `label` → [`CurrentValue::Full`]
    ///   (missing or mistyped `offset`, `abbrev` and `altName` take their defaults)
    /// - object with non-empty `value` and no `label` → [`CurrentValue::Partial`]
    /// - anything else → [`CurrentValue::Invalid`]
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use tzselect::CurrentValue;
    ///
    /// assert_eq!(
    ///     CurrentValue::from_json(&json!("Europe/Rome")),
    ///     CurrentValue::Id("Europe/Rome".to_string()),
    /// );
    /// assert_eq!(
    ///     CurrentValue::from_json(&json!({ "value": "Europe/Rome" })),
    ///     CurrentValue::Partial { value: "Europe/Rome".to_string() },
    /// );
    /// assert_eq!(CurrentValue::from_json(&json!(42)), CurrentValue::Invalid);
    /// ```
    #[must_use]
    pub fn from_json(raw: &Value) -> Self {
        match raw {
            Value::String(id) => Self::Id(id.clone()),
            Value::Object(map) => {
                let value = map.get("value").and_then(Value::as_str).unwrap_or_default();
                if value.is_empty() {
                    return Self::Invalid;
                }
                let has_label = map
                    .get("label")
                    .and_then(Value::as_str)
                    .is_some_and(|label| !label.is_empty());

                if !has_label {
                    return Self::Partial {
                        value: value.to_string(),
                    };
                }

                let text = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string()
                };
                let offset = map.get("offset").map_or(Some(0.0), Value::as_f64);
                if offset.is_none() {
                    tracing::debug!(value = %value, "non-numeric offset in full option, using 0");
                }

                Self::Full(TimezoneOption {
                    value: value.to_string(),
                    label: text("label"),
                    offset: offset.unwrap_or_default(),
                    abbrev: text("abbrev"),
                    alt_name: text("altName"),
                })
            }
            _ => Self::Invalid,
        }
    }

    /// Parses a JSON document and classifies it with [`Self::from_json`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::TzSelectError::Json`] if `raw` is not valid JSON.
    pub fn from_json_str(raw: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_json(&value))
    }
}

impl From<&str> for CurrentValue {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for CurrentValue {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<TimezoneOption> for CurrentValue {
    fn from(option: TimezoneOption) -> Self {
        if option.value.is_empty() {
            Self::Invalid
        } else if option.label.is_empty() {
            Self::Partial {
                value: option.value,
            }
        } else {
            Self::Full(option)
        }
    }
}
