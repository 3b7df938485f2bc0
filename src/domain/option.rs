//! Timezone option model and label policy types.
//!
//! A [`TimezoneOption`] is one selectable row of the list: the canonical zone id,
//! the rendered label and the raw pieces the label was built from. [`LabelPolicy`]
//! groups the knobs that control how labels are composed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default truncation length for abbreviations in [`LabelStyle::Abbrev`] labels.
pub const DEFAULT_MAX_ABBR_LENGTH: usize = 4;

/// One selectable timezone entry.
///
/// Serializes to the same shape the change callback payload uses:
///
/// ```
/// use tzselect::TimezoneOption;
///
/// let option = TimezoneOption {
///     value: "Pacific/Honolulu".to_string(),
///     label: "(GMT-10:00) Hawaii".to_string(),
///     offset: -10.0,
///     abbrev: "HAST".to_string(),
///     alt_name: "Hawaii-Aleutian Standard Time".to_string(),
/// };
///
/// let json = serde_json::to_value(&option).unwrap();
/// assert_eq!(json["altName"], "Hawaii-Aleutian Standard Time");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneOption {
    /// Canonical zone id as named by the time library.
    pub value: String,

    /// Display label, e.g. `(GMT+1:00) Amsterdam, Berlin`.
    pub label: String,

    /// Current UTC offset in fractional hours (`minutes / 60`).
    #[serde(default)]
    pub offset: f64,

    /// Short zone abbreviation, empty when the name table has none.
    #[serde(default)]
    pub abbrev: String,

    /// Long standard or daylight name, empty when the name table has none.
    #[serde(default)]
    pub alt_name: String,
}

impl TimezoneOption {
    /// Offset converted back to whole minutes.
    ///
    /// Offsets are always produced from integral minutes, so the rounding here
    /// only absorbs floating-point noise.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn offset_minutes(&self) -> i32 {
        (self.offset * 60.0).round() as i32
    }
}

/// Display policy for option labels.
///
/// Deserializes leniently: any unrecognized style falls back to
/// [`LabelStyle::Original`], which renders the bare prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum LabelStyle {
    /// `(GMT±h:mm) <name>`
    #[default]
    Original,
    /// Prefix plus the long zone name in parentheses.
    AltName,
    /// Prefix plus the truncated abbreviation in parentheses.
    Abbrev,
}

impl From<&str> for LabelStyle {
    fn from(value: &str) -> Self {
        match value {
            "altName" | "alt_name" => Self::AltName,
            "abbrev" => Self::Abbrev,
            "original" => Self::Original,
            other => {
                tracing::debug!(style = %other, "unknown label style, using original");
                Self::Original
            }
        }
    }
}

impl From<String> for LabelStyle {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Original => "original",
            Self::AltName => "altName",
            Self::Abbrev => "abbrev",
        })
    }
}

/// Which alternate names may be appended in [`LabelStyle::AltName`] labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AltNameFilter {
    /// Any non-empty name is appended.
    #[default]
    Any,
    /// Names containing a `/` are treated as missing.
    RejectSlash,
}

impl AltNameFilter {
    /// Returns `true` if `alt_name` may be shown.
    #[must_use]
    pub fn accepts(self, alt_name: &str) -> bool {
        if alt_name.is_empty() {
            return false;
        }
        match self {
            Self::Any => true,
            Self::RejectSlash => !alt_name.contains('/'),
        }
    }
}

/// Label composition settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPolicy {
    pub style: LabelStyle,
    pub max_abbr_length: usize,
    pub alt_name_filter: AltNameFilter,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            style: LabelStyle::Original,
            max_abbr_length: DEFAULT_MAX_ABBR_LENGTH,
            alt_name_filter: AltNameFilter::Any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_style_parses_known_and_unknown_names() {
        assert_eq!(LabelStyle::from("altName"), LabelStyle::AltName);
        assert_eq!(LabelStyle::from("abbrev"), LabelStyle::Abbrev);
        assert_eq!(LabelStyle::from("original"), LabelStyle::Original);
        assert_eq!(LabelStyle::from("shouting"), LabelStyle::Original);
    }

    #[test]
    fn label_style_deserializes_from_any_string() {
        let style: LabelStyle = serde_json::from_str("\"altName\"").unwrap();
        assert_eq!(style, LabelStyle::AltName);
        let style: LabelStyle = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(style, LabelStyle::Original);
        assert_eq!(serde_json::to_string(&LabelStyle::AltName).unwrap(), "\"altName\"");
    }

    #[test]
    fn alt_name_filter_policies() {
        assert!(AltNameFilter::Any.accepts("Central European Time"));
        assert!(AltNameFilter::Any.accepts("Brasilia/Sao Paulo Time"));
        assert!(!AltNameFilter::RejectSlash.accepts("Brasilia/Sao Paulo Time"));
        assert!(!AltNameFilter::Any.accepts(""));
    }

    #[test]
    fn partial_payload_deserializes_with_defaults() {
        let option: TimezoneOption = serde_json::from_str(
            r#"{"value":"Europe/Amsterdam","label":"(GMT+1:00) Amsterdam"}"#,
        )
        .unwrap();
        assert_eq!(option.offset, 0.0);
        assert!(option.abbrev.is_empty());
        assert!(option.alt_name.is_empty());
    }

    #[test]
    fn offset_minutes_handles_fractional_hours() {
        let option = TimezoneOption {
            value: "Asia/Kathmandu".to_string(),
            label: String::new(),
            offset: 345.0 / 60.0,
            abbrev: String::new(),
            alt_name: String::new(),
        };
        assert_eq!(option.offset_minutes(), 345);
    }
}
