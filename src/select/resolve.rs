//! Current value → option resolution.

use super::fuzzy::fuzzy_match;
use crate::domain::{CurrentValue, TimezoneOption};
use chrono::{DateTime, Utc};

/// Resolves the host's current value against `options`.
///
/// - Full options come back unchanged, without checking `options`.
/// - Partial options need an exact `value` match.
/// - Ids need an exact match; ids containing `/` fall back to [`fuzzy_match`].
/// - Anything else resolves to `None`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzselect::{build_options, resolve, CurrentValue, LabelPolicy, ZoneRegistry};
///
/// let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let options = build_options(&ZoneRegistry::default(), &LabelPolicy::default(), winter);
///
/// let value = CurrentValue::from("Pacific/Honolulu");
/// assert_eq!(resolve(&value, &options, winter).unwrap().label, "(GMT-10:00) Hawaii");
///
/// assert!(resolve(&CurrentValue::from(""), &options, winter).is_none());
/// ```
#[must_use]
pub fn resolve<'a>(
    value: &'a CurrentValue,
    options: &'a [TimezoneOption],
    now: DateTime<Utc>,
) -> Option<&'a TimezoneOption> {
    let _span = tracing::debug_span!("resolve", value = ?value).entered();

    match value {
        CurrentValue::Full(option) => Some(option),
        CurrentValue::Partial { value } => find_exact(value, options),
        CurrentValue::Id(id) => find_exact(id, options).or_else(|| {
            if id.contains('/') {
                fuzzy_match(id, options, now)
            } else {
                tracing::debug!(id = %id, "id not found and not region/city shaped");
                None
            }
        }),
        CurrentValue::Invalid => None,
    }
}

fn find_exact<'a>(value: &str, options: &'a [TimezoneOption]) -> Option<&'a TimezoneOption> {
    options.iter().find(|option| option.value == value)
}
