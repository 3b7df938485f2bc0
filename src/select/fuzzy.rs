//! Nearest-option heuristic for zone ids that are not in the option list.
//!
//! Candidates must share the zone's current offset. Among those, options whose
//! DST behaviour matches the zone's earn points for naming overlap:
//!
//! | condition                                          | points |
//! |----------------------------------------------------|--------|
//! | DST behaviour matches (gate for the rows below)    | 1      |
//! | option value contains the city part of the id      | 8      |
//! | option label contains the city part of the id      | 4      |
//! | option value does not start with the region        | 2      |
//! | DST behaviour differs but the option is `GMT`      | 1      |
//!
//! The region row pays out whenever the option value does not start with the
//! region, including when the region is absent. Options in the same region as
//! the query (`europe/...` vs `europe/rome`) therefore never earn it.

use crate::domain::TimezoneOption;
use crate::tz::{self, ZoneSnapshot};
use chrono::{DateTime, Utc};

const CITY_IN_VALUE: u32 = 8;
const CITY_IN_LABEL: u32 = 4;
const REGION_IN_VALUE: u32 = 2;
const DST_MATCH: u32 = 1;
const GMT_FALLBACK: u32 = 1;

/// Finds the option closest to `zone_id`, or `None` if the id is unknown or no
/// option shares its current offset.
///
/// Ties resolve to the earliest option in list order.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzselect::{build_options, fuzzy_match, LabelPolicy, ZoneRegistry};
///
/// let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let options = build_options(&ZoneRegistry::default(), &LabelPolicy::default(), winter);
///
/// let rome = fuzzy_match("Europe/Rome", &options, winter).unwrap();
/// assert_eq!(rome.value, "Europe/Amsterdam");
///
/// assert!(fuzzy_match("Europe/Atlantis", &options, winter).is_none());
/// ```
#[must_use]
pub fn fuzzy_match<'a>(
    zone_id: &str,
    options: &'a [TimezoneOption],
    now: DateTime<Utc>,
) -> Option<&'a TimezoneOption> {
    let _span = tracing::debug_span!("fuzzy_match", zone_id = %zone_id).entered();

    let zone = match tz::lookup(zone_id, now) {
        Ok(zone) => zone,
        Err(e) => {
            tracing::debug!(error = %e, "fuzzy match target unknown");
            return None;
        }
    };

    let query = zone.name().to_lowercase();
    let (region, city) = query.split_once('/').unwrap_or(("", query.as_str()));

    let mut best: Option<(u32, &TimezoneOption)> = None;
    for option in options
        .iter()
        .filter(|option| option.offset_minutes() == zone.offset_minutes)
    {
        let points = score(option, &zone, region, city, now);
        tracing::trace!(candidate = %option.value, points, "scored candidate");
        if best.map_or(true, |(top, _)| points > top) {
            best = Some((points, option));
        }
    }

    if let Some((points, option)) = best {
        tracing::debug!(matched = %option.value, points, "fuzzy match found");
    } else {
        tracing::debug!(offset_minutes = zone.offset_minutes, "no option shares the offset");
    }

    best.map(|(_, option)| option)
}

fn score(option: &TimezoneOption, zone: &ZoneSnapshot, region: &str, city: &str, now: DateTime<Utc>) -> u32 {
    let same_dst_behaviour = tz::lookup(&option.value, now)
        .is_ok_and(|candidate| candidate.observes_dst == zone.observes_dst);

    if !same_dst_behaviour {
        return if option.value == "GMT" { GMT_FALLBACK } else { 0 };
    }

    let value = option.value.to_lowercase();
    let label = option.label.to_lowercase();

    let mut score = DST_MATCH;
    if value.contains(city) {
        score += CITY_IN_VALUE;
    }
    if label.contains(city) {
        score += CITY_IN_LABEL;
    }
    if region_bonus_applies(&value, region) {
        score += REGION_IN_VALUE;
    }
    score
}

/// Any position of `region` in `value` except index 0 counts, and so does no
/// match at all.
fn region_bonus_applies(value: &str, region: &str) -> bool {
    !matches!(value.find(region), Some(0))
}
