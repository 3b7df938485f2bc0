//! Option building: registry entries → labeled, offset-sorted options.

use crate::domain::{LabelPolicy, LabelStyle, TimezoneOption, ZoneRegistry};
use crate::tz::{self, ZoneSnapshot};
use chrono::{DateTime, Utc};

/// Builds the option list for `registry` as of `now`.
///
/// Entries whose zone id the time library does not recognize are skipped. The
/// result is stable-sorted ascending by offset, so entries sharing an offset keep
/// registry order.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzselect::{build_options, LabelPolicy, ZoneRegistry};
///
/// let registry = ZoneRegistry::new()
///     .with("Europe/Berlin", "Frankfurt")
///     .with("America/SmallTownMissing", "Missing")
///     .with("America/Lima", "Pittsburgh");
/// let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
///
/// let options = build_options(&registry, &LabelPolicy::default(), winter);
/// let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
/// assert_eq!(labels, vec!["(GMT-5:00) Pittsburgh", "(GMT+1:00) Frankfurt"]);
/// ```
#[must_use]
pub fn build_options(
    registry: &ZoneRegistry,
    policy: &LabelPolicy,
    now: DateTime<Utc>,
) -> Vec<TimezoneOption> {
    let _span = tracing::debug_span!("build_options",
        entries = registry.len(),
        style = %policy.style,
    )
    .entered();

    let mut options: Vec<TimezoneOption> = registry
        .iter()
        .filter_map(|(zone_id, display_name)| match tz::lookup(zone_id, now) {
            Ok(zone) => Some(build_option(&zone, display_name, policy)),
            Err(e) => {
                tracing::debug!(zone_id = %zone_id, error = %e, "skipping registry entry");
                None
            }
        })
        .collect();

    options.sort_by(|a, b| a.offset.total_cmp(&b.offset));

    tracing::debug!(option_count = options.len(), "options built");
    options
}

fn build_option(zone: &ZoneSnapshot, display_name: &str, policy: &LabelPolicy) -> TimezoneOption {
    let (abbrev, alt_name) = tz::names_for(zone.name())
        .map_or(("", ""), |names| names.pick(zone.is_dst));

    let prefix = format!("(GMT{}) {display_name}", format_offset(zone.offset_minutes));
    let label = compose_label(prefix, abbrev, alt_name, policy);

    TimezoneOption {
        value: zone.name().to_string(),
        label,
        offset: zone.offset_hours(),
        abbrev: abbrev.to_string(),
        alt_name: alt_name.to_string(),
    }
}

/// Formats an offset in minutes as `±h:mm`.
///
/// The hour part is truncated toward zero and the minutes are the absolute
/// remainder, so -330 becomes `-5:30`. The sign follows the total offset, which
/// keeps sub-hour negative offsets (`-0:30`) negative.
///
/// ```
/// use tzselect::select::builder::format_offset;
///
/// assert_eq!(format_offset(60), "+1:00");
/// assert_eq!(format_offset(0), "+0:00");
/// assert_eq!(format_offset(-330), "-5:30");
/// assert_eq!(format_offset(-450), "-7:30");
/// assert_eq!(format_offset(345), "+5:45");
/// ```
#[must_use]
pub fn format_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let hours = (minutes / 60).unsigned_abs();
    let rest = (minutes % 60).unsigned_abs();
    format!("{sign}{hours}:{rest:02}")
}

/// Appends the style-specific suffix to `prefix`.
///
/// Falls back to the bare prefix whenever the piece the style wants is empty
/// (or, for alternate names, rejected by the policy's filter).
#[must_use]
pub fn compose_label(prefix: String, abbrev: &str, alt_name: &str, policy: &LabelPolicy) -> String {
    match policy.style {
        LabelStyle::AltName if policy.alt_name_filter.accepts(alt_name) => {
            format!("{prefix} ({alt_name})")
        }
        LabelStyle::Abbrev if !abbrev.is_empty() => {
            let short: String = abbrev.chars().take(policy.max_abbr_length).collect();
            format!("{prefix} ({short})")
        }
        _ => prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AltNameFilter;
    use chrono::TimeZone;

    fn winter() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn summer() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap()
    }

    fn policy(style: LabelStyle) -> LabelPolicy {
        LabelPolicy {
            style,
            ..LabelPolicy::default()
        }
    }

    fn amsterdam() -> ZoneRegistry {
        ZoneRegistry::new().with(
            "Europe/Amsterdam",
            "Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna",
        )
    }

    #[test]
    fn original_label_follows_dst() {
        let options = build_options(&amsterdam(), &LabelPolicy::default(), winter());
        assert_eq!(
            options[0].label,
            "(GMT+1:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna"
        );

        let options = build_options(&amsterdam(), &LabelPolicy::default(), summer());
        assert_eq!(
            options[0].label,
            "(GMT+2:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna"
        );
        assert_eq!(options[0].abbrev, "CEST");
    }

    #[test]
    fn alt_name_and_abbrev_styles() {
        let registry = ZoneRegistry::new().with("America/Juneau", "Alaska");

        let options = build_options(&registry, &policy(LabelStyle::AltName), winter());
        assert_eq!(options[0].label, "(GMT-9:00) Alaska (Alaska Standard Time)");

        let options = build_options(&registry, &policy(LabelStyle::Abbrev), summer());
        assert_eq!(options[0].label, "(GMT-8:00) Alaska (AKDT)");
    }

    #[test]
    fn negative_dst_zone_names_follow_the_season() {
        let registry = ZoneRegistry::new().with("Europe/Dublin", "Dublin");

        let options = build_options(&registry, &policy(LabelStyle::AltName), winter());
        assert_eq!(options[0].label, "(GMT+0:00) Dublin (Greenwich Mean Time)");
        assert_eq!(options[0].abbrev, "GMT");

        let options = build_options(&registry, &policy(LabelStyle::AltName), summer());
        assert_eq!(options[0].label, "(GMT+1:00) Dublin (Irish Standard Time)");
        assert_eq!(options[0].abbrev, "IST");
    }

    #[test]
    fn abbreviation_is_truncated() {
        let registry = ZoneRegistry::new().with("Atlantic/Azores", "Azores");
        let policy = LabelPolicy {
            style: LabelStyle::Abbrev,
            max_abbr_length: 3,
            ..LabelPolicy::default()
        };
        let options = build_options(&registry, &policy, summer());
        assert_eq!(options[0].abbrev, "AZOST");
        assert_eq!(options[0].label, "(GMT+0:00) Azores (AZO)");
    }

    #[test]
    fn missing_names_leave_bare_prefix() {
        let registry = ZoneRegistry::new().with("Antarctica/Troll", "Troll");
        for style in [LabelStyle::Original, LabelStyle::AltName, LabelStyle::Abbrev] {
            let options = build_options(&registry, &policy(style), winter());
            assert_eq!(options[0].label, "(GMT+0:00) Troll");
            assert!(options[0].abbrev.is_empty());
            assert!(options[0].alt_name.is_empty());
        }
    }

    #[test]
    fn slash_filter_drops_alt_name() {
        let policy = LabelPolicy {
            style: LabelStyle::AltName,
            alt_name_filter: AltNameFilter::RejectSlash,
            ..LabelPolicy::default()
        };
        assert_eq!(
            compose_label("(GMT-3:00) Brasilia".to_string(), "BRT", "Brasilia/Sao Paulo", &policy),
            "(GMT-3:00) Brasilia"
        );
        assert_eq!(
            compose_label("(GMT-3:00) Brasilia".to_string(), "BRT", "Brasilia Time", &policy),
            "(GMT-3:00) Brasilia (Brasilia Time)"
        );
    }

    #[test]
    fn canonical_value_replaces_registry_key() {
        let registry = ZoneRegistry::new().with("asia/tokyo", "Tokyo");
        let options = build_options(&registry, &LabelPolicy::default(), winter());
        assert_eq!(options[0].value, "Asia/Tokyo");
    }

    #[test]
    fn sorted_by_offset_with_stable_ties() {
        let options = build_options(&ZoneRegistry::default(), &LabelPolicy::default(), winter());
        assert!(options.windows(2).all(|w| w[0].offset <= w[1].offset));

        let position = |value: &str| options.iter().position(|o| o.value == value).unwrap();
        assert!(position("Europe/Belgrade") < position("Europe/Sarajevo"));
        assert!(position("Europe/Sarajevo") < position("Europe/Brussels"));
        assert!(position("Europe/Brussels") < position("Europe/Amsterdam"));
    }

    #[test]
    fn fractional_offsets_in_labels() {
        let registry = ZoneRegistry::new()
            .with("Asia/Kolkata", "Mumbai")
            .with("America/St_Johns", "Newfoundland");
        let options = build_options(&registry, &LabelPolicy::default(), winter());
        assert_eq!(options[0].label, "(GMT-3:30) Newfoundland");
        assert_eq!(options[0].offset, -3.5);
        assert_eq!(options[1].label, "(GMT+5:30) Mumbai");
    }

    #[test]
    fn negative_sub_hour_offset_keeps_sign() {
        assert_eq!(format_offset(-30), "-0:30");
    }
}
