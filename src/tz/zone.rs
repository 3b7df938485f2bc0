//! Per-zone snapshot at a given instant, backed by `chrono-tz`.

use crate::domain::{Result, TzSelectError};
use chrono::{DateTime, Datelike, Duration, Offset, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};
use std::cmp::Ordering;

/// Days of the month sampled when deciding whether a zone observes DST.
const SAMPLE_DAYS: [u32; 2] = [1, 15];

/// What the time library says about one zone at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSnapshot {
    pub tz: Tz,
    /// Total UTC offset in minutes, DST included.
    pub offset_minutes: i32,
    /// Summer time is in effect at the snapshot instant, for negative-DST zones too.
    pub is_dst: bool,
    /// DST is in effect at some point during the snapshot's year.
    pub observes_dst: bool,
}

impl ZoneSnapshot {
    /// Canonical zone id, e.g. `Europe/Amsterdam` for `europe/amsterdam`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Offset in fractional hours.
    #[must_use]
    pub fn offset_hours(&self) -> f64 {
        f64::from(self.offset_minutes) / 60.0
    }
}

/// Looks `zone_id` up (case-insensitively) and snapshots it at `now`.
///
/// # Errors
///
/// Returns [`TzSelectError::UnknownZone`] if the time library does not know the id.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzselect::tz::lookup;
///
/// let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let zone = lookup("europe/amsterdam", winter).unwrap();
/// assert_eq!(zone.name(), "Europe/Amsterdam");
/// assert_eq!(zone.offset_minutes, 60);
/// assert!(!zone.is_dst);
/// assert!(zone.observes_dst);
///
/// assert!(lookup("America/SmallTownMissing", winter).is_err());
/// ```
pub fn lookup(zone_id: &str, now: DateTime<Utc>) -> Result<ZoneSnapshot> {
    let tz = Tz::from_str_insensitive(zone_id)
        .map_err(|_| TzSelectError::UnknownZone(zone_id.to_string()))?;

    let local = now.with_timezone(&tz);
    let offset = local.offset();
    let year = DstProfile::sample(tz, now.year());

    // Zones with negative DST (Europe/Dublin) carry their summer time as the
    // zero-DST period and winter as the negative one.
    let is_dst = match offset.dst_offset().cmp(&Duration::zero()) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => year.negative_dst,
    };

    Ok(ZoneSnapshot {
        tz,
        offset_minutes: offset.fix().local_minus_utc() / 60,
        is_dst,
        observes_dst: year.observes_dst,
    })
}

/// DST behaviour of a zone over one calendar year.
#[derive(Debug, Clone, Copy, Default)]
struct DstProfile {
    /// Some sample carries a DST component or the total offset moves.
    observes_dst: bool,
    /// Some sample carries a negative DST component.
    negative_dst: bool,
}

impl DstProfile {
    /// Samples the zone twice a month across `year`.
    fn sample(tz: Tz, year: i32) -> Self {
        let mut profile = Self::default();
        let mut first_offset = None;

        for month in 1..=12 {
            for day in SAMPLE_DAYS {
                let Some(instant) = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single()
                else {
                    continue;
                };
                let local = instant.with_timezone(&tz);
                let offset = local.offset();

                let dst = offset.dst_offset();
                if dst != Duration::zero() {
                    profile.observes_dst = true;
                }
                if dst < Duration::zero() {
                    profile.negative_dst = true;
                }

                let total = offset.fix().local_minus_utc();
                match first_offset {
                    None => first_offset = Some(total),
                    Some(first) if first != total => profile.observes_dst = true,
                    Some(_) => {}
                }
            }
        }

        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winter() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn summer() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn summer_offsets_include_dst() {
        let zone = lookup("Europe/Amsterdam", summer()).unwrap();
        assert_eq!(zone.offset_minutes, 120);
        assert!(zone.is_dst);
    }

    #[test]
    fn zones_without_dst() {
        let zone = lookup("Pacific/Honolulu", winter()).unwrap();
        assert_eq!(zone.offset_minutes, -600);
        assert!(!zone.observes_dst);
        assert_eq!(zone.offset_hours(), -10.0);
    }

    #[test]
    fn fractional_offsets() {
        assert_eq!(lookup("Asia/Kolkata", winter()).unwrap().offset_minutes, 330);
        assert_eq!(lookup("Asia/Kathmandu", winter()).unwrap().offset_minutes, 345);
        assert_eq!(lookup("America/St_Johns", winter()).unwrap().offset_minutes, -210);
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let err = lookup("Mars/Olympus_Mons", winter()).unwrap_err();
        assert!(matches!(err, TzSelectError::UnknownZone(id) if id == "Mars/Olympus_Mons"));
    }

    #[test]
    fn negative_dst_zones_report_summer_as_dst() {
        let zone = lookup("Europe/Dublin", winter()).unwrap();
        assert_eq!(zone.offset_minutes, 0);
        assert!(!zone.is_dst);
        assert!(zone.observes_dst);

        let zone = lookup("Europe/Dublin", summer()).unwrap();
        assert_eq!(zone.offset_minutes, 60);
        assert!(zone.is_dst);
    }

    #[test]
    fn southern_hemisphere_dst() {
        let zone = lookup("Australia/Sydney", winter()).unwrap();
        assert!(zone.is_dst);
        assert_eq!(zone.offset_minutes, 660);
    }
}
