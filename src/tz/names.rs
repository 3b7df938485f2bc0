//! Standard and daylight names per zone.
//!
//! `chrono-tz` only carries the abbreviations published in the tz database, and
//! many of those are numeric (`+0530`). Labels want the familiar short codes and
//! long names ("AKST", "Alaska Standard Time"), so those live in this table,
//! keyed by zone id and grouped by shared naming.

/// One abbreviation/long-name pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneName {
    pub abbr: &'static str,
    pub name: &'static str,
}

/// Standard and (optional) daylight names for a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneNames {
    pub standard: Option<ZoneName>,
    pub daylight: Option<ZoneName>,
}

impl ZoneNames {
    /// Returns `(abbrev, alt_name)` for the current DST state.
    ///
    /// Each daylight field falls back to its standard counterpart; a missing
    /// standard entry yields empty strings.
    #[must_use]
    pub fn pick(&self, is_dst: bool) -> (&'static str, &'static str) {
        let standard_abbr = self.standard.map_or("", |n| n.abbr);
        let standard_name = self.standard.map_or("", |n| n.name);

        if is_dst {
            (
                self.daylight.map_or(standard_abbr, |n| n.abbr),
                self.daylight.map_or(standard_name, |n| n.name),
            )
        } else {
            (standard_abbr, standard_name)
        }
    }
}

const fn n(abbr: &'static str, name: &'static str) -> Option<ZoneName> {
    Some(ZoneName { abbr, name })
}

const fn standard(abbr: &'static str, name: &'static str) -> ZoneNames {
    ZoneNames {
        standard: n(abbr, name),
        daylight: None,
    }
}

const fn seasonal(
    std_abbr: &'static str,
    std_name: &'static str,
    dst_abbr: &'static str,
    dst_name: &'static str,
) -> ZoneNames {
    ZoneNames {
        standard: n(std_abbr, std_name),
        daylight: n(dst_abbr, dst_name),
    }
}

const SAMOA: ZoneNames = standard("SST", "Samoa Standard Time");
const HAWAII: ZoneNames = seasonal(
    "HAST",
    "Hawaii-Aleutian Standard Time",
    "HADT",
    "Hawaii-Aleutian Daylight Time",
);
const ALASKA: ZoneNames = seasonal("AKST", "Alaska Standard Time", "AKDT", "Alaska Daylight Time");
const PACIFIC: ZoneNames = seasonal("PST", "Pacific Standard Time", "PDT", "Pacific Daylight Time");
const MOUNTAIN: ZoneNames = seasonal("MST", "Mountain Standard Time", "MDT", "Mountain Daylight Time");
const MOUNTAIN_STANDARD: ZoneNames = standard("MST", "Mountain Standard Time");
const CENTRAL: ZoneNames = seasonal("CST", "Central Standard Time", "CDT", "Central Daylight Time");
const CENTRAL_STANDARD: ZoneNames = standard("CST", "Central Standard Time");
const EASTERN: ZoneNames = seasonal("EST", "Eastern Standard Time", "EDT", "Eastern Daylight Time");
const COLOMBIA: ZoneNames = standard("COT", "Colombia Standard Time");
const PERU: ZoneNames = standard("PET", "Peru Standard Time");
const VENEZUELA: ZoneNames = standard("VET", "Venezuela Time");
const CHILE: ZoneNames = seasonal("CLT", "Chile Standard Time", "CLST", "Chile Summer Time");
const NEWFOUNDLAND: ZoneNames = seasonal(
    "NST",
    "Newfoundland Standard Time",
    "NDT",
    "Newfoundland Daylight Time",
);
const BRASILIA: ZoneNames = standard("BRT", "Brasilia Standard Time");
const URUGUAY: ZoneNames = standard("UYT", "Uruguay Standard Time");
const ARGENTINA: ZoneNames = standard("ART", "Argentina Standard Time");
const WEST_GREENLAND: ZoneNames = seasonal(
    "WGT",
    "West Greenland Standard Time",
    "WGST",
    "West Greenland Summer Time",
);
const AZORES: ZoneNames = seasonal("AZOT", "Azores Standard Time", "AZOST", "Azores Summer Time");
const CAPE_VERDE: ZoneNames = standard("CVT", "Cape Verde Standard Time");
const GREENWICH: ZoneNames = standard("GMT", "Greenwich Mean Time");
const UTC: ZoneNames = standard("UTC", "Coordinated Universal Time");
const BRITISH: ZoneNames = seasonal("GMT", "Greenwich Mean Time", "BST", "British Summer Time");
const IRISH: ZoneNames = seasonal("GMT", "Greenwich Mean Time", "IST", "Irish Standard Time");
const WESTERN_EUROPE: ZoneNames = seasonal(
    "WET",
    "Western European Standard Time",
    "WEST",
    "Western European Summer Time",
);
const CENTRAL_EUROPE: ZoneNames = seasonal(
    "CET",
    "Central European Standard Time",
    "CEST",
    "Central European Summer Time",
);
const WEST_AFRICA: ZoneNames = standard("WAT", "West Africa Standard Time");
const EASTERN_EUROPE: ZoneNames = seasonal(
    "EET",
    "Eastern European Standard Time",
    "EEST",
    "Eastern European Summer Time",
);
const ISRAEL: ZoneNames = seasonal("IST", "Israel Standard Time", "IDT", "Israel Daylight Time");
const CENTRAL_AFRICA: ZoneNames = standard("CAT", "Central Africa Time");
const EAST_AFRICA: ZoneNames = standard("EAT", "East Africa Time");
const MOSCOW: ZoneNames = standard("MSK", "Moscow Standard Time");
const TURKEY: ZoneNames = standard("TRT", "Turkey Time");
const ARABIA: ZoneNames = standard("AST", "Arabian Standard Time");
const IRAN: ZoneNames = standard("IRST", "Iran Standard Time");
const GULF: ZoneNames = standard("GST", "Gulf Standard Time");
const AZERBAIJAN: ZoneNames = standard("AZT", "Azerbaijan Standard Time");
const AFGHANISTAN: ZoneNames = standard("AFT", "Afghanistan Time");
const YEKATERINBURG: ZoneNames = standard("YEKT", "Yekaterinburg Standard Time");
const PAKISTAN: ZoneNames = standard("PKT", "Pakistan Standard Time");
const INDIA: ZoneNames = standard("IST", "India Standard Time");
const NEPAL: ZoneNames = standard("NPT", "Nepal Time");
const BANGLADESH: ZoneNames = standard("BST", "Bangladesh Standard Time");
const KAZAKHSTAN: ZoneNames = standard("ALMT", "East Kazakhstan Time");
const MYANMAR: ZoneNames = standard("MMT", "Myanmar Time");
const INDOCHINA: ZoneNames = standard("ICT", "Indochina Time");
const KRASNOYARSK: ZoneNames = standard("KRAT", "Krasnoyarsk Standard Time");
const CHINA: ZoneNames = standard("CST", "China Standard Time");
const IRKUTSK: ZoneNames = standard("IRKT", "Irkutsk Standard Time");
const SINGAPORE: ZoneNames = standard("SGT", "Singapore Standard Time");
const AUSTRALIA_WESTERN: ZoneNames = standard("AWST", "Australian Western Standard Time");
const TAIPEI: ZoneNames = standard("CST", "Taipei Standard Time");
const JAPAN: ZoneNames = standard("JST", "Japan Standard Time");
const KOREA: ZoneNames = standard("KST", "Korean Standard Time");
const YAKUTSK: ZoneNames = standard("YAKT", "Yakutsk Standard Time");
const AUSTRALIA_CENTRAL: ZoneNames = seasonal(
    "ACST",
    "Australian Central Standard Time",
    "ACDT",
    "Australian Central Daylight Time",
);
const AUSTRALIA_CENTRAL_STANDARD: ZoneNames = standard("ACST", "Australian Central Standard Time");
const AUSTRALIA_EASTERN: ZoneNames = seasonal(
    "AEST",
    "Australian Eastern Standard Time",
    "AEDT",
    "Australian Eastern Daylight Time",
);
const AUSTRALIA_EASTERN_STANDARD: ZoneNames = standard("AEST", "Australian Eastern Standard Time");
const CHAMORRO: ZoneNames = standard("ChST", "Chamorro Standard Time");
const VLADIVOSTOK: ZoneNames = standard("VLAT", "Vladivostok Standard Time");
const MAGADAN: ZoneNames = standard("MAGT", "Magadan Standard Time");
const NEW_ZEALAND: ZoneNames = seasonal(
    "NZST",
    "New Zealand Standard Time",
    "NZDT",
    "New Zealand Daylight Time",
);
const FIJI: ZoneNames = standard("FJT", "Fiji Standard Time");
const TONGA: ZoneNames = standard("TOT", "Tonga Standard Time");

static NAME_TABLE: &[(&str, ZoneNames)] = &[
    ("Pacific/Midway", SAMOA),
    ("Pacific/Pago_Pago", SAMOA),
    ("Pacific/Honolulu", HAWAII),
    ("America/Adak", HAWAII),
    ("America/Juneau", ALASKA),
    ("America/Anchorage", ALASKA),
    ("America/Los_Angeles", PACIFIC),
    ("America/Tijuana", PACIFIC),
    ("America/Vancouver", PACIFIC),
    ("America/Boise", MOUNTAIN),
    ("America/Denver", MOUNTAIN),
    ("America/Edmonton", MOUNTAIN),
    ("America/Dawson", MOUNTAIN_STANDARD),
    ("America/Whitehorse", MOUNTAIN_STANDARD),
    ("America/Phoenix", MOUNTAIN_STANDARD),
    ("America/Chihuahua", CENTRAL_STANDARD),
    ("America/Mexico_City", CENTRAL_STANDARD),
    ("America/Regina", CENTRAL_STANDARD),
    ("America/Belize", CENTRAL_STANDARD),
    ("America/Chicago", CENTRAL),
    ("America/Winnipeg", CENTRAL),
    ("America/Detroit", EASTERN),
    ("America/New_York", EASTERN),
    ("America/Toronto", EASTERN),
    ("America/Bogota", COLOMBIA),
    ("America/Lima", PERU),
    ("America/Caracas", VENEZUELA),
    ("America/Santiago", CHILE),
    ("America/St_Johns", NEWFOUNDLAND),
    ("America/Sao_Paulo", BRASILIA),
    ("America/Montevideo", URUGUAY),
    ("America/Argentina/Buenos_Aires", ARGENTINA),
    ("America/Buenos_Aires", ARGENTINA),
    ("America/Godthab", WEST_GREENLAND),
    ("America/Nuuk", WEST_GREENLAND),
    ("Atlantic/Azores", AZORES),
    ("Atlantic/Cape_Verde", CAPE_VERDE),
    ("GMT", GREENWICH),
    ("Etc/GMT", GREENWICH),
    ("UTC", UTC),
    ("Etc/UTC", UTC),
    ("Europe/London", BRITISH),
    ("Europe/Dublin", IRISH),
    ("Europe/Lisbon", WESTERN_EUROPE),
    ("Atlantic/Canary", WESTERN_EUROPE),
    ("Africa/Casablanca", WESTERN_EUROPE),
    ("Europe/Amsterdam", CENTRAL_EUROPE),
    ("Europe/Belgrade", CENTRAL_EUROPE),
    ("Europe/Berlin", CENTRAL_EUROPE),
    ("Europe/Bratislava", CENTRAL_EUROPE),
    ("Europe/Brussels", CENTRAL_EUROPE),
    ("Europe/Budapest", CENTRAL_EUROPE),
    ("Europe/Copenhagen", CENTRAL_EUROPE),
    ("Europe/Ljubljana", CENTRAL_EUROPE),
    ("Europe/Madrid", CENTRAL_EUROPE),
    ("Europe/Oslo", CENTRAL_EUROPE),
    ("Europe/Paris", CENTRAL_EUROPE),
    ("Europe/Prague", CENTRAL_EUROPE),
    ("Europe/Rome", CENTRAL_EUROPE),
    ("Europe/Sarajevo", CENTRAL_EUROPE),
    ("Europe/Skopje", CENTRAL_EUROPE),
    ("Europe/Stockholm", CENTRAL_EUROPE),
    ("Europe/Vienna", CENTRAL_EUROPE),
    ("Europe/Warsaw", CENTRAL_EUROPE),
    ("Europe/Zagreb", CENTRAL_EUROPE),
    ("Europe/Zurich", CENTRAL_EUROPE),
    ("Africa/Lagos", WEST_AFRICA),
    ("Europe/Athens", EASTERN_EUROPE),
    ("Europe/Bucharest", EASTERN_EUROPE),
    ("Europe/Helsinki", EASTERN_EUROPE),
    ("Europe/Kiev", EASTERN_EUROPE),
    ("Europe/Kyiv", EASTERN_EUROPE),
    ("Europe/Riga", EASTERN_EUROPE),
    ("Europe/Sofia", EASTERN_EUROPE),
    ("Europe/Tallinn", EASTERN_EUROPE),
    ("Europe/Vilnius", EASTERN_EUROPE),
    ("Africa/Cairo", EASTERN_EUROPE),
    ("Asia/Jerusalem", ISRAEL),
    ("Africa/Harare", CENTRAL_AFRICA),
    ("Africa/Johannesburg", CENTRAL_AFRICA),
    ("Africa/Nairobi", EAST_AFRICA),
    ("Europe/Moscow", MOSCOW),
    ("Europe/Istanbul", TURKEY),
    ("Asia/Kuwait", ARABIA),
    ("Asia/Riyadh", ARABIA),
    ("Asia/Baghdad", ARABIA),
    ("Asia/Tehran", IRAN),
    ("Asia/Dubai", GULF),
    ("Asia/Muscat", GULF),
    ("Asia/Baku", AZERBAIJAN),
    ("Asia/Kabul", AFGHANISTAN),
    ("Asia/Yekaterinburg", YEKATERINBURG),
    ("Asia/Karachi", PAKISTAN),
    ("Asia/Kolkata", INDIA),
    ("Asia/Calcutta", INDIA),
    ("Asia/Colombo", INDIA),
    ("Asia/Kathmandu", NEPAL),
    ("Asia/Dhaka", BANGLADESH),
    ("Asia/Almaty", KAZAKHSTAN),
    ("Asia/Rangoon", MYANMAR),
    ("Asia/Yangon", MYANMAR),
    ("Asia/Bangkok", INDOCHINA),
    ("Asia/Ho_Chi_Minh", INDOCHINA),
    ("Asia/Krasnoyarsk", KRASNOYARSK),
    ("Asia/Shanghai", CHINA),
    ("Asia/Hong_Kong", CHINA),
    ("Asia/Irkutsk", IRKUTSK),
    ("Asia/Singapore", SINGAPORE),
    ("Asia/Kuala_Lumpur", SINGAPORE),
    ("Australia/Perth", AUSTRALIA_WESTERN),
    ("Asia/Taipei", TAIPEI),
    ("Asia/Tokyo", JAPAN),
    ("Asia/Seoul", KOREA),
    ("Asia/Yakutsk", YAKUTSK),
    ("Australia/Adelaide", AUSTRALIA_CENTRAL),
    ("Australia/Darwin", AUSTRALIA_CENTRAL_STANDARD),
    ("Australia/Brisbane", AUSTRALIA_EASTERN_STANDARD),
    ("Australia/Sydney", AUSTRALIA_EASTERN),
    ("Australia/Melbourne", AUSTRALIA_EASTERN),
    ("Australia/Hobart", AUSTRALIA_EASTERN),
    ("Pacific/Guam", CHAMORRO),
    ("Asia/Vladivostok", VLADIVOSTOK),
    ("Asia/Magadan", MAGADAN),
    ("Pacific/Auckland", NEW_ZEALAND),
    ("Pacific/Fiji", FIJI),
    ("Pacific/Tongatapu", TONGA),
];

/// Looks up the names for `zone_id`, ignoring ASCII case.
///
/// # Example
///
/// ```
/// use tzselect::tz::names_for;
///
/// let names = names_for("america/juneau").unwrap();
/// assert_eq!(names.pick(false), ("AKST", "Alaska Standard Time"));
/// assert_eq!(names.pick(true), ("AKDT", "Alaska Daylight Time"));
/// assert!(names_for("Antarctica/Troll").is_none());
/// ```
#[must_use]
pub fn names_for(zone_id: &str) -> Option<&'static ZoneNames> {
    NAME_TABLE
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(zone_id))
        .map(|(_, names)| names)
}
