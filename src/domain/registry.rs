//! Zone registry: the ordered zone id → display name table options are built from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Bundled table of common IANA zones and their display names.
pub const DEFAULT_ZONES: &[(&str, &str)] = &[
    ("Pacific/Midway", "Midway Island, Samoa"),
    ("Pacific/Honolulu", "Hawaii"),
    ("America/Juneau", "Alaska"),
    ("America/Boise", "Mountain Time"),
    ("America/Dawson", "Dawson, Yukon"),
    ("America/Chihuahua", "Chihuahua, La Paz, Mazatlan"),
    ("America/Phoenix", "Arizona"),
    ("America/Chicago", "Central Time"),
    ("America/Regina", "Saskatchewan"),
    ("America/Mexico_City", "Guadalajara, Mexico City, Monterrey"),
    ("America/Belize", "Central America"),
    ("America/Detroit", "Eastern Time"),
    ("America/Bogota", "Bogota, Lima, Quito"),
    ("America/Caracas", "Caracas, La Paz"),
    ("America/Santiago", "Santiago"),
    ("America/St_Johns", "Newfoundland and Labrador"),
    ("America/Sao_Paulo", "Brasilia"),
    ("America/Tijuana", "Tijuana"),
    ("America/Montevideo", "Montevideo"),
    ("America/Argentina/Buenos_Aires", "Buenos Aires, Georgetown"),
    ("America/Godthab", "Greenland"),
    ("America/Los_Angeles", "Pacific Time"),
    ("Atlantic/Azores", "Azores"),
    ("Atlantic/Cape_Verde", "Cape Verde Islands"),
    ("GMT", "UTC"),
    ("Europe/London", "Edinburgh, London"),
    ("Europe/Dublin", "Dublin"),
    ("Europe/Lisbon", "Lisbon"),
    ("Africa/Casablanca", "Casablanca, Monrovia"),
    ("Atlantic/Canary", "Canary Islands"),
    ("Europe/Belgrade", "Belgrade, Bratislava, Budapest, Ljubljana, Prague"),
    ("Europe/Sarajevo", "Sarajevo, Skopje, Warsaw, Zagreb"),
    ("Europe/Brussels", "Brussels, Copenhagen, Madrid, Paris"),
    ("Europe/Amsterdam", "Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna"),
    ("Africa/Lagos", "West Central Africa"),
    ("Europe/Bucharest", "Bucharest"),
    ("Africa/Cairo", "Cairo"),
    ("Europe/Helsinki", "Helsinki, Kiev, Riga, Sofia, Tallinn, Vilnius"),
    ("Europe/Athens", "Athens, Minsk"),
    ("Asia/Jerusalem", "Jerusalem"),
    ("Africa/Harare", "Harare, Pretoria"),
    ("Europe/Moscow", "Istanbul, Moscow, St. Petersburg, Volgograd"),
    ("Asia/Kuwait", "Kuwait, Riyadh"),
    ("Africa/Nairobi", "Nairobi"),
    ("Asia/Baghdad", "Baghdad"),
    ("Asia/Tehran", "Tehran"),
    ("Asia/Dubai", "Abu Dhabi, Muscat"),
    ("Asia/Baku", "Baku, Tbilisi, Yerevan"),
    ("Asia/Kabul", "Kabul"),
    ("Asia/Yekaterinburg", "Ekaterinburg"),
    ("Asia/Karachi", "Islamabad, Karachi, Tashkent"),
    ("Asia/Kolkata", "Chennai, Kolkata, Mumbai, New Delhi"),
    ("Asia/Kathmandu", "Kathmandu"),
    ("Asia/Dhaka", "Astana, Dhaka"),
    ("Asia/Colombo", "Sri Jayawardenepura"),
    ("Asia/Almaty", "Almaty, Novosibirsk"),
    ("Asia/Rangoon", "Yangon Rangoon"),
    ("Asia/Bangkok", "Bangkok, Hanoi, Jakarta"),
    ("Asia/Krasnoyarsk", "Krasnoyarsk"),
    ("Asia/Shanghai", "Beijing, Chongqing, Hong Kong SAR, Urumqi"),
    ("Asia/Irkutsk", "Irkutsk, Ulaanbaatar"),
    ("Asia/Singapore", "Kuala Lumpur, Singapore"),
    ("Australia/Perth", "Perth"),
    ("Asia/Taipei", "Taipei"),
    ("Asia/Tokyo", "Osaka, Sapporo, Tokyo"),
    ("Asia/Seoul", "Seoul"),
    ("Asia/Yakutsk", "Yakutsk"),
    ("Australia/Adelaide", "Adelaide"),
    ("Australia/Darwin", "Darwin"),
    ("Australia/Brisbane", "Brisbane"),
    ("Australia/Sydney", "Canberra, Melbourne, Sydney"),
    ("Pacific/Guam", "Guam, Port Moresby"),
    ("Australia/Hobart", "Hobart"),
    ("Asia/Vladivostok", "Vladivostok"),
    ("Asia/Magadan", "Magadan, Solomon Islands, New Caledonia"),
    ("Pacific/Auckland", "Auckland, Wellington"),
    ("Pacific/Fiji", "Fiji Islands, Kamchatka, Marshall Islands"),
    ("Pacific/Tongatapu", "Nuku'alofa"),
];

/// Ordered mapping from zone id to display name.
///
/// Keys are unique; inserting an existing key replaces its display name in
/// place so the original position is kept. Iteration follows insertion order.
///
/// # Example
///
/// ```
/// use tzselect::ZoneRegistry;
///
/// let registry = ZoneRegistry::default().with("America/Lima", "Pittsburgh");
/// assert_eq!(registry.get("America/Lima"), Some("Pittsburgh"));
/// assert_eq!(registry.len(), tzselect::domain::registry::DEFAULT_ZONES.len() + 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneRegistry {
    entries: IndexMap<String, String>,
}

impl ZoneRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, zone_id: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(zone_id.into(), name.into());
    }

    /// Builder-style [`Self::insert`].
    #[must_use]
    pub fn with(mut self, zone_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.insert(zone_id, name);
        self
    }

    /// Display name for `zone_id`, if registered.
    #[must_use]
    pub fn get(&self, zone_id: &str) -> Option<&str> {
        self.entries.get(zone_id).map(String::as_str)
    }

    /// Iterates `(zone_id, display_name)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entries compare in order; ties in the option list follow registry order.
impl PartialEq for ZoneRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for ZoneRegistry {}

impl Default for ZoneRegistry {
    /// The bundled [`DEFAULT_ZONES`] table.
    fn default() -> Self {
        DEFAULT_ZONES.iter().copied().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ZoneRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }
}
