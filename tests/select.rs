use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Write;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use tzselect::app::{Event, Props, TimezoneSelect};
use tzselect::select::build_options;
use tzselect::tz::FixedClock;
use tzselect::ui::{TextList, PLACEHOLDER};
use tzselect::{
    initialize_with_clock, Config, CurrentValue, LabelPolicy, LabelStyle, TimezoneOption,
    ZoneRegistry,
};

fn winter() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

fn summer() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap()
}

fn amsterdam() -> ZoneRegistry {
    ZoneRegistry::new().with(
        "Europe/Amsterdam",
        "Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna",
    )
}

fn labels(select: &TimezoneSelect<FixedClock>) -> Vec<&str> {
    select.options().iter().map(|o| o.label.as_str()).collect()
}

#[test]
fn amsterdam_label_follows_dst() {
    let props = Props {
        value: CurrentValue::from("Europe/Amsterdam"),
        timezones: amsterdam(),
        ..Props::default()
    };

    let select = TimezoneSelect::with_clock(props.clone(), FixedClock(winter()));
    assert_eq!(
        select.selected().unwrap().label,
        "(GMT+1:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna"
    );

    let select = TimezoneSelect::with_clock(props, FixedClock(summer()));
    assert_eq!(
        select.selected().unwrap().label,
        "(GMT+2:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna"
    );
}

#[test]
fn full_object_value_is_shown_as_given() {
    let value = CurrentValue::from_json(&json!({
        "value": "Europe/Amsterdam",
        "label": "(GMT+1:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna",
        "offset": 1,
        "abbrev": "CET",
        "altName": "Central European Standard Time",
    }));
    let props = Props {
        value,
        ..Props::default()
    };
    let select = TimezoneSelect::with_clock(props, FixedClock(winter()));

    let selected = select.selected().unwrap();
    assert_eq!(selected.value, "Europe/Amsterdam");
    assert_eq!(selected.alt_name, "Central European Standard Time");
}

#[test]
fn unknown_city_resolves_to_nearest_option() {
    let props = Props {
        value: CurrentValue::from("Europe/Rome"),
        ..Props::default()
    };
    let select = TimezoneSelect::with_clock(props, FixedClock(winter()));
    assert_eq!(select.selected().unwrap().value, "Europe/Amsterdam");
}

#[test]
fn empty_value_with_custom_zones_selects_nothing() {
    let mut passthrough = BTreeMap::new();
    passthrough.insert(PLACEHOLDER.to_string(), "Please Select a Timezone".to_string());
    let props = Props {
        value: CurrentValue::from(""),
        timezones: ZoneRegistry::new()
            .with("America/Lima", "Pittsburgh")
            .with("Europe/Berlin", "Frankfurt"),
        passthrough,
        ..Props::default()
    };
    let select = TimezoneSelect::with_clock(props, FixedClock(winter()));

    assert_eq!(labels(&select), vec!["(GMT-5:00) Pittsburgh", "(GMT+1:00) Frankfurt"]);
    assert!(select.selected().is_none());

    let mut widget = TextList::new();
    select.render(&mut widget, 10);
    assert_eq!(widget.lines(), ["Please Select a Timezone"]);
}

#[test]
fn custom_name_overrides_bundled_one() {
    let props = Props {
        value: CurrentValue::from("America/Lima"),
        timezones: ZoneRegistry::default().with("America/Lima", "Pittsburgh"),
        ..Props::default()
    };
    let select = TimezoneSelect::with_clock(props, FixedClock(winter()));
    assert_eq!(select.selected().unwrap().label, "(GMT-5:00) Pittsburgh");
}

#[test]
fn unknown_zone_in_registry_is_skipped() {
    let props = Props {
        timezones: ZoneRegistry::new()
            .with("Mars/Olympus_Mons", "Olympus Mons")
            .with("Asia/Tokyo", "Tokyo"),
        ..Props::default()
    };
    let select = TimezoneSelect::with_clock(props, FixedClock(winter()));
    assert_eq!(labels(&select), vec!["(GMT+9:00) Tokyo"]);
}

#[test]
fn label_styles_for_alaska() {
    let props = Props {
        value: CurrentValue::from("America/Juneau"),
        ..Props::default()
    };
    let mut select = TimezoneSelect::with_clock(props, FixedClock(winter()));
    assert_eq!(select.selected().unwrap().label, "(GMT-9:00) Alaska");

    select.set_label_style(LabelStyle::AltName);
    assert_eq!(
        select.selected().unwrap().label,
        "(GMT-9:00) Alaska (Alaska Standard Time)"
    );

    select.set_label_style(LabelStyle::Abbrev);
    assert_eq!(select.selected().unwrap().label, "(GMT-9:00) Alaska (AKST)");
}

#[test]
fn selecting_hawaii_reports_the_option_once() {
    let changes: Rc<RefCell<Vec<TimezoneOption>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let mut select = TimezoneSelect::with_clock(Props::default(), FixedClock(winter()))
        .on_change(move |option| sink.borrow_mut().push(option.clone()));

    for c in "hawaii".chars() {
        select.handle(&Event::Char(c));
    }
    assert_eq!(select.view(10).items[0].label, "(GMT-10:00) Hawaii");
    select.handle(&Event::Select);

    let changes = changes.borrow();
    assert_eq!(changes.len(), 1);
    assert_eq!(
        serde_json::to_value(&changes[0]).unwrap(),
        json!({
            "value": "Pacific/Honolulu",
            "label": "(GMT-10:00) Hawaii",
            "offset": -10.0,
            "abbrev": "HAST",
            "altName": "Hawaii-Aleutian Standard Time",
        })
    );
    assert!(!select.view(10).menu_open);
}

#[test]
fn options_are_sorted_by_offset_all_year() {
    for now in [winter(), summer()] {
        let options = build_options(&ZoneRegistry::default(), &LabelPolicy::default(), now);
        assert!(!options.is_empty());
        assert!(options.windows(2).all(|pair| pair[0].offset <= pair[1].offset));
    }
}

#[test]
fn abbreviation_suffix_is_bounded() {
    let registry = ZoneRegistry::default();
    for max_abbr_length in [1, 2, 4] {
        let policy = LabelPolicy {
            style: LabelStyle::Abbrev,
            max_abbr_length,
            ..LabelPolicy::default()
        };
        let bare = build_options(&registry, &LabelPolicy::default(), summer());
        let styled = build_options(&registry, &policy, summer());
        assert_eq!(bare.len(), styled.len());

        for (plain, option) in bare.iter().zip(&styled) {
            assert!(option.label.starts_with(&plain.label));
            let suffix = option.label.chars().count() - plain.label.chars().count();
            assert!(suffix <= max_abbr_length + 3, "{}", option.label);
        }
    }
}

#[test]
fn config_file_drives_the_control() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
label_style = "abbrev"
max_abbr_length = 2

[timezones]
"America/Lima" = "Pittsburgh"
"Europe/Berlin" = "Frankfurt"

[passthrough]
placeholder = "Pick a zone"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    let select = initialize_with_clock(&config, FixedClock(winter()));

    assert_eq!(
        labels(&select),
        vec!["(GMT-5:00) Pittsburgh (PE)", "(GMT+1:00) Frankfurt (CE)"]
    );

    let mut widget = TextList::new();
    select.render(&mut widget, 10);
    assert_eq!(widget.text(), "Pick a zone");
}
