//! Example assembling an output document from a hand-written calendar.
//!
//! To run this example:
//! ```bash
//! cargo run --example print_document
//! ```

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use zmanim_json::models::{Accessor, CalendarKind, CalendarSource, GeoLocation};
use zmanim_json::ZmanimFormatter;

struct FixedCalendar {
    geo: GeoLocation,
}

impl FixedCalendar {
    fn at(&self, h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 21, h, m, s).unwrap()
    }
}

impl CalendarSource for FixedCalendar {
    fn kind(&self) -> CalendarKind {
        CalendarKind::BasicZmanim
    }

    fn date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()
    }

    fn geo_location(&self) -> &GeoLocation {
        &self.geo
    }

    fn calculator_name(&self) -> &str {
        "US Naval Almanac Algorithm"
    }

    fn accessors(&self) -> Vec<Accessor<'_>> {
        vec![
            Accessor::nullary("getSunset", move || self.at(16, 47, 12)),
            Accessor::nullary("getSunrise", move || self.at(2, 33, 40)),
            Accessor::nullary("getChatzos", move || self.at(9, 40, 26)),
            Accessor::nullary("getShaahZmanisGra", || 4_712_800.0),
            Accessor::nullary("getTzais72", || None::<DateTime<Utc>>),
        ]
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calendar = FixedCalendar {
        geo: GeoLocation::new(
            Some("Jerusalem".to_string()),
            31.778,
            35.2354,
            754.0,
            Tz::Asia__Jerusalem,
        )?,
    };

    let document = ZmanimFormatter::to_json(&calendar);
    println!("{}", document.to_json_pretty()?);

    if let Err(e) = ZmanimFormatter::to_xml(&calendar) {
        println!("\nXML export: {}", e);
    }

    Ok(())
}
