// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use chrono::DateTime;
use chrono::FixedOffset;
use chrono::Local;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;
use crate::types::date::Date;

/// The rule that maps an instant to the calendar day it falls on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayBoundary {
    /// Days begin at midnight in the host's time zone.
    #[default]
    Local,
    /// Days begin at midnight UTC.
    Utc,
    /// Days begin at midnight at a fixed offset from UTC.
    Offset(FixedOffset),
}

impl DayBoundary {
    pub fn date_of(self, instant: DateTime<Utc>) -> Date {
        let date = match self {
            DayBoundary::Local => instant.with_timezone(&Local).date_naive(),
            DayBoundary::Utc => instant.date_naive(),
            DayBoundary::Offset(offset) => instant.with_timezone(&offset).date_naive(),
        };
        Date::new(date)
    }
}

impl FromStr for DayBoundary {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(DayBoundary::Local),
            "utc" => Ok(DayBoundary::Utc),
            _ => match s.strip_prefix("offset:") {
                Some(offset) => {
                    let offset: FixedOffset = offset.parse()?;
                    Ok(DayBoundary::Offset(offset))
                }
                None => fail(format!(
                    "invalid day boundary '{s}': expected 'local', 'utc', or 'offset:+HH:MM'"
                )),
            },
        }
    }
}

impl TryFrom<String> for DayBoundary {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayBoundary> for String {
    fn from(value: DayBoundary) -> Self {
        value.to_string()
    }
}

impl Display for DayBoundary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DayBoundary::Local => write!(f, "local"),
            DayBoundary::Utc => write!(f, "utc"),
            DayBoundary::Offset(offset) => write!(f, "offset:{offset}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("local".parse::<DayBoundary>(), Ok(DayBoundary::Local));
        assert_eq!("utc".parse::<DayBoundary>(), Ok(DayBoundary::Utc));
        let east = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(
            "offset:+05:30".parse::<DayBoundary>(),
            Ok(DayBoundary::Offset(east))
        );
        let west = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(
            "offset:-08:00".parse::<DayBoundary>(),
            Ok(DayBoundary::Offset(west))
        );
        assert!("tomorrow".parse::<DayBoundary>().is_err());
        assert!("offset:noon".parse::<DayBoundary>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for text in ["local", "utc", "offset:+05:30", "offset:-08:00"] {
            let boundary: DayBoundary = text.parse().unwrap();
            assert_eq!(boundary.to_string(), text);
        }
    }

    #[test]
    fn test_date_of_depends_on_offset() {
        // 02:00 UTC on 10 March is still 9 March in UTC-05:00.
        let instant = Utc.with_ymd_and_hms(2025, 3, 10, 2, 0, 0).unwrap();
        assert_eq!(DayBoundary::Utc.date_of(instant).to_string(), "2025-03-10");
        let west = DayBoundary::Offset(FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(west.date_of(instant).to_string(), "2025-03-09");
    }

    #[test]
    fn test_deserialize_from_toml_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            day_boundary: DayBoundary,
        }
        let wrapper: Wrapper = toml::from_str("day_boundary = \"utc\"").unwrap();
        assert_eq!(wrapper.day_boundary, DayBoundary::Utc);
        assert!(toml::from_str::<Wrapper>("day_boundary = \"never\"").is_err());
    }
}
