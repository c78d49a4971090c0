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

use chrono::DateTime;
use chrono::Utc;
use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::date::Date;
use crate::types::day_boundary::DayBoundary;

/// An instant. On the wire it is milliseconds since the Unix epoch; in the
/// database it is an RFC 3339 string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[cfg(test)]
    pub fn new(ts: DateTime<Utc>) -> Self {
        Self(ts)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse a count of milliseconds since the epoch. Instants before the
    /// epoch are rejected.
    pub fn from_millis(millis: i64) -> Fallible<Self> {
        if millis < 0 {
            return Err(ErrorReport::new(format!(
                "timestamp before the epoch: {millis}"
            )));
        }
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| ErrorReport::new(format!("timestamp out of range: {millis}")))
    }

    pub fn as_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }

    /// The calendar day this instant falls on.
    pub fn date(self, boundary: DayBoundary) -> Date {
        boundary.date_of(self.0)
    }
}

impl ToSql for Timestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let str = self.0.to_rfc3339();
        Ok(ToSqlOutput::from(str))
    }
}

impl FromSql for Timestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let string: String = FromSql::column_result(value)?;
        let ts =
            DateTime::parse_from_rfc3339(&string).map_err(|e| FromSqlError::Other(Box::new(e)))?;
        let ts = ts.with_timezone(&Utc);
        Ok(Timestamp(ts))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.as_millis())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        Timestamp::from_millis(millis).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_millis() -> Fallible<()> {
        let ts = Timestamp::from_millis(1_700_000_000_123)?;
        assert_eq!(ts.as_millis(), 1_700_000_000_123);
        assert_eq!(
            ts.into_inner(),
            Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
        );
        Ok(())
    }

    #[test]
    fn test_negative_millis_are_rejected() {
        assert!(Timestamp::from_millis(-1).is_err());
        assert!(serde_json::from_str::<Timestamp>("-1").is_err());
    }

    #[test]
    fn test_json() {
        let ts = Timestamp::new(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap());
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1735787045000");
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ts);
    }

    #[test]
    fn test_date() {
        let ts = Timestamp::new(Utc.with_ymd_and_hms(2025, 1, 2, 23, 30, 0).unwrap());
        assert_eq!(ts.date(DayBoundary::Utc).to_string(), "2025-01-02");
    }
}
