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

use std::collections::BTreeSet;

use crate::types::date::Date;
use crate::types::day_boundary::DayBoundary;
use crate::types::record::ActionRecord;

/// Counts the consecutive calendar days, ending on the day of the most
/// recent action, on which at least one action was recorded.
#[derive(Clone, Copy, Debug)]
pub struct StreakCalculator {
    boundary: DayBoundary,
}

impl StreakCalculator {
    pub fn new(boundary: DayBoundary) -> Self {
        Self { boundary }
    }

    pub fn boundary(&self) -> DayBoundary {
        self.boundary
    }

    pub fn streak(&self, records: &[ActionRecord]) -> usize {
        let days: BTreeSet<Date> = records
            .iter()
            .map(|record| record.timestamp.date(self.boundary))
            .collect();
        // Most recent first.
        let mut days = days.into_iter().rev();
        let Some(mut current) = days.next() else {
            return 0;
        };
        let mut streak = 1;
        for day in days {
            if current.days_since(day) != 1 {
                break;
            }
            streak += 1;
            current = day;
        }
        streak
    }
}
