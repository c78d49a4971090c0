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
use serde::Deserialize;
use serde::Serialize;

use crate::streak::StreakCalculator;
use crate::types::action::Action;
use crate::types::record::ActionRecord;
use crate::types::timestamp::Timestamp;

/// A summary of the user's activity, derived from the full list of records.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub streak: usize,
    pub total_cards: usize,
    pub liked_cards: usize,
    pub disliked_cards: usize,
    pub last_interaction_date: DateTime<Utc>,
}

impl UserStats {
    /// Compute stats from scratch. When there are no records, `now` stands in
    /// for the last interaction date.
    pub fn compute(
        records: &[ActionRecord],
        calculator: &StreakCalculator,
        now: Timestamp,
    ) -> Self {
        let liked_cards = count(records, Action::Like);
        let disliked_cards = count(records, Action::Dislike);
        let last_interaction = records
            .iter()
            .map(|record| record.timestamp)
            .max()
            .unwrap_or(now);
        Self {
            streak: calculator.streak(records),
            total_cards: records.len(),
            liked_cards,
            disliked_cards,
            last_interaction_date: last_interaction.into_inner(),
        }
    }
}

fn count(records: &[ActionRecord], action: Action) -> usize {
    records
        .iter()
        .filter(|record| record.action == action)
        .count()
}
