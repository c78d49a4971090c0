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

use crate::db::Database;
use crate::error::Fallible;
use crate::service::PreferenceBackend;
use crate::stats::UserStats;
use crate::streak::StreakCalculator;
use crate::types::record::ActionRecord;
use crate::types::timestamp::Timestamp;

/// The local tier: records live in the SQLite database and stats are
/// computed from them on every request.
#[derive(Clone)]
pub struct LocalBackend {
    db: Database,
    calculator: StreakCalculator,
}

impl LocalBackend {
    pub fn new(db: Database, calculator: StreakCalculator) -> Self {
        Self { db, calculator }
    }

    pub fn stats_now(&self, now: Timestamp) -> Fallible<UserStats> {
        let records = self.db.records()?;
        Ok(UserStats::compute(&records, &self.calculator, now))
    }
}

impl PreferenceBackend for LocalBackend {
    async fn save_preference(&self, record: &ActionRecord) -> Fallible<()> {
        self.db.append(record)
    }

    async fn user_stats(&self, now: Timestamp) -> Fallible<UserStats> {
        self.stats_now(now)
    }
}
