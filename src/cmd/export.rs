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

use serde::Serialize;

use crate::error::Fallible;
use crate::stats::UserStats;
use crate::types::record::ActionRecord;
use crate::types::timestamp::Timestamp;
use crate::workspace::Workspace;

/// Print the local store's records and the stats derived from them.
pub fn export_records(ws: &Workspace) -> Fallible<()> {
    let export: Export = get_export(ws, Timestamp::now())?;
    let json: String = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export {
    day_boundary: String,
    records: Vec<ActionRecord>,
    stats: UserStats,
}

fn get_export(ws: &Workspace, now: Timestamp) -> Fallible<Export> {
    let records = ws.db.records()?;
    let calculator = ws.calculator();
    let stats = UserStats::compute(&records, &calculator, now);
    Ok(Export {
        day_boundary: calculator.boundary().to_string(),
        records,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overrides;
    use crate::helper::create_tmp_copy_of_test_directory;
    use crate::types::action::Action;
    use crate::types::card_id::CardId;
    use crate::types::day_boundary::DayBoundary;

    #[test]
    fn test_export() -> Fallible<()> {
        let dir = create_tmp_copy_of_test_directory()?;
        let overrides = Overrides {
            api_base_url: Some("".to_string()),
            day_boundary: Some(DayBoundary::Utc),
        };
        let ws = Workspace::new(Some(dir.path().display().to_string()), &overrides)?;
        let ts = Timestamp::from_millis(1_750_000_000_000)?;
        let record = ActionRecord::new(CardId::new(2), Action::Like, ts);
        ws.db.append(&record)?;
        let export = get_export(&ws, Timestamp::now())?;
        let json = serde_json::to_value(&export)?;
        assert_eq!(json["dayBoundary"], "utc");
        assert_eq!(
            json["records"],
            serde_json::json!([{"cardId": 2, "action": "like", "timestamp": 1_750_000_000_000i64}])
        );
        assert_eq!(json["stats"]["totalCards"], 1);
        assert_eq!(json["stats"]["streak"], 1);
        Ok(())
    }
}
