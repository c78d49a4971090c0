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

use crate::error::Fallible;
use crate::error::fail;
use crate::service::Served;
use crate::service::Tier;
use crate::stats::UserStats;
use crate::types::action::Action;
use crate::types::card_id::CardId;
use crate::types::record::ActionRecord;
use crate::types::timestamp::Timestamp;
use crate::workspace::Workspace;

pub async fn swipe_card(ws: &Workspace, card_id: CardId, action: Action) -> Fallible<()> {
    let outcome = record_swipe(ws, card_id, action, Timestamp::now()).await?;
    let title = ws
        .deck
        .get(card_id)
        .map(|insight| insight.title.as_str())
        .unwrap_or_default();
    println!(
        "Recorded {action} for \"{title}\" ({} store).",
        outcome.saved_to
    );
    println!("🔥 {} Day Streak", outcome.stats.value.streak);
    Ok(())
}

pub struct SwipeOutcome {
    pub saved_to: Tier,
    pub stats: Served<UserStats>,
}

/// Record the decision, then reload the stats so the caller can show the
/// updated streak.
pub async fn record_swipe(
    ws: &Workspace,
    card_id: CardId,
    action: Action,
    now: Timestamp,
) -> Fallible<SwipeOutcome> {
    if ws.deck.get(card_id).is_none() {
        return fail(format!("card not found: {card_id}"));
    }
    let service = ws.service()?;
    let record = ActionRecord::new(card_id, action, now);
    let saved = service.save_preference(&record).await?;
    let stats = service.user_stats(now).await?;
    Ok(SwipeOutcome {
        saved_to: saved.tier,
        stats,
    })
}
