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

use std::collections::HashSet;

use crate::deck::Deck;
use crate::error::Fallible;
use crate::stats::UserStats;
use crate::types::card_id::CardId;
use crate::types::timestamp::Timestamp;
use crate::workspace::Workspace;

pub async fn print_next(ws: &Workspace) -> Fallible<()> {
    let swiped = ws.db.swiped_card_ids()?;
    let service = ws.service()?;
    let served = service.user_stats(Timestamp::now()).await?;
    log::debug!("Stats served by the {} store.", served.tier);
    println!("{}", render_next(&ws.deck, &swiped, &served.value));
    Ok(())
}

/// The next unswiped card, or the end-of-deck message with the current
/// streak.
pub fn render_next(deck: &Deck, swiped: &HashSet<CardId>, stats: &UserStats) -> String {
    match deck.next_unswiped(swiped) {
        Some(insight) => format!(
            "#{} {}\n\n{}\n\nKey Takeaway: {}",
            insight.id, insight.title, insight.summary, insight.key_takeaway
        ),
        None => format!(
            "No more insights for today! 🎉\n\
             Check back tomorrow for fresh business insights.\n\
             Current Streak: {} days 🔥",
            stats.streak
        ),
    }
}
