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

use clap::ValueEnum;

use crate::cmd::serve::template::page_template;
use crate::cmd::serve::view::stats_markup;
use crate::error::Fallible;
use crate::stats::UserStats;
use crate::types::timestamp::Timestamp;
use crate::workspace::Workspace;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
    /// HTML output.
    Html,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
            StatsFormat::Html => write!(f, "html"),
        }
    }
}

pub async fn print_stats(ws: &Workspace, format: StatsFormat) -> Fallible<()> {
    let service = ws.service()?;
    let served = service.user_stats(Timestamp::now()).await?;
    log::debug!("Stats served by the {} store.", served.tier);
    println!("{}", render_stats(&served.value, &format)?);
    Ok(())
}

pub fn render_stats(stats: &UserStats, format: &StatsFormat) -> Fallible<String> {
    let output = match format {
        StatsFormat::Text => format!(
            "🔥 {} Day Streak\n📊 Total: {}\n❤️ Liked: {}\n👎 Disliked: {}",
            stats.streak, stats.total_cards, stats.liked_cards, stats.disliked_cards
        ),
        StatsFormat::Json => serde_json::to_string_pretty(stats)?,
        StatsFormat::Html => page_template(stats_markup(stats)).into_string(),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    fn stats() -> UserStats {
        UserStats {
            streak: 4,
            total_cards: 9,
            liked_cards: 6,
            disliked_cards: 3,
            last_interaction_date: Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_text() -> Fallible<()> {
        let text = render_stats(&stats(), &StatsFormat::Text)?;
        assert_eq!(
            text,
            "🔥 4 Day Streak\n📊 Total: 9\n❤️ Liked: 6\n👎 Disliked: 3"
        );
        Ok(())
    }

    #[test]
    fn test_json() -> Fallible<()> {
        let json = render_stats(&stats(), &StatsFormat::Json)?;
        let parsed: UserStats = serde_json::from_str(&json)?;
        assert_eq!(parsed, stats());
        Ok(())
    }

    #[test]
    fn test_html() -> Fallible<()> {
        let html = render_stats(&stats(), &StatsFormat::Html)?;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("4 Day Streak"));
        Ok(())
    }
}
