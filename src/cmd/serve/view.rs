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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::template::page_template;
use crate::service::PreferenceBackend;
use crate::stats::UserStats;
use crate::types::timestamp::Timestamp;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let (status, body) = match state.backend.user_stats(Timestamp::now()).await {
        Ok(stats) => (StatusCode::OK, stats_markup(&stats)),
        Err(e) => {
            log::error!("{e}");
            let body = html! {
                p.error { "Could not load stats." }
            };
            (StatusCode::INTERNAL_SERVER_ERROR, body)
        }
    };
    (status, Html(page_template(body).into_string()))
}

pub fn stats_markup(stats: &UserStats) -> Markup {
    html! {
        div.stats {
            div.streak {
                "🔥 " (stats.streak) " Day Streak"
            }
            table {
                tbody {
                    tr {
                        td.key { "📊 Total:" }
                        td.val { (stats.total_cards) }
                    }
                    tr {
                        td.key { "❤️ Liked:" }
                        td.val { (stats.liked_cards) }
                    }
                    tr {
                        td.key { "👎 Disliked:" }
                        td.val { (stats.disliked_cards) }
                    }
                }
            }
            p.last-interaction {
                "Last interaction: " (stats.last_interaction_date.to_rfc3339())
            }
        }
    }
}
