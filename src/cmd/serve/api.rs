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

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::cmd::serve::state::ServerState;
use crate::error::ErrorReport;
use crate::service::PreferenceBackend;
use crate::stats::UserStats;
use crate::types::insight::Insight;
use crate::types::record::ActionRecord;
use crate::types::timestamp::Timestamp;

pub struct ApiError(ErrorReport);

impl From<ErrorReport> for ApiError {
    fn from(value: ErrorReport) -> Self {
        ApiError(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

pub async fn post_preference(
    State(state): State<ServerState>,
    Json(record): Json<ActionRecord>,
) -> Result<StatusCode, ApiError> {
    state.backend.save_preference(&record).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_stats(State(state): State<ServerState>) -> Result<Json<UserStats>, ApiError> {
    let stats = state.backend.user_stats(Timestamp::now()).await?;
    Ok(Json(stats))
}

pub async fn get_insights(State(state): State<ServerState>) -> Json<Vec<Insight>> {
    Json(state.deck.insights().to_vec())
}
