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

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::signal::ctrl_c;
use tokio::time::sleep;

use crate::cmd::serve::api::get_insights;
use crate::cmd::serve::api::get_stats;
use crate::cmd::serve::api::post_preference;
use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::view::get_handler;
use crate::error::Fallible;
use crate::workspace::Workspace;

/// The port the preferences API listens on by default.
pub const DEFAULT_PORT: u16 = 3001;

pub async fn start_server(ws: Workspace, port: u16, open_browser: bool) -> Fallible<()> {
    let count = ws.db.record_count()?;
    log::debug!(
        "Serving {} cards and {count} records from {}",
        ws.deck.insights().len(),
        ws.directory.display()
    );
    let state = ServerState {
        backend: ws.local_backend(),
        deck: Arc::new(ws.deck),
    };
    let app = router(state);
    let bind = format!("127.0.0.1:{port}");

    if open_browser {
        // Start a separate task to open the browser.
        let url = format!("http://{bind}/");
        let probe = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&probe).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            if let Err(e) = open::that(url) {
                log::warn!("Failed to open the browser: {e}");
            }
        });
    }

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    println!("Preferences API listening on http://{bind}/api");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn router(state: ServerState) -> Router {
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/api/preferences", post(post_preference));
    let app = app.route("/api/stats", get(get_stats));
    let app = app.route("/api/insights", get(get_insights));
    let app = app.fallback(not_found_handler);
    app.with_state(state)
}

async fn shutdown_signal() {
    match ctrl_c().await {
        Ok(()) => log::debug!("Shutting down."),
        Err(e) => log::error!("Failed to listen for shutdown signal: {e}"),
    }
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
