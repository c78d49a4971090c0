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

use std::time::Duration;

use reqwest::Client;

use crate::error::Fallible;
use crate::service::PreferenceBackend;
use crate::stats::UserStats;
use crate::types::record::ActionRecord;
use crate::types::timestamp::Timestamp;

/// The remote tier: a preferences API reached over HTTP.
pub struct RemoteBackend {
    client: Client,
    base_url: String,
}

impl RemoteBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Fallible<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl PreferenceBackend for RemoteBackend {
    async fn save_preference(&self, record: &ActionRecord) -> Fallible<()> {
        let url = self.url("preferences");
        log::debug!("POST {url}");
        self.client
            .post(url)
            .json(record)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    // The remote computes stats itself, so `now` is unused.
    async fn user_stats(&self, _now: Timestamp) -> Fallible<UserStats> {
        let url = self.url("stats");
        log::debug!("GET {url}");
        let stats = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<UserStats>()
            .await?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::action::Action;
    use crate::types::card_id::CardId;

    #[test]
    fn test_url() -> Fallible<()> {
        let backend = RemoteBackend::new("http://localhost:3001/api/", Duration::from_secs(1))?;
        assert_eq!(backend.url("stats"), "http://localhost:3001/api/stats");
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_error() -> Fallible<()> {
        let port = portpicker::pick_unused_port().unwrap();
        let backend = RemoteBackend::new(
            &format!("http://127.0.0.1:{port}/api"),
            Duration::from_secs(2),
        )?;
        let record = ActionRecord::new(CardId::new(1), Action::Like, Timestamp::now());
        assert!(backend.save_preference(&record).await.is_err());
        assert!(backend.user_stats(Timestamp::now()).await.is_err());
        Ok(())
    }
}
