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

use std::env::current_dir;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::config::Overrides;
use crate::db::Database;
use crate::deck::Deck;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::service::PreferenceService;
use crate::service::local::LocalBackend;
use crate::service::remote::RemoteBackend;
use crate::streak::StreakCalculator;

pub const DECK_FILE_NAME: &str = "insights.json";
pub const DB_FILE_NAME: &str = "shorts.db";

/// A shorts directory: the deck, the local database, and the configuration.
pub struct Workspace {
    pub directory: PathBuf,
    pub config: Config,
    pub db: Database,
    pub deck: Deck,
}

impl Workspace {
    pub fn new(directory: Option<String>, overrides: &Overrides) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config = Config::load(&directory, overrides)?;

        let db_path: PathBuf = directory.join(DB_FILE_NAME);
        let db_path: &str = db_path
            .to_str()
            .ok_or_else(|| ErrorReport::new("invalid path"))?;
        let db: Database = Database::new(db_path)?;

        let deck = {
            log::debug!("Loading deck...");
            let start = Instant::now();
            let deck = Deck::load(&directory.join(DECK_FILE_NAME))?;
            let duration = start.elapsed().as_millis();
            log::debug!("Deck loaded in {duration}ms.");
            deck
        };

        Ok(Self {
            directory,
            config,
            db,
            deck,
        })
    }

    pub fn calculator(&self) -> StreakCalculator {
        StreakCalculator::new(self.config.day_boundary)
    }

    pub fn local_backend(&self) -> LocalBackend {
        LocalBackend::new(self.db.clone(), self.calculator())
    }

    /// Build the tiered service. The remote tier is only present when an API
    /// URL is configured.
    pub fn service(&self) -> Fallible<PreferenceService<RemoteBackend, LocalBackend>> {
        let remote = match &self.config.api_base_url {
            Some(url) => {
                log::debug!("Using remote preferences API at {url}");
                Some(RemoteBackend::new(url, self.config.request_timeout)?)
            }
            None => None,
        };
        Ok(PreferenceService::new(remote, self.local_backend()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_copy_of_test_directory;
    use crate::types::day_boundary::DayBoundary;

    #[test]
    fn test_non_existent_directory() {
        let result = Workspace::new(Some("./derpherp".to_string()), &Overrides::default());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[test]
    fn test_directory_without_deck() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        let directory = dir.path().display().to_string();
        assert!(Workspace::new(Some(directory), &Overrides::default()).is_err());
        Ok(())
    }

    #[test]
    fn test_open() -> Fallible<()> {
        let dir = create_tmp_copy_of_test_directory()?;
        let overrides = Overrides {
            api_base_url: Some("".to_string()),
            day_boundary: Some(DayBoundary::Utc),
        };
        let ws = Workspace::new(Some(dir.path().display().to_string()), &overrides)?;
        assert_eq!(ws.deck.insights().len(), 3);
        assert_eq!(ws.config.api_base_url, None);
        assert_eq!(ws.calculator().boundary(), DayBoundary::Utc);
        assert!(ws.directory.join(DB_FILE_NAME).exists());
        Ok(())
    }
}
