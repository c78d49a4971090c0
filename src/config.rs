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

use std::env::var;
use std::fs::read_to_string;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Fallible;
use crate::types::day_boundary::DayBoundary;

/// Name of the optional configuration file inside the shorts directory.
pub const CONFIG_FILE_NAME: &str = "shorts.toml";

/// Environment variable that sets the preferences API URL.
pub const API_URL_ENV: &str = "SHORTS_API_BASE_URL";

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// The contents of `shorts.toml`. Every field is optional.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    api_base_url: Option<String>,
    day_boundary: Option<DayBoundary>,
    request_timeout_ms: Option<u64>,
}

/// Values given on the command line. These win over everything else.
#[derive(Clone, Default)]
pub struct Overrides {
    pub api_base_url: Option<String>,
    pub day_boundary: Option<DayBoundary>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Config {
    /// Base URL of the remote preferences API. `None` means local only.
    pub api_base_url: Option<String>,
    pub day_boundary: DayBoundary,
    pub request_timeout: Duration,
}

impl Config {
    pub fn load(directory: &Path, overrides: &Overrides) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE_NAME);
        let file: ConfigFile = if path.exists() {
            log::debug!("Loading configuration from {}", path.display());
            toml::from_str(&read_to_string(path)?)?
        } else {
            ConfigFile::default()
        };
        let env_url = var(API_URL_ENV).ok();
        if env_url.is_some() {
            log::debug!("{API_URL_ENV} is set");
        }
        Ok(Self::resolve(file, env_url, overrides))
    }

    /// Merge the sources: command line, then environment, then file.
    pub fn resolve(file: ConfigFile, env_url: Option<String>, overrides: &Overrides) -> Self {
        // An empty URL switches the remote tier off.
        let api_base_url = overrides
            .api_base_url
            .clone()
            .or(env_url)
            .or(file.api_base_url)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        let day_boundary = overrides
            .day_boundary
            .or(file.day_boundary)
            .unwrap_or_default();
        let request_timeout = Duration::from_millis(
            file.request_timeout_ms
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        );
        Self {
            api_base_url,
            day_boundary,
            request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    fn parse(toml: &str) -> ConfigFile {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(ConfigFile::default(), None, &Overrides::default());
        assert_eq!(
            config,
            Config {
                api_base_url: None,
                day_boundary: DayBoundary::Local,
                request_timeout: Duration::from_millis(5000),
            }
        );
    }

    #[test]
    fn test_file_values() {
        let file = parse(
            r#"
            api_base_url = "http://localhost:3001/api/"
            day_boundary = "utc"
            request_timeout_ms = 250
            "#,
        );
        let config = Config::resolve(file, None, &Overrides::default());
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("http://localhost:3001/api")
        );
        assert_eq!(config.day_boundary, DayBoundary::Utc);
        assert_eq!(config.request_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_precedence() {
        let file = parse(
            r#"
            api_base_url = "http://file/api"
            day_boundary = "utc"
            "#,
        );
        let env = Some("http://env/api".to_string());
        let config = Config::resolve(file, env.clone(), &Overrides::default());
        assert_eq!(config.api_base_url.as_deref(), Some("http://env/api"));

        let file = parse(r#"api_base_url = "http://file/api""#);
        let overrides = Overrides {
            api_base_url: Some("http://flag/api".to_string()),
            day_boundary: Some(DayBoundary::Local),
        };
        let config = Config::resolve(file, env, &overrides);
        assert_eq!(config.api_base_url.as_deref(), Some("http://flag/api"));
        assert_eq!(config.day_boundary, DayBoundary::Local);
    }

    #[test]
    fn test_empty_url_disables_remote() {
        let overrides = Overrides {
            api_base_url: Some("".to_string()),
            day_boundary: None,
        };
        let env = Some("http://env/api".to_string());
        let config = Config::resolve(ConfigFile::default(), env, &overrides);
        assert_eq!(config.api_base_url, None);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<ConfigFile>("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_load_from_directory() -> Fallible<()> {
        let dir = tempdir()?;
        write(
            dir.path().join(CONFIG_FILE_NAME),
            "day_boundary = \"offset:+02:00\"\n",
        )?;
        let config = Config::load(dir.path(), &Overrides::default())?;
        assert_eq!(config.day_boundary.to_string(), "offset:+02:00");
        Ok(())
    }

    #[test]
    fn test_load_rejects_invalid_file() -> Fallible<()> {
        let dir = tempdir()?;
        write(dir.path().join(CONFIG_FILE_NAME), "day_boundary = 5\n")?;
        assert!(Config::load(dir.path(), &Overrides::default()).is_err());
        Ok(())
    }
}
