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

//! Preference storage with two tiers: a remote preferences API and the local
//! database. Every operation reports which tier satisfied it.

pub mod local;
pub mod remote;

use std::fmt::Display;
use std::fmt::Formatter;
use std::future::Future;

use crate::error::Fallible;
use crate::stats::UserStats;
use crate::types::record::ActionRecord;
use crate::types::timestamp::Timestamp;

/// A store that can record preferences and report stats.
pub trait PreferenceBackend {
    fn save_preference(&self, record: &ActionRecord) -> impl Future<Output = Fallible<()>> + Send;

    fn user_stats(&self, now: Timestamp) -> impl Future<Output = Fallible<UserStats>> + Send;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tier {
    Remote,
    Local,
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Remote => write!(f, "remote"),
            Tier::Local => write!(f, "local"),
        }
    }
}

/// A value, and the tier that produced it.
#[derive(Debug, PartialEq)]
pub struct Served<T> {
    pub tier: Tier,
    pub value: T,
}

pub struct PreferenceService<R, L> {
    remote: Option<R>,
    local: L,
}

impl<R: PreferenceBackend, L: PreferenceBackend> PreferenceService<R, L> {
    pub fn new(remote: Option<R>, local: L) -> Self {
        Self { remote, local }
    }

    pub async fn save_preference(&self, record: &ActionRecord) -> Fallible<Served<()>> {
        if let Some(remote) = &self.remote {
            match remote.save_preference(record).await {
                Ok(()) => {
                    return Ok(Served {
                        tier: Tier::Remote,
                        value: (),
                    });
                }
                Err(e) => {
                    log::warn!("Saving to the remote store failed, saving locally: {e}");
                }
            }
        }
        self.local.save_preference(record).await?;
        Ok(Served {
            tier: Tier::Local,
            value: (),
        })
    }

    pub async fn user_stats(&self, now: Timestamp) -> Fallible<Served<UserStats>> {
        if let Some(remote) = &self.remote {
            match remote.user_stats(now).await {
                Ok(stats) => {
                    return Ok(Served {
                        tier: Tier::Remote,
                        value: stats,
                    });
                }
                Err(e) => {
                    log::warn!("Fetching stats from the remote store failed, using local: {e}");
                }
            }
        }
        let stats = self.local.user_stats(now).await?;
        Ok(Served {
            tier: Tier::Local,
            value: stats,
        })
    }
}
