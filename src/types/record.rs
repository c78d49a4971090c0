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

use serde::Deserialize;
use serde::Serialize;

use crate::types::action::Action;
use crate::types::card_id::CardId;
use crate::types::timestamp::Timestamp;

/// A single like or dislike, recorded when the user swipes a card. Records
/// are append-only.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    pub card_id: CardId,
    pub action: Action,
    pub timestamp: Timestamp,
}

impl ActionRecord {
    pub fn new(card_id: CardId, action: Action, timestamp: Timestamp) -> Self {
        Self {
            card_id,
            action,
            timestamp,
        }
    }
}
