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
use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card_id::CardId;
use crate::types::insight::Insight;

/// The ordered stack of insight cards.
#[derive(Clone, Debug, Deserialize)]
pub struct Deck {
    insights: Vec<Insight>,
}

impl Deck {
    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return fail(format!("deck file {} does not exist.", path.display()));
        }
        let content = read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let deck: Deck = serde_json::from_str(content)?;
        let mut seen = HashSet::new();
        for insight in &deck.insights {
            if !seen.insert(insight.id) {
                return fail(format!("duplicate card id: {}", insight.id));
            }
        }
        Ok(deck)
    }

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    pub fn get(&self, id: CardId) -> Option<&Insight> {
        self.insights.iter().find(|insight| insight.id == id)
    }

    /// The first card, in deck order, that has not been swiped yet.
    pub fn next_unswiped(&self, swiped: &HashSet<CardId>) -> Option<&Insight> {
        self.insights
            .iter()
            .find(|insight| !swiped.contains(&insight.id))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_load_test_deck() -> Fallible<()> {
        let deck = Deck::load(&PathBuf::from("./test/insights.json"))?;
        assert_eq!(deck.insights().len(), 3);
        let card = deck.get(CardId::new(2)).unwrap();
        assert_eq!(card.title, "The One-on-One Is Theirs");
        assert!(deck.get(CardId::new(99)).is_none());
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = Deck::load(&PathBuf::from("./derpherp/insights.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_ids() {
        let json = r#"{"insights": [
            {"id": 1, "title": "a", "summary": "b", "key_takeaway": "c"},
            {"id": 1, "title": "d", "summary": "e", "key_takeaway": "f"}
        ]}"#;
        let err = Deck::parse(json).unwrap_err();
        assert_eq!(err.to_string(), "error: duplicate card id: 1");
    }

    #[test]
    fn test_invalid_json() {
        assert!(Deck::parse("{\"insights\": 5}").is_err());
    }

    #[test]
    fn test_next_unswiped() -> Fallible<()> {
        let deck = Deck::load(&PathBuf::from("./test/insights.json"))?;
        let next = |swiped: &HashSet<CardId>| deck.next_unswiped(swiped).map(|i| i.id);
        let mut swiped = HashSet::new();
        assert_eq!(next(&swiped), Some(CardId::new(1)));
        swiped.insert(CardId::new(1));
        swiped.insert(CardId::new(3));
        assert_eq!(next(&swiped), Some(CardId::new(2)));
        swiped.insert(CardId::new(2));
        assert!(next(&swiped).is_none());
        Ok(())
    }
}
