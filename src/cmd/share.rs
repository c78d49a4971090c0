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

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card_id::CardId;
use crate::types::insight::Insight;
use crate::workspace::Workspace;

pub fn share_card(ws: &Workspace, card_id: CardId) -> Fallible<()> {
    match ws.deck.get(card_id) {
        Some(insight) => {
            println!("{}", share_text(insight));
            Ok(())
        }
        None => fail(format!("card not found: {card_id}")),
    }
}

pub fn share_text(insight: &Insight) -> String {
    format!(
        "Check out this business insight from Aspiro:\n\n{}\n\n{}\n\nKey Takeaway: {}\n\nLearn more at aspiro.app",
        insight.title, insight.summary, insight.key_takeaway
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overrides;
    use crate::helper::create_tmp_copy_of_test_directory;

    #[test]
    fn test_share_text() {
        let insight = Insight {
            id: CardId::new(5),
            title: "Title".to_string(),
            summary: "Summary.".to_string(),
            key_takeaway: "Takeaway.".to_string(),
        };
        assert_eq!(
            share_text(&insight),
            "Check out this business insight from Aspiro:\n\nTitle\n\nSummary.\n\nKey Takeaway: Takeaway.\n\nLearn more at aspiro.app"
        );
    }

    #[test]
    fn test_share_unknown_card() -> Fallible<()> {
        let dir = create_tmp_copy_of_test_directory()?;
        let ws = Workspace::new(
            Some(dir.path().display().to_string()),
            &Overrides::default(),
        )?;
        assert!(share_card(&ws, CardId::new(1)).is_ok());
        let err = share_card(&ws, CardId::new(42)).unwrap_err();
        assert_eq!(err.to_string(), "error: card not found: 42");
        Ok(())
    }
}
