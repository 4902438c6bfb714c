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

use serde::Serialize;

use crate::types::card::Card;
use crate::types::card_state::CardState;
use crate::types::timestamp::Timestamp;

/// A snapshot of a deck for the statistics screen. Pure tally, no I/O.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub total_count: usize,
    pub new_count: usize,
    pub learning_count: usize,
    pub review_count: usize,
    pub relearning_count: usize,
    pub suspended_count: usize,
    /// Cards ready for review at the time of the snapshot. Suspended
    /// cards are not counted, whatever their schedule says.
    pub due_count: usize,
}

pub fn deck_stats(deck: &[Card], now: Timestamp) -> DeckStats {
    let mut stats = DeckStats {
        total_count: deck.len(),
        ..DeckStats::default()
    };
    for card in deck {
        match card.state {
            CardState::New => stats.new_count += 1,
            CardState::Learning => stats.learning_count += 1,
            CardState::Review => stats.review_count += 1,
            CardState::Relearning => stats.relearning_count += 1,
        }
        if card.suspended {
            stats.suspended_count += 1;
        }
        if card.is_due(now) {
            stats.due_count += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::types::card_id::CardId;
    use crate::types::interval::ReviewInterval;

    fn noon() -> Timestamp {
        let ts = DateTime::parse_from_rfc3339("2025-06-01T12:00:00+00:00").unwrap();
        Timestamp::new(ts.with_timezone(&Utc))
    }

    #[test]
    fn test_empty_deck() {
        let stats = deck_stats(&[], noon());
        assert_eq!(stats, DeckStats::default());
    }

    #[test]
    fn test_mixed_deck() {
        let now = noon();
        let fresh = Card::new(CardId::new("a"), 2.5);
        let mut suspended = Card::new(CardId::new("b"), 2.5);
        suspended.suspended = true;
        let overdue = Card {
            id: CardId::new("c"),
            state: CardState::Review,
            ease_factor: 2.5,
            interval: ReviewInterval::Days(3),
            learning_step: None,
            next_review_at: Some(now + Duration::days(-1)),
            last_review_at: Some(now + Duration::days(-4)),
            review_count: 4,
            lapses: 0,
            suspended: false,
        };
        let mut scheduled_out = overdue.clone();
        scheduled_out.id = CardId::new("d");
        scheduled_out.next_review_at = Some(now + Duration::days(2));
        let deck = vec![fresh, suspended, overdue, scheduled_out];
        let stats = deck_stats(&deck, now);
        assert_eq!(stats.total_count, 4);
        assert_eq!(stats.new_count, 2);
        assert_eq!(stats.review_count, 2);
        assert_eq!(stats.learning_count, 0);
        assert_eq!(stats.relearning_count, 0);
        assert_eq!(stats.suspended_count, 1);
        // The suspended new card is not due; the future review card is not
        // due; the fresh card and the overdue card are.
        assert_eq!(stats.due_count, 2);
    }
}
