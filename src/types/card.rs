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

use crate::error::Fallible;
use crate::error::SchedulerError;
use crate::types::card_id::CardId;
use crate::types::card_state::CardState;
use crate::types::interval::ReviewInterval;
use crate::types::timestamp::Timestamp;

/// One scheduled item. The scheduler neither creates nor stores cards:
/// callers construct them when a learner adds a word, round-trip them
/// through their own store, and hand them back for each review.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub state: CardState,
    /// Interval growth multiplier for cards in review. Never drops below
    /// the configured floor.
    pub ease_factor: f64,
    pub interval: ReviewInterval,
    /// Index into the learning-step ladder. `Some` exactly when the card
    /// is in the ladder.
    pub learning_step: Option<usize>,
    /// `None` means never reviewed, i.e. due immediately.
    pub next_review_at: Option<Timestamp>,
    pub last_review_at: Option<Timestamp>,
    /// Completed reviews.
    pub review_count: u32,
    /// Again outcomes recorded while the card was in review.
    pub lapses: u32,
    /// Suspended cards never appear in the due set.
    pub suspended: bool,
}

impl Card {
    /// A fresh, never-reviewed card.
    pub fn new(id: CardId, ease_factor: f64) -> Self {
        Self {
            id,
            state: CardState::New,
            ease_factor,
            interval: ReviewInterval::Minutes(0),
            learning_step: None,
            next_review_at: None,
            last_review_at: None,
            review_count: 0,
            lapses: 0,
            suspended: false,
        }
    }

    /// Whether the card is ready for review: not suspended, and either
    /// never reviewed or scheduled at or before `now`.
    pub fn is_due(&self, now: Timestamp) -> bool {
        if self.suspended {
            return false;
        }
        if self.state == CardState::New {
            return true;
        }
        match self.next_review_at {
            None => true,
            Some(at) => at <= now,
        }
    }

    /// Check the structural invariants that the transition relies on.
    /// Cards that fail here come from corrupted or hand-edited records;
    /// the scheduler refuses to guess what they meant.
    pub fn validate(&self) -> Fallible<()> {
        if self.state.in_ladder() != self.learning_step.is_some() {
            return Err(SchedulerError::InvalidCardState(format!(
                "card {}: learning step {:?} inconsistent with state {}",
                self.id, self.learning_step, self.state
            )));
        }
        match self.state {
            CardState::Review => {
                if self.interval.is_minutes() {
                    return Err(SchedulerError::InvalidCardState(format!(
                        "card {}: minute-scale interval in review state",
                        self.id
                    )));
                }
            }
            CardState::New => {
                if self.next_review_at.is_some() || self.review_count != 0 {
                    return Err(SchedulerError::InvalidCardState(format!(
                        "card {}: review history recorded on a new card",
                        self.id
                    )));
                }
            }
            CardState::Learning | CardState::Relearning => {
                if self.interval.is_days() {
                    return Err(SchedulerError::InvalidCardState(format!(
                        "card {}: day-scale interval in {} state",
                        self.id, self.state
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_card() -> Card {
        Card::new(CardId::new("w1:fi-en"), 2.5)
    }

    #[test]
    fn test_new_card_defaults() {
        let card = new_card();
        assert_eq!(card.state, CardState::New);
        assert_eq!(card.interval, ReviewInterval::Minutes(0));
        assert_eq!(card.learning_step, None);
        assert_eq!(card.next_review_at, None);
        assert_eq!(card.review_count, 0);
        assert_eq!(card.lapses, 0);
        assert!(!card.suspended);
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_new_card_is_due() {
        let card = new_card();
        assert!(card.is_due(Timestamp::now()));
    }

    #[test]
    fn test_suspended_card_is_never_due() {
        let mut card = new_card();
        card.suspended = true;
        assert!(!card.is_due(Timestamp::now()));
    }

    #[test]
    fn test_step_on_review_card_rejected() {
        let mut card = new_card();
        card.state = CardState::Review;
        card.interval = ReviewInterval::Days(3);
        card.learning_step = Some(0);
        card.review_count = 1;
        let result = card.validate();
        assert!(matches!(result, Err(SchedulerError::InvalidCardState(_))));
    }

    #[test]
    fn test_minute_interval_on_review_card_rejected() {
        let mut card = new_card();
        card.state = CardState::Review;
        card.interval = ReviewInterval::Minutes(10);
        card.review_count = 1;
        let result = card.validate();
        assert!(matches!(result, Err(SchedulerError::InvalidCardState(_))));
    }
}
