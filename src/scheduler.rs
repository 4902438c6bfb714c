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

use crate::config::SchedulerConfig;
use crate::error::Fallible;
use crate::error::SchedulerError;
use crate::types::card::Card;
use crate::types::card_id::CardId;
use crate::types::card_state::CardState;
use crate::types::interval::ReviewInterval;
use crate::types::outcome::Outcome;
use crate::types::timestamp::Timestamp;

/// The scheduling core. Holds the tunables and exposes the three
/// operations the review loop needs: due-set selection, button-interval
/// preview, and the review transition itself. All three are pure in
/// `(card, outcome, now)`; the scheduler owns no storage and no clock.
pub struct Scheduler {
    config: SchedulerConfig,
}

/// The interval each grading button would schedule, for display next to
/// the buttons ("10 min", "1 day", "25 days").
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct ButtonIntervals {
    pub again: ReviewInterval,
    pub hard: ReviewInterval,
    pub good: ReviewInterval,
    pub easy: ReviewInterval,
}

impl ButtonIntervals {
    pub fn get(&self, outcome: Outcome) -> ReviewInterval {
        match outcome {
            Outcome::Again => self.again,
            Outcome::Hard => self.hard,
            Outcome::Good => self.good,
            Outcome::Easy => self.easy,
        }
    }
}

/// The outcome-dependent part of a transition, before timestamps and
/// counters are filled in. Both the preview and the transition are built
/// on this, so the interval a button displays is the interval that
/// pressing it produces.
struct Projection {
    state: CardState,
    ease_factor: f64,
    interval: ReviewInterval,
    learning_step: Option<usize>,
    lapsed: bool,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Fallible<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// A fresh card with this scheduler's starting ease.
    pub fn new_card(&self, id: CardId) -> Card {
        Card::new(id, self.config.starting_ease)
    }

    /// The subset of `deck` that is ready for review at `now`, in input
    /// order. Suspended cards are excluded unconditionally; new and
    /// never-scheduled cards are included unconditionally.
    pub fn due_cards<'a>(&self, deck: &'a [Card], now: Timestamp) -> Vec<&'a Card> {
        deck.iter().filter(|card| card.is_due(now)).collect()
    }

    /// Preview the interval each of the four buttons would schedule for
    /// `card`, without changing it. Fails on the same inputs
    /// `apply_review` fails on.
    pub fn button_intervals(&self, card: &Card, now: Timestamp) -> Fallible<ButtonIntervals> {
        card.validate()?;
        self.check_clock(card, now)?;
        Ok(ButtonIntervals {
            again: self.project(card, Outcome::Again)?.interval,
            hard: self.project(card, Outcome::Hard)?.interval,
            good: self.project(card, Outcome::Good)?.interval,
            easy: self.project(card, Outcome::Easy)?.interval,
        })
    }

    /// Record a review outcome, returning the card's next state. The input
    /// card is untouched; on error no new state exists at all.
    pub fn apply_review(&self, card: &Card, outcome: Outcome, now: Timestamp) -> Fallible<Card> {
        card.validate()?;
        self.check_clock(card, now)?;
        let projection = self.project(card, outcome)?;
        if projection.lapsed {
            log::debug!("Card {} lapsed (lapse #{}).", card.id, card.lapses + 1);
        } else if card.state != CardState::Review && projection.state == CardState::Review {
            log::debug!("Card {} graduated to review.", card.id);
        }
        Ok(Card {
            id: card.id.clone(),
            state: projection.state,
            ease_factor: projection.ease_factor,
            interval: projection.interval,
            learning_step: projection.learning_step,
            next_review_at: Some(now + projection.interval.duration()),
            last_review_at: Some(now),
            review_count: card.review_count + 1,
            lapses: card.lapses + u32::from(projection.lapsed),
            suspended: card.suspended,
        })
    }

    /// Reviews cannot be recorded before the card's last review. Rejected
    /// rather than clamped: the caller knows whether its clock or its data
    /// is wrong.
    fn check_clock(&self, card: &Card, now: Timestamp) -> Fallible<()> {
        if let Some(last_review) = card.last_review_at {
            if now < last_review {
                return Err(SchedulerError::TimestampSkew { now, last_review });
            }
        }
        Ok(())
    }

    fn project(&self, card: &Card, outcome: Outcome) -> Fallible<Projection> {
        match card.state {
            CardState::New | CardState::Learning | CardState::Relearning => {
                Ok(self.project_ladder(card, outcome))
            }
            CardState::Review => self.project_review(card, outcome),
        }
    }

    /// Transitions for cards in the learning ladder. A new card enters the
    /// ladder at step zero; a relearning card keeps its relearning tag
    /// until it graduates back. Ease is untouched in this phase: a
    /// relearning card graduates with the penalized ease it lapsed with.
    fn project_ladder(&self, card: &Card, outcome: Outcome) -> Projection {
        let steps = &self.config.learning_steps;
        let last = steps.len() - 1;
        let ladder_state = if card.state == CardState::Relearning {
            CardState::Relearning
        } else {
            CardState::Learning
        };
        let current = card.learning_step.unwrap_or(0).min(last);
        match outcome {
            Outcome::Again => Projection {
                state: ladder_state,
                ease_factor: card.ease_factor,
                interval: ReviewInterval::Minutes(steps[0]),
                learning_step: Some(0),
                lapsed: false,
            },
            Outcome::Hard => Projection {
                state: ladder_state,
                ease_factor: card.ease_factor,
                interval: ReviewInterval::Minutes(steps[current]),
                learning_step: Some(current),
                lapsed: false,
            },
            Outcome::Good => {
                let next = current + 1;
                if next > last {
                    self.graduate(card, self.config.graduating_interval_days)
                } else {
                    Projection {
                        state: ladder_state,
                        ease_factor: card.ease_factor,
                        interval: ReviewInterval::Minutes(steps[next]),
                        learning_step: Some(next),
                        lapsed: false,
                    }
                }
            }
            Outcome::Easy => self.graduate(card, self.config.easy_interval_days),
        }
    }

    fn graduate(&self, card: &Card, interval_days: u32) -> Projection {
        Projection {
            state: CardState::Review,
            ease_factor: card.ease_factor,
            interval: ReviewInterval::Days(interval_days),
            learning_step: None,
            lapsed: false,
        }
    }

    /// Transitions for graduated cards: ease-factor arithmetic on a
    /// day-scale interval, except Again, which lapses the card back into
    /// the ladder.
    fn project_review(&self, card: &Card, outcome: Outcome) -> Fallible<Projection> {
        let config = &self.config;
        let days = match card.interval {
            ReviewInterval::Days(days) => days,
            ReviewInterval::Minutes(_) => {
                return Err(SchedulerError::InvalidCardState(format!(
                    "card {}: minute-scale interval in review state",
                    card.id
                )));
            }
        };
        let projection = match outcome {
            Outcome::Again => Projection {
                state: CardState::Relearning,
                ease_factor: floor_ease(card.ease_factor - config.lapse_ease_penalty, config),
                interval: ReviewInterval::Minutes(config.learning_steps[0]),
                learning_step: Some(0),
                lapsed: true,
            },
            Outcome::Hard => Projection {
                state: CardState::Review,
                ease_factor: floor_ease(card.ease_factor - config.hard_ease_penalty, config),
                interval: scale_days(days, config.hard_multiplier),
                learning_step: None,
                lapsed: false,
            },
            Outcome::Good => Projection {
                state: CardState::Review,
                ease_factor: card.ease_factor,
                interval: scale_days(days, card.ease_factor),
                learning_step: None,
                lapsed: false,
            },
            Outcome::Easy => Projection {
                state: CardState::Review,
                ease_factor: card.ease_factor + config.easy_ease_bonus,
                interval: scale_days(days, card.ease_factor * config.easy_bonus),
                learning_step: None,
                lapsed: false,
            },
        };
        Ok(projection)
    }
}

fn floor_ease(ease: f64, config: &SchedulerConfig) -> f64 {
    ease.max(config.ease_floor)
}

/// Review intervals are whole days, rounded, and never shorter than one
/// day.
fn scale_days(days: u32, multiplier: f64) -> ReviewInterval {
    let scaled = (f64::from(days) * multiplier).round() as u32;
    ReviewInterval::Days(scaled.max(1))
}
