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

/// Default ladder of learning delays, in minutes.
const DEFAULT_LEARNING_STEPS: [u32; 2] = [1, 10];

/// Ease factor assigned to fresh cards.
const DEFAULT_STARTING_EASE: f64 = 2.5;

/// Lowest value the ease factor can be driven to.
const DEFAULT_EASE_FLOOR: f64 = 1.3;

/// Subtracted from the ease factor on a Hard answer in review.
const DEFAULT_HARD_EASE_PENALTY: f64 = 0.15;

/// Added to the ease factor on an Easy answer in review.
const DEFAULT_EASY_EASE_BONUS: f64 = 0.15;

/// Subtracted from the ease factor when a review card lapses.
const DEFAULT_LAPSE_EASE_PENALTY: f64 = 0.2;

/// Interval multiplier for a Hard answer in review.
const DEFAULT_HARD_MULTIPLIER: f64 = 1.2;

/// Extra interval multiplier for an Easy answer in review.
const DEFAULT_EASY_BONUS: f64 = 1.3;

/// First review interval after graduating the ladder, in days.
const DEFAULT_GRADUATING_INTERVAL_DAYS: u32 = 1;

/// Bootstrap interval for an Easy answer in the ladder, in days.
const DEFAULT_EASY_INTERVAL_DAYS: u32 = 4;

/// Scheduler tunables. The source system kept these as module-level
/// constants; here they are explicit values passed into the scheduler, so
/// alternate tunings can be tested side by side. Every field has a default,
/// so a partial TOML table works.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    pub learning_steps: Vec<u32>,
    pub starting_ease: f64,
    pub ease_floor: f64,
    pub hard_ease_penalty: f64,
    pub easy_ease_bonus: f64,
    pub lapse_ease_penalty: f64,
    pub hard_multiplier: f64,
    pub easy_bonus: f64,
    pub graduating_interval_days: u32,
    pub easy_interval_days: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            learning_steps: DEFAULT_LEARNING_STEPS.to_vec(),
            starting_ease: DEFAULT_STARTING_EASE,
            ease_floor: DEFAULT_EASE_FLOOR,
            hard_ease_penalty: DEFAULT_HARD_EASE_PENALTY,
            easy_ease_bonus: DEFAULT_EASY_EASE_BONUS,
            lapse_ease_penalty: DEFAULT_LAPSE_EASE_PENALTY,
            hard_multiplier: DEFAULT_HARD_MULTIPLIER,
            easy_bonus: DEFAULT_EASY_BONUS,
            graduating_interval_days: DEFAULT_GRADUATING_INTERVAL_DAYS,
            easy_interval_days: DEFAULT_EASY_INTERVAL_DAYS,
        }
    }
}

impl SchedulerConfig {
    /// Parse a TOML table of tunables and validate it.
    pub fn from_toml_str(text: &str) -> Fallible<Self> {
        let config: SchedulerConfig =
            toml::from_str(text).map_err(|e| SchedulerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Fallible<()> {
        if self.learning_steps.is_empty() {
            return invalid("learning step ladder is empty");
        }
        if self.learning_steps.contains(&0) {
            return invalid("learning steps must be at least one minute");
        }
        if self.ease_floor <= 0.0 {
            return invalid("ease floor must be positive");
        }
        if self.starting_ease < self.ease_floor {
            return invalid("starting ease is below the ease floor");
        }
        if self.hard_ease_penalty < 0.0
            || self.easy_ease_bonus < 0.0
            || self.lapse_ease_penalty < 0.0
        {
            return invalid("ease adjustments must be non-negative");
        }
        if self.hard_multiplier < 1.0 {
            return invalid("hard multiplier must be at least 1");
        }
        if self.easy_bonus < 1.0 {
            return invalid("easy bonus must be at least 1");
        }
        if self.graduating_interval_days == 0 || self.easy_interval_days == 0 {
            return invalid("graduation intervals must be at least one day");
        }
        if self.easy_interval_days < self.graduating_interval_days {
            return invalid("easy interval is shorter than the graduating interval");
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> Fallible<()> {
    Err(SchedulerError::InvalidConfig(msg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SchedulerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml() -> Fallible<()> {
        let config = SchedulerConfig::from_toml_str(
            r#"
            learning_steps = [1, 10, 60]
            easy_interval_days = 5
            "#,
        )?;
        assert_eq!(config.learning_steps, vec![1, 10, 60]);
        assert_eq!(config.easy_interval_days, 5);
        // Everything else keeps its default.
        assert_eq!(config.starting_ease, 2.5);
        assert_eq!(config.hard_multiplier, 1.2);
        Ok(())
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = SchedulerConfig::from_toml_str("lapse_penalty = 0.3");
        assert!(matches!(result, Err(SchedulerError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_ladder_rejected() {
        let result = SchedulerConfig::from_toml_str("learning_steps = []");
        assert!(matches!(result, Err(SchedulerError::InvalidConfig(_))));
    }

    #[test]
    fn test_floor_above_starting_ease_rejected() {
        let result = SchedulerConfig::from_toml_str("ease_floor = 3.0");
        assert!(matches!(result, Err(SchedulerError::InvalidConfig(_))));
    }

    #[test]
    fn test_shrinking_hard_multiplier_rejected() {
        let result = SchedulerConfig::from_toml_str("hard_multiplier = 0.8");
        assert!(matches!(result, Err(SchedulerError::InvalidConfig(_))));
    }
}
