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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::SchedulerError;

/// A card's position in its lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardState {
    /// Never reviewed.
    New,
    /// Climbing the short-delay learning ladder.
    Learning,
    /// Graduated to long-interval review.
    Review,
    /// Back in the ladder after a lapse.
    Relearning,
}

impl CardState {
    pub fn as_str(&self) -> &str {
        match self {
            CardState::New => "new",
            CardState::Learning => "learning",
            CardState::Review => "review",
            CardState::Relearning => "relearning",
        }
    }

    /// True for the two states that track a learning step.
    pub fn in_ladder(self) -> bool {
        matches!(self, CardState::Learning | CardState::Relearning)
    }
}

impl TryFrom<String> for CardState {
    type Error = SchedulerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "new" => Ok(CardState::New),
            "learning" => Ok(CardState::Learning),
            "review" => Ok(CardState::Review),
            "relearning" => Ok(CardState::Relearning),
            _ => Err(SchedulerError::InvalidCardState(format!(
                "unknown state tag: {value}"
            ))),
        }
    }
}

impl Display for CardState {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for state in [
            CardState::New,
            CardState::Learning,
            CardState::Review,
            CardState::Relearning,
        ] {
            let parsed = CardState::try_from(state.as_str().to_string()).unwrap();
            assert_eq!(parsed, state);
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result = CardState::try_from("graduated".to_string());
        assert!(matches!(result, Err(SchedulerError::InvalidCardState(_))));
    }
}
