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

/// The learner's answer to a review: one of the four grading buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Again,
    Hard,
    Good,
    Easy,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [Outcome::Again, Outcome::Hard, Outcome::Good, Outcome::Easy];

    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Again => "again",
            Outcome::Hard => "hard",
            Outcome::Good => "good",
            Outcome::Easy => "easy",
        }
    }

    /// The 1-4 grade used on the wire by review clients.
    pub fn to_value(self) -> u8 {
        match self {
            Outcome::Again => 1,
            Outcome::Hard => 2,
            Outcome::Good => 3,
            Outcome::Easy => 4,
        }
    }

    pub fn from_value(value: u8) -> Result<Self, SchedulerError> {
        match value {
            1 => Ok(Outcome::Again),
            2 => Ok(Outcome::Hard),
            3 => Ok(Outcome::Good),
            4 => Ok(Outcome::Easy),
            _ => Err(SchedulerError::InvalidOutcome(format!(
                "grade out of range: {value}"
            ))),
        }
    }
}

impl TryFrom<String> for Outcome {
    type Error = SchedulerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "again" => Ok(Outcome::Again),
            "hard" => Ok(Outcome::Hard),
            "good" => Ok(Outcome::Good),
            "easy" => Ok(Outcome::Easy),
            _ => Err(SchedulerError::InvalidOutcome(format!(
                "unknown outcome tag: {value}"
            ))),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for outcome in Outcome::ALL {
            assert_eq!(Outcome::from_value(outcome.to_value()).unwrap(), outcome);
        }
    }

    #[test]
    fn test_out_of_range_grade_rejected() {
        assert!(matches!(
            Outcome::from_value(0),
            Err(SchedulerError::InvalidOutcome(_))
        ));
        assert!(matches!(
            Outcome::from_value(5),
            Err(SchedulerError::InvalidOutcome(_))
        ));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result = Outcome::try_from("ok".to_string());
        assert!(matches!(result, Err(SchedulerError::InvalidOutcome(_))));
    }
}
