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

use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

/// A review delay with an explicit unit. Cards in the learning ladder are
/// scheduled minutes ahead; cards in review are scheduled days ahead. The
/// unit only changes at the graduation and lapse boundaries.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "unit", content = "amount", rename_all = "snake_case")]
pub enum ReviewInterval {
    Minutes(u32),
    Days(u32),
}

impl ReviewInterval {
    pub fn duration(self) -> Duration {
        match self {
            ReviewInterval::Minutes(n) => Duration::minutes(i64::from(n)),
            ReviewInterval::Days(n) => Duration::days(i64::from(n)),
        }
    }

    pub fn is_minutes(self) -> bool {
        matches!(self, ReviewInterval::Minutes(_))
    }

    pub fn is_days(self) -> bool {
        matches!(self, ReviewInterval::Days(_))
    }
}

impl Display for ReviewInterval {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ReviewInterval::Minutes(n) => write!(f, "{n} min"),
            ReviewInterval::Days(1) => write!(f, "1 day"),
            ReviewInterval::Days(n) => write!(f, "{n} days"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ReviewInterval::Minutes(10).to_string(), "10 min");
        assert_eq!(ReviewInterval::Days(1).to_string(), "1 day");
        assert_eq!(ReviewInterval::Days(25).to_string(), "25 days");
    }

    #[test]
    fn test_duration() {
        assert_eq!(
            ReviewInterval::Minutes(10).duration(),
            Duration::minutes(10)
        );
        assert_eq!(ReviewInterval::Days(4).duration(), Duration::days(4));
    }
}
