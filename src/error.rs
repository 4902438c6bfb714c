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

use thiserror::Error;

use crate::types::timestamp::Timestamp;

pub type Fallible<T> = Result<T, SchedulerError>;

/// Everything that can go wrong in the scheduling core. All failures are
/// deterministic and local: nothing is retried internally, and no function
/// mutates its inputs before failing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    /// An outcome tag outside Again/Hard/Good/Easy. Unknown outcomes are
    /// rejected rather than defaulted, since a silent default would corrupt
    /// scheduling data.
    #[error("invalid outcome: {0}")]
    InvalidOutcome(String),
    /// An unknown card state tag, or a structurally inconsistent card (e.g.
    /// a learning step recorded on a card in review).
    #[error("invalid card state: {0}")]
    InvalidCardState(String),
    /// The review time predates the card's last recorded review. The caller
    /// decides whether to retry with a corrected clock.
    #[error("review time {now} predates last review {last_review}")]
    TimestampSkew {
        now: Timestamp,
        last_review: Timestamp,
    },
    /// Rejected scheduler tunables.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
