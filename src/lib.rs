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

//! Spaced-repetition scheduling core for language-learning flashcards.
//!
//! The crate is a pure library: given a deck of [`types::card::Card`]
//! records, a [`scheduler::Scheduler`] selects the cards due for review,
//! previews the interval each grading button would schedule, and computes
//! a card's next state once an outcome is recorded. Storage, rendering,
//! and transport belong to the caller, which round-trips cards through its
//! own store between reviews.

pub mod config;
pub mod error;
pub mod scheduler;
pub mod stats;
pub mod types;
