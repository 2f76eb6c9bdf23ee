// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`prompter`]: Scroll loop types ([`ScrollSpeed`](prompter::ScrollSpeed),
//!   [`FontSize`](prompter::FontSize), [`ScrollPosition`](prompter::ScrollPosition),
//!   [`PromptPhase`](prompter::PromptPhase))

pub mod prompter;
