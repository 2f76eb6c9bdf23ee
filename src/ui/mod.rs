// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one takes a `ViewContext`, emits its own `Message`, and maps it to an
//! effect for the application through its `update` function.
//!
//! # Components
//!
//! - [`header`] - Title, Save/Load buttons and theme switch
//! - [`script_editor`] - Editable script pane
//! - [`preview`] - Prompter surface driven by the scroll controller
//! - [`controls`] - Play/pause, speed and font size steppers, reset
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod controls;
pub mod design_tokens;
pub mod header;
pub mod notifications;
pub mod preview;
pub mod script_editor;
pub mod styles;
pub mod theming;
