// SPDX-License-Identifier: MPL-2.0
//! `teleprompter` is an auto-scrolling script prompter built with the Iced GUI
//! framework.
//!
//! The script is edited on one side and displayed large on the other, where
//! it scrolls at an adjustable speed and font size while being read aloud.
//! Scripts are exchanged as plain-text files.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod prompter;
pub mod script;
pub mod ui;
