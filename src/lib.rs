//! Indigo Library
//!
//! Flashcard decks for early learners and the navigator that pages through
//! them.

pub mod audio;
pub mod config;
pub mod content;
pub mod coverage;
pub mod error;
pub mod gui;
pub mod navigator;
