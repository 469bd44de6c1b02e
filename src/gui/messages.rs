//! Message types for the Indigo GUI
//!
//! All messages that can be sent to update the application state.

use crate::content::{CaseMode, NumberRange};
use crate::gui::wizards;
use crate::navigator::{FlipTicket, OrderMode};

use super::state::Tab;

/// Messages that drive the application
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    TabSelected(Tab),

    // Card controls (apply to the visible deck)
    Next,
    Previous,
    TogglePlay,

    // Deck settings
    LanguageSelected(String),
    OrderSelected(OrderMode),
    AudioToggled(bool),
    RangeSelected(NumberRange),
    CaseSelected(CaseMode),

    // Timers; tagged with the deck that scheduled them
    FlipComplete(Tab, FlipTicket),
    Tick(Tab, u64),

    // First run
    Welcome(wizards::welcome::WelcomeMessage),
}
