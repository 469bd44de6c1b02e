//! State types for the Indigo GUI

use std::fmt;

/// Current deck/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Alphabets,
    Numbers,
    Colors,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Alphabets, Tab::Numbers, Tab::Colors];

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Alphabets => "🔤",
            Tab::Numbers => "🔢",
            Tab::Colors => "🎨",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tab::Alphabets => "Alphabets",
            Tab::Numbers => "Numbers",
            Tab::Colors => "Colors",
        })
    }
}
