//! Alphabet deck

use crate::error::IndigoResult;
use crate::navigator::{Deck, Navigator};
use lazy_static::lazy_static;
use std::fmt;

use super::ContentTable;

const ENGLISH: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

const TWI: &[&str] = &[
    "A", "B", "D", "E", "Ɛ", "F", "G", "H", "I", "K", "L", "M", "N", "O", "Ɔ", "P", "R", "S", "T",
    "U", "W", "Y",
];

lazy_static! {
    static ref ALPHABETS: ContentTable<Letter> =
        build_table().expect("bundled alphabet table is malformed");
}

/// A letter in both cases
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Letter {
    pub upper: String,
    pub lower: String,
}

impl Letter {
    pub fn new(glyph: &str) -> Self {
        Self {
            upper: glyph.to_uppercase(),
            lower: glyph.to_lowercase(),
        }
    }
}

/// How letters are shown on the card face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    Upper,
    Lower,
    Both,
}

impl CaseMode {
    pub const ALL: [CaseMode; 3] = [CaseMode::Upper, CaseMode::Lower, CaseMode::Both];
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CaseMode::Upper => "Uppercase",
            CaseMode::Lower => "Lowercase",
            CaseMode::Both => "Both",
        })
    }
}

pub(crate) fn build_table() -> IndigoResult<ContentTable<Letter>> {
    let row = |glyphs: &[&str]| glyphs.iter().map(|g| Letter::new(g)).collect::<Vec<_>>();
    ContentTable::new(
        "alphabets",
        vec![
            ("English", row(ENGLISH)),
            ("French", row(ENGLISH)),
            ("Twi", row(TWI)),
        ],
    )
}

/// Letters of the alphabet; audio clips are keyed by the lowercase letter
#[derive(Debug, Clone, Default)]
pub struct AlphabetDeck {
    pub case: CaseMode,
}

impl Deck for AlphabetDeck {
    type Item = Letter;

    fn name(&self) -> &'static str {
        "Alphabets"
    }

    fn table(&self) -> &ContentTable<Letter> {
        &ALPHABETS
    }

    fn audio_key(&self, item: &Letter) -> String {
        item.lower.clone()
    }

    fn label(&self, item: &Letter) -> String {
        match self.case {
            CaseMode::Upper => item.upper.clone(),
            CaseMode::Lower => item.lower.clone(),
            CaseMode::Both => format!("{}{}", item.upper, item.lower),
        }
    }
}

impl Navigator<AlphabetDeck> {
    pub fn case_mode(&self) -> CaseMode {
        self.deck().case
    }

    /// Presentation only; the learner stays on the same card
    pub fn set_case_mode(&mut self, case: CaseMode) {
        self.deck_mut().case = case;
    }
}
