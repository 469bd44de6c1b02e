//! Number deck with selectable counting ranges

use crate::error::IndigoResult;
use crate::navigator::{Deck, Navigator};
use lazy_static::lazy_static;
use std::fmt;
use tracing::info;

use super::ContentTable;

/// Highest value with a bundled card in every language
const BASE_MAX: usize = 20;

const FRENCH: &[&str] = &[
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit", "dix-neuf", "vingt",
];

const TWI: &[&str] = &[
    "hwee", "baako", "mmienu", "mmiɛnsa", "nnan", "nnum", "nsia", "nson", "nwɔtwe", "nkron", "du",
    "dubaako", "dummienu", "dummiɛnsa", "dunan", "dunum", "dunsia", "dunson", "dunwɔtwe",
    "dunkron", "aduonu",
];

lazy_static! {
    static ref NUMBERS: ContentTable<Number> =
        build_table().expect("bundled number table is malformed");
}

/// A number shown as digits, with its spelled-out word when one is known
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    pub digits: String,
    pub spelling: String,
}

impl Number {
    fn spelled(value: usize, word: &str) -> Self {
        Self {
            digits: value.to_string(),
            spelling: word.to_string(),
        }
    }

    /// Digits-only card: English rows and values past the spelled table
    fn bare(value: usize) -> Self {
        Self {
            digits: value.to_string(),
            spelling: String::new(),
        }
    }
}

/// Counting range offered by the numbers deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberRange {
    UpToTen,
    #[default]
    UpToTwenty,
    UpToFifty,
    UpToHundred,
}

impl NumberRange {
    pub const ALL: [NumberRange; 4] = [
        NumberRange::UpToTen,
        NumberRange::UpToTwenty,
        NumberRange::UpToFifty,
        NumberRange::UpToHundred,
    ];

    /// Largest value in the range (inclusive)
    pub fn upper_bound(self) -> usize {
        match self {
            NumberRange::UpToTen => 10,
            NumberRange::UpToTwenty => 20,
            NumberRange::UpToFifty => 50,
            NumberRange::UpToHundred => 100,
        }
    }

    /// Cut or extend a base row so it covers exactly `0..=upper_bound`
    pub fn apply(self, base: &[Number]) -> Vec<Number> {
        let len = self.upper_bound() + 1;
        let mut items: Vec<Number> = base.iter().take(len).cloned().collect();
        items.extend((items.len()..len).map(Number::bare));
        items
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0-{}", self.upper_bound())
    }
}

pub(crate) fn build_table() -> IndigoResult<ContentTable<Number>> {
    let row = |words: &[&str]| {
        words
            .iter()
            .enumerate()
            .map(|(value, word)| Number::spelled(value, word))
            .collect::<Vec<_>>()
    };
    ContentTable::new(
        "numbers",
        vec![
            ("English", (0..=BASE_MAX).map(Number::bare).collect()),
            ("French", row(FRENCH)),
            ("Twi", row(TWI)),
        ],
    )
}

/// Numbers deck; audio clips are keyed by the lowercase word, or the digits
/// when a card has no word (all of English, and everything past twenty)
#[derive(Debug, Clone, Default)]
pub struct NumberDeck {
    pub range: NumberRange,
}

impl Deck for NumberDeck {
    type Item = Number;

    fn name(&self) -> &'static str {
        "Numbers"
    }

    fn table(&self) -> &ContentTable<Number> {
        &NUMBERS
    }

    fn audio_key(&self, item: &Number) -> String {
        if item.spelling.is_empty() {
            item.digits.clone()
        } else {
            item.spelling.to_lowercase()
        }
    }

    fn items(&self, language: &str) -> Vec<Number> {
        self.table()
            .get(language)
            .map(|base| self.range.apply(base))
            .unwrap_or_default()
    }

    fn label(&self, item: &Number) -> String {
        if item.spelling.is_empty() {
            item.digits.clone()
        } else {
            item.spelling.clone()
        }
    }
}

impl Navigator<NumberDeck> {
    pub fn range(&self) -> NumberRange {
        self.deck().range
    }

    /// Change the counting range and start over from zero
    pub fn set_range(&mut self, range: NumberRange) {
        self.deck_mut().range = range;
        info!("🔢 Numbers: range set to {}", range);
        self.reset();
    }
}
