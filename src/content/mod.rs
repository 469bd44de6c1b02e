//! Localized Content Tables
//!
//! Read-only per-language rows of flashcard items. Each table is built once,
//! validated, and never mutated afterwards.

use crate::error::{IndigoError, IndigoResult};

pub mod alphabets;
pub mod colors;
pub mod numbers;

pub use alphabets::{AlphabetDeck, CaseMode, Letter};
pub use colors::{ColorDeck, Rgb, Swatch};
pub use numbers::{Number, NumberDeck, NumberRange};

/// Language every table must carry; unknown selections fall back to it
pub const DEFAULT_LANGUAGE: &str = "English";

/// Immutable mapping from language name to an ordered, non-empty item row
#[derive(Debug, Clone)]
pub struct ContentTable<I> {
    name: &'static str,
    rows: Vec<(String, Vec<I>)>,
}

impl<I> ContentTable<I> {
    /// Build a table, rejecting empty rows and a missing default language
    pub fn new(name: &'static str, rows: Vec<(&str, Vec<I>)>) -> IndigoResult<Self> {
        if let Some((language, _)) = rows.iter().find(|(_, items)| items.is_empty()) {
            return Err(IndigoError::EmptyContentSet(
                name.to_string(),
                format!("row '{}' is empty", language),
            ));
        }
        if !rows.iter().any(|(language, _)| *language == DEFAULT_LANGUAGE) {
            return Err(IndigoError::EmptyContentSet(
                name.to_string(),
                format!("missing '{}' row", DEFAULT_LANGUAGE),
            ));
        }

        Ok(Self {
            name,
            rows: rows
                .into_iter()
                .map(|(language, items)| (language.to_string(), items))
                .collect(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the row for a language
    pub fn get(&self, language: &str) -> Option<&[I]> {
        self.rows
            .iter()
            .find(|(key, _)| key == language)
            .map(|(_, items)| items.as_slice())
    }

    pub fn contains(&self, language: &str) -> bool {
        self.get(language).is_some()
    }

    /// Languages in declaration order
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(key, _)| key.as_str())
    }
}

/// Build every bundled table once so malformed data is reported at startup
pub fn validate() -> IndigoResult<()> {
    alphabets::build_table()?;
    numbers::build_table()?;
    colors::build_table()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_order() {
        let table = ContentTable::new(
            "demo",
            vec![("English", vec![1, 2, 3]), ("French", vec![4, 5])],
        )
        .expect("valid table");

        assert_eq!(table.get("French"), Some(&[4, 5][..]));
        assert!(table.get("Klingon").is_none());
        assert_eq!(table.languages().collect::<Vec<_>>(), vec!["English", "French"]);
    }

    #[test]
    fn test_empty_row_rejected() {
        let result = ContentTable::<u8>::new("demo", vec![("English", vec![1]), ("Twi", vec![])]);
        assert!(matches!(result, Err(IndigoError::EmptyContentSet(_, _))));
    }

    #[test]
    fn test_missing_default_rejected() {
        let result = ContentTable::new("demo", vec![("French", vec![1])]);
        assert!(matches!(result, Err(IndigoError::EmptyContentSet(_, _))));
    }

    #[test]
    fn test_bundled_tables_are_valid() {
        validate().expect("bundled tables should validate");
    }
}
