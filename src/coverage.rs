//! Audio Coverage
//!
//! Lists, per deck and language, which recorded clips are missing from the
//! audio directory. Numbers are checked over their widest range.

use crate::audio::clips::clip_path;
use crate::content::{AlphabetDeck, ColorDeck, NumberDeck, NumberRange};
use crate::navigator::Deck;
use std::collections::BTreeSet;
use std::path::Path;

/// Clip coverage for one deck in one language
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRow {
    pub deck: &'static str,
    pub language: String,
    pub expected: usize,
    pub missing: Vec<String>,
}

impl CoverageRow {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check one deck against a clip directory
pub fn deck_coverage<D: Deck>(deck: &D, root: &Path) -> Vec<CoverageRow> {
    deck.table()
        .languages()
        .map(|language| {
            let prefix = language.to_lowercase();
            // Rows can repeat keys (French and English share letters)
            let keys: BTreeSet<String> = deck
                .items(language)
                .iter()
                .map(|item| deck.audio_key(item))
                .collect();
            let expected = keys.len();
            let missing = keys
                .into_iter()
                .map(|key| clip_path(root, &prefix, &key))
                .filter(|path| !path.is_file())
                .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().to_string()))
                .collect();

            CoverageRow {
                deck: deck.name(),
                language: language.to_string(),
                expected,
                missing,
            }
        })
        .collect()
}

/// Check every bundled deck
pub fn audit(root: &Path) -> Vec<CoverageRow> {
    let mut rows = deck_coverage(&AlphabetDeck::default(), root);
    rows.extend(deck_coverage(
        &NumberDeck {
            range: NumberRange::UpToHundred,
        },
        root,
    ));
    rows.extend(deck_coverage(&ColorDeck, root));
    rows
}
