//! Deck Navigator
//!
//! The flashcard state machine shared by every deck: where the learner is,
//! whether the cards come in order or shuffled, whether they advance on their
//! own, and whether a flip is still animating.
//!
//! The navigator never schedules anything itself. It hands out generation
//! numbers for its auto-advance timer and flip transitions, and the GUI
//! echoes them back through [`Navigator::on_tick`] and
//! [`Navigator::on_flip_complete`].

use crate::audio::AudioCue;
use crate::config::Config;
use crate::content::{ContentTable, DEFAULT_LANGUAGE};
use crate::error::{IndigoError, IndigoResult};
use rand::seq::SliceRandom;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub mod timer;

pub use timer::{AutoAdvance, FlipGuard, FlipTicket};

/// A kind of flashcard content, plugged into a [`Navigator`]
pub trait Deck {
    type Item: Clone + fmt::Debug;

    fn name(&self) -> &'static str;

    fn table(&self) -> &ContentTable<Self::Item>;

    /// Key of the audio clip for an item, without the language prefix
    fn audio_key(&self, item: &Self::Item) -> String;

    /// Text shown on the card face
    fn label(&self, item: &Self::Item) -> String;

    /// Cards for a language. Decks with adjustable ranges override this.
    fn items(&self, language: &str) -> Vec<Self::Item> {
        self.table()
            .get(language)
            .map(<[Self::Item]>::to_vec)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderMode {
    #[default]
    Sequential,
    Random,
}

impl OrderMode {
    pub const ALL: [OrderMode; 2] = [OrderMode::Sequential, OrderMode::Random];
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderMode::Sequential => "Sequential",
            OrderMode::Random => "Random",
        })
    }
}

/// Startup settings for a navigator
#[derive(Debug, Clone)]
pub struct NavigatorSettings {
    pub language: String,
    pub audio_enabled: bool,
    pub advance_period: Duration,
    pub flip_timeout: Duration,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for NavigatorSettings {
    fn from(config: &Config) -> Self {
        Self {
            language: config.default_language.clone(),
            audio_enabled: config.audio_enabled,
            advance_period: config.advance_period(),
            flip_timeout: config.flip_timeout(),
        }
    }
}

/// Plain view of a navigator for rendering and assertions
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub deck: &'static str,
    pub language: String,
    pub position: usize,
    pub index: usize,
    pub count: usize,
    pub order: OrderMode,
    pub audio_enabled: bool,
    pub playing: bool,
    pub flipping: bool,
    pub label: String,
}

pub struct Navigator<D: Deck> {
    deck: D,
    audio: Arc<dyn AudioCue>,
    items: Vec<D::Item>,
    language: String,
    order: OrderMode,
    shuffle: Vec<usize>,
    position: usize,
    audio_enabled: bool,
    playing: bool,
    timer: AutoAdvance,
    flip: FlipGuard,
}

impl<D: Deck> fmt::Debug for Navigator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("deck", &self.deck.name())
            .field("language", &self.language)
            .field("order", &self.order)
            .field("position", &self.position)
            .field("count", &self.items.len())
            .field("playing", &self.playing)
            .field("flipping", &self.flip.is_held())
            .finish()
    }
}

impl<D: Deck> Navigator<D> {
    pub fn new(
        deck: D,
        audio: Arc<dyn AudioCue>,
        settings: NavigatorSettings,
    ) -> IndigoResult<Self> {
        let language = match checked_language(deck.table(), &settings.language) {
            Ok(language) => language,
            Err(e) => {
                warn!("⚠️ {}, using {}", e, DEFAULT_LANGUAGE);
                DEFAULT_LANGUAGE.to_string()
            }
        };

        let items = deck.items(&language);
        if items.is_empty() {
            return Err(IndigoError::EmptyContentSet(
                deck.name().to_string(),
                format!("no cards for '{}'", language),
            ));
        }

        debug!("🃏 {} deck ready: {} cards in {}", deck.name(), items.len(), language);
        Ok(Self {
            deck,
            audio,
            items,
            language,
            order: OrderMode::Sequential,
            shuffle: Vec::new(),
            position: 0,
            audio_enabled: settings.audio_enabled,
            playing: false,
            timer: AutoAdvance::new(settings.advance_period),
            flip: FlipGuard::new(settings.flip_timeout),
        })
    }

    pub fn deck(&self) -> &D {
        &self.deck
    }

    /// Mutable deck access for presentation-only settings
    pub(crate) fn deck_mut(&mut self) -> &mut D {
        &mut self.deck
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn languages(&self) -> Vec<String> {
        self.deck.table().languages().map(str::to_string).collect()
    }

    pub fn order(&self) -> OrderMode {
        self.order
    }

    /// Position within the traversal order
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[D::Item] {
        &self.items
    }

    /// Traversal permutation; empty unless the order is random
    pub fn shuffle(&self) -> &[usize] {
        &self.shuffle
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_flipping(&self) -> bool {
        self.flip.is_held()
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    /// Generation of the armed auto-advance timer, if playing
    pub fn timer_generation(&self) -> Option<u64> {
        self.timer.armed()
    }

    pub fn advance_period(&self) -> Duration {
        self.timer.period()
    }

    /// Index into the item row of the card being shown
    pub fn resolve_index(&self) -> usize {
        match self.order {
            OrderMode::Random => self
                .shuffle
                .get(self.position)
                .copied()
                .unwrap_or(self.position),
            OrderMode::Sequential => self.position,
        }
    }

    pub fn current(&self) -> Option<&D::Item> {
        self.items.get(self.resolve_index())
    }

    pub fn label(&self) -> String {
        self.current()
            .map(|item| self.deck.label(item))
            .unwrap_or_default()
    }

    /// Flip to the next card. Returns the flip ticket, or `None` while a
    /// previous flip is still animating.
    pub fn next(&mut self) -> Option<FlipTicket> {
        self.step(true)
    }

    /// Flip to the previous card
    pub fn previous(&mut self) -> Option<FlipTicket> {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> Option<FlipTicket> {
        let count = self.items.len();
        if count == 0 {
            return None;
        }

        let Some(ticket) = self.flip.try_acquire(Instant::now()) else {
            debug!("{}: flip in progress, ignoring navigation", self.deck.name());
            return None;
        };

        self.position = if forward {
            (self.position + 1) % count
        } else {
            (self.position + count - 1) % count
        };
        debug!(
            "{}: card {}/{} ({})",
            self.deck.name(),
            self.position + 1,
            count,
            self.label()
        );

        self.announce();
        Some(ticket)
    }

    /// The flip animation for `ticket` finished
    pub fn on_flip_complete(&mut self, ticket: FlipTicket) -> bool {
        let released = self.flip.release(ticket);
        if !released {
            debug!("{}: ignoring stale flip completion {}", self.deck.name(), ticket);
        }
        released
    }

    /// Start or pause auto-advance. Pausing also silences the current card.
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.timer.cancel();
        self.audio.stop();

        if self.playing {
            let generation = self.timer.arm();
            info!(
                "▶️ {}: auto-advance every {:?} (timer {})",
                self.deck.name(),
                self.timer.period(),
                generation
            );
            self.announce();
        } else {
            info!("⏸️ {}: auto-advance paused", self.deck.name());
        }
        self.playing
    }

    /// A tick from the auto-advance timer armed as `generation`
    pub fn on_tick(&mut self, generation: u64) -> Option<FlipTicket> {
        if !self.timer.accepts(generation) {
            debug!("{}: dropping tick from timer {}", self.deck.name(), generation);
            return None;
        }
        self.next()
    }

    /// Switch language; unknown names fall back to the default language
    pub fn set_language(&mut self, language: &str) {
        self.language = match checked_language(self.deck.table(), language) {
            Ok(language) => language,
            Err(e) => {
                warn!("⚠️ {}, using {}", e, DEFAULT_LANGUAGE);
                DEFAULT_LANGUAGE.to_string()
            }
        };
        info!("🌐 {}: language set to {}", self.deck.name(), self.language);
        self.reset();
    }

    pub fn set_order(&mut self, order: OrderMode) {
        self.order = order;
        info!("🔀 {}: {} order", self.deck.name(), order);
        self.reset();
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.audio_enabled = enabled;
        if !enabled {
            self.audio.stop();
        }
    }

    /// Back to the first card: reload the row, reshuffle, restart the timer
    /// if it was running, and voice the new card
    pub fn reset(&mut self) {
        self.timer.cancel();

        self.items = self.deck.items(&self.language);
        if self.items.is_empty() && self.language != DEFAULT_LANGUAGE {
            warn!(
                "⚠️ {}: no cards for {}, using {}",
                self.deck.name(),
                self.language,
                DEFAULT_LANGUAGE
            );
            self.language = DEFAULT_LANGUAGE.to_string();
            self.items = self.deck.items(&self.language);
        }

        self.position = 0;
        self.shuffle = match self.order {
            OrderMode::Random => {
                let mut indices: Vec<usize> = (0..self.items.len()).collect();
                indices.shuffle(&mut rand::thread_rng());
                indices
            }
            OrderMode::Sequential => Vec::new(),
        };

        if self.playing {
            self.timer.arm();
        }
        self.announce();
    }

    /// Stop auto-advance and any audio. Also runs on drop.
    pub fn stop_all(&mut self) {
        self.playing = false;
        self.timer.cancel();
        self.audio.stop();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            deck: self.deck.name(),
            language: self.language.clone(),
            position: self.position,
            index: self.resolve_index(),
            count: self.items.len(),
            order: self.order,
            audio_enabled: self.audio_enabled,
            playing: self.playing,
            flipping: self.flip.is_held(),
            label: self.label(),
        }
    }

    fn announce(&self) {
        if !self.audio_enabled {
            return;
        }
        let Some(item) = self.current() else {
            return;
        };

        let language = self.language.to_lowercase();
        let key = self.deck.audio_key(item);
        if let Err(e) = self.audio.play(&language, &key) {
            warn!("🔇 {}: no audio for {}/{}: {}", self.deck.name(), language, key, e);
        }
    }
}

impl<D: Deck> Drop for Navigator<D> {
    fn drop(&mut self) {
        self.stop_all();
    }
}

fn checked_language<I>(table: &ContentTable<I>, language: &str) -> IndigoResult<String> {
    if table.contains(language) {
        Ok(language.to_string())
    } else {
        Err(IndigoError::InvalidLanguage(language.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentCue;
    use crate::content::ColorDeck;

    fn colors() -> Navigator<ColorDeck> {
        Navigator::new(ColorDeck, Arc::new(SilentCue), NavigatorSettings::default())
            .expect("color deck")
    }

    #[test]
    fn test_starts_sequential_at_first_card() {
        let nav = colors();
        let snap = nav.snapshot();
        assert_eq!(snap.position, 0);
        assert_eq!(snap.label, "Red");
        assert_eq!(snap.order, OrderMode::Sequential);
        assert!(!snap.playing);
        assert!(!snap.flipping);
    }

    #[test]
    fn test_unknown_start_language_falls_back() {
        let settings = NavigatorSettings {
            language: "Esperanto".to_string(),
            ..NavigatorSettings::default()
        };
        let nav = Navigator::new(ColorDeck, Arc::new(SilentCue), settings).expect("color deck");
        assert_eq!(nav.language(), "English");
    }

    #[test]
    fn test_previous_wraps_from_first_card() {
        let mut nav = colors();
        assert!(nav.previous().is_some());
        assert_eq!(nav.position(), nav.count() - 1);
        assert_eq!(nav.label(), "White");
    }

    #[test]
    fn test_sequential_has_no_shuffle() {
        let mut nav = colors();
        nav.set_order(OrderMode::Random);
        assert_eq!(nav.shuffle().len(), nav.count());
        nav.set_order(OrderMode::Sequential);
        assert!(nav.shuffle().is_empty());
        assert_eq!(nav.resolve_index(), nav.position());
    }

    #[test]
    fn test_order_labels() {
        assert_eq!(OrderMode::Random.to_string(), "Random");
    }
}
