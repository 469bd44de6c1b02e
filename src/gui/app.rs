//! Main application state for the Indigo GUI
//!
//! Contains the IndigoApp struct and initialization logic.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::audio::AudioCue;
use crate::config::{self, Config};
use crate::content::{AlphabetDeck, ColorDeck, NumberDeck};
use crate::error::IndigoResult;
use crate::navigator::{Deck, FlipTicket, Navigator, NavigatorSettings, OrderMode, Snapshot};

use super::state::Tab;
use super::wizards::welcome::WelcomeWizard;

/// Deck operations the GUI drives without caring which deck it is
pub(crate) trait DeckControls {
    fn next(&mut self) -> Option<FlipTicket>;
    fn previous(&mut self) -> Option<FlipTicket>;
    fn toggle_play(&mut self) -> bool;
    fn on_tick(&mut self, generation: u64) -> Option<FlipTicket>;
    fn on_flip_complete(&mut self, ticket: FlipTicket) -> bool;
    fn set_language(&mut self, language: &str);
    fn set_order(&mut self, order: OrderMode);
    fn set_audio_enabled(&mut self, enabled: bool);
    fn reset(&mut self);
    fn stop_all(&mut self);
    fn snapshot(&self) -> Snapshot;
    fn languages(&self) -> Vec<String>;
    fn timer_generation(&self) -> Option<u64>;
    fn advance_period(&self) -> Duration;
}

impl<D: Deck> DeckControls for Navigator<D> {
    fn next(&mut self) -> Option<FlipTicket> {
        Navigator::next(self)
    }

    fn previous(&mut self) -> Option<FlipTicket> {
        Navigator::previous(self)
    }

    fn toggle_play(&mut self) -> bool {
        Navigator::toggle_play(self)
    }

    fn on_tick(&mut self, generation: u64) -> Option<FlipTicket> {
        Navigator::on_tick(self, generation)
    }

    fn on_flip_complete(&mut self, ticket: FlipTicket) -> bool {
        Navigator::on_flip_complete(self, ticket)
    }

    fn set_language(&mut self, language: &str) {
        Navigator::set_language(self, language)
    }

    fn set_order(&mut self, order: OrderMode) {
        Navigator::set_order(self, order)
    }

    fn set_audio_enabled(&mut self, enabled: bool) {
        Navigator::set_audio_enabled(self, enabled)
    }

    fn reset(&mut self) {
        Navigator::reset(self)
    }

    fn stop_all(&mut self) {
        Navigator::stop_all(self)
    }

    fn snapshot(&self) -> Snapshot {
        Navigator::snapshot(self)
    }

    fn languages(&self) -> Vec<String> {
        Navigator::languages(self)
    }

    fn timer_generation(&self) -> Option<u64> {
        Navigator::timer_generation(self)
    }

    fn advance_period(&self) -> Duration {
        Navigator::advance_period(self)
    }
}

/// Main application state
pub struct IndigoApp {
    /// Visible deck
    pub(crate) current_tab: Tab,
    pub(crate) alphabets: Navigator<AlphabetDeck>,
    pub(crate) numbers: Navigator<NumberDeck>,
    pub(crate) colors: Navigator<ColorDeck>,
    /// How long a card flip animates
    pub(crate) flip_duration: Duration,
    /// Configuration
    pub(crate) config: Config,
    /// Where the welcome flag is persisted
    pub(crate) config_path: PathBuf,
    /// First-run welcome pages, shown over the decks
    pub(crate) welcome: Option<WelcomeWizard>,
}

impl IndigoApp {
    /// Create a new IndigoApp instance
    pub fn new(config: Config, audio: Arc<dyn AudioCue>) -> IndigoResult<Self> {
        let settings = NavigatorSettings::from(&config);

        let alphabets = Navigator::new(AlphabetDeck::default(), audio.clone(), settings.clone())?;
        let numbers = Navigator::new(NumberDeck::default(), audio.clone(), settings.clone())?;
        let colors = Navigator::new(ColorDeck, audio, settings)?;

        let mut app = Self {
            current_tab: Tab::default(),
            alphabets,
            numbers,
            colors,
            flip_duration: config.flip_duration(),
            welcome: (!config.has_seen_welcome).then(WelcomeWizard::new),
            config,
            config_path: config::config_path(),
        };

        // The visible deck starts fresh, unless the welcome pages cover it
        if app.welcome.is_none() {
            app.controls_mut(app.current_tab).reset();
        }

        info!("🚀 Indigo app initialized");
        Ok(app)
    }

    /// Persist the welcome flag somewhere other than the user config dir
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub(crate) fn controls(&self, tab: Tab) -> &dyn DeckControls {
        match tab {
            Tab::Alphabets => &self.alphabets,
            Tab::Numbers => &self.numbers,
            Tab::Colors => &self.colors,
        }
    }

    pub(crate) fn controls_mut(&mut self, tab: Tab) -> &mut dyn DeckControls {
        match tab {
            Tab::Alphabets => &mut self.alphabets,
            Tab::Numbers => &mut self.numbers,
            Tab::Colors => &mut self.colors,
        }
    }

    pub fn current_tab(&self) -> Tab {
        self.current_tab
    }

    /// Snapshot of the visible deck
    pub fn snapshot(&self) -> Snapshot {
        self.controls(self.current_tab).snapshot()
    }

    pub fn is_welcome_visible(&self) -> bool {
        self.welcome.is_some()
    }

    /// Application title
    pub fn title(&self) -> String {
        format!("Indigo - {}", self.current_tab)
    }

    /// Application theme
    pub fn theme(&self) -> iced::Theme {
        iced::Theme::Light
    }
}
