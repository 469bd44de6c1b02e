//! GUI module using iced
//!
//! Renders the visible deck and feeds gestures and timer events back into
//! its navigator.

use iced::widget::{container, row};
use iced::{Element, Length, Subscription, Task};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::navigator::FlipTicket;

// Sub-modules
pub mod app;
pub mod messages;
pub mod state;
pub mod tabs;
pub mod wizards;

// Re-exports for convenience
pub use app::IndigoApp;
pub use messages::Message;
pub use state::Tab;

use wizards::welcome::WelcomeMessage;

/// Stands in for the flip animation: completes after its duration
pub async fn flip_complete_task(tab: Tab, ticket: FlipTicket, after: Duration) -> Message {
    tokio::time::sleep(after).await;
    Message::FlipComplete(tab, ticket)
}

impl IndigoApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let tab = self.current_tab;
        match message {
            Message::TabSelected(selected) => {
                if selected != tab {
                    // Leaving a deck tears it down; the new one starts over
                    self.controls_mut(tab).stop_all();
                    self.current_tab = selected;
                    self.controls_mut(selected).reset();
                }
            }
            Message::Next => {
                let ticket = self.controls_mut(tab).next();
                return self.animate_flip(tab, ticket);
            }
            Message::Previous => {
                let ticket = self.controls_mut(tab).previous();
                return self.animate_flip(tab, ticket);
            }
            Message::TogglePlay => {
                self.controls_mut(tab).toggle_play();
            }
            Message::Tick(deck, generation) => {
                let ticket = self.controls_mut(deck).on_tick(generation);
                return self.animate_flip(deck, ticket);
            }
            Message::FlipComplete(deck, ticket) => {
                // Delivered even if the deck is no longer visible
                self.controls_mut(deck).on_flip_complete(ticket);
            }
            Message::LanguageSelected(language) => {
                self.controls_mut(tab).set_language(&language);
            }
            Message::OrderSelected(order) => {
                self.controls_mut(tab).set_order(order);
            }
            Message::AudioToggled(enabled) => {
                self.controls_mut(tab).set_audio_enabled(enabled);
            }
            Message::RangeSelected(range) => {
                self.numbers.set_range(range);
            }
            Message::CaseSelected(case) => {
                self.alphabets.set_case_mode(case);
            }
            Message::Welcome(WelcomeMessage::NextPage) => {
                if let Some(wizard) = self.welcome.as_mut() {
                    wizard.next_page();
                }
            }
            Message::Welcome(WelcomeMessage::GetStarted) => {
                self.welcome = None;
                self.config.has_seen_welcome = true;
                if let Err(e) = self.remember_welcome() {
                    warn!("⚠️ Could not remember welcome was seen: {}", e);
                }
                info!("👋 Welcome finished");
                self.controls_mut(tab).reset();
            }
        }

        Task::none()
    }

    /// Only the welcome flag is written back; session overrides such as
    /// `--mute` or `--audio-dir` stay out of the saved file
    fn remember_welcome(&self) -> anyhow::Result<()> {
        let mut saved = Config::load_from(&self.config_path)?;
        saved.has_seen_welcome = true;
        saved.save_to(&self.config_path)
    }

    fn animate_flip(&self, tab: Tab, ticket: Option<FlipTicket>) -> Task<Message> {
        match ticket {
            Some(ticket) => {
                Task::perform(flip_complete_task(tab, ticket, self.flip_duration), |m| m)
            }
            None => Task::none(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let tab = self.current_tab;
        let controls = self.controls(tab);

        // The generation is part of the subscription identity, so re-arming
        // the timer replaces the old one instead of running beside it
        match controls.timer_generation() {
            Some(generation) => iced::time::every(controls.advance_period())
                .with((tab, generation))
                .map(|((tab, generation), _)| Message::Tick(tab, generation)),
            None => Subscription::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if let Some(wizard) = &self.welcome {
            return wizard.view();
        }

        let sidebar = tabs::sidebar::view(self);
        let content = tabs::deck::view(self);

        row![sidebar, container(content).width(Length::Fill).padding(20)].into()
    }
}
