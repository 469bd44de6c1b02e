#![allow(dead_code)]

pub mod mock_audio;

use indigo::audio::AudioCue;
use indigo::navigator::{Deck, Navigator, NavigatorSettings};
use mock_audio::MockAudio;
use std::sync::Arc;

/// Build a navigator wired to a fresh mock cue
pub fn navigator<D: Deck>(deck: D) -> (Navigator<D>, Arc<MockAudio>) {
    navigator_with(deck, NavigatorSettings::default(), MockAudio::new())
}

pub fn navigator_with<D: Deck>(
    deck: D,
    settings: NavigatorSettings,
    mock: MockAudio,
) -> (Navigator<D>, Arc<MockAudio>) {
    let mock = Arc::new(mock);
    let cue: Arc<dyn AudioCue> = mock.clone();
    let nav = Navigator::new(deck, cue, settings).expect("Failed to build navigator");
    (nav, mock)
}

/// Move forward one card and let the flip finish
pub fn step<D: Deck>(nav: &mut Navigator<D>) {
    let ticket = nav.next().expect("navigation should not be blocked");
    assert!(nav.on_flip_complete(ticket));
}
