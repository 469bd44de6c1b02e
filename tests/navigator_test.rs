use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use indigo::content::{AlphabetDeck, CaseMode, ColorDeck, NumberDeck, NumberRange};
use indigo::navigator::{NavigatorSettings, OrderMode};

mod common;
use common::mock_audio::MockAudio;
use common::{navigator, navigator_with, step};

#[test]
fn test_next_wraps_to_first_letter() {
    let (mut nav, _audio) = navigator(AlphabetDeck::default());
    assert_eq!(nav.count(), 26);

    for _ in 0..25 {
        step(&mut nav);
    }
    assert_eq!(nav.position(), 25);
    assert_eq!(nav.label(), "Z");

    step(&mut nav);
    assert_eq!(nav.position(), 0);
    assert_eq!(nav.label(), "A");
}

#[test]
fn test_previous_wraps_to_last_letter() {
    let (mut nav, _audio) = navigator(AlphabetDeck::default());
    let ticket = nav.previous().expect("free guard");
    nav.on_flip_complete(ticket);
    assert_eq!(nav.position(), 25);
    assert_eq!(nav.label(), "Z");
}

#[test]
fn test_navigation_blocked_while_flipping() {
    let (mut nav, audio) = navigator(ColorDeck);
    nav.next().expect("free guard");
    let before = nav.snapshot();
    let plays = audio.get_played().len();

    assert!(nav.next().is_none());
    assert!(nav.previous().is_none());
    assert_eq!(nav.snapshot(), before);
    assert_eq!(audio.get_played().len(), plays);
}

#[test]
fn test_shuffle_is_a_permutation() {
    let (mut nav, _audio) = navigator(AlphabetDeck::default());
    nav.set_language("Twi");
    nav.set_order(OrderMode::Random);

    let mut order = nav.shuffle().to_vec();
    order.sort_unstable();
    assert_eq!(order, (0..22).collect::<Vec<_>>());
}

#[test]
fn test_random_cycle_visits_every_card_once() {
    let (mut nav, _audio) = navigator(ColorDeck);
    nav.set_order(OrderMode::Random);

    let mut seen = HashSet::new();
    for _ in 0..nav.count() {
        seen.insert(nav.resolve_index());
        step(&mut nav);
    }
    assert_eq!(seen.len(), nav.count());
    assert_eq!(nav.position(), 0);
}

#[test]
fn test_resets_return_to_first_card() {
    let (mut alphabets, _a) = navigator(AlphabetDeck::default());
    step(&mut alphabets);
    step(&mut alphabets);
    alphabets.set_language("French");
    assert_eq!(alphabets.position(), 0);

    step(&mut alphabets);
    alphabets.set_order(OrderMode::Random);
    assert_eq!(alphabets.position(), 0);

    let (mut numbers, _n) = navigator(NumberDeck::default());
    for _ in 0..7 {
        step(&mut numbers);
    }
    numbers.set_range(NumberRange::UpToHundred);
    assert_eq!(numbers.position(), 0);
    assert_eq!(numbers.count(), 101);
}

#[test]
fn test_number_range_extension() {
    let (mut nav, audio) = navigator(NumberDeck::default());
    assert_eq!(nav.count(), 21);

    nav.set_range(NumberRange::UpToFifty);
    assert_eq!(nav.range(), NumberRange::UpToFifty);
    assert_eq!(nav.count(), 51);
    assert_eq!(nav.items()[25].digits, "25");
    assert_eq!(nav.items()[25].spelling, "");

    for _ in 0..25 {
        step(&mut nav);
    }
    assert_eq!(
        audio.last_played(),
        Some(("english".to_string(), "25".to_string()))
    );

    nav.set_range(NumberRange::UpToTen);
    assert_eq!(nav.count(), 11);
}

#[test]
fn test_unknown_language_falls_back() {
    let (mut nav, _audio) = navigator(ColorDeck);
    nav.set_language("French");
    step(&mut nav);

    nav.set_language("Unknown");
    assert_eq!(nav.language(), "English");
    assert_eq!(nav.position(), 0);
    assert_eq!(nav.label(), "Red");
}

#[test]
fn test_color_audio_key() {
    let (mut nav, audio) = navigator(ColorDeck);
    nav.set_language("French");
    assert_eq!(nav.label(), "Rouge");
    assert_eq!(
        audio.last_played(),
        Some(("french".to_string(), "rouge".to_string()))
    );
}

#[test]
fn test_audio_failures_do_not_affect_navigation() {
    let (mut nav, audio) = navigator_with(
        AlphabetDeck::default(),
        NavigatorSettings::default(),
        MockAudio::failing(),
    );

    step(&mut nav);
    step(&mut nav);
    assert_eq!(nav.position(), 2);
    assert_eq!(nav.label(), "C");
    assert_eq!(audio.get_played().len(), 2);
}

#[test]
fn test_disabled_audio_makes_no_requests() {
    let (mut nav, audio) = navigator(ColorDeck);
    nav.set_audio_enabled(false);
    step(&mut nav);
    nav.set_language("Twi");
    assert!(audio.get_played().is_empty());
    assert!(audio.stop_count() >= 1);
}

#[test]
fn test_toggle_play_keeps_single_timer() {
    let (mut nav, _audio) = navigator(NumberDeck::default());

    assert!(nav.toggle_play());
    let first = nav.timer_generation().expect("armed");
    assert!(!nav.toggle_play());
    assert_eq!(nav.timer_generation(), None);
    assert!(nav.toggle_play());
    let second = nav.timer_generation().expect("armed");
    assert_ne!(first, second);

    // The first timer's ticks no longer advance the deck
    assert!(nav.on_tick(first).is_none());
    assert_eq!(nav.position(), 0);

    let ticket = nav.on_tick(second).expect("live tick advances");
    assert_eq!(nav.position(), 1);
    nav.on_flip_complete(ticket);
}

#[test]
fn test_tick_during_flip_is_ignored() {
    let (mut nav, _audio) = navigator(ColorDeck);
    nav.toggle_play();
    let generation = nav.timer_generation().expect("armed");

    nav.on_tick(generation).expect("first tick advances");
    assert!(nav.on_tick(generation).is_none());
    assert_eq!(nav.position(), 1);
}

#[test]
fn test_play_voices_current_card_and_pause_stops_audio() {
    let (mut nav, audio) = navigator(AlphabetDeck::default());
    let stops = audio.stop_count();

    nav.toggle_play();
    assert_eq!(
        audio.last_played(),
        Some(("english".to_string(), "a".to_string()))
    );

    nav.toggle_play();
    assert!(!nav.is_playing());
    assert_eq!(audio.stop_count(), stops + 2);
}

#[test]
fn test_reset_while_playing_restarts_timer() {
    let (mut nav, _audio) = navigator(ColorDeck);
    nav.toggle_play();
    let before = nav.timer_generation().expect("armed");

    nav.set_order(OrderMode::Random);
    let after = nav.timer_generation().expect("still playing");
    assert!(nav.is_playing());
    assert_ne!(before, after);
    assert!(nav.on_tick(before).is_none());
}

#[test]
fn test_stop_all_cancels_playback() {
    let (mut nav, audio) = navigator(ColorDeck);
    nav.toggle_play();
    let generation = nav.timer_generation().expect("armed");
    let stops = audio.stop_count();

    nav.stop_all();
    assert!(!nav.is_playing());
    assert!(nav.on_tick(generation).is_none());
    assert_eq!(audio.stop_count(), stops + 1);
}

#[test]
fn test_drop_stops_audio() {
    let (nav, audio) = navigator(ColorDeck);
    let stops = audio.stop_count();
    drop(nav);
    assert_eq!(audio.stop_count(), stops + 1);
}

#[test]
fn test_abandoned_flip_is_released_after_timeout() {
    let settings = NavigatorSettings {
        flip_timeout: Duration::from_millis(20),
        ..NavigatorSettings::default()
    };
    let (mut nav, _audio) = navigator_with(ColorDeck, settings, MockAudio::new());

    let lost = nav.next().expect("free guard");
    assert!(nav.next().is_none());

    thread::sleep(Duration::from_millis(40));
    let ticket = nav.next().expect("timed-out guard is taken over");
    assert_eq!(nav.position(), 2);

    // The late completion of the lost flip must not unlock the new one
    assert!(!nav.on_flip_complete(lost));
    assert!(nav.is_flipping());
    assert!(nav.on_flip_complete(ticket));
    assert!(!nav.is_flipping());
}

#[test]
fn test_case_mode_is_presentation_only() {
    let (mut nav, _audio) = navigator(AlphabetDeck::default());
    step(&mut nav);
    step(&mut nav);

    nav.set_case_mode(CaseMode::Both);
    assert_eq!(nav.case_mode(), CaseMode::Both);
    assert_eq!(nav.position(), 2);
    assert_eq!(nav.label(), "Cc");
}

#[test]
fn test_twi_letters_voice_lowercase_keys() {
    let (mut nav, audio) = navigator(AlphabetDeck::default());
    nav.set_language("Twi");
    for _ in 0..4 {
        step(&mut nav);
    }
    assert_eq!(nav.label(), "Ɛ");
    assert_eq!(
        audio.last_played(),
        Some(("twi".to_string(), "ɛ".to_string()))
    );
}

#[test]
fn test_number_cards_follow_language() {
    let (mut nav, audio) = navigator(NumberDeck::default());
    for _ in 0..5 {
        step(&mut nav);
    }
    assert_eq!(nav.label(), "5");
    assert_eq!(
        audio.last_played(),
        Some(("english".to_string(), "5".to_string()))
    );

    nav.set_language("French");
    for _ in 0..5 {
        step(&mut nav);
    }
    assert_eq!(nav.label(), "cinq");
    assert_eq!(
        audio.last_played(),
        Some(("french".to_string(), "cinq".to_string()))
    );
}
