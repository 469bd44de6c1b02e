//! Mock Audio Cue for Testing
//!
//! Records every playback request for verification.

use indigo::audio::AudioCue;
use indigo::error::AudioError;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock cue that records (language, key) requests
#[derive(Debug, Default)]
pub struct MockAudio {
    /// Every requested cue, in order
    pub played: Mutex<Vec<(String, String)>>,
    /// Number of stop calls
    pub stops: AtomicUsize,
    /// Simulate a missing clip on every play
    pub should_fail: AtomicBool,
}

impl MockAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let mock = Self::new();
        mock.should_fail.store(true, Ordering::SeqCst);
        mock
    }

    pub fn get_played(&self) -> Vec<(String, String)> {
        self.played.lock().unwrap().clone()
    }

    pub fn last_played(&self) -> Option<(String, String)> {
        self.played.lock().unwrap().last().cloned()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl AudioCue for MockAudio {
    fn play(&self, language: &str, key: &str) -> Result<(), AudioError> {
        self.played
            .lock()
            .unwrap()
            .push((language.to_string(), key.to_string()));
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(AudioError::ResourceNotFound(PathBuf::from(format!(
                "{}_{}.mp3",
                language, key
            ))));
        }
        Ok(())
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        "mock"
    }
}
