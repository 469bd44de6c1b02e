//! Audio Cues
//!
//! Fire-and-forget playback keyed by language and item. A failed cue is the
//! caller's to log; it never changes what the learner is looking at.

use crate::config::Config;
use crate::error::AudioError;
use std::sync::Arc;
use tracing::{info, warn};

pub mod clips;
pub mod engine;
pub mod spoken;

pub use clips::ClipLibrary;
pub use engine::SoundEngine;
pub use spoken::SpokenCue;

/// Something that can voice a flashcard
pub trait AudioCue: Send + Sync + std::fmt::Debug {
    /// Start playing the cue for `key` in `language` (lowercase), replacing
    /// any cue still playing
    fn play(&self, language: &str, key: &str) -> Result<(), AudioError>;

    /// Stop whatever is playing
    fn stop(&self);

    /// Get the cue name
    fn name(&self) -> &str;
}

/// Cue used when sound is muted or unavailable
#[derive(Debug, Default)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&self, _language: &str, _key: &str) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop(&self) {}

    fn name(&self) -> &str {
        "silent"
    }
}

/// Factory to create the configured audio cue
pub fn create_cue(config: &Config) -> Arc<dyn AudioCue> {
    let engine = match SoundEngine::new() {
        Ok(engine) => engine,
        Err(e) => {
            warn!("⚠️ Could not start sound engine, running silent: {}", e);
            return Arc::new(SilentCue);
        }
    };

    let mut library = ClipLibrary::new(&config.audio_dir, engine);
    if config.speech_fallback {
        library = library.with_fallback(Arc::new(SpokenCue::new()));
    }

    if !library.root().is_dir() {
        warn!("⚠️ Audio directory {:?} does not exist", library.root());
    }
    info!(
        "✅ Audio cue '{}' ready ({:?})",
        library.name(),
        library.root()
    );
    Arc::new(library)
}
