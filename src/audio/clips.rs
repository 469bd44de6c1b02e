//! Recorded clip lookup
//!
//! Clips live flat in one directory and are named `<language>_<key>.mp3`,
//! e.g. `french_rouge.mp3` or `twi_ɛ.mp3`.

use super::{AudioCue, SoundEngine};
use crate::error::AudioError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const CLIP_EXTENSION: &str = "mp3";

#[derive(Debug)]
pub struct ClipLibrary {
    root: PathBuf,
    engine: SoundEngine,
    fallback: Option<Arc<dyn AudioCue>>,
}

impl ClipLibrary {
    pub fn new(root: impl Into<PathBuf>, engine: SoundEngine) -> Self {
        Self {
            root: root.into(),
            engine,
            fallback: None,
        }
    }

    /// Cue to try when no clip is recorded for an item
    pub fn with_fallback(mut self, fallback: Arc<dyn AudioCue>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locate the clip for an item, if it has been recorded
    pub fn resolve(&self, language: &str, key: &str) -> Result<PathBuf, AudioError> {
        let path = clip_path(&self.root, language, key);
        if path.is_file() {
            Ok(path)
        } else {
            Err(AudioError::ResourceNotFound(path))
        }
    }
}

/// Expected location of a clip, whether or not it exists
pub fn clip_path(root: &Path, language: &str, key: &str) -> PathBuf {
    root.join(format!("{}_{}.{}", language, key, CLIP_EXTENSION))
}

impl AudioCue for ClipLibrary {
    fn play(&self, language: &str, key: &str) -> Result<(), AudioError> {
        match self.resolve(language, key) {
            Ok(path) => self.engine.play_file(path),
            Err(missing) => match &self.fallback {
                Some(fallback) => {
                    debug!("{}, trying {} cue", missing, fallback.name());
                    // Fallback cues play outside our sink
                    let _ = self.engine.stop();
                    fallback.play(language, key)
                }
                None => {
                    let _ = self.engine.stop();
                    Err(missing)
                }
            },
        }
    }

    fn stop(&self) {
        let _ = self.engine.stop();
        if let Some(fallback) = &self.fallback {
            fallback.stop();
        }
    }

    fn name(&self) -> &str {
        "clips"
    }
}
