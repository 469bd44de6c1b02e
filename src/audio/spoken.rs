//! System speech fallback cue
//!
//! Speaks the item key through speech-dispatcher or espeak-ng when no clip
//! has been recorded for it.

use super::AudioCue;
use crate::error::AudioError;
use std::process::{Child, Command};
use std::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
pub struct SpokenCue {
    current: Mutex<Option<Child>>,
}

impl SpokenCue {
    pub fn new() -> Self {
        Self::default()
    }

    fn spawn(language: &str, text: &str) -> Result<Child, AudioError> {
        let code = voice_code(language);

        let mut spd = Command::new("spd-say");
        if let Some(code) = code {
            spd.arg("-l").arg(code);
        }
        if let Ok(child) = spd.arg(text).spawn() {
            return Ok(child);
        }

        let mut espeak = Command::new("espeak-ng");
        if let Some(code) = code {
            espeak.arg("-v").arg(code);
        }
        espeak.arg(text).spawn().map_err(|e| {
            AudioError::PlaybackFailure(format!(
                "No system speech command found (tried spd-say, espeak-ng): {}",
                e
            ))
        })
    }

    fn kill_current(&self) {
        let mut current = self.current.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(mut child) = current.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Voice code for the languages the speech tools know
fn voice_code(language: &str) -> Option<&'static str> {
    match language {
        "english" => Some("en"),
        "french" => Some("fr"),
        _ => None,
    }
}

impl AudioCue for SpokenCue {
    fn play(&self, language: &str, key: &str) -> Result<(), AudioError> {
        debug!("System speaking '{}' ({})", key, language);
        self.kill_current();
        let child = Self::spawn(language, key)?;
        *self.current.lock().unwrap_or_else(|p| p.into_inner()) = Some(child);
        Ok(())
    }

    fn stop(&self) {
        self.kill_current();
    }

    fn name(&self) -> &str {
        "system speech"
    }
}
