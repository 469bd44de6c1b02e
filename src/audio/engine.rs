//! Sound Engine for clip playback
//!
//! Uses a channel-based architecture to handle rodio's non-Send stream.
//! The engine spawns a dedicated audio thread that owns the playback infrastructure.

use crate::error::AudioError;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use tracing::{debug, error, info, warn};

/// Commands sent to the audio thread
#[derive(Debug, PartialEq)]
pub(crate) enum AudioCommand {
    /// Replace whatever is playing with this file
    PlayFile(PathBuf),
    Stop,
}

/// Thread-safe handle to the sound engine
#[derive(Clone)]
pub struct SoundEngine {
    sender: mpsc::Sender<AudioCommand>,
}

impl std::fmt::Debug for SoundEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundEngine").finish()
    }
}

impl SoundEngine {
    pub fn new() -> anyhow::Result<Self> {
        let (sender, receiver) = mpsc::channel::<AudioCommand>();

        thread::Builder::new()
            .name("indigo-audio".to_string())
            .spawn(move || {
                Self::audio_thread(receiver);
            })?;

        Ok(Self { sender })
    }

    /// Engine with no audio thread; commands land in the returned receiver
    #[cfg(test)]
    pub(crate) fn detached() -> (Self, mpsc::Receiver<AudioCommand>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }

    fn audio_thread(receiver: mpsc::Receiver<AudioCommand>) {
        use rodio::OutputStream;

        // Initialize audio output on this thread
        let (stream, stream_handle) = match OutputStream::try_default() {
            Ok(s) => s,
            Err(e) => {
                warn!("🔇 Failed to initialize audio output: {}", e);
                return;
            }
        };

        // Keep stream alive
        let _stream = stream;
        let mut sink = match rodio::Sink::try_new(&stream_handle) {
            Ok(s) => s,
            Err(e) => {
                error!("❌ Failed to create audio sink: {}", e);
                return;
            }
        };

        info!("🔊 Audio thread started");

        while let Ok(cmd) = receiver.recv() {
            // A stopped sink is unusable, so both commands start from a fresh one
            sink.stop();
            match rodio::Sink::try_new(&stream_handle) {
                Ok(new_sink) => sink = new_sink,
                Err(e) => {
                    error!("❌ Failed to recreate audio sink: {}", e);
                    break;
                }
            }

            match cmd {
                AudioCommand::PlayFile(path) => {
                    debug!("🔊 Playing clip: {:?}", path);
                    if let Err(e) = Self::queue_file(&sink, &path) {
                        error!("❌ Audio playback failed for {:?}: {}", path, e);
                    }
                }
                AudioCommand::Stop => {
                    debug!("🛑 Playback stopped");
                }
            }
        }

        info!("🔇 Audio thread stopped");
    }

    fn queue_file(sink: &rodio::Sink, path: &Path) -> anyhow::Result<()> {
        use rodio::Decoder;
        use std::fs::File;
        use std::io::BufReader;

        let file = File::open(path)?;
        let source = Decoder::new(BufReader::new(file))?;
        sink.append(source);
        Ok(())
    }

    /// Play a clip, cutting off any clip already playing
    pub fn play_file<P: Into<PathBuf>>(&self, path: P) -> Result<(), AudioError> {
        self.sender
            .send(AudioCommand::PlayFile(path.into()))
            .map_err(|_| AudioError::Disconnected)
    }

    /// Stop current playback
    pub fn stop(&self) -> Result<(), AudioError> {
        self.sender
            .send(AudioCommand::Stop)
            .map_err(|_| AudioError::Disconnected)
    }
}
