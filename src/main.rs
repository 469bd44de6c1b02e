//! Indigo - Flip-card flashcards
//!
//! Letters, numbers and colors in English, French and Twi.

use anyhow::Result;
use clap::Parser;
use iced::Task;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use indigo::config::Config;
use indigo::gui::IndigoApp;
use indigo::{audio, content, coverage};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding `<language>_<key>.mp3` clips
    #[arg(long)]
    audio_dir: Option<PathBuf>,

    /// Start with sound off
    #[arg(long)]
    mute: bool,

    /// List missing audio clips and exit
    #[arg(long)]
    check_audio: bool,
}

impl Args {
    /// Session-only overrides; these never reach the saved config
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.audio_dir {
            config.audio_dir = dir.to_string_lossy().to_string();
        }
        if self.mute {
            info!("🔇 Starting muted");
            config.audio_enabled = false;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    content::validate()?;

    let mut config = Config::load()?;
    args.apply_overrides(&mut config);

    if args.check_audio {
        print_coverage(&config);
        return Ok(());
    }

    info!("🎓 Indigo v{} starting...", env!("CARGO_PKG_VERSION"));

    let cue = audio::create_cue(&config);
    let app = IndigoApp::new(config, cue)?;

    iced::application(IndigoApp::title, IndigoApp::update, IndigoApp::view)
        .theme(IndigoApp::theme)
        .subscription(IndigoApp::subscription)
        .run_with(move || (app, Task::none()))?;

    Ok(())
}

fn print_coverage(config: &Config) {
    let root = PathBuf::from(&config.audio_dir);
    println!("Audio clips in {}", root.display());

    let rows = coverage::audit(&root);
    for row in &rows {
        let found = row.expected - row.missing.len();
        println!(
            "{:<10} {:<8} {:>3}/{:<3}",
            row.deck, row.language, found, row.expected
        );
        for name in &row.missing {
            println!("    missing {}", name);
        }
    }

    let complete = rows.iter().filter(|row| row.is_complete()).count();
    println!("{} of {} decks fully voiced", complete, rows.len());
}
