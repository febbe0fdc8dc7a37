//! Soundtrack player using rodio
//!
//! Plays a single theme track at fixed reduced volume and loops it manually:
//! a periodic tick detects sink exhaustion and restarts the track, matching
//! the original site's `ended`-handler loop rather than a native loop flag.
//!
//! A failed output stream, missing file, or failed decode degrades silently
//! to a "not playing" state; the tribute never surfaces audio errors.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use rodio::mixer::Mixer;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

/// Looping soundtrack player
pub struct SoundtrackPlayer {
    _stream: OutputStream,
    mixer: Mixer,
    sink: Option<Sink>,
    path: PathBuf,
    volume: f32,
    muted: bool,
}

impl SoundtrackPlayer {
    /// Create a player bound to the default output device
    pub fn new(path: PathBuf, volume: f32) -> Result<Self, String> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("Failed to create audio output: {}", e))?;
        let mixer = stream.mixer().clone();

        Ok(Self {
            _stream: stream,
            mixer,
            sink: None,
            path,
            volume,
            muted: false,
        })
    }

    /// Start (or restart) the theme from the beginning
    pub fn play(&mut self) -> Result<(), String> {
        self.stop();

        let file = File::open(&self.path).map_err(|e| format!("Failed to open file: {}", e))?;
        let reader = BufReader::new(file);
        let source =
            Decoder::new(reader).map_err(|e| format!("Failed to decode audio: {}", e))?;

        let sink = Sink::connect_new(&self.mixer);
        sink.append(source);
        sink.set_volume(self.effective_volume());

        self.sink = Some(sink);
        tracing::info!("Soundtrack started: {}", self.path.display());
        Ok(())
    }

    /// Stop playback and drop the sink
    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    /// Whether the track is audible right now
    pub fn is_playing(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.is_paused() && !s.empty())
            .unwrap_or(false)
    }

    /// Whether the track has run off the end and needs a manual restart
    pub fn finished(&self) -> bool {
        self.sink.as_ref().map(|s| s.empty()).unwrap_or(false)
    }

    /// Mute without pausing; unmute restores the fixed volume
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }
}
