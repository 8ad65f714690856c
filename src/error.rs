//! Fatal error conditions.
//!
//! Per-token problems (unknown words, malformed dates, missing diphones)
//! are not errors: they are logged and skipped so a buffer is always
//! produced. Everything here ends the run.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("failed to load pronunciation lexicon: {0}")]
    Lexicon(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("WAV codec error: {0}")]
    Wav(#[from] hound::Error),
    #[error("audio playback error: {0}")]
    Playback(String),
}
