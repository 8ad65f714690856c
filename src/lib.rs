//! Diphone unit-selection text-to-speech.
//!
//! A phrase is tokenized, mapped to a phone sequence through a
//! pronunciation lexicon (with dates, numbers and punctuation expanded to
//! the words and pauses a reader would speak), turned into diphone unit
//! keys, and assembled into one 16 kHz mono signal by concatenating the
//! recorded unit waveforms. Punctuation becomes silence; joins may
//! optionally be blended with a 10 ms linear crossfade.
//!
//! The pipeline is strictly forward: phrase → tokens → phones → diphones
//! → audio. Per-token problems (unknown word, malformed date, missing
//! diphone) are logged and skipped, so synthesis always yields a buffer.

#![deny(unsafe_code)]
#![warn(clippy::all, rustdoc::all)]

mod audio;
mod concat;
mod config;
mod diphone;
mod error;
mod lexicon;
mod library;
mod number;
mod phones;
mod token;

pub use audio::{AudioBuffer, SAMPLE_RATE};
pub use concat::{FADE_SAMPLES, UnitConcatenator};
pub use config::SynthesisConfig;
pub use diphone::{DiphoneUnit, to_diphones};
pub use error::SynthError;
pub use lexicon::{CmudictLexicon, Lexicon};
pub use library::DiphoneLibrary;
pub use number::{ORDINALS, cardinal_words};
pub use phones::{Phone, PhoneSequencer};
pub use token::{PunctMark, TextNormalizer, Token};
