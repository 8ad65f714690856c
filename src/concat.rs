//! Unit concatenation: the diphone sequence becomes one output signal.

use tracing::warn;

use crate::audio::AudioBuffer;
use crate::config::SynthesisConfig;
use crate::diphone::DiphoneUnit;
use crate::error::SynthError;
use crate::library::DiphoneLibrary;

/// Length of the crossfade window: 10 ms at 16 kHz.
pub const FADE_SAMPLES: usize = 160;

/// Assembles the unit sequence into an audio buffer, resolving each key
/// against the library and substituting silence for punctuation.
pub struct UnitConcatenator<'a> {
    library: &'a DiphoneLibrary,
    crossfade: bool,
}

impl<'a> UnitConcatenator<'a> {
    #[must_use]
    pub fn new(library: &'a DiphoneLibrary, config: &SynthesisConfig) -> Self {
        Self {
            library,
            crossfade: config.crossfade,
        }
    }

    /// Concatenates the units in order. Keys absent from the library are
    /// reported and contribute no samples; only I/O and codec failures
    /// end the run.
    pub fn assemble(&self, units: &[DiphoneUnit]) -> Result<AudioBuffer, SynthError> {
        if self.crossfade {
            self.assemble_crossfade(units)
        } else {
            self.assemble_hard(units)
        }
    }

    fn assemble_hard(&self, units: &[DiphoneUnit]) -> Result<AudioBuffer, SynthError> {
        let mut out = AudioBuffer::new();
        for unit in units {
            match unit {
                DiphoneUnit::Silence(mark) => out.append(&AudioBuffer::silence(mark.silence_ms())),
                DiphoneUnit::Diphone(key) => {
                    if let Some(buffer) = self.resolve(key)? {
                        out.append(&buffer);
                    }
                }
            }
        }
        Ok(out)
    }

    /// Blends every join over [`FADE_SAMPLES`]: each unit is ramped at
    /// its joining edges, the running output gives up its trailing
    /// window, and the two faded windows are summed sample-wise. The
    /// first unit keeps its head and the last keeps its tail unfaded.
    fn assemble_crossfade(&self, units: &[DiphoneUnit]) -> Result<AudioBuffer, SynthError> {
        let mut out = AudioBuffer::new();
        let last = units.len();
        for (i, unit) in units.iter().enumerate() {
            let index = i + 1;
            match unit {
                DiphoneUnit::Silence(mark) => {
                    // Ramping an all-zero segment changes nothing audible
                    // but keeps the join logic uniform.
                    let mut silence = AudioBuffer::silence(mark.silence_ms());
                    silence.fade_in(FADE_SAMPLES);
                    silence.fade_out(FADE_SAMPLES);
                    out.truncate_tail(FADE_SAMPLES);
                    out.append(&silence);
                }
                DiphoneUnit::Diphone(key) => {
                    let Some(mut buffer) = self.resolve(key)? else {
                        continue;
                    };
                    if index == 1 {
                        buffer.fade_out(FADE_SAMPLES);
                        out.truncate_tail(FADE_SAMPLES);
                        out.append(&buffer);
                    } else if index == last {
                        buffer.fade_in(FADE_SAMPLES);
                        out.truncate_tail(FADE_SAMPLES);
                        out.append(&buffer);
                    } else {
                        buffer.fade_in(FADE_SAMPLES);
                        buffer.fade_out(FADE_SAMPLES);
                        let tail = out.tail(FADE_SAMPLES);
                        out.truncate_tail(FADE_SAMPLES);
                        let join = out.len();
                        out.append(&buffer);
                        out.overlap_add(join, &tail);
                    }
                }
            }
        }
        Ok(out)
    }

    fn resolve(&self, key: &str) -> Result<Option<AudioBuffer>, SynthError> {
        let resolved = self.library.resolve(key)?;
        if resolved.is_none() {
            warn!("diphone {key} cannot be found and will be skipped");
        }
        Ok(resolved)
    }
}
