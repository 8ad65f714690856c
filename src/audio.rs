//! Owned sample buffers and the windowed edits the concatenator needs.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::SynthError;

/// Sample rate of the diphone library and of every produced signal, Hz.
pub const SAMPLE_RATE: u32 = 16_000;

/// A mono 16 kHz PCM signal.
///
/// Growth is append-only during assembly; windowed edits operate on
/// explicit index ranges clamped to the buffer length, so they are safe
/// on buffers shorter than the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioBuffer {
    samples: Vec<i16>,
}

impl AudioBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_samples(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// An all-zero segment lasting `ms` milliseconds.
    #[must_use]
    pub fn silence(ms: u32) -> Self {
        Self {
            samples: vec![0; (SAMPLE_RATE * ms / 1000) as usize],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn append(&mut self, other: &AudioBuffer) {
        self.samples.extend_from_slice(&other.samples);
    }

    /// Drops the trailing `n` samples (all of them if the buffer is shorter).
    pub fn truncate_tail(&mut self, n: usize) {
        let keep = self.samples.len().saturating_sub(n);
        self.samples.truncate(keep);
    }

    /// Copies the trailing `n` samples (fewer if the buffer is shorter).
    #[must_use]
    pub fn tail(&self, n: usize) -> Vec<i16> {
        let start = self.samples.len().saturating_sub(n);
        self.samples[start..].to_vec()
    }

    /// Ramps the leading `n` samples linearly from zero to full amplitude.
    pub fn fade_in(&mut self, n: usize) {
        let n = n.min(self.samples.len());
        for (i, sample) in self.samples[..n].iter_mut().enumerate() {
            *sample = scale(*sample, ramp(i, n));
        }
    }

    /// Ramps the trailing `n` samples linearly from full amplitude to zero.
    pub fn fade_out(&mut self, n: usize) {
        let len = self.samples.len();
        let n = n.min(len);
        for (i, sample) in self.samples[len - n..].iter_mut().enumerate() {
            *sample = scale(*sample, 1.0 - ramp(i, n));
        }
    }

    /// Adds `overlap` sample-wise onto the region starting at `at`.
    pub fn overlap_add(&mut self, at: usize, overlap: &[i16]) {
        for (dst, src) in self.samples.iter_mut().skip(at).zip(overlap) {
            *dst = dst.saturating_add(*src);
        }
    }

    /// Scales every sample by `level / 100`. Level 100 leaves the signal
    /// unchanged, level 0 silences it.
    pub fn rescale(&mut self, level: u8) {
        let gain = f32::from(level.min(100)) / 100.0;
        for sample in &mut self.samples {
            *sample = scale(*sample, gain);
        }
    }

    /// Reads a mono 16-bit PCM WAV file.
    pub fn read_wav(path: &Path) -> Result<Self, SynthError> {
        let mut reader = WavReader::open(path)?;
        let samples = reader.samples::<i16>().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { samples })
    }

    /// Writes the signal as a mono 16-bit PCM WAV file.
    pub fn write_wav(&self, path: &Path) -> Result<(), SynthError> {
        let spec = WavSpec {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec)?;
        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
        Ok(())
    }
}

/// Position `i` of an `n`-point linear ramp from 0.0 to 1.0 inclusive.
fn ramp(i: usize, n: usize) -> f32 {
    if n <= 1 {
        return 0.0;
    }
    i as f32 / (n - 1) as f32
}

fn scale(sample: i16, gain: f32) -> i16 {
    (f32::from(sample) * gain).round() as i16
}
