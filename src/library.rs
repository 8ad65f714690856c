//! Diphone waveform library.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::audio::AudioBuffer;
use crate::error::SynthError;

#[derive(Debug, Clone)]
enum UnitSource {
    File(PathBuf),
    Memory(AudioBuffer),
}

/// Immutable mapping from upper-cased diphone keys to recorded waveforms.
///
/// Built once before assembly and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct DiphoneLibrary {
    units: HashMap<String, UnitSource>,
}

impl DiphoneLibrary {
    /// An empty library, to be filled with [`DiphoneLibrary::insert`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the library by recursively scanning `dir`.
    ///
    /// Every file's stem, upper-cased, becomes a key; the directory
    /// structure beneath the root is irrelevant, and on duplicate stems
    /// the file visited last wins.
    pub fn scan(dir: &Path) -> Result<Self, SynthError> {
        let mut units = HashMap::new();
        collect(dir, &mut units)?;
        debug!(count = units.len(), "diphone library scanned");
        Ok(Self { units })
    }

    /// Registers a pre-loaded waveform under `key`.
    pub fn insert(&mut self, key: &str, buffer: AudioBuffer) {
        self.units.insert(key.to_uppercase(), UnitSource::Memory(buffer));
    }

    /// Resolves `key` to its waveform, reading from disk when the unit is
    /// file-backed. `Ok(None)` means the library has no such unit.
    pub fn resolve(&self, key: &str) -> Result<Option<AudioBuffer>, SynthError> {
        match self.units.get(key) {
            None => Ok(None),
            Some(UnitSource::Memory(buffer)) => Ok(Some(buffer.clone())),
            Some(UnitSource::File(path)) => Ok(Some(AudioBuffer::read_wav(path)?)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

fn collect(dir: &Path, units: &mut HashMap<String, UnitSource>) -> Result<(), SynthError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(&path, units)?;
        } else if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            units.insert(stem.to_uppercase(), UnitSource::File(path));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::DiphoneLibrary;
    use crate::audio::AudioBuffer;

    #[test]
    fn keys_are_upper_cased() {
        let mut library = DiphoneLibrary::new();
        library.insert("hh-ay", AudioBuffer::from_samples(vec![1, 2, 3]));
        let unit = library.resolve("HH-AY").unwrap();
        assert_eq!(unit.unwrap().samples(), &[1, 2, 3]);
    }

    #[test]
    fn missing_key_resolves_to_none() {
        let library = DiphoneLibrary::new();
        assert!(library.resolve("ZZ-ZZ").unwrap().is_none());
    }

    #[test]
    fn duplicate_keys_keep_the_last_insert() {
        let mut library = DiphoneLibrary::new();
        library.insert("AY-PAU", AudioBuffer::from_samples(vec![1]));
        library.insert("AY-PAU", AudioBuffer::from_samples(vec![2]));
        assert_eq!(library.len(), 1);
        let unit = library.resolve("AY-PAU").unwrap();
        assert_eq!(unit.unwrap().samples(), &[2]);
    }
}
