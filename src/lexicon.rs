//! Pronunciation lexicon seam.

use std::path::Path;

use cmudict_fast::Cmudict;

use crate::error::SynthError;

/// Maps a lower-case orthographic word to its pronunciation.
///
/// Implementations return the first pronunciation variant only: the raw
/// phone symbols with any lexical stress digits still attached. Stress
/// stripping happens during phone sequencing.
pub trait Lexicon {
    fn pronounce(&self, word: &str) -> Option<Vec<String>>;
}

/// Lexicon backed by the CMU Pronouncing Dictionary.
pub struct CmudictLexicon {
    dict: Cmudict,
}

impl CmudictLexicon {
    /// Loads a dictionary file in `cmudict.dict` format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SynthError> {
        let dict = Cmudict::new(path.as_ref()).map_err(|e| SynthError::Lexicon(e.to_string()))?;
        Ok(Self { dict })
    }
}

impl Lexicon for CmudictLexicon {
    fn pronounce(&self, word: &str) -> Option<Vec<String>> {
        let rule = self.dict.get(word)?.first()?;
        Some(
            rule.pronunciation()
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
    }
}
