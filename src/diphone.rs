//! Diphone key derivation from the phone sequence.

use crate::phones::Phone;
use crate::token::PunctMark;

/// One entry of the unit sequence handed to the concatenator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiphoneUnit {
    /// A library key `"P1-P2"` spanning two adjacent phones.
    Diphone(String),
    /// A silence point where the phrase had punctuation.
    Silence(PunctMark),
}

/// Converts the phone sequence into diphone keys over adjacent pairs.
///
/// When a punctuation phone is reached, the previously pushed key is the
/// one spanning from the neighboring phone into the punctuation; no
/// recorded unit covers that join, so it is discarded and the silence
/// sentinel takes its place. The output therefore never contains a key
/// that straddles a punctuation boundary.
#[must_use]
pub fn to_diphones(phones: &[Phone]) -> Vec<DiphoneUnit> {
    let mut units = Vec::new();
    for pair in phones.windows(2) {
        if let Phone::Punct(mark) = &pair[0] {
            units.pop();
            units.push(DiphoneUnit::Silence(*mark));
        } else {
            units.push(DiphoneUnit::Diphone(format!("{}-{}", pair[0], pair[1])));
        }
    }
    units
}
