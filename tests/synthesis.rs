//! End-to-end pipeline checks against an in-memory lexicon and library.

use std::collections::HashMap;

use diphone_tts::{
    AudioBuffer, DiphoneLibrary, DiphoneUnit, FADE_SAMPLES, Lexicon, Phone, PhoneSequencer,
    PunctMark, SynthesisConfig, TextNormalizer, UnitConcatenator, to_diphones,
};

struct MapLexicon(HashMap<&'static str, Vec<&'static str>>);

impl Lexicon for MapLexicon {
    fn pronounce(&self, word: &str) -> Option<Vec<String>> {
        self.0
            .get(word)
            .map(|phones| phones.iter().map(|p| (*p).to_string()).collect())
    }
}

fn lexicon() -> MapLexicon {
    let mut entries = HashMap::new();
    entries.insert("hi", vec!["HH", "AY1"]);
    entries.insert("a", vec!["AH0"]);
    entries.insert("b", vec!["B", "IY1"]);
    MapLexicon(entries)
}

fn tone(len: usize, value: i16) -> AudioBuffer {
    AudioBuffer::from_samples(vec![value; len])
}

/// Library holding every unit "hi." needs, at distinct amplitudes.
fn hi_library() -> DiphoneLibrary {
    let mut library = DiphoneLibrary::new();
    library.insert("PAU-HH", tone(400, 100));
    library.insert("HH-AY", tone(400, 200));
    library.insert("AY-PAU", tone(400, 300));
    library
}

#[test]
fn hi_with_full_stop_synthesises_words_then_silence() {
    let config = SynthesisConfig::default();
    let lexicon = lexicon();

    let tokens = TextNormalizer::new(&config).tokenize("hi.");
    let phones = PhoneSequencer::new(&lexicon).sequence(&tokens);
    assert_eq!(phones.first(), Some(&Phone::Pau));
    assert_eq!(phones.last(), Some(&Phone::Pau));
    assert_eq!(
        phones,
        vec![
            Phone::Pau,
            Phone::Seg("HH".into()),
            Phone::Seg("AY".into()),
            Phone::Pau,
            Phone::Punct(PunctMark::Period),
            Phone::Pau,
            Phone::Pau,
        ]
    );

    let units = to_diphones(&phones);
    assert_eq!(
        units,
        vec![
            DiphoneUnit::Diphone("PAU-HH".into()),
            DiphoneUnit::Diphone("HH-AY".into()),
            DiphoneUnit::Diphone("AY-PAU".into()),
            DiphoneUnit::Silence(PunctMark::Period),
            DiphoneUnit::Diphone("PAU-PAU".into()),
        ]
    );

    let library = hi_library();
    let out = UnitConcatenator::new(&library, &config)
        .assemble(&units)
        .unwrap();
    // Three 400-sample units followed by exactly 400 ms of zeros; the
    // trailing PAU-PAU unit is absent from the library and skipped.
    assert_eq!(out.len(), 1200 + 6400);
    assert!(out.samples()[1200..].iter().all(|&s| s == 0));
}

#[test]
fn comma_silence_is_exactly_3200_samples() {
    let config = SynthesisConfig::default();
    let lexicon = lexicon();

    let tokens = TextNormalizer::new(&config).tokenize("a, b");
    let phones = PhoneSequencer::new(&lexicon).sequence(&tokens);
    let units = to_diphones(&phones);

    let mut library = DiphoneLibrary::new();
    library.insert("PAU-AH", tone(100, 10));
    library.insert("AH-PAU", tone(100, 20));
    library.insert("PAU-B", tone(100, 30));
    library.insert("B-IY", tone(100, 40));
    library.insert("IY-PAU", tone(100, 50));

    let out = UnitConcatenator::new(&library, &config)
        .assemble(&units)
        .unwrap();
    assert_eq!(out.len(), 2 * 100 + 3200 + 3 * 100);
    assert!(out.samples()[200..200 + 3200].iter().all(|&s| s == 0));
}

#[test]
fn crossfade_output_is_shorter_by_one_window_per_join() {
    let config = SynthesisConfig::default();
    let blend = SynthesisConfig {
        crossfade: true,
        ..SynthesisConfig::default()
    };
    let lexicon = lexicon();
    let library = hi_library();

    let tokens = TextNormalizer::new(&config).tokenize("hi");
    let phones = PhoneSequencer::new(&lexicon).sequence(&tokens);
    let units = to_diphones(&phones);

    let hard = UnitConcatenator::new(&library, &config)
        .assemble(&units)
        .unwrap();
    let blended = UnitConcatenator::new(&library, &blend)
        .assemble(&units)
        .unwrap();
    assert_eq!(hard.len(), 1200);
    assert_eq!(blended.len(), 1200 - 2 * FADE_SAMPLES);
}

#[test]
fn spelling_mode_resolves_each_letter_independently() {
    let spell = SynthesisConfig {
        spell: true,
        ..SynthesisConfig::default()
    };
    let mut entries = HashMap::new();
    entries.insert("h", vec!["EY1", "CH"]);
    entries.insert("i", vec!["AY1"]);
    let lexicon = MapLexicon(entries);

    let tokens = TextNormalizer::new(&spell).tokenize("Hi");
    let phones = PhoneSequencer::new(&lexicon).sequence(&tokens);
    assert_eq!(
        phones,
        vec![
            Phone::Pau,
            Phone::Seg("EY".into()),
            Phone::Seg("CH".into()),
            Phone::Seg("AY".into()),
            Phone::Pau,
        ]
    );
}

#[test]
fn volume_rescale_applies_once_after_assembly() {
    let config = SynthesisConfig::default();
    let library = hi_library();
    let units = [DiphoneUnit::Diphone("HH-AY".into())];
    let mut out = UnitConcatenator::new(&library, &config)
        .assemble(&units)
        .unwrap();
    out.rescale(50);
    assert!(out.samples().iter().all(|&s| s == 100));
}
