//! Phrase tokenization: raw text to classified tokens.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::SynthesisConfig;

/// Normal-mode token grammar, in priority order: letter runs, single
/// punctuation marks, three-part dates, two-part dates.
static NORMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+|,|[.:?!]|\d+/\d+/\d+|\d+/\d+").expect("valid regex"));

/// Spelling-mode token grammar: letter runs only.
static SPELL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+").expect("valid regex"));

/// Splits a date-shaped token into its numeric fields.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)/(\d+)(?:/(\d+))?$").expect("valid regex"));

/// Punctuation marks that survive into the unit sequence as silence points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctMark {
    Comma,
    Period,
    Colon,
    Question,
    Exclaim,
}

impl PunctMark {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            ',' => Some(PunctMark::Comma),
            '.' => Some(PunctMark::Period),
            ':' => Some(PunctMark::Colon),
            '?' => Some(PunctMark::Question),
            '!' => Some(PunctMark::Exclaim),
            _ => None,
        }
    }

    pub(crate) fn as_char(self) -> char {
        match self {
            PunctMark::Comma => ',',
            PunctMark::Period => '.',
            PunctMark::Colon => ':',
            PunctMark::Question => '?',
            PunctMark::Exclaim => '!',
        }
    }

    /// Silence inserted for this mark, in milliseconds: a short pause for
    /// a comma, a sentence-final pause for the rest.
    #[must_use]
    pub fn silence_ms(self) -> u32 {
        match self {
            PunctMark::Comma => 200,
            _ => 400,
        }
    }
}

/// A classified unit of the input phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of letters, lower-cased. In spelling mode every letter is
    /// its own `Word`.
    Word(String),
    /// One of `, . : ? !`.
    Punct(PunctMark),
    /// A `day/month` or `day/month/year` group. `year_has_century` records
    /// whether the year matched the four-digit `19xx` grammar arm; a year
    /// in any other four-digit form is reported downstream and the token
    /// contributes no phones.
    Date {
        day: u32,
        month: u32,
        year: Option<u16>,
        year_has_century: bool,
    },
}

/// Splits a lower-cased phrase into the ordered token sequence.
///
/// No tokens are dropped here; malformed dates and unknown words are
/// carried through and reported by the phone sequencing stage.
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer {
    spell: bool,
}

impl TextNormalizer {
    #[must_use]
    pub fn new(config: &SynthesisConfig) -> Self {
        Self {
            spell: config.spell,
        }
    }

    #[must_use]
    pub fn tokenize(&self, phrase: &str) -> Vec<Token> {
        let phrase = phrase.to_lowercase();
        if self.spell {
            // All letter runs are joined, then spelled one letter at a time.
            SPELL_RE
                .find_iter(&phrase)
                .flat_map(|m| m.as_str().chars())
                .map(|c| Token::Word(c.to_string()))
                .collect()
        } else {
            NORMAL_RE
                .find_iter(&phrase)
                .map(|m| classify(m.as_str()))
                .collect()
        }
    }
}

fn classify(text: &str) -> Token {
    if text.chars().count() == 1 {
        if let Some(mark) = text.chars().next().and_then(PunctMark::from_char) {
            return Token::Punct(mark);
        }
    }
    if let Some(caps) = DATE_RE.captures(text) {
        let day = caps[1].parse::<u32>();
        let month = caps[2].parse::<u32>();
        let year = caps.get(3).map(|y| (y.as_str().parse::<u16>(), y.as_str()));
        match (day, month, year) {
            (Ok(day), Ok(month), None) => {
                return Token::Date {
                    day,
                    month,
                    year: None,
                    year_has_century: false,
                };
            }
            (Ok(day), Ok(month), Some((Ok(year), digits))) => {
                return Token::Date {
                    day,
                    month,
                    year: Some(year),
                    year_has_century: digits.len() == 4 && digits.starts_with("19"),
                };
            }
            // Overlong digit runs fall through to an (unpronounceable)
            // word token and get reported as a lexicon miss.
            _ => {}
        }
    }
    Token::Word(text.to_owned())
}
