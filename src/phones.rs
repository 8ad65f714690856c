//! Phone sequencing: classified tokens to a pause-delimited phone string.

use core::fmt;

use tracing::warn;

use crate::lexicon::Lexicon;
use crate::number::{ORDINALS, cardinal_words};
use crate::token::{PunctMark, Token};

/// One element of the phone sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phone {
    /// Pause sentinel; every sequence starts and ends with one, and
    /// punctuation is wrapped in a pair of them.
    Pau,
    /// Punctuation retained verbatim so the diphone stage can turn it
    /// into silence instead of looking up a unit.
    Punct(PunctMark),
    /// A bare upper-case phoneme symbol, stress digit stripped.
    Seg(String),
}

impl Phone {
    /// Builds a segment from a raw lexicon symbol, keeping only the
    /// leading alphabetic run (drops the trailing stress digit).
    fn seg(symbol: &str) -> Self {
        let bare: String = symbol
            .chars()
            .take_while(char::is_ascii_alphabetic)
            .collect();
        Phone::Seg(bare.to_ascii_uppercase())
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phone::Pau => f.write_str("PAU"),
            Phone::Punct(mark) => write!(f, "{}", mark.as_char()),
            Phone::Seg(symbol) => f.write_str(symbol),
        }
    }
}

/// Month names spoken for date tokens, indexed by `month - 1`.
const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Days in each month of a non-leap year, indexed by `month - 1`.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Resolves tokens into phones through the lexicon.
///
/// Dates and numbers are expanded to the words a reader would speak,
/// then each word goes through the same lexicon lookup as ordinary
/// words, so pronunciation stays fully delegated to the lexicon.
pub struct PhoneSequencer<'a, L: Lexicon> {
    lexicon: &'a L,
}

impl<'a, L: Lexicon> PhoneSequencer<'a, L> {
    #[must_use]
    pub fn new(lexicon: &'a L) -> Self {
        Self { lexicon }
    }

    /// Maps the token sequence to phones.
    ///
    /// The result always begins and ends with [`Phone::Pau`]. Tokens that
    /// cannot be resolved (unknown word, impossible date) are reported
    /// and contribute nothing; sequencing continues with the rest.
    #[must_use]
    pub fn sequence(&self, tokens: &[Token]) -> Vec<Phone> {
        let mut seq = vec![Phone::Pau];
        for token in tokens {
            match token {
                Token::Word(word) => self.push_word(&mut seq, word),
                Token::Punct(mark) => {
                    seq.push(Phone::Pau);
                    seq.push(Phone::Punct(*mark));
                    seq.push(Phone::Pau);
                }
                Token::Date {
                    day,
                    month,
                    year,
                    year_has_century,
                } => self.push_date(&mut seq, *day, *month, *year, *year_has_century),
            }
        }
        seq.push(Phone::Pau);
        seq
    }

    fn push_word(&self, seq: &mut Vec<Phone>, word: &str) {
        match self.lexicon.pronounce(word) {
            Some(symbols) => seq.extend(symbols.iter().map(|s| Phone::seg(s))),
            None => warn!("the word '{word}' is not in the lexicon and will be skipped"),
        }
    }

    /// Expands a date to month name, ordinal day, and (when present)
    /// "nineteen" plus the cardinal words of the year's last two digits.
    fn push_date(
        &self,
        seq: &mut Vec<Phone>,
        day: u32,
        month: u32,
        year: Option<u16>,
        year_has_century: bool,
    ) {
        let month_ok = (1..=12).contains(&month);
        let day_ok = month_ok && (1..=MONTH_DAYS[(month - 1) as usize]).contains(&day);
        // A four-digit year is only speakable in its 19xx form.
        let year_ok = year.is_none_or(|y| year_has_century || y < 100);
        if !(day_ok && year_ok) {
            let spoken = match year {
                Some(y) => format!("{day}/{month}/{y}"),
                None => format!("{day}/{month}"),
            };
            warn!("the date {spoken} is not correct");
            return;
        }

        self.push_word(seq, MONTHS[(month - 1) as usize]);
        for word in ORDINALS[day as usize].split_whitespace() {
            self.push_word(seq, word);
        }
        if let Some(year) = year {
            self.push_word(seq, "nineteen");
            for word in cardinal_words((year % 100) as u8) {
                self.push_word(seq, word);
            }
        }
    }
}
