//! Spoken-English expansion of small numbers.

/// Cardinal words for 0 through 19.
const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Tens words for 20, 30, .., 90.
const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Ordinal words for the days of a month, indexed directly by day.
///
/// Multi-word entries keep their interior space; callers split them into
/// individual words before lexicon lookup.
pub const ORDINALS: [&str; 32] = [
    "zeroth",
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
    "twentieth",
    "twenty first",
    "twenty second",
    "twenty third",
    "twenty fourth",
    "twenty fifth",
    "twenty sixth",
    "twenty seventh",
    "twenty eighth",
    "twenty ninth",
    "thirtieth",
    "thirty first",
];

/// Expands `n` into the cardinal words a reader would speak: one word
/// below twenty, otherwise the tens word followed by a units word when
/// the remainder is non-zero.
///
/// Callers must keep `n` within `0..=99` (the only use is two-digit year
/// suffixes and day numbers).
#[must_use]
pub fn cardinal_words(n: u8) -> Vec<&'static str> {
    debug_assert!(n <= 99, "cardinal_words only covers 0..=99");
    if n < 20 {
        return vec![UNITS[n as usize]];
    }
    let mut words = vec![TENS[(n / 10 - 2) as usize]];
    if n % 10 > 0 {
        words.push(UNITS[(n % 10) as usize]);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::{ORDINALS, cardinal_words};

    #[test]
    fn single_word_below_twenty() {
        assert_eq!(cardinal_words(0), vec!["zero"]);
        assert_eq!(cardinal_words(7), vec!["seven"]);
        assert_eq!(cardinal_words(13), vec!["thirteen"]);
        assert_eq!(cardinal_words(19), vec!["nineteen"]);
    }

    #[test]
    fn tens_word_plus_optional_units() {
        assert_eq!(cardinal_words(21), vec!["twenty", "one"]);
        assert_eq!(cardinal_words(30), vec!["thirty"]);
        assert_eq!(cardinal_words(45), vec!["forty", "five"]);
        assert_eq!(cardinal_words(99), vec!["ninety", "nine"]);
    }

    #[test]
    fn ordinal_table_bounds() {
        assert_eq!(ORDINALS[0], "zeroth");
        assert_eq!(ORDINALS[21], "twenty first");
        assert_eq!(ORDINALS[31], "thirty first");
    }
}
