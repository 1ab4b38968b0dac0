//! Number-to-words encoding for radio reads
//!
//! Covers the small range a voice actually reads out as words:
//! - Integers 0-9999 → "four thousand three hundred twenty one"
//! - Single digits → "five"
//! - Digit groups for phone numbers → "five. five. five."
//! - Two-digit cents/minutes → "twenty-one"
//!
//! Anything outside that range is handed back as the original numeral.

const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
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

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Largest value `int_to_words` spells out
pub const MAX_SPOKEN_INT: u64 = 9999;

/// Convert an integer to English words
///
/// Examples:
/// - 42 → "forty two"
/// - 205 → "two hundred five"
/// - 4321 → "four thousand three hundred twenty one"
/// - 12000 → "12000" (left as the numeral)
pub fn int_to_words(n: u64) -> String {
    match n {
        0..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => {
            let (tens, rest) = (n / 10, n % 10);
            if rest == 0 {
                TENS[tens as usize].to_string()
            } else {
                format!("{} {}", TENS[tens as usize], ONES[rest as usize])
            }
        }
        100..=999 => scaled(n / 100, n % 100, "hundred"),
        1000..=MAX_SPOKEN_INT => scaled(n / 1000, n % 1000, "thousand"),
        _ => n.to_string(),
    }
}

fn scaled(lead: u64, rest: u64, scale: &str) -> String {
    if rest == 0 {
        format!("{} {}", ONES[lead as usize], scale)
    } else {
        format!("{} {} {}", ONES[lead as usize], scale, int_to_words(rest))
    }
}

/// Convert a numeral token to words, keeping the token as written when it is
/// out of range or not a plain run of ASCII digits
pub fn numeral_to_words(numeral: &str) -> String {
    match parse_numeral(numeral) {
        Some(n) if n <= MAX_SPOKEN_INT => int_to_words(n),
        _ => numeral.to_string(),
    }
}

fn parse_numeral(numeral: &str) -> Option<u64> {
    if numeral.is_empty() || !numeral.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    numeral.parse::<u64>().ok()
}

/// Word for a single digit; anything else passes through unchanged
pub fn digit_to_word(digit: char) -> String {
    match digit.to_digit(10) {
        Some(d) => ONES[d as usize].to_string(),
        None => digit.to_string(),
    }
}

/// Spell each digit, joined with ". " and closed with a period
///
/// "555" → "five. five. five."
pub fn spell_digits_with_dots(digits: &str) -> String {
    let spelled: Vec<String> = digits.chars().map(digit_to_word).collect();
    format!("{}.", spelled.join(". "))
}

/// Spell each digit, joined with `separator`
pub fn spell_digits(digits: &str, separator: &str) -> String {
    digits
        .chars()
        .map(digit_to_word)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Read a two-digit value the way cents and minutes are spoken
///
/// Examples:
/// - "05" → "five"
/// - "15" → "fifteen"
/// - "21" → "twenty-one"
/// - "40" → "forty"
pub fn two_digit_read(value: &str) -> String {
    let n = match parse_numeral(value) {
        Some(n) if n <= 99 => n,
        _ => return value.to_string(),
    };

    match n {
        0..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        _ => {
            let (tens, rest) = (n / 10, n % 10);
            if rest == 0 {
                TENS[tens as usize].to_string()
            } else {
                format!("{}-{}", TENS[tens as usize], ONES[rest as usize])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_to_words_oracle_table() {
        let cases = [
            (0, "zero"),
            (5, "five"),
            (10, "ten"),
            (15, "fifteen"),
            (20, "twenty"),
            (21, "twenty one"),
            (42, "forty two"),
            (99, "ninety nine"),
            (100, "one hundred"),
            (101, "one hundred one"),
            (205, "two hundred five"),
            (999, "nine hundred ninety nine"),
            (1000, "one thousand"),
            (1001, "one thousand one"),
            (4321, "four thousand three hundred twenty one"),
            (9999, "nine thousand nine hundred ninety nine"),
        ];

        for (n, expected) in cases {
            assert_eq!(int_to_words(n), expected, "int_to_words({})", n);
        }
    }

    #[test]
    fn test_int_to_words_out_of_range_returns_numeral() {
        assert_eq!(int_to_words(10000), "10000");
        assert_eq!(int_to_words(123456), "123456");
        assert_eq!(int_to_words(u64::MAX), u64::MAX.to_string());
    }

    #[test]
    fn test_int_to_words_round_hundreds_and_thousands() {
        assert_eq!(int_to_words(300), "three hundred");
        assert_eq!(int_to_words(7000), "seven thousand");
        assert_eq!(int_to_words(2010), "two thousand ten");
        assert_eq!(int_to_words(1100), "one thousand one hundred");
    }

    #[test]
    fn test_numeral_to_words() {
        assert_eq!(numeral_to_words("42"), "forty two");
        assert_eq!(numeral_to_words("007"), "seven");
        assert_eq!(numeral_to_words("123456"), "123456");
        assert_eq!(numeral_to_words("99999999999999999999999"), "99999999999999999999999");
        assert_eq!(numeral_to_words("-5"), "-5");
        assert_eq!(numeral_to_words(""), "");
    }

    #[test]
    fn test_digit_to_word() {
        assert_eq!(digit_to_word('0'), "zero");
        assert_eq!(digit_to_word('9'), "nine");
        assert_eq!(digit_to_word('x'), "x");
        // Non-ASCII digits are not part of the lexicon
        assert_eq!(digit_to_word('٣'), "٣");
    }

    #[test]
    fn test_spell_digits_with_dots() {
        assert_eq!(spell_digits_with_dots("555"), "five. five. five.");
        assert_eq!(spell_digits_with_dots("123"), "one. two. three.");
    }

    #[test]
    fn test_spell_digits() {
        assert_eq!(spell_digits("45", "-"), "four-five");
        assert_eq!(spell_digits("25", " "), "two five");
    }

    #[test]
    fn test_two_digit_read() {
        assert_eq!(two_digit_read("00"), "zero");
        assert_eq!(two_digit_read("05"), "five");
        assert_eq!(two_digit_read("15"), "fifteen");
        assert_eq!(two_digit_read("21"), "twenty-one");
        assert_eq!(two_digit_read("40"), "forty");
        assert_eq!(two_digit_read("99"), "ninety-nine");
    }

    #[test]
    fn test_two_digit_read_passes_through_garbage() {
        assert_eq!(two_digit_read("ab"), "ab");
        assert_eq!(two_digit_read("123"), "123");
    }
}
