//! Radio-read normalization
//!
//! Rewrites written ad copy into the words a voice actually says on air:
//! - URLs: "www.dextacos.com/menu" → "dextacos-dot-com slash menu"
//! - Money: "$19.99" → "nineteen ninety-nine"
//! - Clock times: "7:05" → "seven oh five", "9:00" → "nine o'clock"
//! - Decimals: "101.5" → "one hundred one point five"
//! - Phone numbers: "555-123-4567" → "five. five. five. one. two. three. four-five. six-seven."
//! - Plain integers up to 9999: "42" → "forty two"
//!
//! Passes run in a fixed order over the whole text, and no pass emits text
//! that it would match again.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::number_words::{
    int_to_words, numeral_to_words, spell_digits, spell_digits_with_dots, two_digit_read,
};

lazy_static! {
    /// Scheme URLs, up to the next whitespace or closing paren
    static ref URL_SCHEME_REGEX: Regex = Regex::new(
        r"(?i)\bhttps?://[^\s)]+"
    ).unwrap();

    /// Bare domains on a known TLD with an optional path
    /// Matches: dextacos.com, www.shop.net/deals, radio.io/a_b
    static ref BARE_DOMAIN_REGEX: Regex = Regex::new(
        r"(?i)\b(?:[a-z0-9-]+\.)+(?:com|net|org|io|co|biz|info|edu)\b(?:/[^\s)]*)?"
    ).unwrap();

    static ref SCHEME_PREFIX_REGEX: Regex = Regex::new(r"(?i)^https?://").unwrap();

    static ref WWW_PREFIX_REGEX: Regex = Regex::new(r"(?i)^www\.").unwrap();

    /// Dollar amounts with optional two-digit cents
    /// Matches: $5, $19.99, $1200
    static ref MONEY_REGEX: Regex = Regex::new(
        r"\$([0-9]+)(?:\.([0-9]{2}))?\b"
    ).unwrap();

    /// Clock times
    /// Matches: 7:05, 10:45, 9:00
    static ref CLOCK_TIME_REGEX: Regex = Regex::new(
        r"\b([0-9]{1,2}):([0-9]{2})\b"
    ).unwrap();

    /// Decimals and station frequencies
    /// Matches: 101.5, 3.14
    static ref DECIMAL_REGEX: Regex = Regex::new(
        r"\b([0-9]+)\.([0-9]+)\b"
    ).unwrap();

    /// US phone numbers; area code is group 1 (parenthesized) or group 2
    /// Matches: 555-123-4567, (555) 123-4567, 555.123.4567, 5551234567
    /// Also matches a bare 123-4567, which is left alone
    /// Inside `normalize` the decimal pass claims "555.123" first, so only
    /// `read_phone_numbers` on its own reads a dotted number as a phone
    static ref PHONE_REGEX: Regex = Regex::new(
        r"(?:\(([0-9]{3})\)[-.\s]?|\b([0-9]{3})[-.\s]?|\b)([0-9]{3})[-.\s]?([0-9]{4})\b"
    ).unwrap();

    /// Any remaining run of digits
    static ref INTEGER_REGEX: Regex = Regex::new(r"\b[0-9]+\b").unwrap();
}

/// A single find-and-replace sweep over the working text
pub type Pass = fn(&str) -> String;

/// All passes in the order they must run
///
/// URLs first so domain dots never look like decimals, money before clock
/// times and decimals so "$19.99" keeps its cents, and bare integers last so
/// they only see digits nobody else claimed.
pub const PASSES: [(&str, Pass); 6] = [
    ("url", read_urls),
    ("money", read_money),
    ("clock_time", read_clock_times),
    ("decimal", read_decimals),
    ("phone", read_phone_numbers),
    ("integer", read_integers),
];

/// Main entry point: rewrite text for a radio read
///
/// Total over any input. Empty text comes back empty, and text with
/// nothing to read out comes back unchanged.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = text.to_string();

    for (name, pass) in PASSES {
        let next = pass(&result);
        if next != result {
            tracing::trace!(pass = name, "radio read pass rewrote text");
        }
        result = next;
    }

    result
}

/// Speak URLs and bare domains
///
/// Examples:
/// - "https://www.example.com/summer_sale" → "example-dot-com slash summer-sale"
/// - "example.com" → "example-dot-com"
pub fn read_urls(text: &str) -> String {
    let result = URL_SCHEME_REGEX
        .replace_all(text, |caps: &Captures| speak_url_token(&caps[0]))
        .to_string();

    BARE_DOMAIN_REGEX
        .replace_all(&result, |caps: &Captures| speak_url_token(&caps[0]))
        .to_string()
}

/// Speak a matched URL, leaving sentence punctuation glued to its end alone
fn speak_url_token(token: &str) -> String {
    let url = token.trim_end_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | ';' | ':'));
    let trailing = &token[url.len()..];

    format!("{}{}", url_to_spoken(url), trailing)
}

/// Convert a URL to its spoken form
///
/// Drops the scheme and a leading "www.", reads every dot as "-dot-",
/// turns underscores in the path into hyphens and reads path separators as
/// " slash ".
pub fn url_to_spoken(url: &str) -> String {
    let without_scheme = SCHEME_PREFIX_REGEX.replace(url, "");
    let bare = WWW_PREFIX_REGEX.replace(&without_scheme, "");

    let mut parts = bare.split('/');
    let host = parts.next().unwrap_or_default().replace('.', "-dot-");

    let path: Vec<String> = parts
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.replace('.', "-dot-").replace('_', "-"))
        .collect();

    if path.is_empty() {
        host
    } else {
        format!("{} slash {}", host, path.join(" slash "))
    }
}

/// Speak dollar amounts
///
/// Examples:
/// - "$19.99" → "nineteen ninety-nine"
/// - "$5" → "five"
/// - "$12000" → "12000" (too large to read out, left as the numeral)
pub fn read_money(text: &str) -> String {
    MONEY_REGEX
        .replace_all(text, |caps: &Captures| {
            let dollars = numeral_to_words(&caps[1]);

            match caps.get(2) {
                Some(cents) => format!("{} {}", dollars, two_digit_read(cents.as_str())),
                None => dollars,
            }
        })
        .to_string()
}

/// Speak clock times
///
/// Examples:
/// - "9:00" → "nine o'clock"
/// - "7:05" → "seven oh five"
/// - "10:45" → "ten-forty-five"
pub fn read_clock_times(text: &str) -> String {
    CLOCK_TIME_REGEX
        .replace_all(text, |caps: &Captures| {
            let (hour, minute) = match (caps[1].parse::<u64>(), caps[2].parse::<u64>()) {
                (Ok(h), Ok(m)) => (h, m),
                _ => return caps[0].to_string(),
            };

            let hour_words = int_to_words(hour);

            if &caps[2] == "00" {
                format!("{} o'clock", hour_words)
            } else if minute < 10 {
                format!("{} oh {}", hour_words, int_to_words(minute))
            } else {
                format!("{}-{}", hour_words, int_to_words(minute).replace(' ', "-"))
            }
        })
        .to_string()
}

/// Speak decimals digit by digit after the point
///
/// Examples:
/// - "101.5" → "one hundred one point five"
/// - "3.14" → "three point one four"
pub fn read_decimals(text: &str) -> String {
    DECIMAL_REGEX
        .replace_all(text, |caps: &Captures| {
            format!(
                "{} point {}",
                numeral_to_words(&caps[1]),
                spell_digits(&caps[2], " ")
            )
        })
        .to_string()
}

/// Speak phone numbers that carry an area code
///
/// Area code and prefix are spelled digit by digit with dots; the line
/// number is read as two hyphenated pairs.
///
/// Example: "555-123-4567" → "five. five. five. one. two. three. four-five. six-seven."
pub fn read_phone_numbers(text: &str) -> String {
    PHONE_REGEX
        .replace_all(text, |caps: &Captures| {
            let area = match caps.get(1).or_else(|| caps.get(2)) {
                Some(area) => area.as_str(),
                None => return caps[0].to_string(),
            };

            phone_to_spoken(area, &caps[3], &caps[4])
        })
        .to_string()
}

fn phone_to_spoken(area: &str, prefix: &str, line: &str) -> String {
    let (first_pair, second_pair) = line.split_at(2);

    format!(
        "{} {} {}. {}.",
        spell_digits_with_dots(area),
        spell_digits_with_dots(prefix),
        spell_digits(first_pair, "-"),
        spell_digits(second_pair, "-")
    )
}

/// Speak whatever integers are left
///
/// Examples:
/// - "42" → "forty two"
/// - "123456" → "123456" (out of range, untouched)
pub fn read_integers(text: &str) -> String {
    INTEGER_REGEX
        .replace_all(text, |caps: &Captures| numeral_to_words(&caps[0]))
        .to_string()
}
