//! Key-sequence lexer.
//!
//! Turns a typed line such as `3+4×2=` or `25 sqrt` into the keys a user
//! would have pressed. Canonical symbols and their ASCII aliases are
//! matched longest-first, so `x^2` is one key and `x` alone is `×`.
//!
//! A spelling that ends in a letter only counts at a word boundary, and an
//! unknown word is only cut short by a digit or a non-letter key, so `ten`
//! is one unknown key rather than `t`, `e`, `n`.

use std::cmp::Reverse;

use crate::domain::OperationTable;

/// Spellings of the reset control.
pub const CLEAR_SPELLINGS: &[&str] = &["AC", "C", "clear"];

/// One key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A run of digit and `.` presses.
    Digits(String),
    /// A known key, already resolved to its canonical symbol.
    Symbol(&'static str),
    /// The reset control.
    Clear,
    /// Text that names no key.
    Unknown(String),
}

/// Lex `input` against the standard key set.
pub fn lex(input: &str) -> Vec<Key> {
    lex_with(input, OperationTable::standard())
}

fn lex_with(input: &str, table: &'static OperationTable) -> Vec<Key> {
    let vocabulary = vocabulary(table);
    let mut keys = Vec::new();
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        if ch.is_whitespace() {
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        // Spellings first: `10ˣ` and `10^x` start with digits.
        if let Some((spelling, key)) = match_spelling(&vocabulary, rest) {
            keys.push(key.clone());
            rest = &rest[spelling.len()..];
            continue;
        }

        if is_digit_key(ch) {
            let end = rest.find(|c: char| !is_digit_key(c)).unwrap_or(rest.len());
            keys.push(Key::Digits(rest[..end].to_owned()));
            rest = &rest[end..];
            continue;
        }

        let end = unknown_run_end(&vocabulary, rest);
        keys.push(Key::Unknown(rest[..end].to_owned()));
        rest = &rest[end..];
    }

    keys
}

fn is_digit_key(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

/// Every spelling paired with its key, longest first.
fn vocabulary(table: &'static OperationTable) -> Vec<(&'static str, Key)> {
    let mut vocabulary: Vec<(&'static str, Key)> = table
        .entries()
        .iter()
        .flat_map(|entry| {
            std::iter::once(entry.symbol)
                .chain(entry.aliases.iter().copied())
                .map(move |spelling| (spelling, Key::Symbol(entry.symbol)))
        })
        .chain(CLEAR_SPELLINGS.iter().map(|s| (*s, Key::Clear)))
        .collect();

    vocabulary.sort_by_key(|(spelling, _)| Reverse(spelling.len()));
    vocabulary
}

fn match_spelling<'v>(
    vocabulary: &'v [(&'static str, Key)],
    rest: &str,
) -> Option<&'v (&'static str, Key)> {
    vocabulary.iter().find(|(spelling, _)| {
        rest.starts_with(*spelling) && ends_at_word_boundary(spelling, &rest[spelling.len()..])
    })
}

/// `pi` matches in `pi+1` but not in `pie`.
fn ends_at_word_boundary(spelling: &str, after: &str) -> bool {
    let ends_in_letter = spelling.chars().last().is_some_and(char::is_alphabetic);
    !ends_in_letter || !after.chars().next().is_some_and(char::is_alphabetic)
}

/// Unknown text runs until whitespace, a digit, or a key that does not start
/// with a letter.
fn unknown_run_end(vocabulary: &[(&'static str, Key)], rest: &str) -> usize {
    for (index, ch) in rest.char_indices().skip(1) {
        if ch.is_whitespace() || is_digit_key(ch) {
            return index;
        }
        if !ch.is_alphabetic() && match_spelling(vocabulary, &rest[index..]).is_some() {
            return index;
        }
    }
    rest.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Key {
        Key::Digits(s.into())
    }

    #[test]
    fn lexes_compact_expression() {
        assert_eq!(
            lex("3+4×2="),
            vec![
                digits("3"),
                Key::Symbol("+"),
                digits("4"),
                Key::Symbol("×"),
                digits("2"),
                Key::Symbol("="),
            ]
        );
    }

    #[test]
    fn whitespace_separates_keys() {
        assert_eq!(lex("  25   √ "), vec![digits("25"), Key::Symbol("√")]);
    }

    #[test]
    fn aliases_resolve_to_canonical_symbols() {
        assert_eq!(
            lex("2 ^ 10 * 3 / 4 - 1"),
            vec![
                digits("2"),
                Key::Symbol("∧"),
                digits("10"),
                Key::Symbol("×"),
                digits("3"),
                Key::Symbol("÷"),
                digits("4"),
                Key::Symbol("−"),
                digits("1"),
            ]
        );
    }

    #[test]
    fn longest_spelling_wins() {
        assert_eq!(lex("x^2"), vec![Key::Symbol("x²")]);
        assert_eq!(lex("x^-1"), vec![Key::Symbol("x⁻¹")]);
        assert_eq!(lex("e^x"), vec![Key::Symbol("eˣ")]);
        assert_eq!(lex("e"), vec![Key::Symbol("e")]);
        assert_eq!(lex("sin^-1"), vec![Key::Symbol("sin⁻¹")]);
        assert_eq!(lex("sin"), vec![Key::Symbol("sin")]);
        assert_eq!(lex("**"), vec![Key::Symbol("∧")]);
        assert_eq!(lex("3x4"), vec![digits("3"), Key::Symbol("×"), digits("4")]);
    }

    #[test]
    fn digit_led_spellings_beat_digit_runs() {
        assert_eq!(lex("2 10ˣ"), vec![digits("2"), Key::Symbol("10ˣ")]);
        assert_eq!(lex("10^x"), vec![Key::Symbol("10ˣ")]);
        assert_eq!(lex("105"), vec![digits("105")]);
    }

    #[test]
    fn decimal_points_stay_in_digit_runs() {
        assert_eq!(
            lex("1.2.3+.5"),
            vec![digits("1.2.3"), Key::Symbol("+"), digits(".5")]
        );
    }

    #[test]
    fn clear_spellings() {
        assert_eq!(lex("C"), vec![Key::Clear]);
        assert_eq!(lex("AC"), vec![Key::Clear]);
        assert_eq!(lex("clear"), vec![Key::Clear]);
        assert_eq!(lex("cos"), vec![Key::Symbol("cos")]);
    }

    #[test]
    fn unknown_text_stops_at_next_key() {
        assert_eq!(
            lex("3 mod 4"),
            vec![digits("3"), Key::Unknown("mod".into()), digits("4")]
        );
        assert_eq!(
            lex("foo+1"),
            vec![Key::Unknown("foo".into()), Key::Symbol("+"), digits("1")]
        );
    }

    #[test]
    fn words_containing_key_letters_stay_whole() {
        for word in ["ten", "mode", "hex", "exp", "pie", "cleared", "Cosine"] {
            assert_eq!(lex(word), vec![Key::Unknown(word.into())], "{word}");
        }
        assert_eq!(
            lex("4 ten ="),
            vec![digits("4"), Key::Unknown("ten".into()), Key::Symbol("=")]
        );
    }

    #[test]
    fn letter_keys_still_match_at_word_boundaries() {
        assert_eq!(lex("pi+1"), vec![Key::Symbol("π"), Key::Symbol("+"), digits("1")]);
        assert_eq!(lex("e^x"), vec![Key::Symbol("eˣ")]);
        assert_eq!(lex("2x"), vec![digits("2"), Key::Symbol("×")]);
        assert_eq!(lex("sin√"), vec![Key::Symbol("sin"), Key::Symbol("√")]);
    }

    #[test]
    fn unknown_word_ends_at_glyph_key() {
        assert_eq!(
            lex("hex√4"),
            vec![Key::Unknown("hex".into()), Key::Symbol("√"), digits("4")]
        );
    }

    #[test]
    fn empty_input_has_no_keys() {
        assert!(lex("").is_empty());
        assert!(lex("   ").is_empty());
    }
}
