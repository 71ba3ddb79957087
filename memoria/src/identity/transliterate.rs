//! Greek to Latin transliteration and search-key folding.
//!
//! `transliterate` is the fixed character table used for record identifiers.
//! `search_key` is the looser form used for case-insensitive lookups: it also
//! drops combining marks from any script before transliterating.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Look up the ASCII replacement for a single character.
///
/// Returns `None` for characters outside the table, which pass through as-is.
fn latin_for(c: char) -> Option<&'static str> {
    let latin = match c {
        // Accented vowels
        'ά' => "a",
        'Ά' => "A",
        'έ' => "e",
        'Έ' => "E",
        'ή' => "i",
        'Ή' => "I",
        'ί' | 'ϊ' | 'ΐ' => "i",
        'Ί' | 'Ϊ' => "I",
        'ό' => "o",
        'Ό' => "O",
        'ύ' | 'ϋ' | 'ΰ' => "y",
        'Ύ' | 'Ϋ' => "Y",
        'ώ' => "o",
        'Ώ' => "O",

        'α' => "a",
        'Α' => "A",
        'β' => "b",
        'Β' => "B",
        'γ' => "g",
        'Γ' => "G",
        'δ' => "d",
        'Δ' => "D",
        'ε' => "e",
        'Ε' => "E",
        'ζ' => "z",
        'Ζ' => "Z",
        'η' => "i",
        'Η' => "I",
        'θ' => "th",
        'Θ' => "Th",
        'ι' => "i",
        'Ι' => "I",
        'κ' => "k",
        'Κ' => "K",
        'λ' => "l",
        'Λ' => "L",
        'μ' => "m",
        'Μ' => "M",
        'ν' => "n",
        'Ν' => "N",
        'ξ' => "x",
        'Ξ' => "X",
        'ο' => "o",
        'Ο' => "O",
        'π' => "p",
        'Π' => "P",
        'ρ' => "r",
        'Ρ' => "R",
        'σ' | 'ς' => "s",
        'Σ' => "S",
        'τ' => "t",
        'Τ' => "T",
        'υ' => "y",
        'Υ' => "Y",
        'φ' => "f",
        'Φ' => "F",
        'χ' => "ch",
        'Χ' => "Ch",
        'ψ' => "ps",
        'Ψ' => "Ps",
        'ω' => "o",
        'Ω' => "O",
        _ => return None,
    };
    Some(latin)
}

/// Transliterate Greek letters to their ASCII form.
///
/// Every replacement is plain ASCII and ASCII is never in the table, so the
/// function is idempotent and never shortens its input (counted in chars).
/// Case follows the source letter.
///
/// # Examples
///
/// ```
/// use memoria::identity::transliterate;
///
/// assert_eq!(transliterate("Αθήνα"), "Athina");
/// assert_eq!(transliterate("Ψαρά 12"), "Psara 12");
/// ```
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match latin_for(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

/// Strip diacritics from any script and normalize final sigma.
///
/// "Καραγιώργης" becomes "Καραγιωργησ"; "Café" becomes "Cafe".
pub fn fold_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Case-insensitive lookup key: folded, transliterated, lowercased.
pub fn search_key(text: &str) -> String {
    transliterate(&fold_diacritics(text)).to_lowercase()
}

/// Slug form used in identifiers: transliterated, lowercased, no whitespace.
pub fn slug(text: &str) -> String {
    transliterate(text)
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_transliterate_greek_name() {
        assert_eq!(transliterate("Παπαδόπουλος"), "Papadopoylos");
        assert_eq!(transliterate("Αθήνα"), "Athina");
    }

    #[test]
    fn test_digraphs_keep_case() {
        assert_eq!(transliterate("Θεσσαλονίκη"), "Thessaloniki");
        assert_eq!(transliterate("Χανιά"), "Chania");
        assert_eq!(transliterate("ψυχή"), "psychi");
        assert_eq!(transliterate("ΨΑΡΑ"), "PsARA");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(transliterate(""), "");
        assert_eq!(transliterate("Ünal-O'Brien 3"), "Ünal-O'Brien 3");
        assert_eq!(transliterate("Иван"), "Иван");
    }

    #[test]
    fn test_dialytika_vowels() {
        assert_eq!(transliterate("Ϊ ϋ ΐ ΰ"), "I y i y");
    }

    #[test]
    fn test_fold_diacritics() {
        assert_eq!(fold_diacritics("Καραγιώργης"), "Καραγιωργησ");
        assert_eq!(fold_diacritics("  Café "), "Cafe");
    }

    #[test]
    fn test_search_key_matches_across_scripts() {
        assert_eq!(search_key("Παπαδόπουλος"), "papadopoylos");
        assert_eq!(search_key("ΠΑΠΑΔΌΠΟΥΛΟΣ"), "papadopoylos");
        assert_eq!(search_key("PAPADOPOULOS"), "papadopoulos");
        assert_eq!(search_key("Ηράκλειο"), search_key("ΗΡΑΚΛΕΙΟ"));
    }

    #[test]
    fn test_slug_strips_whitespace() {
        assert_eq!(slug("Νέα Σμύρνη"), "neasmyrni");
        assert_eq!(slug(" Agios\tNikolaos "), "agiosnikolaos");
    }

    proptest! {
        #[test]
        fn ascii_is_unchanged(s in "[\\x00-\\x7F]{0,64}") {
            prop_assert_eq!(transliterate(&s), s);
        }

        #[test]
        fn transliterate_is_idempotent(s in "\\PC{0,64}") {
            let once = transliterate(&s);
            prop_assert_eq!(transliterate(&once), once.clone());
        }

        #[test]
        fn greek_text_is_idempotent(s in "[α-ωΑ-Ωάέήίόύώϊϋΐΰ ]{0,32}") {
            let once = transliterate(&s);
            prop_assert_eq!(transliterate(&once), once.clone());
        }

        #[test]
        fn output_never_shrinks(s in "\\PC{0,64}") {
            prop_assert!(transliterate(&s).chars().count() >= s.chars().count());
        }
    }
}
