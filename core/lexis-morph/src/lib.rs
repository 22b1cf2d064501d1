//! Accent stripping for accent-insensitive lookup.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strips accents, breathings, diaeresis and iota subscripts, leaving the bare
/// letters. Case is kept.
///
/// Works on the canonical decomposition, so precomposed polytonic letters
/// (ἄ, ᾷ, ῥ, ...) and sequences already written with combining marks give the
/// same result.
pub fn deaccent(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c) && !is_spacing_diacritic(*c))
        .collect()
}

/// Standalone (spacing) Greek diacritics such as the tonos and the psili
/// sign, which have no combining decomposition of their own.
fn is_spacing_diacritic(c: char) -> bool {
    matches!(
        c,
        '\u{00A8}'
            | '\u{00B4}'
            | '\u{0384}'
            | '\u{0385}'
            | '\u{1FBD}'
            | '\u{1FBF}'..='\u{1FC1}'
            | '\u{1FCD}'..='\u{1FCF}'
            | '\u{1FDD}'..='\u{1FDF}'
            | '\u{1FED}'..='\u{1FEF}'
            | '\u{1FFD}'..='\u{1FFE}'
    )
}
