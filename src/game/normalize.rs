//! Canonical form of creature names for guess comparison.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds a name into `[a-z0-9]*` for equality checks. Never used for display.
///
/// Maps the gendered glyphs `♀`/`♂` to `f`/`m`, decomposes to NFKD and
/// drops combining marks so accented letters keep their base letter,
/// lower-cases, then drops everything else outside `[a-z0-9]`.
pub fn normalize_name(s: &str) -> String {
    s.chars()
        .map(substitute)
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

fn substitute(c: char) -> char {
    match c {
        '♀' => 'f',
        '♂' => 'm',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_spaces() {
        assert_eq!(normalize_name("Mr. Mime"), "mrmime");
        assert_eq!(normalize_name("Farfetch'd"), "farfetchd");
        assert_eq!(normalize_name("  Porygon-Z "), "porygonz");
    }

    #[test]
    fn gendered_glyphs_become_letters() {
        assert_eq!(normalize_name("Nidoran♀"), "nidoranf");
        assert_eq!(normalize_name("nidoran♂"), "nidoranm");
        assert_eq!(normalize_name("nidoran-f"), "nidoranf");
    }

    #[test]
    fn accents_fold() {
        assert_eq!(normalize_name("Flabébé"), "flabebe");
        assert_eq!(normalize_name("Ÿ"), "y");
    }
}
