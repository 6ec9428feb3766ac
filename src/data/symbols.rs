//! Greek letter table
//!
//! Maps spelled-out Greek letter names to LaTeX. Keys are case-sensitive.
//! Capitals without a distinct glyph in LaTeX map to the matching Latin
//! letter, and lowercase omicron maps to a plain `o`.

use phf::phf_map;

/// Spelled-out Greek name -> LaTeX replacement token
pub static GREEK_LETTERS: phf::Map<&'static str, &'static str> = phf_map! {
    // Lowercase
    "alpha" => "\\alpha",
    "beta" => "\\beta",
    "gamma" => "\\gamma",
    "delta" => "\\delta",
    "epsilon" => "\\epsilon",
    "zeta" => "\\zeta",
    "eta" => "\\eta",
    "theta" => "\\theta",
    "iota" => "\\iota",
    "kappa" => "\\kappa",
    "lambda" => "\\lambda",
    "mu" => "\\mu",
    "nu" => "\\nu",
    "xi" => "\\xi",
    "omicron" => "o",
    "pi" => "\\pi",
    "rho" => "\\rho",
    "sigma" => "\\sigma",
    "tau" => "\\tau",
    "upsilon" => "\\upsilon",
    "phi" => "\\phi",
    "chi" => "\\chi",
    "psi" => "\\psi",
    "omega" => "\\omega",

    // Uppercase
    "Alpha" => "A",
    "Beta" => "B",
    "Gamma" => "\\Gamma",
    "Delta" => "\\Delta",
    "Epsilon" => "E",
    "Zeta" => "Z",
    "Eta" => "H",
    "Theta" => "\\Theta",
    "Iota" => "I",
    "Kappa" => "K",
    "Lambda" => "\\Lambda",
    "Mu" => "M",
    "Nu" => "N",
    "Xi" => "\\Xi",
    "Omicron" => "O",
    "Pi" => "\\Pi",
    "Rho" => "P",
    "Sigma" => "\\Sigma",
    "Tau" => "T",
    "Upsilon" => "\\Upsilon",
    "Phi" => "\\Phi",
    "Chi" => "X",
    "Psi" => "\\Psi",
    "Omega" => "\\Omega",
};

/// Look up the replacement for a spelled-out Greek name (exact match only).
pub fn greek_replacement(name: &str) -> Option<&'static str> {
    GREEK_LETTERS.get(name).copied()
}

/// All table keys, longest first, ties broken alphabetically.
///
/// Used to build a single alternation pattern with a stable order.
pub fn greek_names_longest_first() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = GREEK_LETTERS.keys().copied().collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_both_cases() {
        assert_eq!(GREEK_LETTERS.len(), 48);
        assert_eq!(greek_replacement("alpha"), Some("\\alpha"));
        assert_eq!(greek_replacement("Gamma"), Some("\\Gamma"));
    }

    #[test]
    fn test_irregular_capitals_use_latin_letters() {
        assert_eq!(greek_replacement("Alpha"), Some("A"));
        assert_eq!(greek_replacement("Eta"), Some("H"));
        assert_eq!(greek_replacement("Rho"), Some("P"));
        assert_eq!(greek_replacement("Chi"), Some("X"));
    }

    #[test]
    fn test_omicron_is_plain_letter() {
        assert_eq!(greek_replacement("omicron"), Some("o"));
        assert_eq!(greek_replacement("Omicron"), Some("O"));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(greek_replacement("ALPHA"), None);
        assert_eq!(greek_replacement("alphabet"), None);
        assert_eq!(greek_replacement("alp"), None);
    }

    #[test]
    fn test_longest_first_order() {
        let names = greek_names_longest_first();
        assert_eq!(names.len(), GREEK_LETTERS.len());
        assert!(names
            .windows(2)
            .all(|w| w[0].len() >= w[1].len()));
        assert_eq!(names.last().map(|n| n.len()), Some(2));
    }
}
