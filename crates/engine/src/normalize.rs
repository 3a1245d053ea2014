/// Normalize text before embedding
///
/// Lowercases the input and strips every character that is not a lowercase
/// ASCII letter or whitespace. Catalog descriptions and queries go through
/// the same transform so the embedding model sees a consistent lexical
/// surface form.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("Grinning Face"), "grinning face");
    }

    #[test]
    fn test_strips_digits_and_punctuation() {
        assert_eq!(normalize("face_with_tears-of-joy: 100%"), "facewithtearsofjoy ");
        assert_eq!(normalize("123"), "");
        assert_eq!(normalize("!?.,;"), "");
    }

    #[test]
    fn test_strips_non_ascii() {
        assert_eq!(normalize("café 😀 naïve"), "caf  nave");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["Hello, World!", "ALL CAPS 42", "déjà vu", "  spaced  out  "];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_charset_invariant() {
        let out = normalize("Mixed: ÀБ漢字 abc XYZ 999\t\n");
        assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_whitespace()));
    }
}
