use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}_\s\-\.]").expect("valid character filter"));
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Cleans extracted text for analysis.
///
/// Every character other than letters, numbers, `_`, whitespace, `-` and `.`
/// becomes a space (combining marks and joiners included), whitespace runs (newlines included) collapse to a single
/// space, and the result is trimmed.
pub fn normalize(text: &str) -> String {
    let filtered = DISALLOWED_CHARS.replace_all(text, " ");
    let collapsed = WHITESPACE_RUNS.replace_all(&filtered, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_clean(output: &str) {
        assert!(output
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c.is_whitespace() || c == '-' || c == '.'));
        assert!(!output.contains("  "));
        assert_eq!(output, output.trim());
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(
            normalize("Jane Doe | jane@example.com | (555) 010-1234"),
            "Jane Doe jane example.com 555 010-1234"
        );
    }

    #[test]
    fn test_normalize_collapses_newlines() {
        assert_eq!(normalize("  Experience\n\n\tSenior Engineer, 5+ yrs  "), "Experience Senior Engineer 5 yrs");
    }

    #[test]
    fn test_normalize_keeps_unicode_letters() {
        assert_eq!(normalize("Zürich • Café_Team"), "Zürich Café_Team");
    }

    #[test]
    fn test_normalize_marks_and_numbers() {
        assert_eq!(normalize("Cafe\u{301}"), "Cafe");
        assert_eq!(normalize("a\u{200d}b"), "a b");
        assert_eq!(normalize("x\u{203f}y"), "x y");
        assert_eq!(normalize("5\u{b2} skills"), "5\u{b2} skills");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_output_properties() {
        let samples = [
            "C++/C# — Node.js & React; 10+ years!!",
            "Skills:\r\n  * Rust\n  * Go\u{00a0}\u{00a0}(async)",
            "e-mail: a_b@c.d\t\t\tphone: +1 (555) 123",
            "already clean text",
            "Cafe\u{301} a\u{200d}b x\u{203f}y",
            "5\u{b2} skills \u{2167} \u{2013} done",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_clean(&once);
            assert_eq!(normalize(&once), once);
        }
    }
}
