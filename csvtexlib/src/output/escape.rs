//! Escaping of LaTeX special characters.

/// Escape text for use inside a LaTeX table cell or caption.
///
/// The ten characters with special meaning in text mode are replaced; the
/// word-style replacements keep a trailing space so that following letters
/// are not swallowed into the control sequence name.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\textbackslash "),
            '~' => escaped.push_str("\\textasciitilde "),
            '^' => escaped.push_str("\\textasciicircum "),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_latex("render done"), "render done");
        assert_eq!(escape_latex(""), "");
    }

    #[test]
    fn test_prefixed_characters() {
        assert_eq!(escape_latex("a_b"), "a\\_b");
        assert_eq!(escape_latex("50%"), "50\\%");
        assert_eq!(escape_latex("R&D"), "R\\&D");
        assert_eq!(escape_latex("$x$"), "\\$x\\$");
        assert_eq!(escape_latex("#1"), "\\#1");
        assert_eq!(escape_latex("{}"), "\\{\\}");
    }

    #[test]
    fn test_word_replacements() {
        assert_eq!(escape_latex("a\\b"), "a\\textbackslash b");
        assert_eq!(escape_latex("~"), "\\textasciitilde ");
        assert_eq!(escape_latex("x^2"), "x\\textasciicircum 2");
    }

    #[test]
    fn test_non_ascii_passthrough() {
        assert_eq!(escape_latex("función"), "función");
    }
}
