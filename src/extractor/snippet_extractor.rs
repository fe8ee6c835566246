use regex::Regex;

/// Extracts embedded code snippets from test file text.
///
/// Recognizes the three call forms the interpreter test suite uses to embed
/// source code: `eval("…")`, `eval_result("…")` and `throws_error("…", …)`
/// (first argument only), plus the multi-line raw-string variant of each,
/// `eval(r#"…"#)` and friends. Quoted captures are unescaped; raw-string
/// captures are taken verbatim.
pub struct SnippetExtractor {
    quoted_patterns: Vec<Regex>,
    raw_patterns: Vec<Regex>,
}

impl SnippetExtractor {
    pub fn new() -> Self {
        // The `(?:[^"\\]|\\.)*` group skips any character that follows a
        // backslash, so an escaped quote never terminates the capture.
        let quoted_patterns = vec![
            compile(r#"eval\("((?:[^"\\]|\\.)*)"\)"#),
            compile(r#"eval_result\("((?:[^"\\]|\\.)*)"\)"#),
            compile(r#"throws_error\("((?:[^"\\]|\\.)*)"\s*,"#),
        ];

        // Dot-all so raw-string snippets may span multiple lines.
        let raw_patterns = vec![
            compile(r##"(?s)eval\(r#"(.*?)"#\)"##),
            compile(r##"(?s)eval_result\(r#"(.*?)"#\)"##),
            compile(r##"(?s)throws_error\(r#"(.*?)"#\s*,"##),
        ];

        Self {
            quoted_patterns,
            raw_patterns,
        }
    }

    /// Returns every embedded snippet in `content`, pattern by pattern, in
    /// the order occurrences appear within each pattern's scan of the text.
    pub fn extract(&self, content: &str) -> Vec<String> {
        let mut snippets = Vec::new();

        for pattern in &self.quoted_patterns {
            for capture in pattern.captures_iter(content) {
                snippets.push(unescape(&capture[1]));
            }
        }

        for pattern in &self.raw_patterns {
            for capture in pattern.captures_iter(content) {
                snippets.push(capture[1].to_string());
            }
        }

        snippets
    }
}

impl Default for SnippetExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hard-coded snippet pattern must compile")
}

/// Resolves the escape sequences a quoted capture may contain.
///
/// The substitution order is a contract: quote, n, t and r each consume
/// their own leading backslash, and the backslash rewrite runs last so it
/// cannot touch the input of the earlier rewrites. Changing the order
/// double-consumes characters in sequences like `\\n`.
pub fn unescape(raw: &str) -> String {
    raw.replace("\\\"", "\"")
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
        .replace("\\\\", "\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_all_three_quoted_forms_in_order() {
        let content = r#"
            eval("1 + 1");
            eval_result("2");
            throws_error("bad", "TypeError");
        "#;

        let extractor = SnippetExtractor::new();
        let snippets = extractor.extract(content);

        assert_eq!(snippets, vec!["1 + 1", "2", "bad"]);
    }

    #[test]
    fn test_throws_error_takes_first_argument_only() {
        let content = r#"throws_error("let x: number = \"s\";", "Type 'string' is not assignable");"#;

        let snippets = SnippetExtractor::new().extract(content);

        assert_eq!(snippets, vec![r#"let x: number = "s";"#]);
    }

    #[test]
    fn test_escaped_quote_does_not_terminate_capture() {
        let content = r#"eval("console.log(\"hello\")")"#;

        let snippets = SnippetExtractor::new().extract(content);

        assert_eq!(snippets, vec![r#"console.log("hello")"#]);
    }

    #[test]
    fn test_quoted_escape_sequences_are_resolved() {
        let content = r#"eval("line1\nline2\tend\r")"#;

        let snippets = SnippetExtractor::new().extract(content);

        assert_eq!(snippets, vec!["line1\nline2\tend\r"]);
    }

    #[test]
    fn test_raw_string_spans_multiple_lines_verbatim() {
        let content = "eval(r#\"let s = \"one\";\nlet t = \"two\";\nconsole.log(s + \"\\n\" + t);\"#)";

        let snippets = SnippetExtractor::new().extract(content);

        assert_eq!(snippets.len(), 1);
        // Three lines, embedded quotes, and the literal backslash-n all
        // survive untouched.
        assert_eq!(
            snippets[0],
            "let s = \"one\";\nlet t = \"two\";\nconsole.log(s + \"\\n\" + t);"
        );
        assert_eq!(snippets[0].lines().count(), 3);
    }

    #[test]
    fn test_raw_string_variants_of_all_three_forms() {
        let content = "eval(r#\"a\"#); eval_result(r#\"b\"#); throws_error(r#\"c\"#, \"Err\");";

        let snippets = SnippetExtractor::new().extract(content);

        assert_eq!(snippets, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_all_occurrences_of_a_pattern_before_the_next_pattern() {
        let content = r#"
            eval("first");
            eval_result("third");
            eval("second");
        "#;

        let snippets = SnippetExtractor::new().extract(content);

        assert_eq!(snippets, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_no_matches_yields_empty_list() {
        let snippets = SnippetExtractor::new().extract("fn main() {}");
        assert!(snippets.is_empty());
    }

    #[test]
    fn test_unescape_backslash_runs_last() {
        // Source form `\\\"` is an escaped backslash then an escaped quote;
        // each rewrite consumes exactly one backslash, leaving `\"`.
        assert_eq!(unescape(r#"\\\""#), "\\\"");
        // Source form `\\n` keeps its backslash and gains a newline, the
        // behavior the ordering contract pins down.
        assert_eq!(unescape(r"a\\nb"), "a\\\nb");
    }

    #[test]
    fn test_unescape_idempotent_on_ordering_sensitive_outputs() {
        for input in [r"a\\nb", r"x\\ty", r"p\\rq", r"plain\nnewline", r"tab\there"] {
            let once = unescape(input);
            let twice = unescape(&once);
            assert_eq!(once, twice, "re-applying unescape must not change {:?}", input);
        }
    }
}
