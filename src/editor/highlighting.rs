//! Per-row token classification.
//!
//! The classifier is a pure function of the row text, the tab size, and
//! the starting screen column: it performs no I/O and knows nothing about
//! the terminal. The paint step consumes the span list and picks colors.
//!
//! State is local to one row. An unterminated string or comment does not
//! continue onto the next row; this single-row scope is intentional and
//! must be preserved.

/// Syntax classification of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Type,
    String,
    Comment,
    Number,
    Plain,
}

/// A contiguous run of row text sharing one classification.
///
/// Tabs are already expanded to blank cells, so the span text maps 1:1
/// onto screen cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: TokenKind,
}

/// Fixed keyword set (closed, case-sensitive, whole-word)
const KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "switch", "case", "default", "break", "continue", "return",
    "goto", "do", "sizeof", "typedef", "static", "const", "volatile", "inline", "struct", "class",
    "public", "private", "protected", "virtual", "override", "template", "typename", "using",
    "namespace", "enum", "union", "new", "delete", "this", "operator", "try", "catch", "throw",
];

/// Fixed type-name set (closed, case-sensitive, whole-word)
const TYPES: &[&str] = &[
    "int", "long", "short", "char", "float", "double", "void", "bool", "unsigned", "signed",
    "auto", "std", "string", "size_t",
];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

fn is_type_name(word: &str) -> bool {
    TYPES.contains(&word)
}

/// Span accumulator that merges adjacent bytes of the same kind.
struct SpanBuilder {
    spans: Vec<Span>,
    buf: Vec<u8>,
    kind: TokenKind,
}

impl SpanBuilder {
    fn new() -> Self {
        Self {
            spans: Vec::new(),
            buf: Vec::new(),
            kind: TokenKind::Plain,
        }
    }

    fn push(&mut self, kind: TokenKind, bytes: &[u8]) {
        if kind != self.kind && !self.buf.is_empty() {
            self.flush();
        }
        self.kind = kind;
        self.buf.extend_from_slice(bytes);
    }

    fn flush(&mut self) {
        if !self.buf.is_empty() {
            self.spans.push(Span {
                text: String::from_utf8_lossy(&self.buf).into_owned(),
                kind: self.kind,
            });
            self.buf.clear();
        }
    }

    fn finish(mut self) -> Vec<Span> {
        self.flush();
        self.spans
    }
}

/// Classify one row into syntax spans.
///
/// `start_col` is the screen column of the row's first cell and anchors
/// tab-stop arithmetic. Transition rules, checked in order at each byte:
/// `//` outside a string starts a comment consuming the rest of the row;
/// an unescaped quote toggles string state; a digit starts a number run
/// (digits plus one embedded `.`); an alphabetic or underscore byte
/// starts an identifier run classified against the keyword and type
/// sets; a tab expands to blank cells up to the next tab stop; anything
/// else is a single plain cell.
pub fn highlight_line(text: &str, tab_size: usize, start_col: usize) -> Vec<Span> {
    let bytes = text.as_bytes();
    let mut out = SpanBuilder::new();
    let mut col = start_col;
    let mut x = 0;

    while x < bytes.len() {
        let b = bytes[x];

        // Line comment: consumes the remainder of the row
        if b == b'/' && x + 1 < bytes.len() && bytes[x + 1] == b'/' {
            out.push(TokenKind::Comment, &bytes[x..]);
            break;
        }

        // String literal, delimiter included on both ends
        if b == b'"' || b == b'\'' {
            let delim = b;
            let start = x;
            x += 1;
            while x < bytes.len() {
                // Closing delimiter must not be preceded by a backslash
                if bytes[x] == delim && bytes[x - 1] != b'\\' {
                    x += 1;
                    break;
                }
                x += 1;
            }
            out.push(TokenKind::String, &bytes[start..x]);
            col += x - start;
            continue;
        }

        // Number: digits plus a single embedded separator
        if b.is_ascii_digit() {
            let start = x;
            let mut seen_sep = false;
            while x < bytes.len() {
                if bytes[x].is_ascii_digit() {
                    x += 1;
                } else if bytes[x] == b'.' && !seen_sep {
                    seen_sep = true;
                    x += 1;
                } else {
                    break;
                }
            }
            out.push(TokenKind::Number, &bytes[start..x]);
            col += x - start;
            continue;
        }

        // Identifier: classified against the closed keyword/type sets
        if b.is_ascii_alphabetic() || b == b'_' {
            let start = x;
            while x < bytes.len() && (bytes[x].is_ascii_alphanumeric() || bytes[x] == b'_') {
                x += 1;
            }
            let word = &text[start..x];
            let kind = if is_keyword(word) {
                TokenKind::Keyword
            } else if is_type_name(word) {
                TokenKind::Type
            } else {
                TokenKind::Plain
            };
            out.push(kind, &bytes[start..x]);
            col += x - start;
            continue;
        }

        // Tab: expand to blank cells up to the next tab stop
        if b == b'\t' {
            let cells = tab_size - (col % tab_size);
            for _ in 0..cells {
                out.push(TokenKind::Plain, b" ");
            }
            col += cells;
            x += 1;
            continue;
        }

        // Single plain cell
        out.push(TokenKind::Plain, &bytes[x..x + 1]);
        col += 1;
        x += 1;
    }

    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(spans: &[Span]) -> Vec<(String, TokenKind)> {
        spans
            .iter()
            .map(|s| (s.text.clone(), s.kind))
            .collect()
    }

    #[test]
    fn test_comment_start_inside_string_is_not_a_comment() {
        let spans = highlight_line("x = \"a//b\";", 4, 0);
        assert_eq!(
            kinds(&spans),
            vec![
                ("x = ".to_string(), TokenKind::Plain),
                ("\"a//b\"".to_string(), TokenKind::String),
                (";".to_string(), TokenKind::Plain),
            ]
        );
    }

    #[test]
    fn test_line_comment_runs_to_end_of_row() {
        let spans = highlight_line("x = a; // comment", 4, 0);
        assert_eq!(
            kinds(&spans),
            vec![
                ("x = a; ".to_string(), TokenKind::Plain),
                ("// comment".to_string(), TokenKind::Comment),
            ]
        );
    }

    #[test]
    fn test_keywords_and_types() {
        let spans = highlight_line("if (x) return 0;", 4, 0);
        assert_eq!(spans[0], span("if", TokenKind::Keyword));
        assert!(spans.contains(&span("return", TokenKind::Keyword)));
        assert!(spans.contains(&span("0", TokenKind::Number)));

        let spans = highlight_line("int x = 42;", 4, 0);
        assert_eq!(spans[0], span("int", TokenKind::Type));
    }

    #[test]
    fn test_whole_word_matching() {
        // "iffy" contains "if" but is not a keyword
        let spans = highlight_line("iffy", 4, 0);
        assert_eq!(kinds(&spans), vec![("iffy".to_string(), TokenKind::Plain)]);
    }

    #[test]
    fn test_escaped_quote_stays_inside_string() {
        let spans = highlight_line(r#""a\"b""#, 4, 0);
        assert_eq!(
            kinds(&spans),
            vec![(r#""a\"b""#.to_string(), TokenKind::String)]
        );
    }

    #[test]
    fn test_unterminated_string_stops_at_row_end() {
        let spans = highlight_line("\"open", 4, 0);
        assert_eq!(
            kinds(&spans),
            vec![("\"open".to_string(), TokenKind::String)]
        );
    }

    #[test]
    fn test_single_quoted_string() {
        let spans = highlight_line("'c' x", 4, 0);
        assert_eq!(spans[0], span("'c'", TokenKind::String));
    }

    #[test]
    fn test_number_with_single_separator() {
        let spans = highlight_line("3.14", 4, 0);
        assert_eq!(kinds(&spans), vec![("3.14".to_string(), TokenKind::Number)]);

        // A second separator ends the number
        let spans = highlight_line("1.2.3", 4, 0);
        assert_eq!(
            kinds(&spans),
            vec![
                ("1.2".to_string(), TokenKind::Number),
                (".".to_string(), TokenKind::Plain),
                ("3".to_string(), TokenKind::Number),
            ]
        );
    }

    #[test]
    fn test_tab_expands_to_next_stop() {
        // At column 0 a tab is a full stop
        let spans = highlight_line("\tif", 4, 0);
        assert_eq!(
            kinds(&spans),
            vec![
                ("    ".to_string(), TokenKind::Plain),
                ("if".to_string(), TokenKind::Keyword),
            ]
        );

        // The starting screen column anchors the stop arithmetic
        let spans = highlight_line("\t", 4, 2);
        assert_eq!(kinds(&spans), vec![("  ".to_string(), TokenKind::Plain)]);
    }

    #[test]
    fn test_empty_row_yields_no_spans() {
        assert!(highlight_line("", 4, 0).is_empty());
    }

    #[test]
    fn test_expanded_cells_cover_the_row() {
        // Span text lengths add up to the expanded width of the row
        let spans = highlight_line("a\tb = \"x\"; // done", 4, 0);
        let cells: usize = spans.iter().map(|s| s.text.len()).sum();
        // a(1) tab(3) b(1) sp(1) =(1) sp(1) "x"(3) ;(1) sp(1) comment(7)
        assert_eq!(cells, 20);
    }

    fn span(text: &str, kind: TokenKind) -> Span {
        Span {
            text: text.to_string(),
            kind,
        }
    }
}
