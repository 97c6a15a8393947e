//! Delimiter sniffing and a quote-aware CSV lexer.
//!
//! Pasted statement text arrives in whatever dialect the bank exported, so the
//! delimiter is sniffed from the first non-empty line and the whole text is
//! then lexed by a two-state machine. Quoted fields may contain delimiters and
//! newlines; `""` inside quotes is a literal quote.

use std::iter::Peekable;
use std::str::Chars;

/// One tokenized row of trimmed fields
pub type Row = Vec<String>;

/// Pick `,`, `;` or tab from the first non-empty line.
///
/// Comma wins ties and the all-zero case. Tab must beat both others outright.
pub fn sniff_delimiter(text: &str) -> char {
    let first = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let count = |d: char| first.chars().filter(|&c| c == d).count();
    let (commas, semis, tabs) = (count(','), count(';'), count('\t'));

    if tabs > commas && tabs > semis {
        '\t'
    } else if semis > commas {
        ';'
    } else {
        ','
    }
}

/// Tokenize `text` with a sniffed delimiter.
pub fn tokenize(text: &str) -> Vec<Row> {
    tokenize_with(text, sniff_delimiter(text))
}

/// Tokenize `text` with an explicit delimiter. Rows whose fields are all empty are dropped.
pub fn tokenize_with(text: &str, delimiter: char) -> Vec<Row> {
    let mut lexer = Lexer::new(delimiter);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        lexer.step(c, &mut chars);
    }
    lexer.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Normal,
    InQuotes,
}

struct Lexer {
    delimiter: char,
    state: LexState,
    field: String,
    row: Row,
    rows: Vec<Row>,
}

impl Lexer {
    fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            state: LexState::Normal,
            field: String::new(),
            row: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn step(&mut self, c: char, rest: &mut Peekable<Chars<'_>>) {
        match self.state {
            LexState::InQuotes => match c {
                '"' if rest.peek() == Some(&'"') => {
                    rest.next();
                    self.field.push('"');
                }
                '"' => self.state = LexState::Normal,
                other => self.field.push(other),
            },
            LexState::Normal => match c {
                '"' => self.state = LexState::InQuotes,
                '\r' if rest.peek() == Some(&'\n') => {
                    rest.next();
                    self.end_row();
                }
                '\n' => self.end_row(),
                d if d == self.delimiter => self.end_field(),
                other => self.field.push(other),
            },
        }
    }

    fn end_field(&mut self) {
        let field = std::mem::take(&mut self.field);
        self.row.push(field.trim().to_string());
    }

    fn end_row(&mut self) {
        self.end_field();
        let row = std::mem::take(&mut self.row);
        if row.iter().any(|f| !f.is_empty()) {
            self.rows.push(row);
        }
    }

    fn finish(mut self) -> Vec<Row> {
        if !self.field.is_empty() || !self.row.is_empty() {
            self.end_row();
        }
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("a,b,c\n1;2;3;4"), ',');
        assert_eq!(sniff_delimiter("a;b;c,d\n"), ';');
        assert_eq!(sniff_delimiter("a\tb\tc"), '\t');
        assert_eq!(sniff_delimiter("\n\n  \nDate;Amount"), ';');
    }

    #[test]
    fn test_sniff_ties_and_empty_default_to_comma() {
        assert_eq!(sniff_delimiter("a,b;c"), ',');
        assert_eq!(sniff_delimiter("a\tb,c"), ',');
        assert_eq!(sniff_delimiter("a\tb;c"), ';');
        assert_eq!(sniff_delimiter("no delimiters"), ',');
        assert_eq!(sniff_delimiter(""), ',');
    }

    #[test]
    fn test_quoted_delimiter_stays_in_field() {
        let rows = tokenize("\"a,b\",c");
        assert_eq!(rows, vec![row(&["a,b", "c"])]);
    }

    #[test]
    fn test_escaped_quote() {
        let rows = tokenize("\"say \"\"hi\"\"\",x");
        assert_eq!(rows, vec![row(&["say \"hi\"", "x"])]);
    }

    #[test]
    fn test_newline_inside_quotes() {
        let rows = tokenize("\"line one\nline two\",5\nnext,6");
        assert_eq!(rows, vec![row(&["line one\nline two", "5"]), row(&["next", "6"])]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = tokenize("a,b\r\nc,d\r\n");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_semicolon_rows() {
        let rows = tokenize("Date;Amount;Note\n01.02.2024;1,50;Cafe");
        assert_eq!(rows[1], row(&["01.02.2024", "1,50", "Cafe"]));
    }

    #[test]
    fn test_tab_rows_keep_commas_in_fields() {
        let rows = tokenize("Date\tNarration, ref\tAmount\n01/02/2024\tCafe, Indiranagar\t1,250");
        assert_eq!(
            rows,
            vec![
                row(&["Date", "Narration, ref", "Amount"]),
                row(&["01/02/2024", "Cafe, Indiranagar", "1,250"]),
            ]
        );
    }

    #[test]
    fn test_fields_trimmed_and_blank_rows_dropped() {
        let rows = tokenize("  a , b \n , \n\n c,d");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_trailing_delimiter_keeps_empty_field() {
        let rows = tokenize("a,b,");
        assert_eq!(rows, vec![row(&["a", "b", ""])]);
    }

    #[test]
    fn test_unterminated_quote_is_best_effort() {
        let rows = tokenize("a,\"b,c\nd");
        assert_eq!(rows, vec![row(&["a", "b,c\nd"])]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\r\n").is_empty());
    }
}
