//! Lexer (tokenizer) for Liberty text.

use super::preprocess::{line_column, Preprocessed};
use crate::error::LibertyError;

/// A token produced by the lexer. `text` borrows from the folded input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Token<'a> {
    /// The kind of token
    pub kind: TokenKind,
    /// Token text; for strings, the contents without quotes
    pub text: &'a str,
    /// Byte offset of the token start in the folded input
    pub offset: usize,
}

impl Token<'_> {
    /// Human-readable form used in error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Word => format!("'{}'", self.text),
            TokenKind::Str => format!("string \"{}\"", self.text),
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

/// Token types in Liberty text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Bare word: identifier, number, or unquoted value
    Word,
    /// Quoted string
    Str,
    /// Open parenthesis '('
    OpenParen,
    /// Close parenthesis ')'
    CloseParen,
    /// Open brace '{'
    OpenBrace,
    /// Close brace '}'
    CloseBrace,
    /// Colon ':'
    Colon,
    /// Semicolon ';'
    Semicolon,
    /// End of input
    Eof,
}

/// A grammar violation located in the folded input.
///
/// Converted into [`LibertyError::Parse`] once the offset has been mapped
/// back to the caller's buffer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Unexpected {
    pub offset: usize,
    pub expected: String,
    pub found: String,
}

impl Unexpected {
    pub fn new(offset: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            offset,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Locate the violation in the original `src` and build the public error.
    pub fn into_error(self, src: &str, pre: &Preprocessed<'_>) -> LibertyError {
        let offset = pre.source_offset(self.offset);
        let (line, column) = line_column(src, offset);
        LibertyError::parse(offset, line, column, self.expected, self.found)
    }
}

/// Lexer for tokenizing folded Liberty input.
pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the next token, skipping whitespace, commas, and `/* */` comments.
    pub fn next_token(&mut self) -> Result<Token<'a>, Unexpected> {
        self.skip_trivia()?;

        let start = self.pos;
        let ch = match self.peek() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: "",
                    offset: start,
                });
            }
        };

        let kind = match ch {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '"' => return self.read_string(),
            _ => return Ok(self.read_word()),
        };
        self.advance();

        Ok(Token {
            kind,
            text: &self.input[start..self.pos],
            offset: start,
        })
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_trivia(&mut self) -> Result<(), Unexpected> {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() || ch == ',' => {
                    self.advance();
                }
                Some('/') if self.rest().starts_with("/*") => {
                    let start = self.pos;
                    match self.rest()[2..].find("*/") {
                        Some(end) => self.pos += 2 + end + 2,
                        None => {
                            return Err(Unexpected::new(
                                start,
                                "'*/' closing comment",
                                "end of input",
                            ));
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn read_string(&mut self) -> Result<Token<'a>, Unexpected> {
        let start = self.pos;
        self.advance(); // opening quote
        let body = self.pos;

        while let Some(ch) = self.advance() {
            match ch {
                '"' => {
                    return Ok(Token {
                        kind: TokenKind::Str,
                        text: &self.input[body..self.pos - 1],
                        offset: start,
                    });
                }
                // Escaped character never terminates the string; kept verbatim.
                '\\' => {
                    self.advance();
                }
                _ => {}
            }
        }

        Err(Unexpected::new(start, "'\"' closing string", "end of input"))
    }

    fn read_word(&mut self) -> Token<'a> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if is_delimiter(ch) || self.rest().starts_with("/*") {
                break;
            }
            self.advance();
        }
        Token {
            kind: TokenKind::Word,
            text: &self.input[start..self.pos],
            offset: start,
        }
    }
}

fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '(' | ')' | '{' | '}' | ':' | ';' | ',' | '"')
}

/// Whether `text` is a numeric literal: `[+-]? (digits ['.' digits*] | '.' digits) [(e|E) [+-] digits]`.
pub(crate) fn is_numeric_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
