//! Recursive-descent parser for Liberty groups and attributes.

use log::trace;

use super::ast::{Group, Scalar, Statement};
use super::lexer::{is_numeric_literal, Lexer, Token, TokenKind, Unexpected};

type ParseResult<T> = Result<T, Unexpected>;

/// Parser for Liberty text. Holds one token of lookahead.
pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>, max_depth: usize) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
            max_depth,
        })
    }

    /// Parse the single top-level group and require the input to end after it.
    pub fn parse_root(&mut self) -> ParseResult<Group> {
        let kind = self.expect_name()?;
        self.expect(TokenKind::OpenParen, "'('")?;
        let (instance_name, args) = self.parse_args()?;
        let open = self.expect(TokenKind::OpenBrace, "'{'")?;
        let root = self.parse_group_body(kind, instance_name, args, open.offset)?;

        if self.current.kind != TokenKind::Eof {
            return Err(self.unexpected("end of input"));
        }
        Ok(root)
    }

    fn advance(&mut self) -> ParseResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> ParseResult<Token<'a>> {
        if self.current.kind == kind {
            let tok = self.current;
            self.advance()?;
            Ok(tok)
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: impl Into<String>) -> Unexpected {
        Unexpected::new(self.current.offset, expected, self.current.describe())
    }

    /// Group keywords and attribute names: a word starting with a letter or '_'.
    fn expect_name(&mut self) -> ParseResult<String> {
        let is_name = self.current.kind == TokenKind::Word
            && self
                .current
                .text
                .starts_with(|c: char| c.is_ascii_alphabetic() || c == '_');
        if !is_name {
            return Err(self.unexpected("identifier"));
        }
        let name = self.current.text.to_string();
        self.advance()?;
        Ok(name)
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        let name = self.expect_name()?;

        match self.current.kind {
            TokenKind::Colon => {
                self.advance()?;
                let value = self.parse_value()?;
                self.expect(TokenKind::Semicolon, "';'")?;
                Ok(Statement::SimpleAttribute { name, value })
            }
            TokenKind::OpenParen => {
                self.advance()?;
                let (instance_name, args) = self.parse_args()?;

                // Only the token after ')' tells a group from a complex attribute.
                match self.current.kind {
                    TokenKind::OpenBrace => {
                        let open = self.current.offset;
                        self.advance()?;
                        let group = self.parse_group_body(name, instance_name, args, open)?;
                        Ok(Statement::Group(group))
                    }
                    TokenKind::Semicolon => {
                        self.advance()?;
                        Ok(Statement::ComplexAttribute { name, values: args })
                    }
                    _ => Err(self.unexpected("'{' or ';'")),
                }
            }
            _ => Err(self.unexpected("':' or '('")),
        }
    }

    /// Parse values up to and including ')'. Returns the joined instance name and the values.
    fn parse_args(&mut self) -> ParseResult<(String, Vec<Scalar>)> {
        let mut texts: Vec<&str> = Vec::new();
        let mut values = Vec::new();

        loop {
            match self.current.kind {
                TokenKind::CloseParen => {
                    self.advance()?;
                    break;
                }
                TokenKind::Word | TokenKind::Str => {
                    texts.push(self.current.text);
                    values.push(self.parse_value()?);
                }
                _ => return Err(self.unexpected("value or ')'")),
            }
        }

        Ok((texts.join(","), values))
    }

    /// Parse statements up to and including the closing '}'.
    /// The opening '{' at `open` has already been consumed.
    fn parse_group_body(
        &mut self,
        group_kind: String,
        instance_name: String,
        args: Vec<Scalar>,
        open: usize,
    ) -> ParseResult<Group> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Unexpected::new(
                open,
                format!("at most {} nested groups", self.max_depth),
                format!("'{}' group nested {} deep", group_kind, self.depth),
            ));
        }
        trace!("group {}({}) at offset {}", group_kind, instance_name, open);

        let mut children = Vec::new();
        loop {
            match self.current.kind {
                TokenKind::CloseBrace => {
                    self.advance()?;
                    break;
                }
                TokenKind::Eof => {
                    return Err(self.unexpected(format!(
                        "'}}' closing '{}' group opened at offset {}",
                        group_kind, open
                    )));
                }
                _ => children.push(self.parse_statement()?),
            }
        }

        self.depth -= 1;
        Ok(Group {
            group_kind,
            instance_name,
            args,
            children,
        })
    }

    fn parse_value(&mut self) -> ParseResult<Scalar> {
        let tok = self.current;
        let value = match tok.kind {
            TokenKind::Str => Scalar::Text(tok.text.to_string()),
            TokenKind::Word => classify_word(&tok)?,
            _ => return Err(self.unexpected("value")),
        };
        self.advance()?;
        Ok(value)
    }
}

/// Turn a bare word into a number, boolean, or text.
fn classify_word(tok: &Token<'_>) -> ParseResult<Scalar> {
    let text = tok.text;
    if is_numeric_literal(text) {
        if text.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
            return match text.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Scalar::Float(v)),
                _ => Err(Unexpected::new(tok.offset, "finite number", tok.describe())),
            };
        }
        return text
            .parse::<i64>()
            .map(Scalar::Integer)
            .map_err(|_| Unexpected::new(tok.offset, "64-bit integer", tok.describe()));
    }

    Ok(match text {
        "true" => Scalar::Boolean(true),
        "false" => Scalar::Boolean(false),
        _ => Scalar::Text(text.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_group(input: &str) -> ParseResult<Group> {
        Parser::new(Lexer::new(input), 64)?.parse_root()
    }

    fn first_child(input: &str) -> Statement {
        let group = parse_group(input).unwrap();
        group.children.into_iter().next().unwrap()
    }

    #[test]
    fn test_parse_simple_attribute() {
        let stmt = first_child("library (L) { capacitance : 1.25 ; }");
        assert_eq!(
            stmt,
            Statement::SimpleAttribute {
                name: "capacitance".to_string(),
                value: Scalar::Float(1.25),
            }
        );
    }

    #[test]
    fn test_complex_attribute_vs_group() {
        let stmt = first_child("library (L) { foo(1,2); }");
        assert_eq!(
            stmt,
            Statement::ComplexAttribute {
                name: "foo".to_string(),
                values: vec![Scalar::Integer(1), Scalar::Integer(2)],
            }
        );

        let stmt = first_child("library (L) { foo(1,2){ } }");
        match stmt {
            Statement::Group(group) => {
                assert_eq!(group.group_kind, "foo");
                assert_eq!(group.args, vec![Scalar::Integer(1), Scalar::Integer(2)]);
                assert_eq!(group.instance_name, "1,2");
                assert!(group.children.is_empty());
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_group_without_args() {
        let stmt = first_child("library (L) { operating_conditions () { voltage : 0.7 ; } }");
        match stmt {
            Statement::Group(group) => {
                assert_eq!(group.group_kind, "operating_conditions");
                assert_eq!(group.instance_name, "");
                assert!(group.args.is_empty());
                assert_eq!(group.children.len(), 1);
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_value_classification() {
        let group = parse_group(
            r#"library (L) {
                a : 44 ;
                b : -1.5e-3 ;
                c : "1.25" ;
                d : true ;
                e : False ;
                f : input ;
                g : +3 ;
            }"#,
        )
        .unwrap();
        let values: Vec<Scalar> = group
            .simple_attributes()
            .map(|(_, v)| v.clone())
            .collect();
        assert_eq!(
            values,
            vec![
                Scalar::Integer(44),
                Scalar::Float(-1.5e-3),
                Scalar::Text("1.25".to_string()),
                Scalar::Boolean(true),
                Scalar::Text("False".to_string()),
                Scalar::Text("input".to_string()),
                Scalar::Integer(3),
            ]
        );
    }

    #[test]
    fn test_quoted_instance_name() {
        let group = parse_group(r#"library ("my_lib") { }"#).unwrap();
        assert_eq!(group.instance_name, "my_lib");
        assert_eq!(group.args, vec![Scalar::Text("my_lib".to_string())]);
    }

    #[test]
    fn test_integer_overflow_is_error() {
        let err = parse_group("library (L) { a : 99999999999999999999 ; }").unwrap_err();
        assert_eq!(err.offset, 18);
        assert_eq!(err.expected, "64-bit integer");
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse_group("library (L) { a : 1 }").unwrap_err();
        assert_eq!(err.expected, "';'");
        assert_eq!(err.found, "'}'");
    }

    #[test]
    fn test_paren_statement_needs_brace_or_semicolon() {
        let err = parse_group("library (L) { foo (1) bar }").unwrap_err();
        assert_eq!(err.expected, "'{' or ';'");
        assert_eq!(err.offset, 22);
    }

    #[test]
    fn test_unterminated_group() {
        let input = "library (L) { cell (C) { area : 1 ; ";
        let err = parse_group(input).unwrap_err();
        assert_eq!(err.found, "end of input");
        assert!(err.offset >= input.find("{ area").unwrap());
    }

    #[test]
    fn test_trailing_tokens() {
        let err = parse_group("library (L) { } extra").unwrap_err();
        assert_eq!(err.expected, "end of input");
        assert_eq!(err.found, "'extra'");
    }

    #[test]
    fn test_root_must_be_group() {
        let err = parse_group("library (L) ;").unwrap_err();
        assert_eq!(err.expected, "'{'");
    }

    #[test]
    fn test_max_depth() {
        let input = "library (L) { a () { b () { c () { } } } }";
        let err = Parser::new(Lexer::new(input), 3)
            .unwrap()
            .parse_root()
            .unwrap_err();
        assert_eq!(err.expected, "at most 3 nested groups");
        assert_eq!(err.offset, input.find("c ()").unwrap() + 5);

        assert!(Parser::new(Lexer::new(input), 4)
            .unwrap()
            .parse_root()
            .is_ok());
    }
}
