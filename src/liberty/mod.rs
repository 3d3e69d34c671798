//! Parser for Liberty (.lib) cell-library text.
//!
//! Liberty describes standard cells as nested, brace-delimited groups of
//! attributes. The parser turns that text into an owned [`Library`] tree that
//! the [`query`](crate::query) functions navigate by name.
//!
//! # Grammar Overview
//!
//! ```text
//! library           = group                       (root kind must be "library")
//! group             = identifier '(' [values] ')' '{' { statement } '}'
//! statement         = group | simple_attribute | complex_attribute
//! simple_attribute  = identifier ':' value ';'
//! complex_attribute = identifier '(' [values] ')' ';'
//! values            = value { [','] value }
//! value             = number | string | word
//!
//! number     = ['+'|'-'] (digit+ ['.' digit*] | '.' digit+) [('e'|'E') ['+'|'-'] digit+]
//! string     = '"' { any_char } '"'
//! identifier = (letter | '_') { word_char }
//! ```
//!
//! Whitespace, commas and `/* ... */` comments may appear between any two
//! tokens. A line ending in a backslash continues on the next line.
//!
//! # Values
//!
//! | Source | Scalar |
//! |--------|--------|
//! | `44`, `-3` | `Integer` |
//! | `1.25`, `1e-3` | `Float` |
//! | `"1.25"`, `input` | `Text` |
//! | `true`, `false` (lowercase only) | `Boolean` |
//!
//! # Example
//!
//! ```text
//! library (demo) {
//!   cell (INV_X1) {
//!     area : 0.532 ;
//!     pin (A) {
//!       direction : input ;
//!       capacitance : 0.0016 ;
//!     }
//!   }
//! }
//! ```

mod ast;
mod lexer;
mod parser;
mod preprocess;

pub use ast::*;
pub use preprocess::{fold_continuations, line_column, Preprocessed};

use log::debug;

use crate::error::{LibertyError, Result};
use lexer::Lexer;
use parser::Parser;

/// Default limit on group nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling a parse.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Fold backslash-newline continuations before tokenizing.
    pub fold_continuations: bool,
    /// Maximum group nesting depth, counting the root group.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            fold_continuations: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable line-continuation folding.
    pub fn with_fold_continuations(mut self, fold: bool) -> Self {
        self.fold_continuations = fold;
        self
    }

    /// Set the maximum group nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parse Liberty text into a [`Library`].
pub fn parse(input: &str) -> Result<Library> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse Liberty text with explicit [`ParseOptions`].
///
/// Either the whole input parses or an error is returned; no partial tree
/// is ever produced. Error offsets refer to `input`, not to the folded text.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Library> {
    let pre = if options.fold_continuations {
        fold_continuations(input)
    } else {
        Preprocessed::unfolded(input)
    };
    debug!(
        "parsing {} bytes ({} continuations folded)",
        input.len(),
        pre.fold_count()
    );

    let root = Parser::new(Lexer::new(pre.text()), options.max_depth)
        .and_then(|mut parser| parser.parse_root())
        .map_err(|u| u.into_error(input, &pre))?;

    if root.group_kind != "library" {
        return Err(LibertyError::NotALibrary {
            group_kind: root.group_kind,
        });
    }

    debug!(
        "parsed library '{}' with {} top-level statements",
        root.instance_name,
        root.children.len()
    );
    Ok(Library::new(root))
}

/// Read and parse a Liberty file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Library> {
    let content = std::fs::read_to_string(path).map_err(|e| LibertyError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
