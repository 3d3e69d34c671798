//! Line-continuation folding.
//!
//! Liberty lets a statement continue onto the next physical line when the
//! line ends with a backslash. Only that backslash-newline pair is folded
//! into a single space; every other backslash and newline is left alone.

use std::borrow::Cow;

/// Folded source text plus the mapping back to the caller's buffer.
#[derive(Debug, Clone)]
pub struct Preprocessed<'a> {
    text: Cow<'a, str>,
    /// `(folded_offset, removed)`: every folded offset at or past `folded_offset`
    /// sits `removed` bytes earlier than in the original buffer.
    folds: Vec<(usize, usize)>,
}

impl<'a> Preprocessed<'a> {
    /// Wrap `src` without folding anything.
    pub fn unfolded(src: &'a str) -> Self {
        Self {
            text: Cow::Borrowed(src),
            folds: Vec::new(),
        }
    }

    /// The text handed to the tokenizer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of continuations that were folded.
    pub fn fold_count(&self) -> usize {
        self.folds.len()
    }

    /// Translate an offset in [`text`](Self::text) back to the original buffer.
    pub fn source_offset(&self, folded: usize) -> usize {
        let idx = self.folds.partition_point(|&(at, _)| at <= folded);
        match idx {
            0 => folded,
            n => folded + self.folds[n - 1].1,
        }
    }
}

/// Fold every `\` + newline (`\n` or `\r\n`) into one space.
///
/// Borrows `src` unchanged when it contains no continuations.
pub fn fold_continuations(src: &str) -> Preprocessed<'_> {
    if !src.contains("\\\n") && !src.contains("\\\r\n") {
        return Preprocessed::unfolded(src);
    }

    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len());
    let mut folds = Vec::new();
    let mut removed = 0;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(rel) = src[pos..].find('\\') {
        let at = pos + rel;
        let rest = &bytes[at + 1..];
        let len = if rest.starts_with(b"\n") {
            2
        } else if rest.starts_with(b"\r\n") {
            3
        } else {
            pos = at + 1;
            continue;
        };

        out.push_str(&src[copied..at]);
        out.push(' ');
        removed += len - 1;
        folds.push((out.len(), removed));
        pos = at + len;
        copied = pos;
    }
    out.push_str(&src[copied..]);

    Preprocessed {
        text: Cow::Owned(out),
        folds,
    }
}

/// 1-based line and column (in characters) of byte `offset` within `src`.
pub fn line_column(src: &str, offset: usize) -> (usize, usize) {
    let mut end = offset.min(src.len());
    while !src.is_char_boundary(end) {
        end -= 1;
    }
    let before = &src[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_continuations_borrows() {
        let src = "cell (A) {\n  area : 1.0 ;\n}\n";
        let pre = fold_continuations(src);
        assert!(matches!(pre.text, Cow::Borrowed(_)));
        assert_eq!(pre.text(), src);
        assert_eq!(pre.fold_count(), 0);
        assert_eq!(pre.source_offset(7), 7);
    }

    #[test]
    fn test_folds_continuation() {
        let pre = fold_continuations("values (\"1, 2\", \\\n \"3, 4\");");
        assert_eq!(pre.text(), "values (\"1, 2\",   \"3, 4\");");
        assert_eq!(pre.fold_count(), 1);
    }

    #[test]
    fn test_folds_crlf_continuation() {
        let pre = fold_continuations("a : \\\r\n1 ;");
        assert_eq!(pre.text(), "a :  1 ;");
    }

    #[test]
    fn test_keeps_other_backslashes_and_newlines() {
        let src = "function : \"A\\B\" ;\nnext : 1 ;\n";
        let pre = fold_continuations(src);
        assert_eq!(pre.text(), src);

        let pre = fold_continuations("x : \"a\\b\" ; \\\ny : 2 ;\n");
        assert_eq!(pre.text(), "x : \"a\\b\" ;  y : 2 ;\n");
    }

    #[test]
    fn test_source_offset_maps_through_folds() {
        let src = "ab\\\ncd\\\r\nef";
        let pre = fold_continuations(src);
        assert_eq!(pre.text(), "ab cd ef");
        // 'c' and 'e' in the folded text map back to the original buffer.
        assert_eq!(pre.source_offset(3), 4);
        assert_eq!(&src[pre.source_offset(3)..=pre.source_offset(3)], "c");
        assert_eq!(pre.source_offset(6), 9);
        assert_eq!(&src[pre.source_offset(6)..=pre.source_offset(6)], "e");
        // The inserted space maps onto the backslash it replaced.
        assert_eq!(pre.source_offset(2), 2);
    }

    #[test]
    fn test_line_column() {
        let src = "library (L) {\n  cell (C) {\n";
        assert_eq!(line_column(src, 0), (1, 1));
        assert_eq!(line_column(src, 16), (2, 3));
        assert_eq!(line_column(src, src.len()), (3, 1));
    }
}
