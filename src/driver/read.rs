//! Reader for tree literals.
//!
//! ```text
//! tree := "nil"
//!       | natural              numeral, e.g. 3
//!       | "@" symbol           atom code, e.g. @while
//!       | "<" tree "." tree ">"
//!       | "[" (tree ("," tree)*)? "]"
//! ```
//!
//! so that the renderings of every mode read back as the same tree.
use crate::core::atom::Atom;
use crate::core::tree::Tree;
use std::iter::Peekable;
use std::str::CharIndices;
use thiserror::Error;

#[derive(Eq, PartialEq, Debug, Clone, Error)]
pub enum ReadError {
    #[error("unexpected '{1}' at offset {0}")]
    Unexpected(usize, char),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unknown atom {1} at offset {0}")]
    UnknownAtom(usize, String),
    #[error("numeral at offset {0} is too large")]
    Overflow(usize),
}

/// Read a single tree occupying the whole of `text`
pub fn read_tree(text: &str) -> Result<Tree, ReadError> {
    let mut reader = Reader {
        chars: text.char_indices().peekable(),
    };
    let tree = reader.tree()?;
    reader.skip_whitespace();
    match reader.chars.next() {
        None => Ok(tree),
        Some((i, c)) => Err(ReadError::Unexpected(i, c)),
    }
}

struct Reader<'t> {
    chars: Peekable<CharIndices<'t>>,
}

impl<'t> Reader<'t> {
    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn peek(&mut self) -> Result<(usize, char), ReadError> {
        self.skip_whitespace();
        self.chars.peek().copied().ok_or(ReadError::UnexpectedEnd)
    }

    fn expect(&mut self, expected: char) -> Result<(), ReadError> {
        match self.peek()? {
            (_, c) if c == expected => {
                self.chars.next();
                Ok(())
            }
            (i, c) => Err(ReadError::Unexpected(i, c)),
        }
    }

    /// Consume a run of characters satisfying `pred`
    fn word(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut word = String::new();
        while let Some((_, c)) = self.chars.next_if(|(_, c)| pred(*c)) {
            word.push(c);
        }
        word
    }

    fn tree(&mut self) -> Result<Tree, ReadError> {
        match self.peek()? {
            (_, '<') => {
                self.chars.next();
                let left = self.tree()?;
                self.expect('.')?;
                let right = self.tree()?;
                self.expect('>')?;
                Ok(Tree::pair(left, right))
            }
            (_, '[') => {
                self.chars.next();
                let mut items = vec![];
                if self.peek()?.1 == ']' {
                    self.chars.next();
                    return Ok(Tree::nil());
                }
                loop {
                    items.push(self.tree()?);
                    match self.peek()? {
                        (_, ',') => {
                            self.chars.next();
                        }
                        (_, ']') => {
                            self.chars.next();
                            return Ok(Tree::from_list(items));
                        }
                        (i, c) => return Err(ReadError::Unexpected(i, c)),
                    }
                }
            }
            (i, '@') => {
                self.chars.next();
                let symbol = format!("@{}", self.word(|c| c.is_ascii_alphabetic()));
                Atom::from_symbol(&symbol)
                    .map(Atom::to_tree)
                    .ok_or(ReadError::UnknownAtom(i, symbol))
            }
            (i, c) if c.is_ascii_digit() => {
                let digits = self.word(|c| c.is_ascii_digit());
                digits
                    .parse::<usize>()
                    .map(Tree::from_nat)
                    .map_err(|_| ReadError::Overflow(i))
            }
            (i, c) if c.is_ascii_alphabetic() => {
                let word = self.word(|c| c.is_ascii_alphabetic());
                if word == "nil" {
                    Ok(Tree::nil())
                } else {
                    Err(ReadError::Unexpected(i, c))
                }
            }
            (i, c) => Err(ReadError::Unexpected(i, c)),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::core::export::render::{render, RenderMode};

    #[test]
    pub fn test_read_forms() {
        assert_eq!(read_tree("nil"), Ok(Tree::nil()));
        assert_eq!(read_tree(" 3 "), Ok(Tree::from_nat(3)));
        assert_eq!(read_tree("<nil.nil>"), Ok(Tree::from_nat(1)));
        assert_eq!(read_tree("@while"), Ok(Tree::from_nat(5)));
        assert_eq!(
            read_tree("[1, [2], []]"),
            Ok(Tree::from_list(vec![
                Tree::from_nat(1),
                Tree::from_list(vec![Tree::from_nat(2)]),
                Tree::nil()
            ]))
        );
    }

    #[test]
    pub fn test_renderings_read_back() {
        let t = Tree::from_list(vec![
            Tree::from_nat(5),
            Tree::pair(Tree::from_nat(17), Tree::from_nat(2)),
            Tree::pair(Tree::from_list(vec![Tree::from_nat(3)]), Tree::nil()),
        ]);
        for mode in [RenderMode::Raw, RenderMode::List, RenderMode::Atoms] {
            assert_eq!(read_tree(&render(&t, mode)), Ok(t.clone()), "{}", mode);
        }
    }

    #[test]
    pub fn test_errors() {
        assert_eq!(read_tree("<nil nil>"), Err(ReadError::Unexpected(5, 'n')));
        assert_eq!(read_tree("[1, 2"), Err(ReadError::UnexpectedEnd));
        assert_eq!(
            read_tree("@loop"),
            Err(ReadError::UnknownAtom(0, "@loop".to_string()))
        );
        assert_eq!(read_tree("nope"), Err(ReadError::Unexpected(0, 'n')));
        assert_eq!(read_tree("1 2"), Err(ReadError::Unexpected(2, '2')));
    }
}
