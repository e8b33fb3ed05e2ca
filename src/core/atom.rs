//! The fixed vocabulary of syntax tags used in the tree encoding of
//! programs.
//!
//! Each tag is encoded as one of the first fourteen primes. The table
//! is part of the wire format for programs stored as trees and must
//! not change.
use crate::core::tree::Tree;
use std::fmt;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Atom {
    Assign,
    DoAssign,
    While,
    DoWhile,
    If,
    DoIf,
    Var,
    Quote,
    Hd,
    DoHd,
    Tl,
    DoTl,
    Cons,
    DoCons,
}

/// Every atom in encoding order
pub const ATOMS: [Atom; 14] = [
    Atom::Assign,
    Atom::DoAssign,
    Atom::While,
    Atom::DoWhile,
    Atom::If,
    Atom::DoIf,
    Atom::Var,
    Atom::Quote,
    Atom::Hd,
    Atom::DoHd,
    Atom::Tl,
    Atom::DoTl,
    Atom::Cons,
    Atom::DoCons,
];

impl Atom {
    /// The prime code of the atom
    pub fn code(self) -> usize {
        match self {
            Atom::Assign => 2,
            Atom::DoAssign => 3,
            Atom::While => 5,
            Atom::DoWhile => 7,
            Atom::If => 11,
            Atom::DoIf => 13,
            Atom::Var => 17,
            Atom::Quote => 19,
            Atom::Hd => 23,
            Atom::DoHd => 29,
            Atom::Tl => 31,
            Atom::DoTl => 37,
            Atom::Cons => 41,
            Atom::DoCons => 43,
        }
    }

    /// The atom with code `n`, if there is one
    pub fn from_code(n: usize) -> Option<Atom> {
        ATOMS.iter().copied().find(|a| a.code() == n)
    }

    /// Symbolic name used when rendering decoded trees
    pub fn symbol(self) -> &'static str {
        match self {
            Atom::Assign => "@asgn",
            Atom::DoAssign => "@doAsgn",
            Atom::While => "@while",
            Atom::DoWhile => "@doWhile",
            Atom::If => "@if",
            Atom::DoIf => "@doIf",
            Atom::Var => "@var",
            Atom::Quote => "@quote",
            Atom::Hd => "@hd",
            Atom::DoHd => "@doHd",
            Atom::Tl => "@tl",
            Atom::DoTl => "@doTl",
            Atom::Cons => "@cons",
            Atom::DoCons => "@doCons",
        }
    }

    /// The atom named by `symbol`, if any
    pub fn from_symbol(symbol: &str) -> Option<Atom> {
        ATOMS.iter().copied().find(|a| a.symbol() == symbol)
    }

    /// The tree encoding of the atom: its code as a numeral
    pub fn to_tree(self) -> Tree {
        Tree::from_nat(self.code())
    }

    /// Decode an atom from a tree
    pub fn from_tree(tree: &Tree) -> Option<Atom> {
        tree.to_nat().and_then(Atom::from_code)
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
