//! Core syntax: programs whose commands are only assignments, while
//! loops and (for decoded structures) if/else.
use crate::core::name::Name;
use crate::core::tree::Tree;
use std::collections::BTreeSet;

/// Core expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Variable reference
    Var(Name),
    /// Quoted literal tree
    Lit(Tree),
    /// Pair construction
    Cons(Box<Expr>, Box<Expr>),
    /// Head projection
    Hd(Box<Expr>),
    /// Tail projection
    Tl(Box<Expr>),
    /// Structural equality test
    IsEq(Box<Expr>, Box<Expr>),
}

/// Core commands
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Assign(Name, Expr),
    While(Expr, Block),
    /// Never written by hand in core code but produced when decoding
    /// programs stored as trees
    IfElse(Expr, Block, Block),
}

/// An ordered sequence of commands
pub type Block = Vec<Command>;

/// A core program: `name read X { ... } write Y`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Program {
    pub name: Name,
    pub read: Name,
    pub block: Block,
    pub write: Name,
}

/// Syntax which refers to names
pub trait HasNames {
    /// Visit every name occurrence in traversal order
    fn visit_names(&self, on_name: &mut impl FnMut(&Name));

    /// The set of all names referenced
    fn names(&self) -> BTreeSet<Name> {
        let mut names = BTreeSet::new();
        self.visit_names(&mut |n| {
            names.insert(n.clone());
        });
        names
    }

    /// Distinct names in order of first occurrence
    fn names_in_order(&self) -> Vec<Name> {
        let mut seen = BTreeSet::new();
        let mut ordered = vec![];
        self.visit_names(&mut |n| {
            if seen.insert(n.clone()) {
                ordered.push(n.clone());
            }
        });
        ordered
    }
}

impl HasNames for Expr {
    fn visit_names(&self, on_name: &mut impl FnMut(&Name)) {
        match self {
            Expr::Var(n) => on_name(n),
            Expr::Lit(_) => {}
            Expr::Hd(e) | Expr::Tl(e) => e.visit_names(on_name),
            Expr::Cons(l, r) | Expr::IsEq(l, r) => {
                l.visit_names(on_name);
                r.visit_names(on_name);
            }
        }
    }
}

impl HasNames for Command {
    fn visit_names(&self, on_name: &mut impl FnMut(&Name)) {
        match self {
            Command::Assign(x, e) => {
                on_name(x);
                e.visit_names(on_name);
            }
            Command::While(guard, body) => {
                guard.visit_names(on_name);
                body.visit_names(on_name);
            }
            Command::IfElse(guard, t, f) => {
                guard.visit_names(on_name);
                t.visit_names(on_name);
                f.visit_names(on_name);
            }
        }
    }
}

impl HasNames for Block {
    fn visit_names(&self, on_name: &mut impl FnMut(&Name)) {
        for c in self {
            c.visit_names(on_name);
        }
    }
}

/// The program name is not a variable and is not visited
impl HasNames for Program {
    fn visit_names(&self, on_name: &mut impl FnMut(&Name)) {
        on_name(&self.read);
        self.block.visit_names(on_name);
        on_name(&self.write);
    }
}

impl Program {
    pub fn new(name: Name, read: Name, block: Block, write: Name) -> Self {
        Program {
            name,
            read,
            block,
            write,
        }
    }

    /// The file declaring the program
    pub fn file(&self) -> &str {
        self.name.file()
    }

    /// True if the program contains no if/else commands
    pub fn is_pure(&self) -> bool {
        fn pure(block: &Block) -> bool {
            block.iter().all(|c| match c {
                Command::Assign(_, _) => true,
                Command::While(_, body) => pure(body),
                Command::IfElse(_, _, _) => false,
            })
        }
        pure(&self.block)
    }
}

/// Helpers for constructing core syntax
pub mod acore {
    use super::*;

    pub fn var(n: &Name) -> Expr {
        Expr::Var(n.clone())
    }

    pub fn lit(t: Tree) -> Expr {
        Expr::Lit(t)
    }

    pub fn nil() -> Expr {
        Expr::Lit(Tree::Nil)
    }

    pub fn nat(n: usize) -> Expr {
        Expr::Lit(Tree::from_nat(n))
    }

    pub fn cons(l: Expr, r: Expr) -> Expr {
        Expr::Cons(Box::new(l), Box::new(r))
    }

    pub fn hd(e: Expr) -> Expr {
        Expr::Hd(Box::new(e))
    }

    pub fn tl(e: Expr) -> Expr {
        Expr::Tl(Box::new(e))
    }

    pub fn is_eq(l: Expr, r: Expr) -> Expr {
        Expr::IsEq(Box::new(l), Box::new(r))
    }

    pub fn assign(x: &Name, e: Expr) -> Command {
        Command::Assign(x.clone(), e)
    }

    pub fn while_(guard: Expr, body: Block) -> Command {
        Command::While(guard, body)
    }

    pub fn if_else(guard: Expr, t: Block, f: Block) -> Command {
        Command::IfElse(guard, t, f)
    }
}
