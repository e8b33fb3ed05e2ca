//! Export core as tree values so that While programs can inspect and
//! interpret other While programs.
//!
//! Each syntax node becomes a sequence headed by its atom:
//!
//! ```text
//! program   [read, block, write]
//! X := E    [@asgn, X, E]
//! while     [@while, E, block]
//! if        [@if, E, block, block]
//! X         [@var, X]
//! literal   [@quote, tree]
//! hd E      [@hd, E]
//! tl E      [@tl, E]
//! cons E F  [@cons, E, F]
//! ```
//!
//! Blocks are sequences of commands and variables are naturals.
use crate::core::atom::Atom;
use crate::core::error::CoreError;
use crate::core::expr::*;
use crate::core::name::Name;
use crate::core::tree::Tree;
use std::collections::HashMap;

/// Assignment of variable numbers to names
#[derive(Debug, Clone, Default)]
pub struct VarTable {
    indices: HashMap<Name, usize>,
}

impl VarTable {
    /// Number the names of a program by first occurrence, so the
    /// read variable is always 0
    pub fn for_program(program: &Program) -> Self {
        Self::from_names(program.names_in_order())
    }

    /// Number names in the order given
    pub fn from_names<I: IntoIterator<Item = Name>>(names: I) -> Self {
        let mut indices = HashMap::new();
        for name in names {
            let next = indices.len();
            indices.entry(name).or_insert(next);
        }
        VarTable { indices }
    }

    /// The number of a name, if it has one
    pub fn index(&self, name: &Name) -> Option<usize> {
        self.indices.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn quote_name(&self, name: &Name) -> Result<Tree, CoreError> {
        self.index(name)
            .map(Tree::from_nat)
            .ok_or_else(|| CoreError::Unencodable(format!("unnumbered variable {}", name)))
    }
}

/// A sequence headed by an atom
fn tagged(atom: Atom, fields: Vec<Tree>) -> Tree {
    Tree::from_list(std::iter::once(atom.to_tree()).chain(fields).collect::<Vec<_>>())
}

/// Quote a whole program
pub fn quote_program(program: &Program) -> Result<Tree, CoreError> {
    let table = VarTable::for_program(program);
    Ok(Tree::from_list(vec![
        table.quote_name(&program.read)?,
        quote_block(&program.block, &table)?,
        table.quote_name(&program.write)?,
    ]))
}

/// Quote a block as a sequence of quoted commands
pub fn quote_block(block: &Block, table: &VarTable) -> Result<Tree, CoreError> {
    let commands = block
        .iter()
        .map(|c| quote_command(c, table))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Tree::from_list(commands))
}

pub fn quote_command(command: &Command, table: &VarTable) -> Result<Tree, CoreError> {
    match command {
        Command::Assign(x, e) => Ok(tagged(
            Atom::Assign,
            vec![table.quote_name(x)?, quote_expr(e, table)?],
        )),
        Command::While(guard, body) => Ok(tagged(
            Atom::While,
            vec![quote_expr(guard, table)?, quote_block(body, table)?],
        )),
        Command::IfElse(guard, t, f) => Ok(tagged(
            Atom::If,
            vec![
                quote_expr(guard, table)?,
                quote_block(t, table)?,
                quote_block(f, table)?,
            ],
        )),
    }
}

pub fn quote_expr(expr: &Expr, table: &VarTable) -> Result<Tree, CoreError> {
    match expr {
        Expr::Var(x) => Ok(tagged(Atom::Var, vec![table.quote_name(x)?])),
        Expr::Lit(t) => Ok(tagged(Atom::Quote, vec![t.clone()])),
        Expr::Hd(e) => Ok(tagged(Atom::Hd, vec![quote_expr(e, table)?])),
        Expr::Tl(e) => Ok(tagged(Atom::Tl, vec![quote_expr(e, table)?])),
        Expr::Cons(l, r) => Ok(tagged(
            Atom::Cons,
            vec![quote_expr(l, table)?, quote_expr(r, table)?],
        )),
        Expr::IsEq(_, _) => Err(CoreError::Unencodable("equality test".to_string())),
    }
}
