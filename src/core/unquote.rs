//! Read core syntax back out of its tree encoding.
//!
//! Decoding is strict: an unknown tag, a tag with the wrong number of
//! fields or a field that fails to decode fails the whole decode.
//! Variable number `n` becomes a name with text `n` declared by the
//! file supplied by the caller.
use crate::common::prettify::prettify;
use crate::core::atom::Atom;
use crate::core::expr::*;
use crate::core::name::Name;
use crate::core::tree::Tree;

fn unquote_var(file: &str, tree: &Tree) -> Option<Name> {
    tree.to_nat().map(|n| Name::new(file, n.to_string()))
}

/// Decode a program tree `[read, block, write]`, naming the program
/// after `file`
pub fn unquote_program(file: &str, tree: &Tree) -> Option<Program> {
    let [read, block, write] = tree.to_tuple::<3>()?;
    Some(Program::new(
        Name::new(file, file),
        unquote_var(file, &read)?,
        unquote_block(file, &block)?,
        unquote_var(file, &write)?,
    ))
}

/// Decode a sequence of commands
pub fn unquote_block(file: &str, tree: &Tree) -> Option<Block> {
    tree.to_list()
        .iter()
        .map(|c| unquote_command(file, c))
        .collect()
}

pub fn unquote_command(file: &str, tree: &Tree) -> Option<Command> {
    let items = tree.to_list();
    let (tag, fields) = items.split_first()?;
    match (Atom::from_tree(tag)?, fields) {
        (Atom::Assign, [x, e]) => Some(Command::Assign(
            unquote_var(file, x)?,
            unquote_expr(file, e)?,
        )),
        (Atom::While, [guard, body]) => Some(Command::While(
            unquote_expr(file, guard)?,
            unquote_block(file, body)?,
        )),
        (Atom::If, [guard, t, f]) => Some(Command::IfElse(
            unquote_expr(file, guard)?,
            unquote_block(file, t)?,
            unquote_block(file, f)?,
        )),
        _ => None,
    }
}

pub fn unquote_expr(file: &str, tree: &Tree) -> Option<Expr> {
    let items = tree.to_list();
    let (tag, fields) = items.split_first()?;
    match (Atom::from_tree(tag)?, fields) {
        (Atom::Var, [x]) => unquote_var(file, x).map(Expr::Var),
        (Atom::Quote, [t]) => Some(Expr::Lit(t.clone())),
        (Atom::Hd, [e]) => Some(Expr::Hd(Box::new(unquote_expr(file, e)?))),
        (Atom::Tl, [e]) => Some(Expr::Tl(Box::new(unquote_expr(file, e)?))),
        (Atom::Cons, [l, r]) => Some(Expr::Cons(
            Box::new(unquote_expr(file, l)?),
            Box::new(unquote_expr(file, r)?),
        )),
        _ => None,
    }
}

/// Reconstruct formatted source text from a program tree
pub fn decode_program_text(file: &str, tree: &Tree) -> Option<String> {
    unquote_program(file, tree).map(|p| prettify(&p))
}

/// Reconstruct formatted source text from a command tree
pub fn decode_command_text(file: &str, tree: &Tree) -> Option<String> {
    unquote_command(file, tree).map(|c| prettify(&c))
}

/// Reconstruct formatted source text from an expression tree
pub fn decode_expr_text(file: &str, tree: &Tree) -> Option<String> {
    unquote_expr(file, tree).map(|e| prettify(&e))
}
