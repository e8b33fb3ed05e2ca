//! Export pretty printed version of core.
use crate::common::prettify::{prettify, ToPretty};
use crate::core::export::render;
use crate::core::expr::*;
use crate::core::name::Name;
use crate::core::tree::Tree;
use pretty::{DocAllocator, DocBuilder};
use std::fmt;
use std::fmt::Display;

/// A name as seen from inside the program declared by `home`.
///
/// Names from other files (inlined macro variables) are qualified by
/// their file so that distinct variables never print alike.
fn name_doc<'b, D, A>(
    name: &'b Name,
    home: Option<&'b str>,
    allocator: &'b D,
) -> DocBuilder<'b, D, A>
where
    D: DocAllocator<'b, A>,
    D::Doc: Clone,
    A: Clone,
{
    match home {
        Some(file) if !name.declared_in(file) => {
            allocator.text(format!("{}.{}", name.file(), name.text()))
        }
        _ => allocator.text(name.text()),
    }
}

impl ToPretty for Name {
    fn pretty<'b, D, A>(&'b self, allocator: &'b D) -> DocBuilder<'b, D, A>
    where
        D: DocAllocator<'b, A>,
        D::Doc: Clone,
        A: Clone,
    {
        name_doc(self, None, allocator)
    }
}

/// Literals print as in raw rendering
impl ToPretty for Tree {
    fn pretty<'b, D, A>(&'b self, allocator: &'b D) -> DocBuilder<'b, D, A>
    where
        D: DocAllocator<'b, A>,
        D::Doc: Clone,
        A: Clone,
    {
        allocator.text(render::render_raw(self))
    }
}

/// An expression in argument position, parenthesised unless atomic
fn operand<'b, D, A>(
    expr: &'b Expr,
    home: Option<&'b str>,
    allocator: &'b D,
) -> DocBuilder<'b, D, A>
where
    D: DocAllocator<'b, A>,
    D::Doc: Clone,
    A: Clone,
{
    match expr {
        Expr::Var(_) | Expr::Lit(_) => expr_doc(expr, home, allocator),
        _ => expr_doc(expr, home, allocator).parens(),
    }
}

fn expr_doc<'b, D, A>(
    expr: &'b Expr,
    home: Option<&'b str>,
    allocator: &'b D,
) -> DocBuilder<'b, D, A>
where
    D: DocAllocator<'b, A>,
    D::Doc: Clone,
    A: Clone,
{
    match expr {
        Expr::Var(n) => name_doc(n, home, allocator),
        Expr::Lit(t) => t.pretty(allocator),
        Expr::Hd(e) => allocator
            .text("hd")
            .append(allocator.space())
            .append(operand(e, home, allocator)),
        Expr::Tl(e) => allocator
            .text("tl")
            .append(allocator.space())
            .append(operand(e, home, allocator)),
        Expr::Cons(l, r) => allocator
            .text("cons")
            .append(allocator.space())
            .append(operand(l, home, allocator))
            .append(allocator.space())
            .append(operand(r, home, allocator)),
        Expr::IsEq(l, r) => operand(l, home, allocator)
            .append(allocator.text(" = "))
            .append(operand(r, home, allocator)),
    }
}

impl ToPretty for Expr {
    fn pretty<'b, D, A>(&'b self, allocator: &'b D) -> DocBuilder<'b, D, A>
    where
        D: DocAllocator<'b, A>,
        D::Doc: Clone,
        A: Clone,
    {
        expr_doc(self, None, allocator)
    }
}

/// Braced block with each command on its own line
fn block_doc<'b, D, A>(
    block: &'b [Command],
    home: Option<&'b str>,
    allocator: &'b D,
) -> DocBuilder<'b, D, A>
where
    D: DocAllocator<'b, A>,
    D::Doc: Clone,
    A: Clone,
{
    if block.is_empty() {
        return allocator.text("{}");
    }

    let command_docs = block.iter().map(|c| command_doc(c, home, allocator));
    allocator
        .text("{")
        .append(
            allocator
                .hardline()
                .append(allocator.intersperse(
                    command_docs,
                    allocator.text(";").append(allocator.hardline()),
                ))
                .nest(4),
        )
        .append(allocator.hardline())
        .append(allocator.text("}"))
}

fn command_doc<'b, D, A>(
    command: &'b Command,
    home: Option<&'b str>,
    allocator: &'b D,
) -> DocBuilder<'b, D, A>
where
    D: DocAllocator<'b, A>,
    D::Doc: Clone,
    A: Clone,
{
    match command {
        Command::Assign(x, e) => name_doc(x, home, allocator)
            .append(allocator.text(" := "))
            .append(expr_doc(e, home, allocator)),
        Command::While(guard, body) => allocator
            .text("while ")
            .append(expr_doc(guard, home, allocator))
            .append(allocator.space())
            .append(block_doc(body, home, allocator)),
        Command::IfElse(guard, t, f) => allocator
            .text("if ")
            .append(expr_doc(guard, home, allocator))
            .append(allocator.space())
            .append(block_doc(t, home, allocator))
            .append(allocator.text(" else "))
            .append(block_doc(f, home, allocator)),
    }
}

impl ToPretty for Command {
    fn pretty<'b, D, A>(&'b self, allocator: &'b D) -> DocBuilder<'b, D, A>
    where
        D: DocAllocator<'b, A>,
        D::Doc: Clone,
        A: Clone,
    {
        command_doc(self, None, allocator)
    }
}

/// Variables declared by other files are shown as `file.name`
impl ToPretty for Program {
    fn pretty<'b, D, A>(&'b self, allocator: &'b D) -> DocBuilder<'b, D, A>
    where
        D: DocAllocator<'b, A>,
        D::Doc: Clone,
        A: Clone,
    {
        let home = Some(self.file());
        allocator
            .text(self.name.text())
            .append(allocator.text(" read "))
            .append(name_doc(&self.read, home, allocator))
            .append(allocator.space())
            .append(block_doc(&self.block, home, allocator))
            .append(allocator.hardline())
            .append(allocator.text("write "))
            .append(name_doc(&self.write, home, allocator))
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", prettify(self))
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", prettify(self))
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", prettify(self))
    }
}
