//! Human readable renderings of tree values.
//!
//! Three verbosity levels share one grammar: a subtree that is a
//! numeral is shown as a decimal number, anything else is shown
//! structurally.
//!
//! - raw: pairs as `<left.right>`; the empty leaf stays `nil` even
//!   though every other numeral is shown in decimal
//! - list: sequences as `[a, b, c]`
//! - atoms: as list, but a sequence whose first element is an atom
//!   code shows the atom symbol, e.g. `[@while, [@var, 0], 0]`
//!
//! Every finite tree is either a numeral or a sequence (its right
//! spine always ends in `nil`) so these renderings are total.
use crate::core::atom::Atom;
use crate::core::tree::Tree;
use itertools::Itertools;
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

/// Rendering verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Raw,
    List,
    Atoms,
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(RenderMode::Raw),
            "list" => Ok(RenderMode::List),
            "atoms" => Ok(RenderMode::Atoms),
            _ => Err(format!("unknown render mode {}", s)),
        }
    }
}

impl Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Raw => write!(f, "raw"),
            RenderMode::List => write!(f, "list"),
            RenderMode::Atoms => write!(f, "atoms"),
        }
    }
}

/// Render a tree in the given mode
pub fn render(tree: &Tree, mode: RenderMode) -> String {
    match mode {
        RenderMode::Raw => render_raw(tree),
        RenderMode::List => render_list(tree),
        RenderMode::Atoms => render_atoms(tree),
    }
}

/// Dotted pair notation with numerals shown in decimal, except for
/// `nil` itself
pub fn render_raw(tree: &Tree) -> String {
    let mut s = String::new();
    tree.write_dotted(&mut s, true)
        .expect("formatting into a String cannot fail");
    s
}

/// Nested lists of naturals
pub fn render_list(tree: &Tree) -> String {
    match tree.to_nat() {
        Some(n) => n.to_string(),
        None => format!("[{}]", tree.to_list().iter().map(render_list).join(", ")),
    }
}

/// Nested lists of naturals with atom codes at the head of a list
/// shown symbolically
pub fn render_atoms(tree: &Tree) -> String {
    match tree.to_nat() {
        Some(n) => n.to_string(),
        None => {
            let items = tree.to_list();
            let mut rendered = Vec::with_capacity(items.len());
            let mut rest = items.iter();
            if let Some(first) = rest.next() {
                rendered.push(match Atom::from_tree(first) {
                    Some(atom) => atom.symbol().to_string(),
                    None => render_atoms(first),
                });
            }
            rendered.extend(rest.map(render_atoms));
            format!("[{}]", rendered.join(", "))
        }
    }
}
