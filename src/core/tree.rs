//! Tree values, the only runtime data type
//!
//! A tree is either the empty leaf `nil` or a pair of two trees.
//! Natural numbers and sequences have canonical encodings as trees:
//!
//! - `0` is `nil` and `n + 1` is `<nil.n>`
//! - `[a, b, c]` is `<a.<b.<c.nil>>>`
//!
//! so that a natural `n` is exactly a sequence of `n` nils.
//!
//! Numerals and lists are right spines as long as the value they
//! encode, so dropping, comparing, hashing and printing all walk an
//! explicit stack instead of recursing.
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::mem;
use std::rc::Rc;

/// An immutable binary tree
///
/// Ordering puts `nil` before every pair and compares pairs by their
/// left then their right children.
#[derive(Clone, Default)]
pub enum Tree {
    #[default]
    Nil,
    Pair(Rc<Tree>, Rc<Tree>),
}

thread_local! {
    static NIL: Rc<Tree> = Rc::new(Tree::Nil);
}

fn shared_nil() -> Rc<Tree> {
    NIL.with(Rc::clone)
}

impl Drop for Tree {
    fn drop(&mut self) {
        let mut pending = vec![];
        if let Tree::Pair(l, r) = self {
            pending.push(mem::replace(l, shared_nil()));
            pending.push(mem::replace(r, shared_nil()));
        }
        while let Some(child) = pending.pop() {
            // shared children are left to their other owners
            if let Ok(mut tree) = Rc::try_unwrap(child) {
                if let Tree::Pair(l, r) = &mut tree {
                    pending.push(mem::replace(l, shared_nil()));
                    pending.push(mem::replace(r, shared_nil()));
                }
            }
        }
    }
}

impl Ord for Tree {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            match (a, b) {
                (Tree::Nil, Tree::Nil) => {}
                (Tree::Nil, Tree::Pair(_, _)) => return Ordering::Less,
                (Tree::Pair(_, _), Tree::Nil) => return Ordering::Greater,
                (Tree::Pair(al, ar), Tree::Pair(bl, br)) => {
                    if !Rc::ptr_eq(ar, br) {
                        pending.push((ar.as_ref(), br.as_ref()));
                    }
                    if !Rc::ptr_eq(al, bl) {
                        pending.push((al.as_ref(), bl.as_ref()));
                    }
                }
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Tree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Tree {}

impl Hash for Tree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(t) = pending.pop() {
            match t {
                Tree::Nil => state.write_u8(0),
                Tree::Pair(l, r) => {
                    state.write_u8(1);
                    pending.push(r.as_ref());
                    pending.push(l.as_ref());
                }
            }
        }
    }
}

impl Tree {
    /// The empty leaf
    pub fn nil() -> Self {
        Tree::Nil
    }

    /// Construct a pair
    pub fn pair(left: Tree, right: Tree) -> Self {
        Tree::Pair(Rc::new(left), Rc::new(right))
    }

    /// Canonical representation of a boolean: `nil` is false and
    /// `<nil.nil>` is true.
    pub fn truth(b: bool) -> Self {
        if b {
            Tree::pair(Tree::Nil, Tree::Nil)
        } else {
            Tree::Nil
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Tree::Nil)
    }

    /// Left child; the head of `nil` is `nil`
    pub fn head(&self) -> Tree {
        match self {
            Tree::Nil => Tree::Nil,
            Tree::Pair(l, _) => (**l).clone(),
        }
    }

    /// Right child; the tail of `nil` is `nil`
    pub fn tail(&self) -> Tree {
        match self {
            Tree::Nil => Tree::Nil,
            Tree::Pair(_, r) => (**r).clone(),
        }
    }

    /// Encode a natural number as a chain of `n` pairs with empty
    /// left children
    pub fn from_nat(n: usize) -> Self {
        (0..n).fold(Tree::Nil, |acc, _| Tree::pair(Tree::Nil, acc))
    }

    /// Decode a natural number, if the tree has the numeral shape
    pub fn to_nat(&self) -> Option<usize> {
        let mut n = 0;
        let mut t = self;
        loop {
            match t {
                Tree::Nil => return Some(n),
                Tree::Pair(l, r) if l.is_nil() => {
                    n += 1;
                    t = r;
                }
                Tree::Pair(_, _) => return None,
            }
        }
    }

    /// Encode a sequence of trees as a right-nested chain of pairs
    /// terminated by `nil`
    pub fn from_list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Tree>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(Tree::Nil, |acc, item| Tree::pair(item, acc))
    }

    /// Decode the sequence whose elements are the left children along
    /// the right spine.
    ///
    /// Every finite tree has a right spine ending in `nil` so every
    /// tree reads as a sequence; a natural `n` reads as `n` nils.
    pub fn to_list(&self) -> Vec<Tree> {
        let mut items = vec![];
        let mut t = self;
        while let Tree::Pair(l, r) = t {
            items.push((**l).clone());
            t = r;
        }
        items
    }

    /// Decode a sequence of exactly `N` elements
    pub fn to_tuple<const N: usize>(&self) -> Option<[Tree; N]> {
        self.to_list().try_into().ok()
    }

    /// Write dotted pair notation, showing numerals as decimals if
    /// `numerals` is set
    pub fn write_dotted<W: fmt::Write>(&self, out: &mut W, numerals: bool) -> fmt::Result {
        enum Step<'t> {
            Visit(&'t Tree),
            Text(&'static str),
        }

        let mut pending = vec![Step::Visit(self)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Text(s) => out.write_str(s)?,
                Step::Visit(Tree::Nil) => out.write_str("nil")?,
                Step::Visit(t) => {
                    let numeral = if numerals { t.to_nat() } else { None };
                    match (numeral, t) {
                        (Some(n), _) => write!(out, "{}", n)?,
                        (None, Tree::Pair(l, r)) => {
                            out.write_str("<")?;
                            pending.push(Step::Text(">"));
                            pending.push(Step::Visit(r.as_ref()));
                            pending.push(Step::Text("."));
                            pending.push(Step::Visit(l.as_ref()));
                        }
                        (None, Tree::Nil) => out.write_str("nil")?,
                    }
                }
            }
        }
        Ok(())
    }
}

impl From<usize> for Tree {
    fn from(n: usize) -> Self {
        Tree::from_nat(n)
    }
}

impl FromIterator<Tree> for Tree {
    fn from_iter<I: IntoIterator<Item = Tree>>(iter: I) -> Self {
        Tree::from_list(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Literal dotted notation: `nil` and `<l.r>`
impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dotted(f, false)
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dotted(f, false)
    }
}
