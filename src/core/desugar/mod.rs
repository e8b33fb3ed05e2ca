//! Desugaring of sugared programs into core.
//!
//! This:
//! - inlines macro calls
//! - translates if/else into pairs of while loops over two stacks
//! - translates switch into nested if/else
//!
//! The result contains only assignments and while loops.

pub mod conditional;
pub mod desugarable;
pub mod desugarer;

pub use desugarable::Desugarable;
pub use desugarer::{Desugarer, MacroTable};
