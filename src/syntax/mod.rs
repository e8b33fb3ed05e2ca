//! Sugared syntax and analysis performed on it before desugaring
pub mod ast;
pub mod macros;
