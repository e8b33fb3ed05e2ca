//! The core program representation and its encodings
pub mod atom;
pub mod desugar;
pub mod error;
pub mod export;
pub mod expr;
pub mod name;
pub mod tree;
pub mod unquote;
