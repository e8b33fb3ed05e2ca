extern crate codespan_reporting;
extern crate indexmap;
extern crate itertools;
extern crate petgraph;
extern crate pretty;
extern crate thiserror;

pub mod common;
pub mod core;
pub mod driver;
pub mod eval;
pub mod syntax;
