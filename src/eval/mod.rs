//! Reference evaluation of core programs
pub mod error;
pub mod exec;

pub use exec::{run, Machine};
