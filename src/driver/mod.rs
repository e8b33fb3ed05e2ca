//! Front end plumbing: loading programs, options and commands
pub mod error;
pub mod eval;
pub mod options;
pub mod read;
pub mod source;
