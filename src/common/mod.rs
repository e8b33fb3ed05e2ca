//! Facilities shared between phases
pub mod prettify;
