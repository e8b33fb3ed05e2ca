//! Export of core as tree values and as text
pub mod pretty;
pub mod quote;
pub mod render;
