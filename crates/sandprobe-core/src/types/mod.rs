//! Core types for sandprobe.

mod listing;
mod outcome;

pub use listing::*;
pub use outcome::*;
