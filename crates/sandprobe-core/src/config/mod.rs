//! Configuration loading and management.

mod schema;
mod loader;

pub use schema::*;
