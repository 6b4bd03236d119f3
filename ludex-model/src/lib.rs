//! Game catalog data model types and YAML seed I/O.
//!
//! This crate defines the persistent data model for the game catalog without
//! any database dependencies. Consumers can use these types directly for
//! serialization, display, or passing to `ludex-db` for persistence.

pub mod seed;
pub mod types;

pub use seed::{load_seed_file, SeedError, SeedFile, SeedGame};
pub use types::*;
