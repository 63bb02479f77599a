//! # In-Memory Storage
//!
//! Single-process, single-user storage: three independent record stores
//! held in memory, optionally seeded once from JSON files at startup.

pub mod connection;
pub mod record_store;
pub mod seed;

#[cfg(test)]
pub mod test_utils;

pub use connection::MemoryConnection;
pub use record_store::MemoryRecordStore;
pub use seed::{SeedData, SeedError};
