//! Storage layer for Strata collection stores
//!
//! This crate implements the in-memory collection store with:
//! - InMemoryCollectionStore: map of named collections behind a single `parking_lot::RwLock`
//! - Per-collection identifier counters that never decrease or repeat
//! - Collection name validation ahead of any state access
//! - Failure injection for conformance testing of store callers
//!
//! # Testing Support
//!
//! The [`testing`] module carries failure injection, a call-recording store
//! wrapper, and a reference model used by the property tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod collection;
pub mod in_memory;
pub mod testing;

pub use in_memory::InMemoryCollectionStore;
