//! Testing utilities for collection store conformance
//!
//! This module provides tools for testing stores and the callers built on them:
//!
//! - **Failure Injection**: Per-operation forced failures, as generic failures or connection issues
//! - **Recording**: Store wrapper that records the sequence of operations called
//! - **Reference Model**: In-memory model for expected state tracking
//!
//! # Example
//!
//! ```ignore
//! use strata_storage::testing::{FailureInjection, RecordingStore, ReferenceModel};
//!
//! // Make every generate_id call report a connection issue
//! let failures = FailureInjection::failing(StoreOperation::GenerateId).with_connection_issue(true);
//! let store = RecordingStore::new(InMemoryCollectionStore::with_failure_injection(failures));
//!
//! // ... drive a caller ...
//! assert!(!store.was_called(StoreOperation::InsertElement));
//! ```

mod failure_injection;
mod recording;
mod reference_model;

pub use failure_injection::FailureInjection;
pub use recording::RecordingStore;
pub use reference_model::{ModelOperation, ModelOutcome, ModelOutput, ReferenceModel, StateMismatch};
