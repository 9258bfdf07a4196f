//! Approval State Persistence
//!
//! Handles where approval state lives between runs:
//! - Key-value storage backends (in-memory, JSON file)
//! - The approval store that encodes approved ids under a fixed key

mod approval;
mod storage;

pub use approval::{ApprovalStore, StateStore};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StoreError, StoreResult};
