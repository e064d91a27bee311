//! Repository Layer
//!
//! Persistence abstraction for board snapshots.

mod traits;
mod memory;
mod keyed;

pub use traits::SnapshotStore;
pub use memory::MemoryStore;
pub use keyed::{BlobStore, KeyedStore};
