//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for snapshot storage.
//! Implementations can use browser local storage, in-memory, etc.

use tracing::error;

use crate::board::Board;
use crate::error::StoreResult;
use crate::snapshot::{self, StoredSnapshot};

/// Key-value blob storage for the board snapshot
pub trait SnapshotStore {
    /// Read both stored blobs (missing ones are None)
    fn read(&self) -> StoreResult<StoredSnapshot>;

    /// Overwrite both blobs
    fn write(&self, snapshot: &StoredSnapshot) -> StoreResult<()>;

    /// Remove everything stored for the board
    fn clear(&self) -> StoreResult<()>;

    /// Load the stored board, or the default board if absent, invalid, or unreadable
    fn load_board(&self) -> Board {
        match self.read() {
            Ok(stored) => snapshot::decode_or_default(&stored),
            Err(e) => {
                error!(error = %e, "failed to read stored board; using default");
                crate::defaults::default_board()
            }
        }
    }

    /// Encode and write a board
    fn save_board(&self, board: &Board) -> StoreResult<()> {
        let stored = snapshot::encode(board)?;
        self.write(&stored)
    }
}
