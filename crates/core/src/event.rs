//! Event module - board-to-collaborator notifications
//!
//! The board reports everything a visual layer needs to animate a turn:
//! which tile appeared where, which tile slid where, and which pair
//! merged. Events are informational only; they never feed back into the
//! turn logic. The orchestrator drains them after every input and tick.

use crate::grid::CellId;
use crate::tile::TileId;

/// One observable board change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// A new tile appeared on `cell`
    TileSpawned {
        tile: TileId,
        cell: CellId,
        value: u32,
    },
    /// A tile slid from `from` to the empty cell `to`
    TileMoved {
        tile: TileId,
        from: CellId,
        to: CellId,
    },
    /// The tile moving out of `from` merged into the tile on `to`
    ///
    /// `consumed` is destroyed by the merge and its id is already stale
    /// when the event is observed; it exists to correlate with earlier
    /// events. `value` is the doubled value of `winner`, which is also
    /// the score awarded for the merge.
    TileMerged {
        winner: TileId,
        consumed: TileId,
        from: CellId,
        to: CellId,
        value: u32,
    },
    /// The grid is full and no neighboring pair can merge
    GameOver,
}
