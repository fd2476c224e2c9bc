//! Snapshot module - plain render state handed to views
//!
//! A snapshot is the complete visible state of one frame: the value grid
//! in row-major order, both scores, and the phase flags. Views and tests
//! consume snapshots instead of reaching into the board.

/// Visible state of one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Tile values row-major, 0 for an empty cell
    pub values: Vec<u32>,
    pub score: u32,
    pub best: u32,
    /// A changed turn is waiting out its settle delay
    pub settling: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Value at (x, y), 0 when empty or out of bounds
    pub fn value_at(&self, x: u8, y: u8) -> u32 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.values[y as usize * self.width as usize + x as usize]
    }

    /// Reset to the empty snapshot, keeping the values allocation
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.values.clear();
        self.score = 0;
        self.best = 0;
        self.settling = false;
        self.game_over = false;
    }
}
