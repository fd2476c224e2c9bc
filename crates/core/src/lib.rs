//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and turn
//! resolution. It has **zero dependencies** on UI, timing sources, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical games
//! - **Testable**: Comprehensive unit tests for every turn rule
//! - **Portable**: Runs in a terminal shell, headless, or under a bench
//!
//! # Module Structure
//!
//! - [`grid`]: cell storage, adjacency and random-empty-cell queries
//! - [`tile`]: tile entities in a slab arena with stable ids
//! - [`board`]: the turn engine - scan order, merging, settle, game over
//! - [`sched`]: cancellable delayed tasks driving the settle window
//! - [`event`]: notifications consumed by views and animations
//! - [`session`]: score tracking over a pluggable high-score store
//! - [`game`]: the orchestrator the shell talks to
//! - [`snapshot`]: plain render state for views and tests
//! - [`rng`]: small seeded LCG behind spawn placement
//!
//! # Game Rules
//!
//! One direction input resolves one full turn:
//!
//! - Tiles slide as far as they can toward the pushed edge, nearest tiles
//!   first, so nothing blocks incorrectly.
//! - Two tiles of equal value merge into one of double value; a tile that
//!   was just produced by a merge is locked and cannot merge again until
//!   the turn settles.
//! - A changed turn spawns one new tile after the settle delay, then the
//!   board checks for game over: full grid, no equal neighbors.
//! - Inputs during the settle window are dropped, never queued.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{BoardConfig, Game, MemoryStore};
//! use tui_2048_types::{Direction, GameAction};
//!
//! // Deal a fresh 4x4 game with two starting tiles
//! let mut game = Game::new(BoardConfig::default(), 12345, MemoryStore::default());
//!
//! // Push everything left, then let the turn settle
//! game.handle_action(GameAction::Move(Direction::Left));
//! game.tick(200);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.values.len(), 16);
//! assert!(!snapshot.settling);
//! ```
//!
//! # Timing
//!
//! The core never reads a clock. Call [`Game::tick`] (or
//! [`Board::tick`](board::Board::tick)) every frame with elapsed
//! milliseconds; the settle delay counts down against exactly that.

pub mod board;
pub mod event;
pub mod game;
pub mod grid;
pub mod rng;
pub mod sched;
pub mod session;
pub mod snapshot;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardConfig, Phase};
pub use event::BoardEvent;
pub use game::Game;
pub use grid::{Cell, CellId, Grid};
pub use rng::SimpleRng;
pub use sched::{Scheduler, TaskId};
pub use session::{HighScoreStore, MemoryStore, Session};
pub use snapshot::GameSnapshot;
pub use tile::{Tile, TileId, Tiles};
