//! Shared types module - data structures and constants used across the workspace
//!
//! Pure data with no external dependencies, usable from the core logic, the
//! terminal view, and the input layer alike.
//!
//! # Grid Dimensions
//!
//! The classic 4x4 playfield:
//!
//! - **Width**: 4 columns (indexed 0-3, x grows rightward)
//! - **Height**: 4 rows (indexed 0-3, y grows downward from the top edge)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MOVE_ANIM_MS` | 100 | Tile slide animation duration |
//! | `SETTLE_DELAY_MS` | 120 | Delay between a changed turn and the follow-up spawn |
//!
//! The settle delay is never shorter than the slide animation, so a spawned
//! tile cannot appear while tiles are still visually in flight.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_WIDTH, GRID_HEIGHT};
//!
//! // Direction vectors are expressed on a y-up axis
//! assert_eq!(Direction::Up.dy(), 1);
//! assert_eq!(Direction::Right.dx(), 1);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//! assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
//!
//! assert_eq!(GRID_WIDTH, 4);
//! assert_eq!(GRID_HEIGHT, 4);
//! ```

/// Grid width in cells (4 columns)
pub const GRID_WIDTH: u8 = 4;

/// Grid height in cells (4 rows)
pub const GRID_HEIGHT: u8 = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Value of every freshly spawned tile
pub const SPAWN_VALUE: u32 = 2;

/// Number of tiles placed at the start of a new game
pub const STARTING_TILES: u8 = 2;

/// Tile slide animation duration in milliseconds
pub const MOVE_ANIM_MS: u32 = 100;

/// Delay between a changed turn and its spawn/unlock/game-over pass
pub const SETTLE_DELAY_MS: u32 = 120;

/// Storage key under which the best score is persisted
pub const HISCORE_KEY: &str = "hiscore";

/// The four push directions
///
/// Direction vectors follow the conventional y-up mathematical axis:
/// `Up` is `(0, 1)`, `Down` is `(0, -1)`. Grid coordinates grow downward
/// from the top edge, so the grid negates `dy` when resolving neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in scan-friendly order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Horizontal component of the direction vector
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up | Direction::Down => 0,
        }
    }

    /// Vertical component of the direction vector (y-up axis)
    pub fn dy(&self) -> i8 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Left | Direction::Right => 0,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Produced by the input layer from key events; every action maps to one
/// turn of the board or a full restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Push all tiles in the given direction
    Move(Direction),
    /// Abandon the current game and start over
    NewGame,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("newgame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newgame" => Some(GameAction::NewGame),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(direction) => direction.as_str(),
            GameAction::NewGame => "newGame",
        }
    }
}
