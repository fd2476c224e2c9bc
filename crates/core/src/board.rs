//! Board module - the turn engine
//!
//! Resolves one push of the board per direction input: scan occupied cells
//! nearest the destination edge first, walk each tile stepwise until it
//! rests or merges, then wait out a short settle delay before the
//! unlock/spawn/game-over pass runs. Input is ignored while a turn is
//! settling and after the game has ended.
//!
//! The board owns every cell and tile; collaborators observe it through
//! [`BoardEvent`]s and snapshots and never mutate it directly.

use crate::event::BoardEvent;
use crate::grid::{CellId, Grid};
use crate::sched::{Scheduler, TaskId};
use crate::tile::{Tile, TileId, Tiles};
use crate::types::{
    Direction, GRID_HEIGHT, GRID_WIDTH, MOVE_ANIM_MS, SETTLE_DELAY_MS, SPAWN_VALUE, STARTING_TILES,
};
use crate::SimpleRng;

/// Construction parameters for a board
///
/// Everything is explicit so callers can build any size of game; the
/// default is the classic 4x4 with 2-valued spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u8,
    pub height: u8,
    /// Value carried by every spawned tile
    pub spawn_value: u32,
    /// Tiles placed by a new game
    pub starting_tiles: u8,
    /// Tile slide animation duration, consumed by visual collaborators
    pub move_anim_ms: u32,
    /// Delay between a changed turn and its unlock/spawn/game-over pass
    pub settle_delay_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            spawn_value: SPAWN_VALUE,
            starting_tiles: STARTING_TILES,
            move_anim_ms: MOVE_ANIM_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }
}

impl BoardConfig {
    /// Clamp the settle delay so a spawn never lands mid-slide
    fn normalized(mut self) -> Self {
        if self.settle_delay_ms < self.move_anim_ms {
            self.settle_delay_ms = self.move_anim_ms;
        }
        self
    }
}

/// Board lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting direction input
    Idle,
    /// A changed turn is waiting out its settle delay; input is ignored
    Settling,
    /// Terminal: the grid is full and no neighboring pair can merge
    Over,
}

/// Deferred board work driven by the tick clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoardTask {
    Settle,
}

/// The playfield plus the turn state machine driving it
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
    tiles: Tiles,
    rng: SimpleRng,
    phase: Phase,
    sched: Scheduler<BoardTask>,
    settle_task: Option<TaskId>,
    events: Vec<BoardEvent>,
}

impl Board {
    /// Create an empty, idle board with the given RNG seed
    ///
    /// No tiles are placed; call [`new_game`](Board::new_game) to start
    /// playing or [`place_tile`](Board::place_tile) to lay out a position.
    pub fn new(config: BoardConfig, seed: u32) -> Self {
        let config = config.normalized();
        Self {
            config,
            grid: Grid::new(config.width, config.height),
            tiles: Tiles::new(),
            rng: SimpleRng::new(seed),
            phase: Phase::Idle,
            sched: Scheduler::new(),
            settle_task: None,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Queued events since the last drain, in emission order
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Drain the queued events
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reset to a fresh game: clear everything, place the starting tiles
    ///
    /// A settle pass still pending from the abandoned game is cancelled so
    /// it cannot fire into the new one.
    pub fn new_game(&mut self) {
        if let Some(task) = self.settle_task.take() {
            self.sched.cancel(task);
        }
        self.phase = Phase::Idle;
        self.grid.clear();
        self.tiles.clear();
        self.events.clear();
        for _ in 0..self.config.starting_tiles {
            self.spawn_tile();
        }
    }

    /// Put a tile of `value` on the empty cell at (x, y)
    ///
    /// Returns None when the coordinate is out of bounds or the cell is
    /// already occupied.
    pub fn place_tile(&mut self, x: i8, y: i8, value: u32) -> Option<TileId> {
        let cell = self.grid.cell_at(x, y)?;
        if self.grid.cell(cell).is_occupied() {
            return None;
        }
        Some(self.create_tile(cell, value))
    }

    /// Resolve one push of the whole board
    ///
    /// Honored only while idle. Returns true when any tile moved or
    /// merged; the settle pass is then scheduled and input stays ignored
    /// until it has run. A turn that changes nothing leaves the board
    /// accepting input immediately.
    pub fn handle_direction(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        let changed = self.shift(direction);
        if changed {
            self.phase = Phase::Settling;
            let task = self
                .sched
                .schedule(self.config.settle_delay_ms, BoardTask::Settle);
            self.settle_task = Some(task);
        }
        changed
    }

    /// Advance the board clock
    ///
    /// Call once per frame with elapsed milliseconds. Fires the settle
    /// pass for a changed turn once its delay has fully elapsed.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for task in self.sched.advance(elapsed_ms) {
            match task {
                BoardTask::Settle => self.finish_settle(),
            }
        }
    }

    /// Terminal-state test: full grid with no mergeable neighbor pair
    ///
    /// Reuses the turn merge predicate. It runs right after the settle
    /// pass cleared every lock, so in practice only values decide;
    /// diagonal equals do not count, adjacency is orthogonal.
    pub fn check_game_over(&self) -> bool {
        if !self.grid.is_full() {
            return false;
        }
        for (id, tile) in self.tiles.iter() {
            let Some(cell) = tile.cell() else {
                continue;
            };
            for neighbor in self.grid.neighbors(cell) {
                if let Some(other) = self.grid.cell(neighbor).tile() {
                    if self.can_merge(id, other) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Scan origin and per-axis steps for one push
    ///
    /// The scan starts one cell inside the destination edge and proceeds
    /// away from it, so nearer tiles settle before farther ones reach
    /// them; x is the outer axis, y the inner.
    fn scan_params(&self, direction: Direction) -> (i8, i8, i8, i8) {
        let w = self.config.width as i8;
        let h = self.config.height as i8;
        match direction {
            Direction::Up => (0, 1, 1, 1),
            Direction::Down => (0, 1, h - 2, -1),
            Direction::Left => (1, 1, 0, 1),
            Direction::Right => (w - 2, -1, 0, 1),
        }
    }

    /// Move or merge every tile once; true when anything changed
    fn shift(&mut self, direction: Direction) -> bool {
        let (start_x, inc_x, start_y, inc_y) = self.scan_params(direction);
        let mut changed = false;
        let mut x = start_x;
        while x >= 0 && x < self.config.width as i8 {
            let mut y = start_y;
            while y >= 0 && y < self.config.height as i8 {
                if let Some(cell) = self.grid.cell_at(x, y) {
                    if self.grid.cell(cell).is_occupied() {
                        changed |= self.shift_tile(cell, direction);
                    }
                }
                y += inc_y;
            }
            x += inc_x;
        }
        changed
    }

    /// Walk the tile on `from` as far as it goes in `direction`
    ///
    /// Stops at the first occupied cell: merges into it when the values
    /// match and the blocker has not already merged this turn, otherwise
    /// rests on the last empty cell crossed. True when the tile ended up
    /// anywhere but `from`.
    fn shift_tile(&mut self, from: CellId, direction: Direction) -> bool {
        let Some(mover) = self.grid.cell(from).tile() else {
            return false;
        };
        let mut target = from;
        let mut next = self.grid.adjacent_cell(from, direction);
        while let Some(ahead) = next {
            if let Some(blocker) = self.grid.cell(ahead).tile() {
                if self.can_merge(mover, blocker) {
                    self.merge(mover, blocker, from, ahead);
                    return true;
                }
                break;
            }
            target = ahead;
            next = self.grid.adjacent_cell(ahead, direction);
        }
        if target != from {
            self.grid.set_tile(from, None);
            self.grid.set_tile(target, Some(mover));
            if let Some(tile) = self.tiles.get_mut(mover) {
                tile.cell = Some(target);
            }
            self.events.push(BoardEvent::TileMoved {
                tile: mover,
                from,
                to: target,
            });
            return true;
        }
        false
    }

    /// Merge predicate: equal values and the target not locked
    fn can_merge(&self, mover: TileId, target: TileId) -> bool {
        match (self.tiles.get(mover), self.tiles.get(target)) {
            (Some(a), Some(b)) => a.value() == b.value() && !b.is_locked(),
            _ => false,
        }
    }

    /// Consume `mover` into `target`: double in place, lock for the turn
    fn merge(&mut self, mover: TileId, target: TileId, from: CellId, to: CellId) {
        let Some(tile) = self.tiles.get_mut(target) else {
            return;
        };
        tile.value *= 2;
        tile.locked = true;
        let value = tile.value;
        self.grid.set_tile(from, None);
        self.tiles.remove(mover);
        self.events.push(BoardEvent::TileMerged {
            winner: target,
            consumed: mover,
            from,
            to,
            value,
        });
    }

    /// Post-turn pass: unlock every tile, spawn one, evaluate game over
    fn finish_settle(&mut self) {
        self.settle_task = None;
        self.phase = Phase::Idle;
        for (_, tile) in self.tiles.iter_mut() {
            tile.locked = false;
        }
        self.spawn_tile();
        if self.check_game_over() {
            self.phase = Phase::Over;
            self.events.push(BoardEvent::GameOver);
        }
    }

    /// Spawn one tile on a random empty cell; silent no-op when full
    fn spawn_tile(&mut self) {
        if let Some(cell) = self.grid.random_empty_cell(&mut self.rng) {
            self.create_tile(cell, self.config.spawn_value);
        }
    }

    fn create_tile(&mut self, cell: CellId, value: u32) -> TileId {
        let tile = self.tiles.insert(Tile::new(value, cell));
        self.grid.set_tile(cell, Some(tile));
        self.events.push(BoardEvent::TileSpawned { tile, cell, value });
        tile
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default(), 1)
    }
}
