//! Grid module - cell storage and coordinate queries
//!
//! The grid is a fixed width x height field of cells, each either empty or
//! holding the id of one tile. Cells live in a flat vector in row-major
//! order for cache locality; coordinates are (x, y) with x growing left to
//! right and y growing top to bottom.
//!
//! Direction vectors are expressed on a y-up axis, so neighbor resolution
//! negates `dy` when translating into grid rows.

use arrayvec::ArrayVec;

use crate::tile::TileId;
use crate::types::Direction;
use crate::SimpleRng;

/// Stable handle to one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub(crate) usize);

/// One grid cell: an immutable coordinate plus an optional resident tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: u8,
    y: u8,
    tile: Option<TileId>,
}

impl Cell {
    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn tile(&self) -> Option<TileId> {
        self.tile
    }

    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    pub fn is_occupied(&self) -> bool {
        self.tile.is_some()
    }
}

/// The playfield - width x height cells in flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of empty cells with the given dimensions
    ///
    /// A zero dimension yields a grid with no cells; every query on it
    /// answers `None`.
    pub fn new(width: u8, height: u8) -> Self {
        let size = width as usize * height as usize;
        let mut cells = Vec::with_capacity(size);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell { x, y, tile: None });
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Look up the cell at (x, y)
    /// Returns None if out of bounds
    pub fn cell_at(&self, x: i8, y: i8) -> Option<CellId> {
        self.index(x, y).map(CellId)
    }

    /// Resolve the neighbor of `id` one step in `direction`
    ///
    /// Direction vectors are y-up while rows grow downward, so the y
    /// component is negated: up from (1, 1) is (1, 0).
    pub fn adjacent_cell(&self, id: CellId, direction: Direction) -> Option<CellId> {
        let cell = &self.cells[id.0];
        let x = cell.x as i8 + direction.dx();
        let y = cell.y as i8 - direction.dy();
        self.cell_at(x, y)
    }

    /// All in-bounds orthogonal neighbors of `id`
    pub fn neighbors(&self, id: CellId) -> ArrayVec<CellId, 4> {
        let mut out = ArrayVec::new();
        for direction in Direction::ALL {
            if let Some(neighbor) = self.adjacent_cell(id, direction) {
                out.push(neighbor);
            }
        }
        out
    }

    /// Pick a uniformly random empty cell
    ///
    /// Starts from a random index and scans forward with wraparound,
    /// returning the first empty cell. Returns None once a full wrap finds
    /// every cell occupied.
    pub fn random_empty_cell(&self, rng: &mut SimpleRng) -> Option<CellId> {
        if self.cells.is_empty() {
            return None;
        }
        let len = self.cells.len();
        let start = rng.next_range(len as u32) as usize;
        for offset in 0..len {
            let idx = (start + offset) % len;
            if self.cells[idx].tile.is_none() {
                return Some(CellId(idx));
            }
        }
        None
    }

    /// Borrow the cell behind an id
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    /// Place or remove a tile reference on a cell
    ///
    /// The board keeps the matching tile-side back-reference in sync.
    pub fn set_tile(&mut self, id: CellId, tile: Option<TileId>) {
        self.cells[id.0].tile = tile;
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_occupied)
    }

    /// Cells of one row, left to right
    pub fn row(&self, y: u8) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell; the cells themselves survive
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.tile = None;
        }
    }
}
