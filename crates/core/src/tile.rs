//! Tile module - tile entities and their arena
//!
//! Tiles hold a value (a power of two), a back-reference to the cell they
//! occupy, and a merge lock that prevents double merging within one turn.
//! They live in a slab-style arena with stable ids and a free list; the
//! cell/tile cross-references are plain arena indices in both directions,
//! so the cyclic shape of the data never touches ownership.

use crate::grid::CellId;

/// Stable handle to one live tile
///
/// Valid for the lifetime of the tile; slots are recycled after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub(crate) usize);

/// One numbered tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub(crate) value: u32,
    pub(crate) cell: Option<CellId>,
    pub(crate) locked: bool,
}

impl Tile {
    /// Create a tile of `value` sitting on `cell`, unlocked
    pub fn new(value: u32, cell: CellId) -> Self {
        Self {
            value,
            cell: Some(cell),
            locked: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn cell(&self) -> Option<CellId> {
        self.cell
    }

    /// True while the tile is the fresh product of a merge this turn
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Arena of live tiles
///
/// Insertion reuses freed slots, so the arena never grows past the peak
/// tile population of a game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tiles {
    slots: Vec<Option<Tile>>,
    free: Vec<usize>,
}

impl Tiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile, returning its stable id
    pub fn insert(&mut self, tile: Tile) -> TileId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(tile);
                TileId(slot)
            }
            None => {
                self.slots.push(Some(tile));
                TileId(self.slots.len() - 1)
            }
        }
    }

    /// Destroy a tile, freeing its slot
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let tile = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(tile)
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.slots.get(id.0)?.as_ref()
    }

    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    /// Number of live tiles
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live tiles with their ids, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, tile)| tile.as_ref().map(|t| (TileId(slot), t)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TileId, &mut Tile)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(slot, tile)| tile.as_mut().map(|t| (TileId(slot), t)))
    }

    /// Destroy every tile
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
