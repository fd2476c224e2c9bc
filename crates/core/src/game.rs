//! Game module - the orchestrator tying board and session together
//!
//! Feeds inputs to the board, forwards merge values to the session while
//! draining board events, and assembles render snapshots. The shell talks
//! to this type only; board and session stay private behind it.

use crate::board::{Board, BoardConfig, Phase};
use crate::event::BoardEvent;
use crate::session::{HighScoreStore, Session};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// One running game: board, session, and the event pump between them
#[derive(Debug, Clone)]
pub struct Game<S: HighScoreStore> {
    board: Board,
    session: Session<S>,
    /// Events drained from the board, waiting for the shell
    events: Vec<BoardEvent>,
}

impl<S: HighScoreStore> Game<S> {
    /// Create a game over a store and deal the opening board
    pub fn new(config: BoardConfig, seed: u32, store: S) -> Self {
        let mut game = Self {
            board: Board::new(config, seed),
            session: Session::new(store),
            events: Vec::new(),
        };
        game.new_game();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for tests and tooling that lay out positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Start over: reset the session, redeal the board
    ///
    /// Undelivered events of the abandoned game are dropped; the shell
    /// only sees the fresh deal.
    pub fn new_game(&mut self) {
        self.session.new_game();
        self.board.new_game();
        self.events.clear();
        self.pump_events();
    }

    /// Apply one input; true when it changed anything
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        let changed = match action {
            GameAction::Move(direction) => self.board.handle_direction(direction),
            GameAction::NewGame => {
                self.new_game();
                true
            }
        };
        self.pump_events();
        changed
    }

    /// Advance the game clock by `elapsed_ms`
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.board.tick(elapsed_ms);
        self.pump_events();
    }

    /// Drain the events observed since the last call
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Write the visible state into `out`, reusing its allocations
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let grid = self.board.grid();
        out.width = grid.width();
        out.height = grid.height();
        out.values.clear();
        for row in grid.rows() {
            for cell in row {
                let value = cell
                    .tile()
                    .and_then(|id| self.board.tile(id))
                    .map_or(0, |tile| tile.value());
                out.values.push(value);
            }
        }
        out.score = self.session.score();
        out.best = self.session.best();
        out.settling = self.board.phase() == Phase::Settling;
        out.game_over = self.board.is_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Move board events into the outbox, scoring merges on the way
    fn pump_events(&mut self) {
        for event in self.board.take_events() {
            if let BoardEvent::TileMerged { value, .. } = event {
                self.session.add_score(value);
            }
            self.events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use crate::types::Direction;

    /// Game over an empty deterministic board, for laying out positions
    fn fixture_game(width: u8, height: u8) -> Game<MemoryStore> {
        Game::new(
            BoardConfig {
                width,
                height,
                starting_tiles: 0,
                ..BoardConfig::default()
            },
            1,
            MemoryStore::default(),
        )
    }

    fn settle(game: &mut Game<MemoryStore>) {
        let delay = game.board().config().settle_delay_ms;
        game.tick(delay);
    }

    #[test]
    fn test_opening_deal() {
        let mut game = Game::new(BoardConfig::default(), 1, MemoryStore::default());

        let snapshot = game.snapshot();
        assert_eq!(snapshot.values.len(), 16);
        assert_eq!(snapshot.values.iter().filter(|v| **v != 0).count(), 2);
        assert_eq!(snapshot.score, 0);
        assert!(!snapshot.game_over);
        assert!(!snapshot.settling);

        let spawns = game
            .take_events()
            .iter()
            .filter(|event| matches!(event, BoardEvent::TileSpawned { .. }))
            .count();
        assert_eq!(spawns, 2);
    }

    #[test]
    fn test_merge_value_reaches_session() {
        let mut game = fixture_game(4, 4);
        game.board_mut().place_tile(0, 0, 4).unwrap();
        game.board_mut().place_tile(1, 0, 4).unwrap();

        assert!(game.handle_action(GameAction::Move(Direction::Left)));
        assert_eq!(game.session().score(), 8);
        assert_eq!(game.session().best(), 8);
    }

    #[test]
    fn test_unchanged_move_scores_nothing() {
        let mut game = fixture_game(4, 4);
        game.board_mut().place_tile(0, 0, 2).unwrap();
        game.take_events();

        assert!(!game.handle_action(GameAction::Move(Direction::Left)));
        assert_eq!(game.session().score(), 0);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_tick_completes_the_turn() {
        let mut game = fixture_game(4, 4);
        game.board_mut().place_tile(0, 0, 2).unwrap();

        game.handle_action(GameAction::Move(Direction::Right));
        assert!(game.snapshot().settling);

        settle(&mut game);
        let snapshot = game.snapshot();
        assert!(!snapshot.settling);
        assert_eq!(snapshot.values.iter().filter(|v| **v != 0).count(), 2);
    }

    #[test]
    fn test_new_game_action_resets_score_keeps_best() {
        let mut game = fixture_game(4, 4);
        game.board_mut().place_tile(0, 0, 4).unwrap();
        game.board_mut().place_tile(1, 0, 4).unwrap();
        game.handle_action(GameAction::Move(Direction::Left));
        assert_eq!(game.session().score(), 8);

        assert!(game.handle_action(GameAction::NewGame));
        assert_eq!(game.session().score(), 0);
        assert_eq!(game.session().best(), 8);

        // Only the fresh deal's spawns are visible after the reset.
        let events = game.take_events();
        assert!(events
            .iter()
            .all(|event| matches!(event, BoardEvent::TileSpawned { .. })));
    }

    #[test]
    fn test_game_over_reaches_the_shell() {
        let mut game = fixture_game(2, 2);
        game.board_mut().place_tile(0, 0, 2).unwrap();
        game.board_mut().place_tile(1, 0, 2).unwrap();
        game.board_mut().place_tile(0, 1, 8).unwrap();
        game.board_mut().place_tile(1, 1, 4).unwrap();
        game.take_events();

        game.handle_action(GameAction::Move(Direction::Left));
        settle(&mut game);

        assert!(game.snapshot().game_over);
        assert!(game
            .take_events()
            .iter()
            .any(|event| matches!(event, BoardEvent::GameOver)));
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut game = fixture_game(4, 4);
        game.board_mut().place_tile(3, 3, 16).unwrap();

        let mut snapshot = GameSnapshot::default();
        game.snapshot_into(&mut snapshot);
        assert_eq!(snapshot.value_at(3, 3), 16);

        game.handle_action(GameAction::Move(Direction::Up));
        game.snapshot_into(&mut snapshot);
        assert_eq!(snapshot.value_at(3, 0), 16);
        assert_eq!(snapshot.values.len(), 16);
    }
}
