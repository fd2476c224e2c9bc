//! High-score persistence across game sessions

use tempfile::TempDir;

use tui_2048::core::{BoardConfig, Game, HighScoreStore};
use tui_2048::store::FileStore;
use tui_2048::types::{Direction, GameAction};

fn fixture_game(store: FileStore) -> Game<FileStore> {
    Game::new(
        BoardConfig {
            starting_tiles: 0,
            ..BoardConfig::default()
        },
        1,
        store,
    )
}

#[test]
fn test_best_score_survives_a_process_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hiscore.json");

    {
        let mut game = fixture_game(FileStore::new(&path));
        game.board_mut().place_tile(0, 0, 16).unwrap();
        game.board_mut().place_tile(1, 0, 16).unwrap();
        game.handle_action(GameAction::Move(Direction::Left));
        assert_eq!(game.session().score(), 32);
    }

    // A fresh game over the same file sees the record.
    let game = fixture_game(FileStore::new(&path));
    assert_eq!(game.snapshot().best, 32);
    assert_eq!(game.snapshot().score, 0);
}

#[test]
fn test_lower_scores_do_not_overwrite_the_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hiscore.json");
    std::fs::write(&path, r#"{"hiscore": "100"}"#).unwrap();

    let mut game = fixture_game(FileStore::new(&path));
    assert_eq!(game.session().best(), 100);

    game.board_mut().place_tile(0, 0, 4).unwrap();
    game.board_mut().place_tile(1, 0, 4).unwrap();
    game.handle_action(GameAction::Move(Direction::Left));
    assert_eq!(game.session().score(), 8);
    assert_eq!(game.session().best(), 100);

    let raw = std::fs::read_to_string(&path).unwrap();
    let entries: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&raw).unwrap();
    assert_eq!(entries["hiscore"], serde_json::Value::String("100".into()));
}

#[test]
fn test_corrupt_store_leaves_the_game_playable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hiscore.json");
    std::fs::write(&path, "{{{ not json").unwrap();

    let mut game = fixture_game(FileStore::new(&path));
    assert_eq!(game.session().best(), 0);

    game.board_mut().place_tile(0, 0, 2).unwrap();
    game.board_mut().place_tile(1, 0, 2).unwrap();
    game.handle_action(GameAction::Move(Direction::Left));
    assert_eq!(game.session().score(), 4);

    // The first record replaces the corrupt file.
    assert_eq!(FileStore::new(&path).load_high_score(), 4);
}
