use super::*;
use chess_core::{legal_moves, parse_move, Coord};

fn no_book(depth: u8) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        use_book: false,
        ..EngineConfig::default()
    }
}

#[test]
fn test_search_reports_move_and_nodes() {
    let mut engine = ClassicalEngine::with_seed(no_book(2), 0).unwrap();
    let result = engine.search(&Board::new(), 2);
    let mv = result.best_move.expect("start position has moves");
    assert!(legal_moves(&Board::new()).contains(&mv));
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);
    assert_eq!(engine.nodes(), result.nodes);
}

#[test]
fn test_suggestion_is_played_without_searching() {
    let mut engine = ClassicalEngine::with_seed(no_book(3), 0).unwrap();
    let board = Board::new();
    let suggested = legal_moves(&board)[5];
    assert_eq!(engine.select_with(&board, Some(suggested)), Some(suggested));
    assert_eq!(engine.nodes(), 0);
}

#[test]
fn test_no_suggestion_falls_back_to_search() {
    let mut engine = ClassicalEngine::with_seed(no_book(2), 0).unwrap();
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mv = engine.select_with(&board, None).expect("white has moves");
    assert_eq!(mv.to, Coord::from_algebraic("e8").unwrap());
    assert!(engine.nodes() > 0);
}

#[test]
fn test_book_reply_used_in_opening() {
    let mut engine = ClassicalEngine::with_seed(EngineConfig::default(), 42).unwrap();
    let mut board = Board::new();
    let (from, to) = parse_move("2e4e").unwrap();
    board.play_move(from, to).unwrap();

    let reply = engine.select_move(&board).expect("black has moves");
    let target = reply.to.to_string();
    assert!(target == "e5" || target == "d5", "unexpected reply {reply}");
    assert_eq!(engine.nodes(), 0);
}

#[test]
fn test_select_move_without_book_searches() {
    let mut engine = ClassicalEngine::with_seed(no_book(1), 0).unwrap();
    let mv = engine.select_move(&Board::new());
    assert!(mv.is_some());
    assert!(engine.nodes() > 0);
}

#[test]
fn test_no_legal_moves_selects_nothing() {
    let mut engine = ClassicalEngine::with_seed(no_book(2), 0).unwrap();
    let mated = Board::from_fen("6k1/8/8/8/8/8/5PPP/4r1K1 w - - 0 1").unwrap();
    assert_eq!(engine.select_move(&mated), None);
}

#[test]
fn test_new_game_resets_statistics() {
    let mut engine = ClassicalEngine::with_seed(no_book(1), 0).unwrap();
    engine.search(&Board::new(), 1);
    engine.new_game();
    assert_eq!(engine.nodes(), 0);
    assert_eq!(engine.name(), "Classical v1.0");
}

#[test]
fn test_constructors_reject_invalid_config() {
    let shallow = no_book(0);
    assert!(matches!(
        ClassicalEngine::with_seed(shallow.clone(), 0),
        Err(ConfigError::InvalidDepth)
    ));
    assert!(matches!(
        ClassicalEngine::from_config(shallow),
        Err(ConfigError::InvalidDepth)
    ));

    let cramped = EngineConfig {
        max_moves: 0,
        ..no_book(2)
    };
    assert!(matches!(
        ClassicalEngine::with_seed(cramped, 0),
        Err(ConfigError::CapacityTooSmall { got: 0, min: 218 })
    ));
}

#[test]
fn test_default_engine_uses_default_config() {
    let engine = ClassicalEngine::default();
    assert_eq!(engine.config(), &EngineConfig::default());
}
