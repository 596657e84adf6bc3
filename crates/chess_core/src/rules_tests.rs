use super::*;

fn c(s: &str) -> Coord {
    Coord::from_algebraic(s).unwrap()
}

fn fen(s: &str) -> Board {
    Board::from_fen(s).unwrap()
}

#[test]
fn test_pawn_pushes() {
    let b = Board::new();
    assert!(is_pseudo_legal(&b, c("e2"), c("e3")));
    assert!(is_pseudo_legal(&b, c("e2"), c("e4")));
    assert!(!is_pseudo_legal(&b, c("e2"), c("e5")));
    assert!(!is_pseudo_legal(&b, c("e2"), c("d3")));
    // Pawns never move backwards.
    assert!(is_pseudo_legal(&b, c("e7"), c("e5")));
    assert!(!is_pseudo_legal(&b, c("e7"), c("e8")));
}

#[test]
fn test_pawn_double_push_needs_home_row_and_clear_path() {
    let b = fen("4k3/8/8/8/8/4n3/3P4/4K3 w - - 0 1");
    assert!(is_pseudo_legal(&b, c("d2"), c("d4")));
    let blocked = fen("4k3/8/8/8/8/3n4/3P4/4K3 w - - 0 1");
    assert!(!is_pseudo_legal(&blocked, c("d2"), c("d4")));
    assert!(!is_pseudo_legal(&blocked, c("d2"), c("d3")));
    let advanced = fen("4k3/8/8/8/3P4/8/8/4K3 w - - 0 1");
    assert!(!is_pseudo_legal(&advanced, c("d4"), c("d6")));
}

#[test]
fn test_pawn_captures_only_enemies_diagonally() {
    let b = fen("4k3/8/8/2p1P3/3P4/8/8/4K3 w - - 0 1");
    assert!(is_pseudo_legal(&b, c("d4"), c("c5")));
    assert!(!is_pseudo_legal(&b, c("d4"), c("e5")));
    // Empty diagonal: not a capture, and en passant is handled elsewhere.
    let ep = fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1");
    assert!(!is_pseudo_legal(&ep, c("d5"), c("e6")));
}

#[test]
fn test_knight_jumps() {
    let b = Board::new();
    assert!(is_pseudo_legal(&b, c("g1"), c("f3")));
    assert!(is_pseudo_legal(&b, c("g1"), c("h3")));
    assert!(!is_pseudo_legal(&b, c("g1"), c("e2")));
    assert!(!is_pseudo_legal(&b, c("g1"), c("g3")));
}

#[test]
fn test_sliders_stop_at_first_piece() {
    let b = fen("4k3/8/8/8/1p6/8/8/R1B1K3 w - - 0 1");
    // Rook: c1 holds its own bishop and d1 is behind it.
    assert!(is_pseudo_legal(&b, c("a1"), c("b1")));
    assert!(!is_pseudo_legal(&b, c("a1"), c("c1")));
    assert!(!is_pseudo_legal(&b, c("a1"), c("d1")));
    assert!(is_pseudo_legal(&b, c("a1"), c("a8")));
    assert!(!is_pseudo_legal(&b, c("a1"), c("b2")));
    // Bishop: diagonals only, and a capture ends the ray.
    assert!(is_pseudo_legal(&b, c("c1"), c("a3")));
    assert!(!is_pseudo_legal(&b, c("c1"), c("c2")));
    let through = fen("4k3/8/8/8/8/8/1p6/2B1K3 w - - 0 1");
    assert!(is_pseudo_legal(&through, c("c1"), c("b2")));
    assert!(!is_pseudo_legal(&through, c("c1"), c("a3")));
    assert!(is_pseudo_legal(&b, c("c1"), c("h6")));
}

#[test]
fn test_queen_moves_like_rook_or_bishop() {
    let b = fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
    assert!(is_pseudo_legal(&b, c("d4"), c("d8")));
    assert!(is_pseudo_legal(&b, c("d4"), c("a7")));
    assert!(is_pseudo_legal(&b, c("d4"), c("h4")));
    assert!(!is_pseudo_legal(&b, c("d4"), c("e6")));
}

#[test]
fn test_king_single_steps_only() {
    let b = fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(is_pseudo_legal(&b, c("e1"), c("f2")));
    assert!(is_pseudo_legal(&b, c("e1"), c("d1")));
    // Castling is not a single-step king move.
    assert!(!is_pseudo_legal(&b, c("e1"), c("g1")));
    assert!(!is_pseudo_legal(&b, c("e1"), c("h1")));
}

#[test]
fn test_cannot_capture_own_piece_or_stay_put() {
    let b = Board::new();
    assert!(!is_pseudo_legal(&b, c("d1"), c("d2")));
    assert!(!is_pseudo_legal(&b, c("d1"), c("d1")));
    assert!(!is_pseudo_legal(&b, c("d4"), c("d5")));
}

#[test]
fn test_check_move_reports_king_exposure() {
    // The knight on e2 is pinned by the rook on e8.
    let mut b = fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
    let before = b.clone();
    assert_eq!(
        check_move(&mut b, c("e2"), c("c3")),
        Err(IllegalMove::ExposesKing {
            from: c("e2"),
            to: c("c3")
        })
    );
    assert_eq!(b, before);
    assert!(!is_legal(&b, c("e2"), c("c3")));
    assert!(is_legal(&b, c("e1"), c("d1")));
}

#[test]
fn test_king_cannot_step_into_attack() {
    let b = fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
    assert!(is_pseudo_legal(&b, c("e1"), c("e2")));
    assert!(!is_legal(&b, c("e1"), c("e2")));
    assert!(is_legal(&b, c("e1"), c("f1")));
}
