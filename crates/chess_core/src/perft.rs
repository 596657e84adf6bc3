use crate::{board::Board, movegen::legal_moves_for, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        let side = board.side_to_move;
        legal_moves_for(board, side, usize::MAX, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter() {
            let undo = board.apply_move(mv);
            nodes += inner(board, depth - 1, rest);
            board.undo_move(mv, undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, depth, &mut layers[..])
}

/// Per-root-move node counts, sorted by move text. Handy when comparing
/// against another move generator.
pub fn divide(board: &mut Board, depth: u8) -> Vec<(String, u64)> {
    let side = board.side_to_move;
    let mut moves = Vec::with_capacity(64);
    legal_moves_for(board, side, usize::MAX, &mut moves);

    let mut out: Vec<(String, u64)> = moves
        .iter()
        .map(|mv| {
            let undo = board.apply_move(mv);
            let nodes = perft(board, depth.saturating_sub(1));
            board.undo_move(mv, undo);
            (mv.to_string(), nodes)
        })
        .collect();
    out.sort();
    out
}
