use crate::{attacks, error::FenError, error::IllegalMove, movegen, rules, types::*};

/// Castling rights plus the "has castled" markers the evaluator rewards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
    pub white_castled: bool,
    pub black_castled: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
            white_castled: false,
            black_castled: false,
        }
    }

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn has_castled(&self, c: Color) -> bool {
        match c {
            Color::White => self.white_castled,
            Color::Black => self.black_castled,
        }
    }

    fn clear_kingside(&mut self, c: Color) {
        match c {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    fn clear_queenside(&mut self, c: Color) {
        match c {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    fn mark_castled(&mut self, c: Color) {
        match c {
            Color::White => self.white_castled = true,
            Color::Black => self.black_castled = true,
        }
        self.clear_kingside(c);
        self.clear_queenside(c);
    }
}

/// Starting square of `c`'s king.
pub fn king_home(c: Color) -> Coord {
    Coord::at(c.back_row(), 4)
}

/// Starting square of `c`'s rook on the given wing.
pub fn rook_home(c: Color, kingside: bool) -> Coord {
    Coord::at(c.back_row(), if kingside { 7 } else { 0 })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    kings: [Coord; 2],
    pub castling: CastlingRights,
    /// Square a pawn passed over on the previous ply, if it advanced two.
    pub en_passant: Option<Coord>,
    pub side_to_move: Color,
    /// Half-moves played since the start of the game.
    pub ply: u32,
}

/// State `apply_move` overwrites and `undo_move` must put back verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
    pub castling: CastlingRights,
    pub en_passant: Option<Coord>,
    pub side_to_move: Color,
    pub ply: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting layout, White to move.
    pub fn new() -> Self {
        let mut b = Board::empty();
        b.castling = CastlingRights::all();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as i8;
            for c in [Color::White, Color::Black] {
                b.set_piece(Coord::at(c.back_row(), col), Some(Piece::new(c, kind)));
                b.set_piece(
                    Coord::at(c.pawn_row(), col),
                    Some(Piece::new(c, PieceKind::Pawn)),
                );
            }
        }
        b
    }

    fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            kings: [king_home(Color::White), king_home(Color::Black)],
            castling: CastlingRights::default(),
            en_passant: None,
            side_to_move: Color::White,
            ply: 0,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        // Forsyth-Edwards Notation parser used by tests and tooling.
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut b = Board::empty();
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut king_count = [0u8; 2];
        // FEN lists rank 8 first, which is row 0 here.
        for (row, rank_str) in ranks.iter().enumerate() {
            let row = row as i8;
            let bad_width = FenError::BadRankWidth {
                rank: 8 - row as u8,
            };
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let pc = Piece::from_char(ch).ok_or(FenError::BadPiece(ch))?;
                    let at = Coord::new(row, col).ok_or(bad_width.clone())?;
                    if pc.kind == PieceKind::King {
                        king_count[pc.color.idx()] += 1;
                    }
                    b.set_piece(at, Some(pc));
                    col += 1;
                }
                if col > 8 {
                    return Err(bad_width);
                }
            }
            if col != 8 {
                return Err(bad_width);
            }
        }
        if king_count[0] != 1 {
            return Err(FenError::KingCount("white"));
        }
        if king_count[1] != 1 {
            return Err(FenError::KingCount("black"));
        }

        b.side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::BadSideToMove(stm_part.to_string())),
        };

        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => b.castling.white_kingside = true,
                    'Q' => b.castling.white_queenside = true,
                    'k' => b.castling.black_kingside = true,
                    'q' => b.castling.black_queenside = true,
                    _ => return Err(FenError::BadCastling(c)),
                }
            }
        }

        b.en_passant = if ep_part == "-" {
            None
        } else {
            Some(
                Coord::from_algebraic(ep_part)
                    .ok_or_else(|| FenError::BadEnPassant(ep_part.to_string()))?,
            )
        };

        let bad_counter = || FenError::BadCounter(fullmove_part.to_string());
        let fullmove: u32 = fullmove_part.parse().map_err(|_| bad_counter())?;
        let black_offset = match b.side_to_move {
            Color::White => 0,
            Color::Black => 1,
        };
        b.ply = fullmove
            .saturating_sub(1)
            .checked_mul(2)
            .and_then(|ply| ply.checked_add(black_offset))
            .ok_or_else(bad_counter)?;

        Ok(b)
    }

    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.squares[at.row as usize][at.col as usize]
    }

    /// Places (or clears) a square. Placing a king also moves the king cache.
    pub fn set_piece(&mut self, at: Coord, pc: Option<Piece>) {
        if let Some(p) = pc
            && p.kind == PieceKind::King
        {
            self.kings[p.color.idx()] = at;
        }
        self.squares[at.row as usize][at.col as usize] = pc;
    }

    #[inline]
    pub fn king_square(&self, c: Color) -> Coord {
        self.kings[c.idx()]
    }

    pub fn in_check(&self, c: Color) -> bool {
        attacks::is_square_attacked(self, self.king_square(c), c.other())
    }

    /// Iterates the occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|at| self.piece_at(at).map(|pc| (at, pc)))
    }

    /// Resolves `from -> to` into a legal move for the side to move and plays it.
    ///
    /// Castling and en passant are recognised by their king/pawn geometry, and a
    /// pawn reaching the last rank promotes to a queen. Nothing is changed when
    /// the move is refused.
    pub fn play_move(&mut self, from: Coord, to: Coord) -> Result<Move, IllegalMove> {
        let mv = match movegen::special_move(self, from, to) {
            Some(mv) => mv,
            None => rules::check_move(self, from, to)?,
        };
        self.apply_move(&mv);
        Ok(mv)
    }

    /// Plays a move already known to be legal and returns what `undo_move` needs.
    pub fn apply_move(&mut self, mv: &Move) -> Undo {
        let undo = Undo {
            castling: self.castling,
            en_passant: self.en_passant,
            side_to_move: self.side_to_move,
            ply: self.ply,
        };
        let color = mv.piece.color;

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = self.piece_at(rook_from);
            self.set_piece(mv.from, None);
            self.set_piece(rook_from, None);
            self.set_piece(mv.to, Some(mv.piece));
            self.set_piece(rook_to, rook);
            self.castling.mark_castled(color);
        } else {
            if mv.is_en_passant {
                self.set_piece(mv.capture_square(), None);
            }
            let placed = match mv.promotion {
                Some(kind) => Piece::new(color, kind),
                None => mv.piece,
            };
            self.set_piece(mv.from, None);
            self.set_piece(mv.to, Some(placed));
        }

        // Rights only ever shrink: a king or rook leaving home, or a rook captured at home.
        match mv.piece.kind {
            PieceKind::King => {
                self.castling.clear_kingside(color);
                self.castling.clear_queenside(color);
            }
            PieceKind::Rook => {
                if mv.from == rook_home(color, true) {
                    self.castling.clear_kingside(color);
                } else if mv.from == rook_home(color, false) {
                    self.castling.clear_queenside(color);
                }
            }
            _ => {}
        }
        if let Some(cap) = mv.captured
            && cap.kind == PieceKind::Rook
        {
            if mv.to == rook_home(cap.color, true) {
                self.castling.clear_kingside(cap.color);
            } else if mv.to == rook_home(cap.color, false) {
                self.castling.clear_queenside(cap.color);
            }
        }

        self.en_passant = if mv.piece.kind == PieceKind::Pawn && (mv.to.row - mv.from.row).abs() == 2
        {
            Some(Coord::at((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };

        self.side_to_move = color.other();
        self.ply += 1;
        undo
    }

    /// Reverses `apply_move(mv)`, restoring layout, king cache, rights and en-passant target.
    pub fn undo_move(&mut self, mv: &Move, undo: Undo) {
        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = self.piece_at(rook_to);
            self.set_piece(mv.to, None);
            self.set_piece(rook_to, None);
            self.set_piece(mv.from, Some(mv.piece));
            self.set_piece(rook_from, rook);
        } else {
            // mv.piece is still the pawn for a promotion, which reverts it.
            self.set_piece(mv.to, None);
            self.set_piece(mv.from, Some(mv.piece));
            self.set_piece(mv.capture_square(), mv.captured);
        }

        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.side_to_move = undo.side_to_move;
        self.ply = undo.ply;
    }
}

/// Rook relocation paired with a castling king move.
fn castle_rook_squares(mv: &Move) -> (Coord, Coord) {
    let row = mv.from.row;
    if mv.to.col > mv.from.col {
        (Coord::at(row, 7), Coord::at(row, mv.from.col + 1))
    } else {
        (Coord::at(row, 0), Coord::at(row, mv.from.col - 1))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
