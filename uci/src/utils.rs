use chess::{Board, ChessMove, MoveGen};

/// Finds the legal move written in coordinate notation (e.g. `e2e4`, `e7e8q`).
pub fn parse_uci_move(board: &Board, mv: &str) -> Option<ChessMove> {
    MoveGen::new_legal(board).find(|m| m.to_string() == mv)
}

#[inline]
pub fn move_to_uci(mv: ChessMove) -> String {
    mv.to_string()
}
