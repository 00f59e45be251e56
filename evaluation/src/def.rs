use chess::{Board, ChessMove};

use crate::config::EvalConfig;

/// Scores a candidate move by the position it leads to.
pub trait MoveEvaluator: Send + Sync {
    fn name(&self) -> String;
    /// Score of the position after `mv`. Positive = White advantage.
    /// `board` is left exactly as it was passed in.
    fn evaluate_move(&self, board: &Board, mv: ChessMove) -> i32;
    /// Applies new weights and edge handling; later calls score with them.
    fn configure(&mut self, config: &EvalConfig);
}
