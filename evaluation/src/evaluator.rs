use chess::{Board, ChessMove};

use crate::config::EvalConfig;
use crate::coverage::evaluate_coverage;
use crate::def::MoveEvaluator;
use crate::material::material_diff;

/// Breakdown of a position score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// White material minus Black material, unscaled.
    pub material: i32,
    pub coverage: i32,
    pub threat: i32,
    pub total: i32,
}

/// Material plus directional coverage of the configured side.
///
/// <https://www.chessprogramming.org/Mobility>
pub struct CoverageEvaluator {
    config: EvalConfig,
}

impl CoverageEvaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn score_position(&self, board: &Board) -> Evaluation {
        let material = material_diff(board);
        let coverage = evaluate_coverage(board, self.config.coverage_color, &self.config);

        Evaluation {
            material,
            coverage: coverage.coverage,
            threat: coverage.threat,
            total: material * self.config.material_scale
                + coverage.total(self.config.threat_weight),
        }
    }
}

impl Default for CoverageEvaluator {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}

impl MoveEvaluator for CoverageEvaluator {
    fn name(&self) -> String {
        "Coverage".to_string()
    }

    fn evaluate_move(&self, board: &Board, mv: ChessMove) -> i32 {
        // Scores a copy; the caller's board is never touched
        let after = board.make_move_new(mv);
        self.score_position(&after).total
    }

    fn configure(&mut self, config: &EvalConfig) {
        self.config = *config;
    }
}
