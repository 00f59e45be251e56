//! `vantage score`: per-move breakdown of the coverage evaluation.

use std::cmp::Reverse;
use std::error::Error;
use std::str::FromStr;

use chess::{Board, MoveGen};
use evaluation::{CoverageEvaluator, Evaluation};
use search::EngineConfig;

pub struct MoveReport {
    pub mv: String,
    pub eval: Evaluation,
}

/// Scores every legal move of `fen` (or the starting position) and sorts best first.
pub fn build(fen: Option<&str>, config: &EngineConfig) -> Result<Vec<MoveReport>, Box<dyn Error>> {
    let board = match fen {
        Some(fen) => {
            Board::from_str(fen).map_err(|e| format!("Invalid FEN {:?}: {:?}", fen, e))?
        }
        None => Board::default(),
    };

    let evaluator = CoverageEvaluator::new(config.get_eval_config());

    let mut reports: Vec<MoveReport> = MoveGen::new_legal(&board)
        .map(|mv| MoveReport {
            mv: mv.to_string(),
            eval: evaluator.score_position(&board.make_move_new(mv)),
        })
        .collect();

    // Stable sort keeps move-generation order among equal totals
    reports.sort_by_key(|r| Reverse(r.eval.total));

    Ok(reports)
}

pub fn print(reports: &[MoveReport]) {
    println!(
        "{:<8} {:>9} {:>9} {:>7} {:>8}",
        "move", "material", "coverage", "threat", "total"
    );
    for report in reports {
        println!(
            "{:<8} {:>9} {:>9} {:>7} {:>8}",
            report.mv,
            report.eval.material,
            report.eval.coverage,
            report.eval.threat,
            report.eval.total
        );
    }
}
