use arrayvec::ArrayVec;
use chess::{Board, Color, Piece};
use utils::{occupants_of, Occupant};

use crate::config::EvalConfig;
use crate::directions::{pawn_captures, Direction, DIAGONAL, KNIGHT, ORTHOGONAL};
use crate::piece_values::occupant_value;
use crate::ray::scan_direction;

/// Steps and occupied endpoints of every ray one piece walks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceCoverage {
    pub steps: i32,
    pub threatened: ArrayVec<Occupant, 8>,
}

impl PieceCoverage {
    #[inline(always)]
    pub fn threat(&self) -> i32 {
        self.threatened.iter().map(|o| occupant_value(Some(o))).sum()
    }
}

/// Coverage totals for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageScore {
    pub coverage: i32,
    pub threat: i32,
}

impl CoverageScore {
    #[inline(always)]
    pub fn total(&self, threat_weight: i32) -> i32 {
        self.coverage + self.threat * threat_weight
    }
}

/// Walks every ray of `occupant` and collects what it reaches.
pub fn piece_coverage(board: &Board, occupant: &Occupant, config: &EvalConfig) -> PieceCoverage {
    let mut walker = RayWalker {
        board,
        occupant,
        config,
        result: PieceCoverage::default(),
    };
    let range = config.slider_range;

    match occupant.piece {
        Piece::Pawn => walker.walk(&pawn_captures(occupant.color), 1),
        Piece::Knight => walker.walk(&KNIGHT, 1),
        Piece::Bishop => walker.walk(&DIAGONAL, range),
        Piece::Rook => walker.walk(&ORTHOGONAL, range),
        Piece::Queen => {
            walker.walk(&ORTHOGONAL, range);
            walker.walk(&DIAGONAL, range);
        }
        Piece::King => {
            walker.walk(&ORTHOGONAL, 1);
            walker.walk(&DIAGONAL, 1);
        }
    }

    walker.result
}

struct RayWalker<'a> {
    board: &'a Board,
    occupant: &'a Occupant,
    config: &'a EvalConfig,
    result: PieceCoverage,
}

impl RayWalker<'_> {
    #[inline(always)]
    fn walk(&mut self, directions: &[Direction], max_steps: u8) {
        for direction in directions {
            let scan = scan_direction(
                self.board,
                self.occupant.square,
                *direction,
                max_steps,
                self.config.edge_rule,
            );

            self.result.steps += scan.steps as i32;
            if let Some(hit) = scan.occupant {
                self.result.threatened.push(hit);
            }
        }
    }
}

pub fn evaluate_coverage(board: &Board, color: Color, config: &EvalConfig) -> CoverageScore {
    let mut score = CoverageScore::default();

    for occupant in occupants_of(board, color) {
        let piece = piece_coverage(board, &occupant, config);
        score.coverage += piece.steps;
        score.threat += piece.threat();
    }

    score
}
