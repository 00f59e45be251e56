use chess::{Board, Square};
use utils::{occupant_at, Coord, EdgeRule, Occupant};

use crate::directions::Direction;

/// Outcome of walking one ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayScan {
    /// Squares entered before the walk ended, including the blocking square.
    pub steps: u8,
    /// The piece the walk ended on, if it ended on one.
    pub occupant: Option<Occupant>,
}

impl RayScan {
    pub const EMPTY: RayScan = RayScan {
        steps: 0,
        occupant: None,
    };
}

/// Walks from `origin` along `direction` for at most `max_steps` squares.
///
/// The walk ends at the board edge (as judged by `edge`), after `max_steps`
/// squares, or on the first occupied square, whichever comes first. An
/// occupied square counts as a step and is reported; nothing beyond it is
/// looked at.
pub fn scan_direction(
    board: &Board,
    origin: Square,
    direction: Direction,
    max_steps: u8,
    edge: EdgeRule,
) -> RayScan {
    let mut scan = RayScan::EMPTY;
    let mut coord = Coord::from_square(origin);

    while scan.steps < max_steps {
        coord = coord.offset(direction.rank, direction.file);

        let Some(square) = coord.to_square(edge) else {
            break;
        };

        scan.steps += 1;

        if let Some(occupant) = occupant_at(board, square) {
            scan.occupant = Some(occupant);
            break;
        }
    }

    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::{DIAGONAL, ORTHOGONAL};
    use chess::{Color, File, Piece, Rank};

    fn sq(rank: Rank, file: File) -> Square {
        Square::make_square(rank, file)
    }

    const LEFT: Direction = Direction { rank: 0, file: -1 };
    const DOWN: Direction = Direction { rank: -1, file: 0 };

    #[test]
    fn test_stops_at_edge_from_corner() {
        let board: Board = "7k/8/8/8/8/8/8/R6K w - - 0 1".parse().unwrap();
        let a1 = sq(Rank::First, File::A);

        for edge in [EdgeRule::Strict, EdgeRule::LinearIndex] {
            let scan = scan_direction(&board, a1, LEFT, 8, edge);
            assert_eq!(scan, RayScan::EMPTY);
        }
    }

    #[test]
    fn test_stops_on_adjacent_friend() {
        let board: Board = "7k/8/8/8/8/8/R7/K7 w - - 0 1".parse().unwrap();
        let a1 = sq(Rank::First, File::A);
        let a2 = sq(Rank::Second, File::A);

        let scan = scan_direction(&board, a2, DOWN, 8, EdgeRule::Strict);
        assert_eq!(scan.steps, 1);
        assert_eq!(
            scan.occupant,
            Some(Occupant {
                piece: Piece::King,
                color: Color::White,
                square: a1,
            })
        );
    }

    #[test]
    fn test_never_looks_past_blocker() {
        // Black knight on d6 shields the black queen on d8
        let board: Board = "3q3k/8/3n4/8/3R4/8/8/K7 w - - 0 1".parse().unwrap();
        let d4 = sq(Rank::Fourth, File::D);
        let up = Direction { rank: 1, file: 0 };

        let scan = scan_direction(&board, d4, up, 8, EdgeRule::Strict);
        assert_eq!(scan.steps, 2);
        assert_eq!(scan.occupant.map(|o| o.piece), Some(Piece::Knight));
    }

    #[test]
    fn test_open_ray_runs_to_edge() {
        let board: Board = "7k/8/8/8/3R4/8/8/K7 w - - 0 1".parse().unwrap();
        let d4 = sq(Rank::Fourth, File::D);
        let right = Direction { rank: 0, file: 1 };

        let scan = scan_direction(&board, d4, right, 8, EdgeRule::Strict);
        assert_eq!(scan.steps, 4);
        assert_eq!(scan.occupant, None);
    }

    #[test]
    fn test_max_steps_clamps_sliders() {
        let board: Board = "8/7k/8/8/3Q4/8/8/K7 w - - 0 1".parse().unwrap();
        let d4 = sq(Rank::Fourth, File::D);

        for direction in ORTHOGONAL.iter().chain(DIAGONAL.iter()) {
            let scan = scan_direction(&board, d4, *direction, 1, EdgeRule::Strict);
            assert!(scan.steps <= 1);
        }
    }

    #[test]
    fn test_zero_budget_is_empty() {
        let board = Board::default();
        let e2 = sq(Rank::Second, File::E);
        let up = Direction { rank: 1, file: 0 };

        assert_eq!(
            scan_direction(&board, e2, up, 0, EdgeRule::Strict),
            RayScan::EMPTY
        );
    }

    // Same ray, two edge rules: the linear check wraps a4 -> h3 and walks rank 3.
    #[test]
    fn test_linear_index_wraps_off_the_a_file() {
        let board: Board = "7k/8/8/8/R7/8/8/K7 w - - 0 1".parse().unwrap();
        let a4 = sq(Rank::Fourth, File::A);

        let strict = scan_direction(&board, a4, LEFT, 8, EdgeRule::Strict);
        assert_eq!(strict, RayScan::EMPTY);

        let linear = scan_direction(&board, a4, LEFT, 8, EdgeRule::LinearIndex);
        assert_eq!(linear.steps, 8);
        assert_eq!(linear.occupant, None);
    }

    // The linear check treats a1 as off the board, hiding the king there.
    #[test]
    fn test_linear_index_hides_a1() {
        let board: Board = "7k/8/8/8/8/8/R7/K7 w - - 0 1".parse().unwrap();
        let a2 = sq(Rank::Second, File::A);

        let strict = scan_direction(&board, a2, DOWN, 8, EdgeRule::Strict);
        assert_eq!(strict.steps, 1);
        assert!(strict.occupant.is_some());

        let linear = scan_direction(&board, a2, DOWN, 8, EdgeRule::LinearIndex);
        assert_eq!(linear, RayScan::EMPTY);
    }
}
