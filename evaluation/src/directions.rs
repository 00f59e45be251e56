use chess::Color;

/// One step along a ray, as (rank delta, file delta).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub rank: i8,
    pub file: i8,
}

const fn dir(rank: i8, file: i8) -> Direction {
    Direction { rank, file }
}

pub const ORTHOGONAL: [Direction; 4] = [dir(1, 0), dir(-1, 0), dir(0, 1), dir(0, -1)];

pub const DIAGONAL: [Direction; 4] = [dir(1, 1), dir(1, -1), dir(-1, 1), dir(-1, -1)];

pub const KNIGHT: [Direction; 8] = [
    dir(2, 1),
    dir(2, -1),
    dir(1, 2),
    dir(1, -2),
    dir(-1, 2),
    dir(-1, -2),
    dir(-2, 1),
    dir(-2, -1),
];

/// The two forward diagonals a pawn of `color` captures along.
#[inline(always)]
pub fn pawn_captures(color: Color) -> [Direction; 2] {
    let forward = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    [dir(forward, -1), dir(forward, 1)]
}
