use chess::{File, Rank, Square, ALL_SQUARES};

/// How a walked coordinate is judged to be on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeRule {
    /// Rank and file must each lie in 0..8.
    #[default]
    Strict,
    /// Only the linear index `rank * 8 + file` is checked, against the open
    /// interval (0, 63). Steps off the side of the board wrap onto the
    /// neighbouring rank, and a1/h8 are never reachable.
    LinearIndex,
}

/// A signed board coordinate that is allowed to wander off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub rank: i8,
    pub file: i8,
}

impl Coord {
    #[inline(always)]
    pub fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    #[inline(always)]
    pub fn from_square(sq: Square) -> Self {
        Self::new(sq.get_rank().to_index() as i8, sq.get_file().to_index() as i8)
    }

    #[inline(always)]
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Self {
        Self::new(self.rank + rank_delta, self.file + file_delta)
    }

    #[inline(always)]
    pub fn index(self) -> i16 {
        self.rank as i16 * 8 + self.file as i16
    }

    /// Resolves the coordinate to a real square, or `None` when `rule` puts it off the board.
    #[inline(always)]
    pub fn to_square(self, rule: EdgeRule) -> Option<Square> {
        match rule {
            EdgeRule::Strict => {
                if (0..8).contains(&self.rank) && (0..8).contains(&self.file) {
                    Some(Square::make_square(
                        Rank::from_index(self.rank as usize),
                        File::from_index(self.file as usize),
                    ))
                } else {
                    None
                }
            }
            EdgeRule::LinearIndex => {
                let index = self.index();
                if index > 0 && index < 63 {
                    Some(ALL_SQUARES[index as usize])
                } else {
                    None
                }
            }
        }
    }
}
