use chess::{BitBoard, Board, Color, Piece, Square, EMPTY};

/// Piece kinds in the order each color's lists appear in [`PieceLists`].
pub const LIST_ORDER: [Piece; 6] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

/// White pawns, knights, bishops, rooks, queens, king, then the same for Black.
pub type PieceLists = [BitBoard; 12];

/// A piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub piece: Piece,
    pub color: Color,
    pub square: Square,
}

/// Offset of a color's first list inside [`PieceLists`].
#[inline(always)]
pub fn list_offset(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => LIST_ORDER.len(),
    }
}

pub fn piece_lists(board: &Board) -> PieceLists {
    let white = board.color_combined(Color::White);
    let black = board.color_combined(Color::Black);

    let mut lists = [EMPTY; 12];
    for (i, piece) in LIST_ORDER.iter().enumerate() {
        lists[list_offset(Color::White) + i] = board.pieces(*piece) & white;
        lists[list_offset(Color::Black) + i] = board.pieces(*piece) & black;
    }
    lists
}

#[inline(always)]
pub fn occupant_at(board: &Board, square: Square) -> Option<Occupant> {
    let piece = board.piece_on(square)?;
    let color = board.color_on(square)?;
    Some(Occupant {
        piece,
        color,
        square,
    })
}

/// All pieces of `color`, walked list by list in [`LIST_ORDER`].
pub fn occupants_of(board: &Board, color: Color) -> impl Iterator<Item = Occupant> {
    let lists = piece_lists(board);
    let offset = list_offset(color);

    LIST_ORDER
        .into_iter()
        .enumerate()
        .flat_map(move |(i, piece)| {
            lists[offset + i].map(move |square| Occupant {
                piece,
                color,
                square,
            })
        })
}
