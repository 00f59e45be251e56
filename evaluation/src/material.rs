use chess::{Board, Color};
use utils::{list_offset, piece_lists, PieceLists, LIST_ORDER};

use crate::piece_values::piece_value;

/// Sum of piece values for one side.
pub fn material(lists: &PieceLists, color: Color) -> i32 {
    let offset = list_offset(color);

    LIST_ORDER
        .iter()
        .enumerate()
        .map(|(i, piece)| piece_value(*piece) * lists[offset + i].popcnt() as i32)
        .sum()
}

/// White material minus Black material.
pub fn material_diff(board: &Board) -> i32 {
    let lists = piece_lists(board);
    material(&lists, Color::White) - material(&lists, Color::Black)
}
