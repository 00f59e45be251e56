mod coord;
mod pieces;

pub use coord::{Coord, EdgeRule};
pub use pieces::{
    list_offset, occupant_at, occupants_of, piece_lists, Occupant, PieceLists, LIST_ORDER,
};
