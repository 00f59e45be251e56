mod connection;
mod decoder;
mod encoder;
mod options;
mod utils;

pub mod commands;

pub use commands::{UciInput, UciOutput};
pub use connection::UciConnection;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use options::{UciOption, UciOptionType};
pub use utils::{move_to_uci, parse_uci_move};

/// Null move in UCI format, used when no legal move exists (e.g., checkmate).
/// Sent as the bestmove when the position has no legal moves.
pub const NULL_MOVE: &str = "0000";
