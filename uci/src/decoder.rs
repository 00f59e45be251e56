use std::str::FromStr;

use chess::Board;
use log::debug;

use super::commands::{GoParams, UciInput};
use super::utils::parse_uci_move;

/// Keywords that end a `go searchmoves` list.
const GO_KEYWORDS: &[&str] = &[
    "ponder",
    "wtime",
    "btime",
    "winc",
    "binc",
    "movestogo",
    "depth",
    "nodes",
    "mate",
    "movetime",
    "infinite",
];

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> UciInput {
        match input {
            "uci" => UciInput::Uci,
            "isready" => UciInput::IsReady,
            "ucinewgame" => UciInput::UciNewGame,

            _ if input.starts_with("debug") => UciInput::Debug(input.ends_with(" on")),
            _ if input.starts_with("position") => self.decode_position(input),
            _ if input.starts_with("go") => self.decode_go(input),
            _ if input.starts_with("setoption") => self.decode_setoption(input),
            _ if input.starts_with("stop") => UciInput::Stop,
            _ if input.starts_with("quit") => UciInput::Quit,

            _ => UciInput::Unknown(input.to_string()),
        }
    }

    fn decode_position(&self, input: &str) -> UciInput {
        let (setup, moves) = match input.split_once("moves") {
            Some((setup, moves)) => (setup, Some(moves)),
            None => (input, None),
        };

        let mut board = match setup.split_once("fen") {
            Some((_, fen)) => match Board::from_str(fen.trim()) {
                Ok(board) => board,
                Err(e) => {
                    debug!("Invalid FEN {:?}: {:?}", fen.trim(), e);
                    return UciInput::Unknown(input.to_string());
                }
            },
            None => Board::default(), // startpos
        };

        for mv_str in moves.into_iter().flat_map(str::split_whitespace) {
            match parse_uci_move(&board, mv_str) {
                Some(mv) => board = board.make_move_new(mv),
                None => {
                    debug!("Illegal move {:?} in position command", mv_str);
                    return UciInput::Unknown(input.to_string());
                }
            }
        }

        UciInput::Position(board)
    }

    fn decode_setoption(&self, input: &str) -> UciInput {
        // Parse: setoption name <name> [value <value>]
        // Value is optional (button-type options have no value)
        let Some(rest) = input.strip_prefix("setoption name ") else {
            // Missing "name" keyword - return empty name for error handling
            return UciInput::SetOption {
                name: String::new(),
                value: String::new(),
            };
        };

        let (name, value) = match rest.split_once(" value ") {
            Some((n, v)) => (n.trim(), v.trim()),
            None => (rest.trim(), ""),
        };

        UciInput::SetOption {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn decode_go(&self, input: &str) -> UciInput {
        UciInput::Go(GoParams {
            infinite: input.split_whitespace().any(|t| t == "infinite"),
            search_moves: extract_search_moves(input),
        })
    }
}

fn extract_search_moves(input: &str) -> Option<Vec<String>> {
    let mut tokens = input.split_whitespace();
    tokens.find(|t| *t == "searchmoves")?;

    let moves: Vec<String> = tokens
        .take_while(|t| !GO_KEYWORDS.contains(t))
        .map(str::to_string)
        .collect();

    if moves.is_empty() {
        None
    } else {
        Some(moves)
    }
}
