use chess::Board;

#[derive(Debug)]
pub enum UciInput {
    Uci,
    IsReady,
    Debug(bool),

    UciNewGame,
    Position(Board),
    Go(GoParams),

    Stop,
    Quit,
    SetOption {
        name: String,
        value: String,
    },
    Unknown(String),
}

#[derive(Debug)]
pub enum UciOutput {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    BestMove(String),
    Info(Info),
    Option(String),
}

#[derive(Debug, Default)]
pub struct Info {
    pub depth: u8,
    pub nodes: u32,
    pub nodes_per_second: u32,
    pub time: u32,
    pub pv: Vec<String>,
    pub score: i32, // centipawns
}

/// Arguments of `go` that change what the engine does. Clock and depth
/// limits are accepted on the wire and ignored: a one-ply search finishes
/// at once.
#[derive(Debug, Default)]
pub struct GoParams {
    /// Hold `bestmove` until `stop`.
    pub infinite: bool,

    /// Only these moves (coordinate notation) are candidates.
    pub search_moves: Option<Vec<String>>,
}
