use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "Vantage")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Log UCI communication to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Score candidate moves on this many threads (overridable with the UCI "Threads" option).
    #[arg(short, long)]
    pub threads: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the score breakdown of every legal move in a position, then exit.
    Score {
        /// Position to score; defaults to the starting position.
        #[arg(long)]
        fen: Option<String>,
    },
}
