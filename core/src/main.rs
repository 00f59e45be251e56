mod args;
mod report;

use args::{Args, Command};
use clap::Parser;
use log::{debug, LevelFilter};
use search::{Engine, EngineConfig};
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;
use uci::{UciConnection, UciInput, UciOutput};

const ENGINE_NAME: &str = "Vantage";
const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
const ENGINE_AUTHOR: &str = "Jørgen Hanssen";

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let mut config = EngineConfig::default();
    if let Some(threads) = args.threads {
        config.update_from_uci("Threads", &threads.to_string())?;
    }

    if let Some(Command::Score { fen }) = &args.command {
        let reports = report::build(fen.as_deref(), &config)?;
        report::print(&reports);
        return Ok(());
    }

    let mut engine = Engine::with_coverage(&config);
    debug!("Engine: {}", engine.name());

    let uci = UciConnection::new();
    uci.listen(|input, output| {
        match input {
            UciInput::Uci => {
                output.send(UciOutput::IdName(format!(
                    "{} {}",
                    ENGINE_NAME, ENGINE_VERSION
                )))?;
                output.send(UciOutput::IdAuthor(ENGINE_AUTHOR.to_string()))?;
                config.to_uci(output)?;
                output.send(UciOutput::UciOk)?;
            }
            UciInput::IsReady => {
                output.send(UciOutput::ReadyOk)?;
            }
            UciInput::Debug(on) => {
                debug!("Debug mode: {}", on);
            }
            UciInput::SetOption { name, value } => {
                if let Err(e) = config.update_from_uci(name, value) {
                    debug!("Option setting failed: {}", e);
                } else {
                    debug!("Set option '{}' to '{}'", name, value);
                    engine.configure(&config);
                }
            }
            UciInput::UciNewGame => {
                engine.new_game();
            }
            UciInput::Position(board) => {
                engine.set_position(*board);
            }
            UciInput::Go(params) => {
                if let Some(best_move) = engine.go(params, Some(output)) {
                    output.send(UciOutput::BestMove(best_move))?;
                }
            }
            UciInput::Stop => {
                if let Some(best_move) = engine.stop() {
                    output.send(UciOutput::BestMove(best_move))?;
                }
            }
            UciInput::Quit => {}
            UciInput::Unknown(line) => {
                debug!("Unknown command: {}", line);
            }
        }
        Ok(())
    })?;

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}
