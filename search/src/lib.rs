mod config;
pub mod engine;

pub use config::{ConfigParam, EngineConfig};
pub use engine::{Engine, ScoredMove};
