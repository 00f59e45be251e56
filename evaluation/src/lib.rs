pub mod config;
pub mod coverage;
pub mod def;
pub mod directions;
pub mod evaluator;
pub mod material;
pub mod piece_values;
pub mod ray;

pub use config::EvalConfig;
pub use def::MoveEvaluator;
pub use evaluator::{CoverageEvaluator, Evaluation};
pub use piece_values::piece_value;
