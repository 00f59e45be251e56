use chess::Color;
use utils::EdgeRule;

/// Longest ray a sliding piece can walk on an 8x8 board.
pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy)]
pub struct EvalConfig {
    pub material_scale: i32, // material diff multiplier, keeps material ahead of coverage
    pub threat_weight: i32,  // an occupied reachable square counts this many times its value
    pub slider_range: u8,    // max steps for bishops, rooks and queens

    // Side whose coverage is counted. Only White has ever been scored here;
    // whether Black should be counted too is still an open product question.
    pub coverage_color: Color,

    pub edge_rule: EdgeRule,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            material_scale: 100,
            threat_weight: 2,
            slider_range: BOARD_SIZE,

            coverage_color: Color::White,

            edge_rule: EdgeRule::Strict,
        }
    }
}
