pub mod decimal;
pub mod position;

pub use decimal::parse_decimal;
pub use position::{LiquidityPosition, MAX_POSITIONS, Pair, Token, User};
