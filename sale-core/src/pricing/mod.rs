mod money;
mod totals;

pub use money::{CurrencyFormat, format_price_field, parse_amount};
pub use totals::{line_total, round_half_up};
