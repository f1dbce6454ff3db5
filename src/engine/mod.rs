pub mod calculator;
pub mod config;
pub mod delimiter;
pub mod error;
pub mod tokenize;

pub use calculator::{sum, StringCalculator};
pub use config::CalculatorConfig;
pub use delimiter::{split_header, DelimiterSpec};
pub use error::SumError;
pub use tokenize::{parse_tokens, tokenize};
