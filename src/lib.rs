//! String calculator: sums numbers from delimited text.
//!
//! ```text
//! input → header (delimiters) → tokens → integers → negative check → cap filter → sum
//! ```
//!
//! Everything lives in [`engine`]; the crate root re-exports the entry points.
//!
//! ```
//! assert_eq!(strcalc::sum("//[*][%]\n1*2%3"), Ok(6));
//! ```

pub mod engine;

pub use engine::{sum, CalculatorConfig, StringCalculator, SumError};
