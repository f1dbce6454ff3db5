use super::config::CalculatorConfig;
use super::delimiter::split_header;
use super::error::SumError;
use super::tokenize::{parse_tokens, tokenize};
use log::{debug, trace};

/// Sums delimited numbers according to a [`CalculatorConfig`].
///
/// Holds no state besides its configuration, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringCalculator {
    config: CalculatorConfig,
}

impl StringCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::new(CalculatorConfig::default())
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Sum the numbers in `input`.
    ///
    /// Values above `max_value` are skipped. Any negative value fails the
    /// whole call, listing every negative in input order.
    pub fn sum(&self, input: &str) -> Result<i64, SumError> {
        if input.is_empty() {
            return Ok(0);
        }

        let (spec, payload) = split_header(input, &self.config);
        let tokens = tokenize(payload, &spec);
        trace!("delimiters {:?} produced tokens {:?}", spec.delimiters, tokens);

        let values = parse_tokens(&tokens)?;

        // Negatives are checked on the full list, before the cap is applied
        let negatives: Vec<i64> = values.iter().copied().filter(|v| *v < 0).collect();
        if !negatives.is_empty() {
            return Err(SumError::NegativeValues(negatives));
        }

        let total: i64 = values
            .into_iter()
            .filter(|value| {
                let keep = *value <= self.config.max_value;
                if !keep {
                    debug!("dropping {} (above {})", value, self.config.max_value);
                }
                keep
            })
            .sum();

        Ok(total)
    }

    /// Alias of [`StringCalculator::sum`].
    pub fn add(&self, input: &str) -> Result<i64, SumError> {
        self.sum(input)
    }
}

/// Sum `input` with the default configuration.
pub fn sum(input: &str) -> Result<i64, SumError> {
    StringCalculator::with_default_config().sum(input)
}
