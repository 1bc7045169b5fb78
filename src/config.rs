use crate::error::ConfigError;

/// Significant digits kept for quotients that do not terminate.
pub const DEFAULT_DIVISION_PRECISION: u64 = 100;
/// `bigdecimal` computes quotients to this many digits before we round them, so asking for more buys nothing.
pub const MAX_DIVISION_PRECISION: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub division_precision: u64,
    // Print the intro banner and help block on start-up
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            division_precision: DEFAULT_DIVISION_PRECISION,
            banner: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.division_precision == 0 || self.division_precision > MAX_DIVISION_PRECISION {
            return Err(ConfigError::InvalidPrecision {
                got: self.division_precision,
                max: MAX_DIVISION_PRECISION,
            });
        }
        Ok(())
    }
}
