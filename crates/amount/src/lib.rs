//! Display-unit amount parsing and formatting.
//!
//! User-entered amounts are decimal strings in the asset's display unit
//! ("1.5" ETH). The deployed bank contract works in the 18-decimal integer
//! base unit, so every amount is validated and converted here before it gets
//! anywhere near a transaction.

use alloy_primitives::{
    utils::{format_units, parse_units, ParseUnits},
    U256,
};
use thiserror::Error;

/// Decimal precision of the asset's base unit.
pub const ETHER_DECIMALS: u8 = 18;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// Input was empty or whitespace
    #[error("amount is empty")]
    Empty,

    /// Input did not parse as a decimal number at the given precision
    #[error("not a decimal amount: {0}")]
    Unparseable(String),

    /// Negative amounts can never be deposited, withdrawn or transferred
    #[error("amount must be positive")]
    Negative,

    /// Zero-value calls are rejected before they reach the chain
    #[error("amount must be greater than zero")]
    Zero,
}

/// Parse a user-entered decimal amount into integer base units.
///
/// Rejects empty, non-numeric, negative and zero input. Conversion is exact
/// decimal arithmetic; fractional digits beyond `decimals` are an error
/// rather than silently truncated.
pub fn parse_amount(input: &str, decimals: u8) -> Result<U256, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let parsed =
        parse_units(trimmed, decimals).map_err(|e| AmountError::Unparseable(e.to_string()))?;

    let base_units = match parsed {
        ParseUnits::U256(value) => value,
        ParseUnits::I256(_) => return Err(AmountError::Negative),
    };

    if base_units.is_zero() {
        return Err(AmountError::Zero);
    }

    Ok(base_units)
}

/// Format an integer base-unit value as a decimal display string.
pub fn format_amount(value: U256, decimals: u8) -> Result<String, AmountError> {
    format_units(value, decimals).map_err(|e| AmountError::Unparseable(e.to_string()))
}
