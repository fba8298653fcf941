//! Fee aggregation over 18-decimal token base units.
//!
//! Sums are carried in `BigDecimal` end to end. Scaling from base units
//! to whole tokens only moves the decimal point, so it never rounds.

use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_bigint::Sign;
use num_traits::Zero;

/// Decimals of the fee token reported by the subgraph.
pub const TOKEN_DECIMALS: i64 = 18;

/// A base-unit amount that is not a decimal number.
#[derive(Debug, thiserror::Error)]
#[error("invalid decimal amount {value:?}")]
pub struct InvalidAmount {
    /// Offending input.
    pub value: String,
    #[source]
    source: ParseBigDecimalError,
}

/// Sum decimal strings exactly.
///
/// An empty input sums to zero.
pub fn sum_amounts<'a, I>(amounts: I) -> Result<BigDecimal, InvalidAmount>
where
    I: IntoIterator<Item = &'a str>,
{
    amounts.into_iter().try_fold(BigDecimal::zero(), |acc, raw| {
        let value = BigDecimal::from_str(raw.trim()).map_err(|source| InvalidAmount {
            value: raw.to_string(),
            source,
        })?;
        Ok(acc + value)
    })
}

/// Divide a base-unit amount by `10^decimals`.
pub fn scale_down(amount: BigDecimal, decimals: i64) -> BigDecimal {
    let (digits, scale) = amount.into_bigint_and_exponent();
    BigDecimal::new(digits, scale + decimals)
}

/// Render an amount in plain positional notation.
///
/// Trailing fractional zeros are dropped and zero renders as `"0"`,
/// never as an empty string.
pub fn format_amount(amount: &BigDecimal) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    let (digits, scale) = amount.normalized().into_bigint_and_exponent();
    let negative = digits.sign() == Sign::Minus;
    let magnitude = digits.magnitude().to_string();

    let body = if scale <= 0 {
        let zeros = usize::try_from(-scale).unwrap_or(0);
        format!("{magnitude}{}", "0".repeat(zeros))
    } else {
        let scale = usize::try_from(scale).unwrap_or(0);
        let padded = if magnitude.len() <= scale {
            format!("{}{magnitude}", "0".repeat(scale - magnitude.len() + 1))
        } else {
            magnitude
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        format!("{int_part}.{frac_part}")
    };

    if negative { format!("-{body}") } else { body }
}

/// Sum base-unit strings, scale to whole tokens and format.
pub fn total_in_tokens<'a, I>(amounts: I, decimals: i64) -> Result<String, InvalidAmount>
where
    I: IntoIterator<Item = &'a str>,
{
    let sum = sum_amounts(amounts)?;
    Ok(format_amount(&scale_down(sum, decimals)))
}
