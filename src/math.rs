// src/math.rs
use alloy_primitives::U256;
use rust_decimal::Decimal;

use crate::shared::errors::QuoteError;
use crate::shared::types::DisplayAmount;

/// Largest scale `Decimal` can carry
const MAX_DECIMAL_SCALE: u32 = 28;

/// Largest mantissa `Decimal` can carry (2^96 - 1)
const MAX_DECIMAL_MANTISSA: u128 = (1u128 << 96) - 1;

/// 10^exp as a U256, or None if it overflows
pub fn pow10(exp: u8) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exp))
}

/// Convert a human amount into token base units: `amount * 10^decimals`, exactly
pub fn scale_up(amount: u64, decimals: u8) -> Result<U256, QuoteError> {
    pow10(decimals)
        .and_then(|exp| U256::from(amount).checked_mul(exp))
        .ok_or_else(|| {
            QuoteError::InvalidInput(format!(
                "amount {} scaled by 10^{} overflows uint256",
                amount, decimals
            ))
        })
}

/// Convert token base units into a display value: `raw / 10^decimals`
///
/// Exact whenever the raw amount fits a 96-bit mantissa and `decimals <= 28`.
/// Otherwise the least significant digits are truncated until it fits. Integer
/// parts beyond `Decimal`'s range are rendered in scientific notation.
pub fn scale_down(raw: U256, decimals: u8) -> Result<DisplayAmount, QuoteError> {
    let ten = U256::from(10u8);
    let max_mantissa = U256::from(MAX_DECIMAL_MANTISSA);

    let mut mantissa = raw;
    let mut scale = decimals as u32;

    while scale > MAX_DECIMAL_SCALE || mantissa > max_mantissa {
        if scale == 0 {
            return scientific(raw, decimals);
        }
        mantissa /= ten;
        scale -= 1;
    }

    Ok(DisplayAmount::Exact(to_decimal(mantissa, scale)?))
}

/// Leading digits of `raw` as `d.ddd * 10^exponent`
fn scientific(raw: U256, decimals: u8) -> Result<DisplayAmount, QuoteError> {
    let digits = raw.to_string();
    let exponent = digits.len().saturating_sub(decimals as usize + 1) as u32;
    let taken = digits.len().min(MAX_DECIMAL_SCALE as usize);

    let leading = U256::from_str_radix(&digits[..taken], 10)
        .map_err(|e| QuoteError::invalid_response("getAmountsOut", e))?;
    let mantissa = to_decimal(leading, taken as u32 - 1)?;

    Ok(DisplayAmount::Scientific { mantissa, exponent })
}

fn to_decimal(mantissa: U256, scale: u32) -> Result<Decimal, QuoteError> {
    let mantissa = u128::try_from(mantissa)
        .map_err(|e| QuoteError::invalid_response("getAmountsOut", e))?;
    let value = Decimal::try_from_i128_with_scale(mantissa as i128, scale)
        .map_err(|e| QuoteError::invalid_response("getAmountsOut", e))?;

    Ok(value.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_scale_up_is_exact() {
        let raw = scale_up(1, 18).unwrap();
        assert_eq!(raw, U256::from(1_000_000_000_000_000_000u128));

        let raw = scale_up(u64::MAX, 18).unwrap();
        assert_eq!(raw, U256::from(u64::MAX) * U256::from(10u8).pow(U256::from(18)));

        assert_eq!(scale_up(42, 0).unwrap(), U256::from(42));
    }

    #[test]
    fn test_scale_up_overflow() {
        let err = scale_up(1, 78).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput(_)));

        // 10^77 still fits, 2 * 10^77 does not
        assert!(scale_up(1, 77).is_ok());
        assert!(scale_up(2, 77).is_err());
    }

    #[test]
    fn test_scale_down_usdt() {
        let out = scale_down(U256::from(3_000_000_000u64), 6).unwrap();
        assert_eq!(out.to_string(), "3000");

        let out = scale_down(U256::from(2_999_123_456u64), 6).unwrap();
        assert_eq!(out, DisplayAmount::Exact(Decimal::from_str("2999.123456").unwrap()));
    }

    #[test]
    fn test_scale_down_eighteen_decimals() {
        // 1234.567890123456789012 tokens
        let raw = U256::from_str("1234567890123456789012").unwrap();
        let out = scale_down(raw, 18).unwrap();
        assert_eq!(out.to_string(), "1234.567890123456789012");
    }

    #[test]
    fn test_scale_down_truncates_wide_mantissa() {
        // 10^12 + 10^-18 tokens does not fit a 96-bit mantissa
        let raw = U256::from(10u8).pow(U256::from(30)) + U256::from(1);
        let out = scale_down(raw, 18).unwrap();
        assert_eq!(out, DisplayAmount::Exact(Decimal::from(1_000_000_000_000u64)));
    }

    #[test]
    fn test_scale_down_large_scale() {
        let raw = U256::from_str("123456789000000000000000000000000000").unwrap();
        let out = scale_down(raw, 30).unwrap();
        assert_eq!(out, DisplayAmount::Exact(Decimal::from_str("123456.789").unwrap()));
    }

    #[test]
    fn test_scale_down_huge_integer_part() {
        // 10^30 whole tokens of an 18 decimal token
        let raw = U256::from(10u8).pow(U256::from(48));
        let out = scale_down(raw, 18).unwrap();
        assert_eq!(
            out,
            DisplayAmount::Scientific {
                mantissa: Decimal::ONE,
                exponent: 30,
            }
        );
        assert_eq!(out.to_string(), "1e+30");

        let out = scale_down(U256::from(10u8).pow(U256::from(29)), 0).unwrap();
        assert_eq!(out.to_string(), "1e+29");
    }

    #[test]
    fn test_scale_down_keeps_leading_digits() {
        let out = scale_down(U256::MAX, 0).unwrap().to_string();
        assert!(out.starts_with("1.15792089237316195423570985"), "{out}");
        assert!(out.ends_with("e+77"), "{out}");

        // 123456789 * 10^30 base units, 6 decimals
        let raw = U256::from(123_456_789u64) * U256::from(10u8).pow(U256::from(30));
        let out = scale_down(raw, 6).unwrap();
        assert_eq!(out.to_string(), "1.23456789e+32");
    }
}
