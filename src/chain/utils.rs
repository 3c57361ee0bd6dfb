use crate::entity::AppError;
use alloy::primitives::utils::format_units;
use alloy::primitives::U256;
use rust_decimal::Decimal;

/// Convert a non-negative decimal amount to integer base units (`amount * 10^decimals`)
pub fn to_base_units(amount: Decimal, decimals: u8) -> Result<U256, AppError> {
    if amount.is_sign_negative() {
        return Err(AppError::InvalidAmount(format!("{} is negative", amount)));
    }

    let scale = amount.scale();
    if scale > decimals as u32 {
        return Err(AppError::InvalidAmount(format!(
            "{} has more than {} decimal places",
            amount, decimals
        )));
    }

    let mantissa = U256::from(amount.mantissa().unsigned_abs());
    let factor = U256::from(10u64).pow(U256::from(decimals as u32 - scale));

    Ok(mantissa * factor)
}

/// Format base units for display, e.g. `5000000000000000` with 18 decimals -> "0.005"
pub fn display_amount(amount: U256, decimals: u8) -> String {
    match format_units(amount, decimals) {
        Ok(formatted) => trim_fraction(&formatted).to_string(),
        Err(_) => amount.to_string(),
    }
}

fn trim_fraction(value: &str) -> &str {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.')
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn scales_to_token_precision() {
        let amount = Decimal::from_str("0.007").unwrap();
        assert_eq!(
            to_base_units(amount, 18).unwrap(),
            U256::from(7_000_000_000_000_000u64)
        );
        assert_eq!(to_base_units(amount, 6).unwrap(), U256::from(7_000u64));
    }

    #[test]
    fn rejects_excess_precision() {
        let amount = Decimal::from_str("0.0071").unwrap();
        assert!(matches!(
            to_base_units(amount, 3),
            Err(AppError::InvalidAmount(_))
        ));
    }

    #[test]
    fn displays_trimmed_amounts() {
        assert_eq!(display_amount(U256::from(5_000_000_000_000_000u64), 18), "0.005");
        assert_eq!(display_amount(U256::from(9_000u64), 6), "0.009");
        assert_eq!(display_amount(U256::from(2_000_000u64), 6), "2");
    }
}
