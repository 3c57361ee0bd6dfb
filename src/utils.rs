use crate::chain::to_base_units;
use crate::entity::AppError;
use alloy::primitives::{TxHash, U256};
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept before scaling a random amount
pub const AMOUNT_PRECISION: u32 = 3;

// Random amount in [min, max), rounded to 3 places and scaled to `decimals`
pub fn random_amount<R: Rng>(
    rng: &mut R,
    decimals: u8,
    min: f64,
    max: f64,
) -> Result<U256, AppError> {
    let value: f64 = rng.random_range(min..max);

    let rounded = Decimal::from_f64(value)
        .ok_or_else(|| AppError::InvalidAmount(format!("{} is not representable", value)))?
        .round_dp_with_strategy(AMOUNT_PRECISION, RoundingStrategy::MidpointAwayFromZero);

    if rounded <= Decimal::ZERO {
        return Err(AppError::InvalidAmount(format!(
            "{} rounds to {} at {} decimal places",
            value, rounded, AMOUNT_PRECISION
        )));
    }

    to_base_units(rounded, decimals)
}

// Delay in milliseconds within [min, max)
pub fn random_delay<R: Rng>(rng: &mut R, min: u64, max: u64) -> u64 {
    if min >= max {
        return min;
    }
    rng.random_range(min..max)
}

// Transfer count within [min, max], both ends inclusive
pub fn random_tx_count<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

// One address per line, surrounding whitespace trimmed, blank lines dropped
pub fn parse_recipients(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// Explorer link for a transaction
pub fn explorer_tx_url(explorer_url: &str, hash: &TxHash) -> String {
    format!("{}/tx/{:#x}", explorer_url.trim_end_matches('/'), hash)
}

// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 12 || !address.is_ascii() {
        return address.to_string();
    }

    let start = &address[..6];
    let end = &address[address.len() - 4..];

    format!("{}...{}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn delay_stays_within_half_open_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let delay = random_delay(&mut rng, 20_000, 30_000);
            assert!((20_000..30_000).contains(&delay));
        }

        // Narrowest possible range only ever yields min
        for _ in 0..100 {
            assert_eq!(random_delay(&mut rng, 5, 6), 5);
        }
    }

    #[test]
    fn amount_is_positive_three_place_decimal_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let unit = U256::from(10u64).pow(U256::from(15u64)); // 0.001 at 18 decimals

        for _ in 0..5_000 {
            let amount = random_amount(&mut rng, 18, 0.005, 0.01).unwrap();
            assert!(amount > U256::ZERO);
            assert_eq!(amount % unit, U256::ZERO);
            // rounding can land on the upper bound itself
            assert!(amount >= U256::from(5u64) * unit);
            assert!(amount <= U256::from(10u64) * unit);
        }
    }

    #[test]
    fn amount_respects_token_precision() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let amount = random_amount(&mut rng, 6, 0.005, 0.01).unwrap();
            assert!(amount >= U256::from(5_000u64));
            assert!(amount <= U256::from(10_000u64));
            assert_eq!(amount % U256::from(1_000u64), U256::ZERO);
        }
    }

    #[test]
    fn amount_that_rounds_to_zero_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = random_amount(&mut rng, 18, 0.0001, 0.0002);
        assert!(matches!(result, Err(AppError::InvalidAmount(_))));
    }

    #[test]
    fn tx_count_includes_both_ends() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 11];
        for _ in 0..5_000 {
            let count = random_tx_count(&mut rng, 5, 10);
            assert!((5..=10).contains(&count));
            seen[count as usize] = true;
        }
        assert!(seen[5] && seen[10]);
    }

    #[test]
    fn parses_recipient_file() {
        assert_eq!(
            parse_recipients("0xabc\n\n0xdef \n"),
            vec!["0xabc".to_string(), "0xdef".to_string()]
        );
        assert_eq!(
            parse_recipients("  0x1\r\n\t\r\n0x2"),
            vec!["0x1".to_string(), "0x2".to_string()]
        );
        assert!(parse_recipients("\n  \n").is_empty());
    }

    #[test]
    fn builds_explorer_links() {
        let hash = TxHash::repeat_byte(0xab);
        let url = explorer_tx_url("https://testnet.pharosscan.xyz/", &hash);
        assert_eq!(
            url,
            format!("https://testnet.pharosscan.xyz/tx/0x{}", "ab".repeat(32))
        );
    }

    #[test]
    fn shortens_long_addresses() {
        assert_eq!(
            shorten_address("0x3541423f25a1ca5c98fdbcf478405d3f0aad1164"),
            "0x3541...1164"
        );
        assert_eq!(shorten_address("0xabc"), "0xabc");
    }
}
