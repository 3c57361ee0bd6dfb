use crate::entity::AppError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional settings file looked up in the working directory (`autoswap.toml`, `.yaml`, ...)
pub const CONFIG_FILE: &str = "autoswap";

/// Prefix for environment overrides, e.g. `AUTOSWAP_SWAP__MIN_DELAY_MS=1000`
pub const ENV_PREFIX: &str = "AUTOSWAP";

/// Smallest amount that survives rounding to 3 decimal places
const MIN_AMOUNT: f64 = 0.001;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON-RPC endpoint of the Pharos testnet
    pub rpc_url: String,

    /// Block explorer base URL, transaction links are `<explorer_url>/tx/<hash>`
    pub explorer_url: String,

    /// Recipient list used by the native token distribution
    pub wallet_file: PathBuf,

    /// Pool fee tier for single-hop swaps (hundredths of a bip)
    pub fee_tier: u32,

    /// Upper bound for a single receipt wait
    pub confirmation_timeout_secs: u64,

    pub swap: SwapSettings,
    pub send: SendSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapSettings {
    pub min_amount: f64,
    pub max_amount: f64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Seconds until the router rejects the multicall
    pub deadline_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendSettings {
    pub min_tx_per_wallet: u32,
    pub max_tx_per_wallet: u32,
    pub min_amount: f64,
    pub max_amount: f64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "https://testnet.dplabs-internal.com".to_string(),
            explorer_url: "https://testnet.pharosscan.xyz".to_string(),
            wallet_file: PathBuf::from("wallets.txt"),
            fee_tier: 3000,
            confirmation_timeout_secs: 120,
            swap: SwapSettings::default(),
            send: SendSettings::default(),
        }
    }
}

impl Default for SwapSettings {
    fn default() -> Self {
        Self {
            min_amount: 0.005,
            max_amount: 0.01,
            min_delay_ms: 20_000,
            max_delay_ms: 30_000,
            deadline_secs: 60 * 10,
        }
    }
}

impl Default for SendSettings {
    fn default() -> Self {
        Self {
            min_tx_per_wallet: 5,
            max_tx_per_wallet: 10,
            min_amount: 0.005,
            max_amount: 0.01,
            min_delay_ms: 20_000,
            max_delay_ms: 30_000,
        }
    }
}

impl Config {
    /// Loads defaults, then `autoswap.*` if present, then `AUTOSWAP_*` environment variables
    pub fn load() -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(
                ::config::Config::try_from(&Config::default())
                    .context("Failed to serialize default configuration")?,
            )
            .add_source(::config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        let config: Config = settings
            .try_deserialize()
            .context("Failed to parse configuration")?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        check_amounts("swap", self.swap.min_amount, self.swap.max_amount)?;
        check_amounts("send", self.send.min_amount, self.send.max_amount)?;
        check_delays("swap", self.swap.min_delay_ms, self.swap.max_delay_ms)?;
        check_delays("send", self.send.min_delay_ms, self.send.max_delay_ms)?;

        if self.send.min_tx_per_wallet > self.send.max_tx_per_wallet {
            return Err(AppError::InvalidConfig(format!(
                "send.min_tx_per_wallet ({}) exceeds send.max_tx_per_wallet ({})",
                self.send.min_tx_per_wallet, self.send.max_tx_per_wallet
            )));
        }

        // uint24 on the router side
        if self.fee_tier >= 1 << 24 {
            return Err(AppError::InvalidConfig(format!(
                "fee_tier {} does not fit in uint24",
                self.fee_tier
            )));
        }

        Ok(())
    }
}

fn check_amounts(section: &str, min: f64, max: f64) -> Result<(), AppError> {
    if !(min >= MIN_AMOUNT && min < max && max.is_finite()) {
        return Err(AppError::InvalidConfig(format!(
            "{section} amounts must satisfy {MIN_AMOUNT} <= min < max, got [{min}, {max})"
        )));
    }
    Ok(())
}

fn check_delays(section: &str, min: u64, max: u64) -> Result<(), AppError> {
    if min >= max {
        return Err(AppError::InvalidConfig(format!(
            "{section} delays must satisfy min < max, got [{min}, {max})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fee_tier, 3000);
        assert_eq!(config.swap.min_delay_ms, 20_000);
        assert_eq!(config.swap.max_delay_ms, 30_000);
        assert_eq!(config.send.min_tx_per_wallet, 5);
        assert_eq!(config.send.max_tx_per_wallet, 10);
    }

    #[test]
    fn rejects_inverted_delay_bounds() {
        let mut config = Config::default();
        config.swap.min_delay_ms = 30_000;
        config.swap.max_delay_ms = 20_000;
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_amounts_lost_to_rounding() {
        let mut config = Config::default();
        config.send.min_amount = 0.0001;
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn equal_tx_count_bounds_are_allowed() {
        let mut config = Config::default();
        config.send.min_tx_per_wallet = 3;
        config.send.max_tx_per_wallet = 3;
        assert!(config.validate().is_ok());
    }
}
