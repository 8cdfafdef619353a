//! Ordered format selection table
//!
//! Several rules can match the same pair (BTC on Tron, XRP on Ethereum), so
//! the table is evaluated top to bottom and the first match wins.

use crate::format::AddressFormat;

/// Assets always rendered as EVM addresses
pub const EVM_ASSETS: &[&str] = &["ETH", "BNB", "MATIC", "LINK", "UNI", "AVAX", "USDT"];

/// Networks whose addresses are always EVM-shaped
pub const EVM_NETWORKS: &[&str] = &[
    "Ethereum", "Polygon", "Optimism", "BSC", "Arbitrum", "Base", "Avalanche", "Fantom", "zkSync",
    "Cronos",
];

/// Format used when no rule matches
pub const DEFAULT_FORMAT: AddressFormat = AddressFormat::Evm;

/// A rule matches when the asset is in `assets` or the network is in `networks`.
/// Comparisons are exact and case-sensitive.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub assets: &'static [&'static str],
    pub networks: &'static [&'static str],
    pub format: AddressFormat,
}

impl Rule {
    pub fn matches(&self, asset: &str, network: &str) -> bool {
        self.assets.iter().any(|a| *a == asset) || self.networks.iter().any(|n| *n == network)
    }
}

pub static RULES: [Rule; 10] = [
    Rule { assets: &[], networks: &["Tron"], format: AddressFormat::Tron },
    Rule { assets: &["BTC"], networks: &[], format: AddressFormat::BitcoinSegwit },
    Rule { assets: &["SOL"], networks: &["Solana"], format: AddressFormat::Solana },
    Rule { assets: EVM_ASSETS, networks: EVM_NETWORKS, format: AddressFormat::Evm },
    Rule { assets: &["XRP"], networks: &[], format: AddressFormat::Xrp },
    Rule { assets: &["ADA"], networks: &[], format: AddressFormat::Cardano },
    Rule { assets: &["DOT"], networks: &[], format: AddressFormat::Polkadot },
    Rule { assets: &["DOGE"], networks: &[], format: AddressFormat::Dogecoin },
    Rule { assets: &["LTC"], networks: &[], format: AddressFormat::LitecoinSegwit },
    Rule { assets: &["ATOM"], networks: &[], format: AddressFormat::Cosmos },
];

/// First matching rule for the pair, if any
pub fn matching_rule(asset: &str, network: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matches(asset, network))
}

/// Format for the pair, falling back to `DEFAULT_FORMAT`
pub fn select_format(asset: &str, network: &str) -> AddressFormat {
    matching_rule(asset, network).map_or(DEFAULT_FORMAT, |rule| rule.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tron_network_wins_over_asset() {
        assert_eq!(select_format("BTC", "Tron"), AddressFormat::Tron);
        assert_eq!(select_format("USDT", "Tron"), AddressFormat::Tron);
        assert_eq!(select_format("SOL", "Tron"), AddressFormat::Tron);
    }

    #[test]
    fn test_btc_wins_over_evm_network() {
        assert_eq!(select_format("BTC", "Ethereum"), AddressFormat::BitcoinSegwit);
    }

    #[test]
    fn test_solana_by_asset_or_network() {
        assert_eq!(select_format("SOL", "Ethereum"), AddressFormat::Solana);
        assert_eq!(select_format("USDT", "Solana"), AddressFormat::Solana);
    }

    #[test]
    fn test_evm_network_shadows_native_formats() {
        assert_eq!(select_format("XRP", "Ethereum"), AddressFormat::Evm);
        assert_eq!(select_format("ADA", "Arbitrum"), AddressFormat::Evm);
        assert_eq!(select_format("DOGE", "BSC"), AddressFormat::Evm);
    }

    #[test]
    fn test_native_networks() {
        assert_eq!(select_format("XRP", "Ripple"), AddressFormat::Xrp);
        assert_eq!(select_format("ADA", "Cardano"), AddressFormat::Cardano);
        assert_eq!(select_format("DOT", "Polkadot"), AddressFormat::Polkadot);
        assert_eq!(select_format("DOGE", "Dogecoin"), AddressFormat::Dogecoin);
        assert_eq!(select_format("LTC", "Litecoin"), AddressFormat::LitecoinSegwit);
        assert_eq!(select_format("ATOM", "Cosmos"), AddressFormat::Cosmos);
    }

    #[test]
    fn test_default_and_case_sensitivity() {
        assert!(matching_rule("ANYTHING", "UnknownNetwork").is_none());
        assert_eq!(select_format("ANYTHING", "UnknownNetwork"), DEFAULT_FORMAT);
        assert_eq!(select_format("btc", "tron"), DEFAULT_FORMAT);
        assert_eq!(select_format("", ""), DEFAULT_FORMAT);
    }

    #[test]
    fn test_each_format_has_one_rule() {
        let formats: HashSet<_> = RULES.iter().map(|r| r.format).collect();
        assert_eq!(formats.len(), RULES.len());
    }
}
