//! Static asset and deposit-network catalogs

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
}

/// A depositable crypto asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Asset {
    /// Ticker (e.g., "BTC")
    pub symbol: &'static str,
    /// Display name
    pub name: &'static str,
    /// Id used by the price feed
    pub price_id: &'static str,
}

/// A network deposits can be received on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepositNetwork {
    /// Id passed to the address generator (e.g., "BSC")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Ticker of the icon shown next to the network
    pub icon: &'static str,
}

const fn asset(symbol: &'static str, name: &'static str, price_id: &'static str) -> Asset {
    Asset { symbol, name, price_id }
}

const fn network(id: &'static str, name: &'static str, icon: &'static str) -> DepositNetwork {
    DepositNetwork { id, name, icon }
}

/// Supported assets, in display order
pub static ASSETS: [Asset; 15] = [
    asset("USDT", "Tether", "tether"),
    asset("BTC", "Bitcoin", "bitcoin"),
    asset("ETH", "Ethereum", "ethereum"),
    asset("BNB", "Binance", "binancecoin"),
    asset("SOL", "Solana", "solana"),
    asset("ADA", "Cardano", "cardano"),
    asset("XRP", "Ripple", "ripple"),
    asset("DOT", "Polkadot", "polkadot"),
    asset("DOGE", "Dogecoin", "dogecoin"),
    asset("AVAX", "Avalanche", "avalanche-2"),
    asset("MATIC", "Polygon", "matic-network"),
    asset("LINK", "Chainlink", "chainlink"),
    asset("UNI", "Uniswap", "uniswap"),
    asset("LTC", "Litecoin", "litecoin"),
    asset("ATOM", "Cosmos", "cosmos"),
];

/// Deposit networks, in display order. The first one is the default.
pub static NETWORKS: [DepositNetwork; 12] = [
    network("Ethereum", "Ethereum", "ETH"),
    network("BSC", "BNB Smart Chain", "BNB"),
    network("Polygon", "Polygon", "MATIC"),
    network("Arbitrum", "Arbitrum", "ARB"),
    network("Optimism", "Optimism", "OP"),
    network("Base", "Base", "BASE"),
    network("Avalanche", "Avalanche C-Chain", "AVAX"),
    network("Solana", "Solana", "SOL"),
    network("Tron", "Tron", "TRX"),
    network("Fantom", "Fantom", "FTM"),
    network("zkSync", "zkSync Era", "ZK"),
    network("Cronos", "Cronos", "CRO"),
];

/// Network preselected on the deposit screen
pub fn default_network() -> &'static DepositNetwork {
    &NETWORKS[0]
}

/// Exact, case-sensitive symbol lookup
pub fn find_asset(symbol: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|a| a.symbol == symbol)
}

/// Exact, case-sensitive network id lookup
pub fn find_network(id: &str) -> Option<&'static DepositNetwork> {
    NETWORKS.iter().find(|n| n.id == id)
}

pub fn require_asset(symbol: &str) -> Result<&'static Asset, CatalogError> {
    find_asset(symbol).ok_or_else(|| CatalogError::UnknownAsset(symbol.to_string()))
}

pub fn require_network(id: &str) -> Result<&'static DepositNetwork, CatalogError> {
    find_network(id).ok_or_else(|| CatalogError::UnknownNetwork(id.to_string()))
}

/// Assets whose symbol or name contains `term`, ignoring case.
/// An empty term returns everything.
pub fn search_assets(term: &str) -> Vec<&'static Asset> {
    let term = term.to_lowercase();
    ASSETS
        .iter()
        .filter(|a| {
            a.symbol.to_lowercase().contains(&term) || a.name.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_keys() {
        let symbols: HashSet<_> = ASSETS.iter().map(|a| a.symbol).collect();
        assert_eq!(symbols.len(), ASSETS.len());
        let ids: HashSet<_> = NETWORKS.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), NETWORKS.len());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(find_asset("BTC").map(|a| a.name), Some("Bitcoin"));
        assert!(find_asset("btc").is_none());
        assert_eq!(find_network("zkSync").map(|n| n.icon), Some("ZK"));
        assert!(find_network("ZKSYNC").is_none());
    }

    #[test]
    fn test_require_errors() {
        assert_eq!(
            require_asset("FOO"),
            Err(CatalogError::UnknownAsset("FOO".to_string()))
        );
        assert_eq!(
            require_network("Ripple"),
            Err(CatalogError::UnknownNetwork("Ripple".to_string()))
        );
    }

    #[test]
    fn test_default_network() {
        assert_eq!(default_network().id, "Ethereum");
    }

    #[test]
    fn test_search_by_symbol_or_name() {
        let symbols: Vec<_> = search_assets("co").iter().map(|a| a.symbol).collect();
        // Bitcoin, Dogecoin, Litecoin, Cosmos
        assert_eq!(symbols, vec!["BTC", "DOGE", "LTC", "ATOM"]);

        let symbols: Vec<_> = search_assets("US").iter().map(|a| a.symbol).collect();
        assert_eq!(symbols, vec!["USDT"]);
    }

    #[test]
    fn test_search_empty_and_no_match() {
        assert_eq!(search_assets("").len(), ASSETS.len());
        assert!(search_assets("zzz").is_empty());
    }
}
