//! Receive-address lookups for the wallet screens

use tracing::{debug, warn};

use nexcoin_address::{derive, DepositAddress};

use crate::catalog::{require_asset, require_network, CatalogError, NETWORKS};
use crate::config::GeneratorConfig;

/// Derives display addresses with a fixed configuration.
///
/// Addresses are recomputed on every call; there is nothing to cache or
/// invalidate.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    config: GeneratorConfig,
}

impl AddressBook {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Address for any (asset, network) pair, catalog or not
    pub fn address(&self, asset: &str, network: &str) -> DepositAddress {
        let derived = derive(asset, network, &self.config.salt);
        debug!(
            asset,
            network,
            format = %derived.format,
            address = %derived.address,
            "derived deposit address"
        );
        derived
    }

    /// Address for a catalog asset on a catalog network
    pub fn checked_address(
        &self,
        symbol: &str,
        network_id: &str,
    ) -> Result<DepositAddress, CatalogError> {
        let asset = require_asset(symbol).inspect_err(|e| warn!("{}", e))?;
        let network = require_network(network_id).inspect_err(|e| warn!("{}", e))?;
        Ok(self.address(asset.symbol, network.id))
    }

    /// One address per catalog network for a catalog asset
    pub fn receive_options(&self, symbol: &str) -> Result<Vec<DepositAddress>, CatalogError> {
        let asset = require_asset(symbol).inspect_err(|e| warn!("{}", e))?;
        Ok(NETWORKS
            .iter()
            .map(|network| self.address(asset.symbol, network.id))
            .collect())
    }
}
