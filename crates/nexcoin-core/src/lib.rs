//! NexCoin Core
//!
//! Catalogs, amount formatting, configuration and the `AddressBook` used by
//! the wallet front ends to show receive addresses.

mod book;
pub mod amount;
pub mod catalog;
pub mod config;

pub use book::AddressBook;
pub use amount::{format_balance, format_crypto, format_currency, format_number, format_percent, Currency};
pub use catalog::{Asset, CatalogError, DepositNetwork, ASSETS, NETWORKS};
pub use config::{ConfigError, GeneratorConfig};

// Re-exports for convenience
pub use nexcoin_address::{
    classify, generate_deposit_address, generate_deposit_address_with_salt, inspect,
    select_format, AddressFormat, DepositAddress, InspectError, DEFAULT_SALT,
};
