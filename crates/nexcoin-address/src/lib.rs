//! NexCoin Display Addresses
//!
//! Deterministic, display-only deposit addresses. An (asset, network) pair is
//! hashed into a seed, expanded into bytes and rendered in the text format of
//! the matching chain. No key material is involved, and nothing produced here
//! can receive funds.

pub mod format;
pub mod rules;
pub mod inspect;

pub use format::{AddressFormat, DepositAddress, Encoding};
pub use inspect::{classify, inspect, InspectError, MIN_ADDRESS_LEN};
pub use rules::{matching_rule, select_format, Rule, DEFAULT_FORMAT, RULES};

// Pure helpers, re-exported for tests and tooling
pub use nexcoin_encoding::{expand_bytes, seed_hash};

/// Salt appended to every seed unless configured otherwise
pub const DEFAULT_SALT: &str = "ethertron-wallet";

/// Seed string for a pair: `{asset}-{network}-{salt}`
pub fn seed_for(asset: &str, network: &str, salt: &str) -> String {
    format!("{asset}-{network}-{salt}")
}

/// Display address for an (asset, network) pair with the default salt.
///
/// Total over all inputs: unknown pairs fall back to an EVM-style address.
pub fn generate_deposit_address(asset: &str, network: &str) -> String {
    generate_deposit_address_with_salt(asset, network, DEFAULT_SALT)
}

/// Display address for an (asset, network) pair with a custom salt
pub fn generate_deposit_address_with_salt(asset: &str, network: &str, salt: &str) -> String {
    select_format(asset, network).render(&seed_for(asset, network, salt))
}

/// Display address plus the format that produced it
pub fn derive(asset: &str, network: &str, salt: &str) -> DepositAddress {
    let format = select_format(asset, network);
    DepositAddress {
        address: format.render(&seed_for(asset, network, salt)),
        asset: asset.to_string(),
        network: network.to_string(),
        format,
    }
}
