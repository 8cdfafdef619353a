//! Recognise the format of a pasted address

use crate::format::AddressFormat;
use thiserror::Error;

/// Anything shorter is not worth looking at
pub const MIN_ADDRESS_LEN: usize = 10;

/// Most specific prefix first. Solana has no prefix and a Polkadot address
/// is also valid Base58 of Solana length, so both come last in that order.
const INSPECT_ORDER: [AddressFormat; 10] = [
    AddressFormat::Evm,
    AddressFormat::Cosmos,
    AddressFormat::LitecoinSegwit,
    AddressFormat::BitcoinSegwit,
    AddressFormat::Cardano,
    AddressFormat::Tron,
    AddressFormat::Xrp,
    AddressFormat::Dogecoin,
    AddressFormat::Polkadot,
    AddressFormat::Solana,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    #[error("Address too short ({len} characters, need at least {min})")]
    TooShort { len: usize, min: usize },
    #[error("Address '{0}' does not match any known format")]
    Unrecognized(String),
}

/// First format whose shape accepts the (trimmed) address
pub fn classify(address: &str) -> Option<AddressFormat> {
    let address = address.trim();
    INSPECT_ORDER
        .into_iter()
        .find(|format| format.accepts(address))
}

/// Like `classify`, with a reason when nothing matches
pub fn inspect(address: &str) -> Result<AddressFormat, InspectError> {
    let trimmed = address.trim();
    // Counted in UTF-16 units, the way the withdraw form measured it
    let len = trimmed.encode_utf16().count();
    if len < MIN_ADDRESS_LEN {
        return Err(InspectError::TooShort {
            len,
            min: MIN_ADDRESS_LEN,
        });
    }
    classify(trimmed).ok_or_else(|| InspectError::Unrecognized(trimmed.to_string()))
}
