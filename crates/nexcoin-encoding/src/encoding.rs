//! Address text encodings: hex, Base58, Bech32 character substitution

use bech32::Fe32;
use thiserror::Error;

/// Bitcoin Base58 alphabet (no 0, O, I, l)
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Bech32 data charset
pub const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Invalid character '{0}' in input")]
    InvalidCharacter(char),
    #[error("Invalid Base58: {0}")]
    InvalidBase58(String),
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

/// Lowercase hex, two digits per byte
pub fn hex_encode(data: &[u8]) -> String {
    hex::encode(data)
}

/// Hex decode (either case)
pub fn hex_decode(input: &str) -> Result<Vec<u8>, EncodingError> {
    hex::decode(input).map_err(|e| EncodingError::InvalidHex(e.to_string()))
}

/// Base58 encode, no checksum. Each leading zero byte becomes a '1'.
pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Base58 decode
pub fn base58_decode(input: &str) -> Result<Vec<u8>, EncodingError> {
    bs58::decode(input)
        .into_vec()
        .map_err(|e| EncodingError::InvalidBase58(e.to_string()))
}

/// Map every byte to `BECH32_CHARSET[byte % 32]`.
///
/// This is a per-byte substitution, not a real Bech32 encoding: there is no
/// 8-to-5 bit regrouping and no checksum.
pub fn bech32_charset_encode(data: &[u8]) -> String {
    let charset = BECH32_CHARSET.as_bytes();
    data.iter()
        .map(|&byte| charset[usize::from(byte % 32)] as char)
        .collect()
}

/// Map lowercase Bech32 characters back to their 5-bit values.
pub fn bech32_charset_decode(input: &str) -> Result<Vec<u8>, EncodingError> {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                return Err(EncodingError::InvalidCharacter(c));
            }
            Fe32::from_char(c)
                .map(Fe32::to_u8)
                .map_err(|_| EncodingError::InvalidCharacter(c))
        })
        .collect()
}
