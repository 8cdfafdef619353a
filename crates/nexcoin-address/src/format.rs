//! Address formats and derived address records

use nexcoin_encoding::encoding::{
    base58_decode, base58_encode, bech32_charset_decode, bech32_charset_encode, hex_decode,
    hex_encode, EncodingError,
};
use nexcoin_encoding::SeedStream;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Text encoding applied to the expanded bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// Lowercase hex
    Hex,
    /// Bitcoin-alphabet Base58, no checksum
    Base58,
    /// Per-byte Bech32 charset substitution
    Bech32Charset,
}

impl Encoding {
    pub fn encode(self, data: &[u8]) -> String {
        match self {
            Encoding::Hex => hex_encode(data),
            Encoding::Base58 => base58_encode(data),
            Encoding::Bech32Charset => bech32_charset_encode(data),
        }
    }

    /// Check that `text` only uses characters of this encoding
    pub fn validate(self, text: &str) -> Result<(), EncodingError> {
        match self {
            Encoding::Hex => hex_decode(text).map(drop),
            Encoding::Base58 => base58_decode(text).map(drop),
            Encoding::Bech32Charset => bech32_charset_decode(text).map(drop),
        }
    }
}

/// How the encoded body is turned into the final string
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// `prefix` followed by at most `max_body` encoded characters
    Prefixed { prefix: &'static str, max_body: usize },
    /// First encoded character replaced by `lead`, rest kept up to index `end`
    Lead { lead: char, end: usize },
    /// Encoded text cut to `max` characters
    Truncated { max: usize },
}

/// Output shape of a display address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressFormat {
    /// T... (Base58)
    Tron,
    /// bc1q...
    BitcoinSegwit,
    /// Base58, 43-44 chars
    Solana,
    /// 0x + 40 hex
    Evm,
    /// r... (Base58)
    Xrp,
    /// addr1...
    Cardano,
    /// 1... (Base58 with zero version byte)
    Polkadot,
    /// Base58 with 0x1e version byte
    Dogecoin,
    /// ltc1q...
    LitecoinSegwit,
    /// cosmos1...
    Cosmos,
}

impl AddressFormat {
    pub const ALL: [AddressFormat; 10] = [
        AddressFormat::Tron,
        AddressFormat::BitcoinSegwit,
        AddressFormat::Solana,
        AddressFormat::Evm,
        AddressFormat::Xrp,
        AddressFormat::Cardano,
        AddressFormat::Polkadot,
        AddressFormat::Dogecoin,
        AddressFormat::LitecoinSegwit,
        AddressFormat::Cosmos,
    ];

    /// Number of expanded seed bytes
    pub fn payload_len(self) -> usize {
        match self {
            AddressFormat::Tron
            | AddressFormat::Evm
            | AddressFormat::Xrp
            | AddressFormat::Dogecoin => 20,
            AddressFormat::BitcoinSegwit
            | AddressFormat::Solana
            | AddressFormat::Polkadot
            | AddressFormat::LitecoinSegwit
            | AddressFormat::Cosmos => 32,
            AddressFormat::Cardano => 57,
        }
    }

    /// Literal byte placed before the expanded payload, if any
    pub fn version_byte(self) -> Option<u8> {
        match self {
            AddressFormat::Xrp | AddressFormat::Polkadot => Some(0x00),
            AddressFormat::Dogecoin => Some(0x1e),
            _ => None,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            AddressFormat::Evm => Encoding::Hex,
            AddressFormat::Tron
            | AddressFormat::Solana
            | AddressFormat::Xrp
            | AddressFormat::Polkadot
            | AddressFormat::Dogecoin => Encoding::Base58,
            AddressFormat::BitcoinSegwit
            | AddressFormat::Cardano
            | AddressFormat::LitecoinSegwit
            | AddressFormat::Cosmos => Encoding::Bech32Charset,
        }
    }

    fn shape(self) -> Shape {
        match self {
            AddressFormat::Tron => Shape::Lead { lead: 'T', end: 34 },
            AddressFormat::Xrp => Shape::Lead { lead: 'r', end: 34 },
            AddressFormat::BitcoinSegwit => Shape::Prefixed { prefix: "bc1q", max_body: 38 },
            AddressFormat::LitecoinSegwit => Shape::Prefixed { prefix: "ltc1q", max_body: 38 },
            AddressFormat::Cosmos => Shape::Prefixed { prefix: "cosmos1", max_body: 38 },
            AddressFormat::Cardano => Shape::Prefixed { prefix: "addr1", max_body: 98 },
            AddressFormat::Evm => Shape::Prefixed { prefix: "0x", max_body: 40 },
            AddressFormat::Solana => Shape::Truncated { max: 44 },
            AddressFormat::Polkadot => Shape::Truncated { max: 48 },
            AddressFormat::Dogecoin => Shape::Truncated { max: 34 },
        }
    }

    /// Leading text every address of this format starts with.
    ///
    /// Polkadot and Dogecoin have no literal prefix; their first character
    /// follows from the version byte.
    pub fn prefix(self) -> &'static str {
        match self {
            AddressFormat::Tron => "T",
            AddressFormat::BitcoinSegwit => "bc1q",
            AddressFormat::Solana => "",
            AddressFormat::Evm => "0x",
            AddressFormat::Xrp => "r",
            AddressFormat::Cardano => "addr1",
            AddressFormat::Polkadot => "1",
            AddressFormat::Dogecoin => "2",
            AddressFormat::LitecoinSegwit => "ltc1q",
            AddressFormat::Cosmos => "cosmos1",
        }
    }

    /// Total length of every address this format can produce
    pub fn length_range(self) -> RangeInclusive<usize> {
        match self {
            // Base58 of 20 non-zero-led bytes is 26-28 characters
            AddressFormat::Tron => 26..=28,
            AddressFormat::Xrp => 27..=29,
            AddressFormat::Dogecoin => 29..=29,
            // Base58 of 32 non-zero-led bytes is 43-44 characters
            AddressFormat::Solana => 43..=44,
            AddressFormat::Polkadot => 44..=45,
            AddressFormat::BitcoinSegwit => 36..=36,
            AddressFormat::LitecoinSegwit => 37..=37,
            AddressFormat::Cosmos => 39..=39,
            AddressFormat::Cardano => 62..=62,
            AddressFormat::Evm => 42..=42,
        }
    }

    /// Render the address for a seed string
    pub fn render(self, seed: &str) -> String {
        let mut bytes = Vec::with_capacity(self.payload_len() + 1);
        bytes.extend(self.version_byte());
        bytes.extend(SeedStream::new(seed).take(self.payload_len()));

        let encoded = self.encoding().encode(&bytes);

        match self.shape() {
            Shape::Prefixed { prefix, max_body } => {
                format!("{prefix}{}", clamp(&encoded, 0, max_body))
            }
            Shape::Lead { lead, end } => format!("{lead}{}", clamp(&encoded, 1, end)),
            Shape::Truncated { max } => clamp(&encoded, 0, max).to_string(),
        }
    }

    /// Whether `address` has the prefix, length and charset of this format
    pub fn accepts(self, address: &str) -> bool {
        if !self.length_range().contains(&address.len()) {
            return false;
        }
        match address.strip_prefix(self.prefix()) {
            Some(body) if !body.is_empty() => self.encoding().validate(body).is_ok(),
            _ => false,
        }
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFormat::Tron => write!(f, "TRON (T...)"),
            AddressFormat::BitcoinSegwit => write!(f, "Bitcoin SegWit (bc1q...)"),
            AddressFormat::Solana => write!(f, "Solana"),
            AddressFormat::Evm => write!(f, "EVM (0x...)"),
            AddressFormat::Xrp => write!(f, "XRP Ledger (r...)"),
            AddressFormat::Cardano => write!(f, "Cardano (addr1...)"),
            AddressFormat::Polkadot => write!(f, "Polkadot"),
            AddressFormat::Dogecoin => write!(f, "Dogecoin"),
            AddressFormat::LitecoinSegwit => write!(f, "Litecoin SegWit (ltc1q...)"),
            AddressFormat::Cosmos => write!(f, "Cosmos (cosmos1...)"),
        }
    }
}

/// Substring by character index, clamped to the available text.
/// Encoded text is always ASCII.
fn clamp(text: &str, start: usize, end: usize) -> &str {
    let end = end.min(text.len());
    let start = start.min(end);
    text.get(start..end).unwrap_or_default()
}

/// A derived display address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositAddress {
    /// The address string
    pub address: String,
    /// Asset symbol it was derived for
    pub asset: String,
    /// Network id it was derived for
    pub network: String,
    /// Format chosen by the rule table
    pub format: AddressFormat,
}
