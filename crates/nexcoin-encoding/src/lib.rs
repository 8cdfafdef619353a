//! NexCoin Encoding Primitives
//!
//! Seed hashing, byte-stream expansion and the text encodings used to render
//! display-only deposit addresses. Nothing here touches key material.

pub mod hash;
pub mod encoding;

pub use self::hash::{expand_bytes, seed_hash, SeedStream};
pub use self::encoding::EncodingError;

// Re-export dependencies for use by other crates
pub use bs58;
pub use hex;
