//! Store-assigned document identifiers.
//!
//! Identifiers are 12 bytes: a 4-byte big-endian creation timestamp in seconds,
//! 5 bytes unique to the running process and a 3-byte wrapping counter. Their
//! text form is 24 lowercase hexadecimal characters.

use chrono::Utc;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

const BYTE_LEN: usize = 12;

/// Length of the hexadecimal text form.
pub const HEX_LEN: usize = BYTE_LEN * 2;

const COUNTER_MASK: u32 = 0x00ff_ffff;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(|| rand::rng().random());

static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::rng().random_range(0..=COUNTER_MASK)));

/// Error returned when a string is not an identifier's text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid identifier")]
pub struct InvalidObjectId(pub String);

/// Opaque identifier assigned to contacts and users on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; BYTE_LEN]);

impl ObjectId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        let seconds = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0u8; BYTE_LEN];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(PROCESS_UNIQUE.as_slice());
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

        Self(bytes)
    }

    /// Returns true if `raw` is exactly 24 hexadecimal characters.
    ///
    /// This is a purely syntactic check; it says nothing about whether a
    /// document with that identifier exists.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Seconds since the Unix epoch at which the identifier was generated.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for ObjectId {
    type Err = InvalidObjectId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(raw) {
            return Err(InvalidObjectId(raw.to_string()));
        }

        let mut bytes = [0u8; BYTE_LEN];
        hex::decode_to_slice(raw, &mut bytes).map_err(|_| InvalidObjectId(raw.to_string()))?;

        Ok(Self(bytes))
    }
}
