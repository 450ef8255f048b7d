use crate::VehicleDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Substituted when an identity hashes to zero, so the generator never starts from a zero state.
pub const ZERO_HASH_SEED: u32 = 1337;

/// Seed of the fixed fallback rendition.
pub const FALLBACK_SEED: u32 = 42;

/// 32-bit FNV-1a over the UTF-16 code units of `text`.
pub fn fnv1a_32(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Render seed derived from the identity text. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u32);

impl Seed {
    pub fn new(value: u32) -> Self {
        if value == 0 {
            Self(ZERO_HASH_SEED)
        } else {
            Self(value)
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(fnv1a_32(text))
    }

    pub fn from_descriptor(descriptor: &VehicleDescriptor) -> Self {
        Self::from_text(&descriptor.seed_text())
    }

    pub fn fallback() -> Self {
        Self(FALLBACK_SEED)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
