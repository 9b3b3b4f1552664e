//! Splittable seeds.
//!
//! A [`SeedKey`] never hands out a shared generator. Children are derived by
//! hashing the parent seed together with a per-purpose label, and every
//! consumer builds its own [`StdRng`] from the key it was given.

use rand::prelude::*;
use sha2::{Digest, Sha256};

/// What a derived sub-stream is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Rewards,
    Transitions,
    RewardProbs,
}

impl Stream {
    pub fn label(&self) -> &'static str {
        match self {
            Stream::Rewards => "rewards",
            Stream::Transitions => "transitions",
            Stream::RewardProbs => "reward_probs",
        }
    }
}

/// Opaque, copyable seed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedKey(u64);

impl SeedKey {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn seed(&self) -> u64 {
        self.0
    }

    /// Child key for `stream`: first 8 bytes of `sha256(seed_le || label)`.
    pub fn derive(&self, stream: Stream) -> SeedKey {
        let digest = Sha256::new()
            .chain_update(self.0.to_le_bytes())
            .chain_update(stream.label().as_bytes())
            .finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        SeedKey(u64::from_le_bytes(bytes))
    }

    /// Fresh generator seeded from the full `sha256(seed_le)` digest. Two
    /// calls return generators that produce the same sequence.
    pub fn rng(&self) -> StdRng {
        let digest = Sha256::digest(self.0.to_le_bytes());
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&digest);
        StdRng::from_seed(seed)
    }
}

/// One key per sampling purpose of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamKeys {
    pub rewards: SeedKey,
    pub transitions: SeedKey,
    pub reward_probs: SeedKey,
}

impl StreamKeys {
    pub fn derive(root: SeedKey) -> Self {
        Self {
            rewards: root.derive(Stream::Rewards),
            transitions: root.derive(Stream::Transitions),
            reward_probs: root.derive(Stream::RewardProbs),
        }
    }
}
