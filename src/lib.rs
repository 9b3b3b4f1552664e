//! # random-mdp
//!
//! Random finite MDPs for reinforcement-learning experiments.
//!
//! [`generate`] turns a seed and an [`MdpConfig`] into a [`RandomMdp`]:
//! - a vocabulary of `num_rewards` reward values drawn from a normal distribution
//! - transition probabilities `p(s' | s, a)` from normalized uniform draws
//! - reward probabilities `p(rewards[i] | s, a)`, drawn the same way
//! - the expected reward `r(s, a)` derived from the two above
//!
//! Each of the three sampled tables reads from its own sub-stream of the seed
//! (see [`rng`]), so they are independent of one another.

pub mod config;
pub mod error;
pub mod generator;
pub mod mdp;
pub mod rng;

pub use config::MdpConfig;
pub use error::{MdpError, Result, Table};
pub use generator::{generate, generate_with_keys, normalize_rows};
pub use mdp::{Mdp, RandomMdp};
pub use rng::{SeedKey, Stream, StreamKeys};
