//! Constructor-time options for a generated MDP.

use crate::error::{MdpError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NUM_REWARDS: usize = 5;
pub const DEFAULT_REWARD_MEAN: f32 = 0.0;
pub const DEFAULT_REWARD_STD: f32 = 1.0;

/// Sizes and reward distribution of the MDP to generate.
///
/// Omitted fields take their defaults when deserialized, so a consuming
/// application only has to spell out `num_states` and `num_actions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdpConfig {
    pub num_states: usize,
    pub num_actions: usize,
    /// Size of the reward vocabulary.
    #[serde(default = "default_num_rewards")]
    pub num_rewards: usize,
    #[serde(default = "default_reward_mean")]
    pub reward_mean: f32,
    /// Must be non-negative. Zero collapses every reward to `reward_mean`.
    #[serde(default = "default_reward_std")]
    pub reward_std: f32,
}

fn default_num_rewards() -> usize {
    DEFAULT_NUM_REWARDS
}

fn default_reward_mean() -> f32 {
    DEFAULT_REWARD_MEAN
}

fn default_reward_std() -> f32 {
    DEFAULT_REWARD_STD
}

impl MdpConfig {
    pub fn new(num_states: usize, num_actions: usize) -> Self {
        Self {
            num_states,
            num_actions,
            num_rewards: DEFAULT_NUM_REWARDS,
            reward_mean: DEFAULT_REWARD_MEAN,
            reward_std: DEFAULT_REWARD_STD,
        }
    }

    pub fn with_num_rewards(mut self, num_rewards: usize) -> Self {
        self.num_rewards = num_rewards;
        self
    }

    pub fn with_reward_distribution(mut self, mean: f32, std: f32) -> Self {
        self.reward_mean = mean;
        self.reward_std = std;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, n) in [
            ("num_states", self.num_states),
            ("num_actions", self.num_actions),
            ("num_rewards", self.num_rewards),
        ] {
            if n == 0 {
                return Err(MdpError::invalid(name, "must be at least 1, got 0"));
            }
        }

        if !self.reward_mean.is_finite() {
            return Err(MdpError::invalid(
                "reward_mean",
                format!("must be finite, got {}", self.reward_mean),
            ));
        }

        if !self.reward_std.is_finite() || self.reward_std < 0. {
            return Err(MdpError::invalid(
                "reward_std",
                format!("must be finite and non-negative, got {}", self.reward_std),
            ));
        }

        // Six standard deviations out from the mean must still be a finite f32.
        if !(self.reward_mean.abs() + 6. * self.reward_std).is_finite() {
            return Err(MdpError::invalid(
                "reward_std",
                format!(
                    "|reward_mean| + 6 * reward_std overflows f32 (mean {}, std {})",
                    self.reward_mean, self.reward_std
                ),
            ));
        }

        Ok(())
    }
}
