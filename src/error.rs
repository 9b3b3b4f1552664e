//! Error types for MDP generation

use std::fmt;
use thiserror::Error;

/// Result type for MDP generation
pub type Result<T> = std::result::Result<T, MdpError>;

/// Probability table being normalized when a degenerate row shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Transitions,
    RewardProbs,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Transitions => write!(f, "transition_ps"),
            Table::RewardProbs => write!(f, "reward_ps"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MdpError {
    /// Rejected before any sampling happens.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A row of sampled weights could not be turned into a distribution.
    #[error("Numerical degeneracy in {table}[{state}, {action}, :]: row sums to {sum}")]
    NumericalDegeneracy {
        table: Table,
        state: usize,
        action: usize,
        sum: f32,
    },
}

impl MdpError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        MdpError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
