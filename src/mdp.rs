use ndarray::{Array1, Array2, Array3};

/// Finite Markov Decision Process - Sutton & Barto 2018.
pub trait Mdp {
    fn n_s(&self) -> usize;

    fn n_a(&self) -> usize;

    /// Size of the reward vocabulary.
    fn n_r(&self) -> usize;

    /// p(s' | s, a)
    fn transition_p(&self, s: usize, a: usize, s_next: usize) -> f32;

    /// Probability of receiving the `i`-th reward value in (s, a).
    fn reward_p(&self, s: usize, a: usize, i: usize) -> f32;

    /// r(s, a) = E[R | s, a]
    fn expected_reward(&self, s: usize, a: usize) -> f32;
}

/// Randomly generated MDP. Built once by [`crate::generate`], read-only after.
///
/// Shapes:
/// - `rewards`: `[n_r]`
/// - `transition_ps[s, a, s']`: `[n_s, n_a, n_s]`
/// - `reward_ps[s, a, i]`: `[n_s, n_a, n_r]`
/// - `expected_rewards[s, a]`: `[n_s, n_a]`
#[derive(Debug, Clone, PartialEq)]
pub struct RandomMdp {
    num_states: usize,
    num_actions: usize,
    reward_mean: f32,
    reward_std: f32,
    rewards: Array1<f32>,
    transition_ps: Array3<f32>,
    reward_ps: Array3<f32>,
    expected_rewards: Array2<f32>,
}

impl RandomMdp {
    pub(crate) fn from_parts(
        reward_mean: f32,
        reward_std: f32,
        rewards: Array1<f32>,
        transition_ps: Array3<f32>,
        reward_ps: Array3<f32>,
        expected_rewards: Array2<f32>,
    ) -> Self {
        let (num_states, num_actions, _) = transition_ps.dim();
        debug_assert_eq!(reward_ps.dim(), (num_states, num_actions, rewards.len()));
        debug_assert_eq!(expected_rewards.dim(), (num_states, num_actions));

        Self {
            num_states,
            num_actions,
            reward_mean,
            reward_std,
            rewards,
            transition_ps,
            reward_ps,
            expected_rewards,
        }
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    pub fn num_rewards(&self) -> usize {
        self.rewards.len()
    }

    pub fn reward_mean(&self) -> f32 {
        self.reward_mean
    }

    pub fn reward_std(&self) -> f32 {
        self.reward_std
    }

    pub fn rewards(&self) -> &Array1<f32> {
        &self.rewards
    }

    pub fn transition_ps(&self) -> &Array3<f32> {
        &self.transition_ps
    }

    pub fn reward_ps(&self) -> &Array3<f32> {
        &self.reward_ps
    }

    pub fn expected_rewards(&self) -> &Array2<f32> {
        &self.expected_rewards
    }
}

impl Mdp for RandomMdp {
    fn n_s(&self) -> usize {
        self.num_states
    }

    fn n_a(&self) -> usize {
        self.num_actions
    }

    fn n_r(&self) -> usize {
        self.num_rewards()
    }

    fn transition_p(&self, s: usize, a: usize, s_next: usize) -> f32 {
        self.transition_ps[[s, a, s_next]]
    }

    fn reward_p(&self, s: usize, a: usize, i: usize) -> f32 {
        self.reward_ps[[s, a, i]]
    }

    fn expected_reward(&self, s: usize, a: usize) -> f32 {
        self.expected_rewards[[s, a]]
    }
}
