use ndarray::{s, Array3};
use random_mdp::*;

/// Every `[s, a, ..]` row is non-negative and sums to one.
#[allow(dead_code)]
pub fn assert_row_stochastic(table: &Array3<f32>, tol: f32) {
    let (n_s, n_a, _) = table.dim();
    for state in 0..n_s {
        for action in 0..n_a {
            let row = table.slice(s![state, action, ..]);
            assert!(
                row.iter().all(|&p| p >= 0.),
                "negative entry in row ({state}, {action}): {row}"
            );
            let sum = row.sum();
            assert!(
                (sum - 1.).abs() <= tol,
                "row ({state}, {action}) sums to {sum}"
            );
        }
    }
}

pub type Dims = (usize, (usize, usize, usize), (usize, usize, usize), (usize, usize));

#[allow(dead_code)]
pub fn dims(mdp: &RandomMdp) -> Dims {
    (
        mdp.rewards().len(),
        mdp.transition_ps().dim(),
        mdp.reward_ps().dim(),
        mdp.expected_rewards().dim(),
    )
}
