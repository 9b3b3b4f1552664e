use crate::config::MdpConfig;
use crate::error::{MdpError, Result, Table};
use crate::mdp::RandomMdp;
use crate::rng::{SeedKey, StreamKeys};
use ndarray::{s, Array1, Array2, Array3, Axis};
use ndarray_rand::rand_distr::{StandardNormal, Uniform};
use ndarray_rand::RandomExt;
use tracing::{debug, trace, warn};

/// Builds a random MDP from `seed`.
///
/// Same seed and config always give the same MDP, bit for bit.
pub fn generate(seed: u64, config: &MdpConfig) -> Result<RandomMdp> {
    let keys = StreamKeys::derive(SeedKey::new(seed));
    trace!(
        seed,
        rewards = keys.rewards.seed(),
        transitions = keys.transitions.seed(),
        reward_probs = keys.reward_probs.seed(),
        "derived sub-seeds"
    );

    generate_with_keys(keys, config)
}

/// Builds a random MDP with one caller-supplied key per sampling purpose.
///
/// Each table only ever reads from its own key, so holding a key fixed holds
/// the table it feeds fixed.
pub fn generate_with_keys(keys: StreamKeys, config: &MdpConfig) -> Result<RandomMdp> {
    config.validate()?;

    let (n_s, n_a, n_r) = (config.num_states, config.num_actions, config.num_rewards);
    debug!(
        n_s,
        n_a,
        n_r,
        reward_mean = config.reward_mean,
        reward_std = config.reward_std,
        "generating random MDP"
    );

    let rewards = Array1::<f32>::random_using(n_r, StandardNormal, &mut keys.rewards.rng())
        .mapv(|z| config.reward_std * z + config.reward_mean);

    let unit = Uniform::new(0f32, 1f32);

    let transition_ps = normalize_rows(
        Array3::random_using((n_s, n_a, n_s), unit, &mut keys.transitions.rng()),
        Table::Transitions,
    )?;

    let reward_ps = normalize_rows(
        Array3::random_using((n_s, n_a, n_r), unit, &mut keys.reward_probs.rng()),
        Table::RewardProbs,
    )?;

    let expected_rewards = expected_rewards(&reward_ps, &rewards);

    Ok(RandomMdp::from_parts(
        config.reward_mean,
        config.reward_std,
        rewards,
        transition_ps,
        reward_ps,
        expected_rewards,
    ))
}

/// Divides every `[s, a, ..]` row of `table` by its sum.
///
/// A row whose sum is zero, negative or not finite has no distribution to
/// scale to and is reported instead of being replaced.
pub fn normalize_rows(mut table: Array3<f32>, which: Table) -> Result<Array3<f32>> {
    let (n_s, n_a, _) = table.dim();
    for state in 0..n_s {
        for action in 0..n_a {
            let mut row = table.slice_mut(s![state, action, ..]);
            let sum = row.sum();
            if !sum.is_finite() || sum <= 0. || row.iter().any(|&p| p < 0.) {
                warn!(table = %which, state, action, sum, "row cannot be normalized");
                return Err(MdpError::NumericalDegeneracy {
                    table: which,
                    state,
                    action,
                    sum,
                });
            }
            row.mapv_inplace(|p| p / sum);
        }
    }

    Ok(table)
}

/// r(s, a) = sum_i reward_ps[s, a, i] * rewards[i]
fn expected_rewards(reward_ps: &Array3<f32>, rewards: &Array1<f32>) -> Array2<f32> {
    (reward_ps * rewards).sum_axis(Axis(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::*;
    use ndarray::arr3;

    #[test]
    fn normalize_rows_scales_each_row() {
        let t = normalize_rows(
            arr3(&[[[1., 3.], [2., 2.]], [[0.5, 0.], [4., 1.]]]),
            Table::Transitions,
        )
        .unwrap();

        assert_float_eq!(
            t.iter().copied().collect::<Vec<f32>>(),
            vec![0.25, 0.75, 0.5, 0.5, 1., 0., 0.8, 0.2],
            abs_all <= 1e-7
        );
    }

    #[test]
    fn zero_row_is_reported_not_masked() {
        let err =
            normalize_rows(arr3(&[[[0.2, 0.1]], [[0., 0.]]]), Table::RewardProbs).unwrap_err();

        assert_eq!(
            err,
            MdpError::NumericalDegeneracy {
                table: Table::RewardProbs,
                state: 1,
                action: 0,
                sum: 0.,
            }
        );
    }

    #[test]
    fn non_finite_row_is_reported() {
        let err = normalize_rows(arr3(&[[[f32::NAN, 1.]]]), Table::Transitions).unwrap_err();
        assert!(matches!(
            err,
            MdpError::NumericalDegeneracy {
                table: Table::Transitions,
                state: 0,
                action: 0,
                ..
            }
        ));
    }

    #[test]
    fn negative_weight_is_reported() {
        let err = normalize_rows(arr3(&[[[-1., 3.]]]), Table::Transitions).unwrap_err();
        assert!(matches!(err, MdpError::NumericalDegeneracy { sum, .. } if sum == 2.));
    }

    #[test]
    fn expected_rewards_is_the_weighted_sum() {
        let ps = arr3(&[[[0.5, 0.5], [0.1, 0.9]]]);
        let rs = Array1::from(vec![-1., 2.]);
        let er = expected_rewards(&ps, &rs);

        assert_eq!(er.dim(), (1, 2));
        assert_float_eq!(er[[0, 0]], 0.5, abs <= 1e-6);
        assert_float_eq!(er[[0, 1]], 1.7, abs <= 1e-6);
    }

    #[test]
    fn invalid_config_fails_before_sampling() {
        let err = generate(7, &MdpConfig::new(0, 2)).unwrap_err();
        assert!(matches!(
            err,
            MdpError::InvalidParameter {
                name: "num_states",
                ..
            }
        ));
    }
}
