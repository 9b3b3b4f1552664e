use random_mdp::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let seed = 2718;
    let config = MdpConfig::new(4, 2).with_num_rewards(3);
    let mdp = generate(seed, &config)?;

    println!(
        "Seed: {}, States: {}, Actions: {}, Rewards: {}",
        seed,
        mdp.n_s(),
        mdp.n_a(),
        mdp.n_r()
    );
    println!("rewards: {}", mdp.rewards());
    println!("transition_ps:\n{}", mdp.transition_ps());
    println!("reward_ps:\n{}", mdp.reward_ps());
    println!("expected_rewards:\n{}", mdp.expected_rewards());

    Ok(())
}
