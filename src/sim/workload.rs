use super::process::ProcessSpec;
use crate::core::state::Ticks;
use rand::prelude::*;

/// The fixed five-process set used by the interactive demo.
pub fn demo_set() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new("P1", 0, 2).with_priority(1),
        ProcessSpec::new("P2", 0, 3).with_priority(2),
        ProcessSpec::new("P3", 2, 2).with_priority(3),
        ProcessSpec::new("P4", 3, 5).with_priority(4),
        ProcessSpec::new("P5", 4, 4).with_priority(5),
    ]
}

/// Seeded Bernoulli arrival process: each tick of the horizon admits a new
/// process with probability `p_arrival`, drawing a short or long burst and a
/// random priority. Deterministic for a given seed.
pub fn bernoulli(
    horizon: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    seed: u64,
) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut specs = Vec::new();

    for t in 0..horizon {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };

            let name = format!("P{}", specs.len() + 1);
            specs.push(ProcessSpec::new(name, t, burst).with_priority(rng.random_range(1..=5)));
        }
    }

    specs
}
