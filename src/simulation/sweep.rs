/*!
 * Configuration Sweep
 * Every scheduling policy against every placement strategy
 */

use super::config::SimulationConfig;
use super::simulator::{RunOutcome, Simulator};
use crate::core::errors::SimResult;
use crate::memory::PlacementStrategy;
use crate::scheduler::SchedulingPolicy;
use tracing::info;

/// Policy × strategy pairs in report order
pub fn combinations() -> Vec<(SchedulingPolicy, PlacementStrategy)> {
    SchedulingPolicy::ALL
        .iter()
        .flat_map(|&policy| PlacementStrategy::ALL.iter().map(move |&strategy| (policy, strategy)))
        .collect()
}

/// Run every combination sequentially, each on a fresh simulator
pub fn run_sweep(config: &SimulationConfig) -> SimResult<Vec<RunOutcome>> {
    info!(runs = combinations().len(), "starting sequential sweep");
    combinations()
        .into_iter()
        .map(|(policy, strategy)| -> SimResult<RunOutcome> {
            Simulator::new(config.clone())?.run(policy, strategy)
        })
        .collect()
}

/// Run every combination on its own scoped thread
///
/// Each thread builds a private simulator; nothing is shared between runs.
/// Results come back in the same order as [`run_sweep`].
pub fn run_sweep_parallel(config: &SimulationConfig) -> SimResult<Vec<RunOutcome>> {
    info!(runs = combinations().len(), "starting parallel sweep");
    std::thread::scope(|scope| -> SimResult<Vec<RunOutcome>> {
        let handles: Vec<_> = combinations()
            .into_iter()
            .map(|(policy, strategy)| {
                let config = config.clone();
                std::thread::Builder::new()
                    .name(format!("sim-{}-{}", policy.as_str(), strategy.as_str()))
                    .spawn_scoped(scope, move || -> SimResult<RunOutcome> {
                        Simulator::new(config)?.run(policy, strategy)
                    })
            })
            .collect::<Result<_, _>>()?;

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(outcome) => outcome,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
