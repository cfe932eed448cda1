/*!
 * Workload Generation
 * Populate a registry with sampled processes
 */

use super::config::SimulationConfig;
use super::sampler::ParameterSampler;
use crate::core::errors::SimResult;
use crate::core::types::{Pid, Size};
use crate::process::ProcessRegistry;
use tracing::{debug, info};

/// Create `config.process_count` processes from `sampler`
///
/// Each process draws, in order, arrival time, burst time, memory
/// requirement and priority; the call order is part of the reproducibility
/// contract.
pub fn generate_workload<S>(
    registry: &mut ProcessRegistry,
    sampler: &mut S,
    config: &SimulationConfig,
) -> SimResult<Vec<Pid>>
where
    S: ParameterSampler + ?Sized,
{
    let arrival = config.arrival_range;
    let burst = config.burst_range;
    let memory = config.memory_range();

    let mut pids = Vec::with_capacity(config.process_count);
    for _ in 0..config.process_count {
        let arrival_time = sampler.sample(arrival.min, arrival.max);
        let burst_time = sampler.sample(burst.min, burst.max);
        let memory_required = sampler.sample(memory.min, memory.max) as Size;
        let priority = sampler.sample_priority();

        let pid = registry.create(arrival_time, burst_time, memory_required, priority)?;
        debug!(pid, arrival_time, burst_time, memory_required, %priority, "process generated");
        pids.push(pid);
    }

    info!(count = pids.len(), "workload generated");
    Ok(pids)
}
