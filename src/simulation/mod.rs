/*!
 * Simulation
 * Configuration, workload generation and the discrete-time run loop
 */

pub mod config;
pub mod sampler;
pub mod simulator;
pub mod stopwatch;
pub mod sweep;
pub mod workload;

pub use config::{SampleRange, SimulationConfig};
pub use sampler::{ParameterSampler, SeededSampler};
pub use simulator::{RunOutcome, Simulator, TickEvents};
pub use stopwatch::{Stopwatch, TimeUnit};
pub use sweep::{combinations, run_sweep, run_sweep_parallel};
pub use workload::generate_workload;
