/*!
 * OS Resource Simulator Library
 * Discrete-time simulation of CPU scheduling and memory allocation
 */

pub mod core;
pub mod hardware;
pub mod memory;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use core::errors::{ConfigError, ProcessError, SchedulerError, SimError, SimResult};
pub use core::types::{Address, Pid, Size, TimeWindow, Timestamp};
pub use hardware::{HardwareEventBus, Interrupt, InterruptType};
pub use memory::{
    Allocator, MemoryAllocator, MemoryBlock, MemoryInfo, MemoryPressure, MemoryStats,
    PlacementStrategy, ProcessMemoryCleanup,
};
pub use monitoring::{init_tracing, MetricsAggregator, PerformanceMetrics};
pub use process::{Process, ProcessPriority, ProcessRegistry, ProcessState};
pub use scheduler::{ScheduleEvent, Scheduler, SchedulerStats, SchedulingPolicy};
pub use simulation::{
    run_sweep, run_sweep_parallel, RunOutcome, SimulationConfig, Simulator, TickEvents,
};
