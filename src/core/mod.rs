/*!
 * Core Module
 * Shared types, constants, errors and serde helpers
 */

pub mod errors;
pub mod limits;
pub mod serde;
pub mod types;

pub use errors::{
    ConfigError, ConfigResult, ProcessError, SchedulerError, SimError, SimResult,
};
pub use types::{Address, Pid, Size, TimeWindow, Timestamp};
