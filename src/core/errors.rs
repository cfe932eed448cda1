/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use crate::process::ProcessState;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors, fatal at construction and never recovered
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(config::invalid),
        help("Sizes, page size, quantum and time step must all be greater than zero.")
    )]
    InvalidConfiguration(String),
}

impl ConfigError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ConfigError::InvalidConfiguration(reason.into())
    }
}

/// Process-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessError {
    #[error("Invalid process parameters: burst_time={burst_time}, memory_required={memory_required}")]
    #[diagnostic(
        code(process::invalid_parameters),
        help("Burst time and memory requirement must both be greater than zero.")
    )]
    InvalidParameters {
        burst_time: u64,
        memory_required: u64,
    },

    #[error("Process {0} not found")]
    #[diagnostic(
        code(process::not_found),
        help("The process may have been cleaned up or never existed. Check PID validity.")
    )]
    NotFound(Pid),
}

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid scheduler configuration: {0}")]
    #[diagnostic(
        code(scheduler::invalid_configuration),
        help("The time quantum must be greater than zero.")
    )]
    InvalidConfiguration(String),

    #[error("Process {0} not found in registry")]
    #[diagnostic(
        code(scheduler::process_not_found),
        help("Only processes owned by the registry can be queued.")
    )]
    ProcessNotFound(Pid),

    #[error("Process {pid} cannot move from {from} to {to}")]
    #[diagnostic(
        code(scheduler::invalid_transition),
        help("TERMINATED is absorbing; a finished process can never be queued or run again.")
    )]
    InvalidTransition {
        pid: Pid,
        from: ProcessState,
        to: ProcessState,
    },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Process error: {0}")]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(sim::io_error),
        help("Could not read the configuration file. Check the SIM_CONFIG path.")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    #[diagnostic(
        code(sim::config_parse),
        help("The configuration file must be a JSON object with SimulationConfig fields.")
    )]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for configuration validation
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type for orchestration-level operations
pub type SimResult<T> = std::result::Result<T, SimError>;
