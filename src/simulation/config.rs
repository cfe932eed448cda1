/*!
 * Simulation Configuration
 * Defaults, JSON file loading and environment overrides
 */

use crate::core::errors::{ConfigError, ConfigResult, SimResult};
use crate::core::limits::{
    DEFAULT_DURATION, DEFAULT_GC_INTERVAL, DEFAULT_IO_LATENCY, DEFAULT_IO_PROBABILITY,
    DEFAULT_MEMORY_POOL, DEFAULT_PAGE_SIZE, DEFAULT_PROCESS_COUNT, DEFAULT_QUANTUM,
    DEFAULT_SEED, DEFAULT_TIME_STEP,
};
use crate::core::types::{Size, Timestamp};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Inclusive sampling range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: u64,
    pub max: u64,
}

impl SampleRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }
}

/// Parameters of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub process_count: usize,
    pub total_memory: Size,
    pub page_size: Size,
    /// Simulated run length (ms)
    pub duration: Timestamp,
    pub time_step: Timestamp,
    pub quantum: Timestamp,
    pub seed: u64,
    pub arrival_range: SampleRange,
    pub burst_range: SampleRange,
    /// A `max` of 0 means a tenth of `total_memory`
    pub memory_range: SampleRange,
    /// Percent chance that a preempted process blocks on I/O
    pub io_probability: u64,
    pub io_latency: Timestamp,
    /// Compaction period; 0 disables compaction
    pub gc_interval: Timestamp,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            process_count: DEFAULT_PROCESS_COUNT,
            total_memory: DEFAULT_MEMORY_POOL,
            page_size: DEFAULT_PAGE_SIZE,
            duration: DEFAULT_DURATION,
            time_step: DEFAULT_TIME_STEP,
            quantum: DEFAULT_QUANTUM,
            seed: DEFAULT_SEED,
            arrival_range: SampleRange::new(0, 1000),
            burst_range: SampleRange::new(10, 500),
            memory_range: SampleRange::new(1024, 0),
            io_probability: DEFAULT_IO_PROBABILITY,
            io_latency: DEFAULT_IO_LATENCY,
            gc_interval: DEFAULT_GC_INTERVAL,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the environment
    ///
    /// Environment variables:
    /// - SIM_CONFIG: path to a JSON file with any subset of the fields
    /// - SIM_PROCESSES, SIM_MEMORY, SIM_DURATION, SIM_SEED, SIM_QUANTUM,
    ///   SIM_TIME_STEP: individual overrides applied after the file
    pub fn from_env() -> SimResult<Self> {
        let mut config = match std::env::var("SIM_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Some(v) = env_override::<usize>("SIM_PROCESSES")? {
            config.process_count = v;
        }
        if let Some(v) = env_override::<Size>("SIM_MEMORY")? {
            config.total_memory = v;
        }
        if let Some(v) = env_override::<Timestamp>("SIM_DURATION")? {
            config.duration = v;
        }
        if let Some(v) = env_override::<u64>("SIM_SEED")? {
            config.seed = v;
        }
        if let Some(v) = env_override::<Timestamp>("SIM_QUANTUM")? {
            config.quantum = v;
        }
        if let Some(v) = env_override::<Timestamp>("SIM_TIME_STEP")? {
            config.time_step = v;
        }

        config.validate()?;
        info!(
            processes = config.process_count,
            memory = config.total_memory,
            duration = config.duration,
            seed = config.seed,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Read a JSON configuration file; missing fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading configuration file");
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Upper bound of the memory requirement range after defaulting
    pub fn memory_range(&self) -> SampleRange {
        let max = match self.memory_range.max {
            0 => (self.total_memory / 10) as u64,
            max => max,
        };
        SampleRange::new(self.memory_range.min, max)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.total_memory == 0 {
            return Err(ConfigError::invalid("total_memory must be greater than 0"));
        }
        if self.page_size == 0 {
            return Err(ConfigError::invalid("page_size must be greater than 0"));
        }
        if self.duration == 0 {
            return Err(ConfigError::invalid("duration must be greater than 0"));
        }
        if self.time_step == 0 {
            return Err(ConfigError::invalid("time_step must be greater than 0"));
        }
        if self.quantum == 0 {
            return Err(ConfigError::invalid("quantum must be greater than 0"));
        }
        if self.quantum > self.time_step {
            return Err(ConfigError::invalid(format!(
                "quantum ({}) must not exceed time_step ({})",
                self.quantum, self.time_step
            )));
        }
        if self.io_probability > 100 {
            return Err(ConfigError::invalid("io_probability is a percentage (0-100)"));
        }

        check_range("arrival_range", self.arrival_range)?;
        check_range("burst_range", self.burst_range)?;
        if self.burst_range.min == 0 {
            return Err(ConfigError::invalid("burst_range must start above 0"));
        }

        let memory = self.memory_range();
        check_range("memory_range", memory)?;
        if memory.min == 0 {
            return Err(ConfigError::invalid("memory_range must start above 0"));
        }
        if memory.max > self.total_memory as u64 {
            return Err(ConfigError::invalid("memory_range exceeds total_memory"));
        }
        Ok(())
    }

    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    pub fn with_total_memory(mut self, total_memory: Size) -> Self {
        self.total_memory = total_memory;
        self
    }

    pub fn with_page_size(mut self, page_size: Size) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_duration(mut self, duration: Timestamp) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_time_step(mut self, time_step: Timestamp) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_quantum(mut self, quantum: Timestamp) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_arrival_range(mut self, min: u64, max: u64) -> Self {
        self.arrival_range = SampleRange::new(min, max);
        self
    }

    pub fn with_burst_range(mut self, min: u64, max: u64) -> Self {
        self.burst_range = SampleRange::new(min, max);
        self
    }

    pub fn with_memory_range(mut self, min: u64, max: u64) -> Self {
        self.memory_range = SampleRange::new(min, max);
        self
    }

    pub fn with_io_probability(mut self, percent: u64) -> Self {
        self.io_probability = percent;
        self
    }

    pub fn with_io_latency(mut self, latency: Timestamp) -> Self {
        self.io_latency = latency;
        self
    }

    pub fn with_gc_interval(mut self, interval: Timestamp) -> Self {
        self.gc_interval = interval;
        self
    }
}

fn check_range(name: &str, range: SampleRange) -> ConfigResult<()> {
    if range.min > range.max {
        return Err(ConfigError::invalid(format!(
            "{} is empty ({} > {})",
            name, range.min, range.max
        )));
    }
    Ok(())
}

fn env_override<T>(key: &str) -> ConfigResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::invalid(format!("{} ({:?}): {}", key, raw, e))),
        Err(_) => Ok(None),
    }
}
