/*!
 * Memory Types
 * Common types for memory management
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{MEMORY_CRITICAL_THRESHOLD, MEMORY_WARNING_THRESHOLD};
use crate::core::types::{Address, Pid, Size};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Memory operation result (construction is the only fallible step)
pub type MemoryResult<T> = Result<T, ConfigError>;

/// Owner id carried by free blocks
pub const NO_OWNER: Pid = 0;

/// Memory block metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub address: Address,
    pub size: Size,
    pub allocated: bool,
    /// Owning process, [`NO_OWNER`] while free
    pub owner_pid: Pid,
}

impl MemoryBlock {
    pub fn free(address: Address, size: Size) -> Self {
        Self {
            address,
            size,
            allocated: false,
            owner_pid: NO_OWNER,
        }
    }

    pub fn allocated(address: Address, size: Size, owner_pid: Pid) -> Self {
        Self {
            address,
            size,
            allocated: true,
            owner_pid,
        }
    }

    /// One past the last byte of the block
    #[inline(always)]
    pub fn end(&self) -> Address {
        self.address + self.size
    }

    #[inline(always)]
    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    #[inline(always)]
    pub fn is_free(&self) -> bool {
        !self.allocated
    }

    pub(crate) fn release(&mut self) {
        self.allocated = false;
        self.owner_pid = NO_OWNER;
    }
}

/// Placement policy for choosing which free block satisfies a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlacementStrategy {
    /// First free block large enough, in address order
    #[default]
    FirstFit,
    /// Smallest free block large enough, lowest address on ties
    BestFit,
    /// Largest free block large enough, lowest address on ties
    WorstFit,
}

impl PlacementStrategy {
    pub const ALL: [PlacementStrategy; 3] = [Self::FirstFit, Self::BestFit, Self::WorstFit];

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstFit => "first_fit",
            Self::BestFit => "best_fit",
            Self::WorstFit => "worst_fit",
        }
    }

    /// Short label used in report tables
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FirstFit => "First-Fit",
            Self::BestFit => "Best-Fit",
            Self::WorstFit => "Worst-Fit",
        }
    }
}

impl FromStr for PlacementStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "first_fit" | "first" | "ff" => Ok(Self::FirstFit),
            "best_fit" | "best" | "bf" => Ok(Self::BestFit),
            "worst_fit" | "worst" | "wf" => Ok(Self::WorstFit),
            _ => Err(format!(
                "Invalid placement strategy '{}'. Valid: first_fit, best_fit, worst_fit",
                s
            )),
        }
    }
}

impl std::fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlacementStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlacementStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Memory statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
    pub fragmentation: f64,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        MemoryPressure::from_ratio(self.usage_percentage / 100.0)
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl MemoryPressure {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= MEMORY_CRITICAL_THRESHOLD {
            MemoryPressure::Critical
        } else if ratio >= MEMORY_WARNING_THRESHOLD {
            MemoryPressure::High
        } else if ratio >= 0.60 {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
