/*!
 * Process Module
 * Simulated processes and the registry that owns them
 */

pub mod registry;
pub mod types;

// Re-export for convenience
pub use registry::ProcessRegistry;
pub use types::{Process, ProcessPriority, ProcessResult, ProcessState};
