/*!
 * Hardware Module
 * Simulated interrupt controller
 */

pub mod bus;
pub mod types;

pub use bus::HardwareEventBus;
pub use types::{Interrupt, InterruptType};
