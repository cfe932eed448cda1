/*!
 * Process subsystem tests entry point
 */

#[path = "process/registry_test.rs"]
mod registry_test;

#[path = "process/lifecycle_test.rs"]
mod lifecycle_test;
