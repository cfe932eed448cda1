/*!
 * Registry Tests
 * PID assignment, lookup, filtering and cleanup
 */

use os_resource_sim::process::{ProcessPriority, ProcessRegistry, ProcessState};
use os_resource_sim::ProcessError;
use pretty_assertions::assert_eq;

#[test]
fn test_pids_are_monotonic_and_not_reused() {
    let mut registry = ProcessRegistry::new();
    let a = registry.create(0, 10, 64, ProcessPriority::Low).unwrap();
    let b = registry.create(0, 10, 64, ProcessPriority::Low).unwrap();
    assert!(registry.destroy(b));
    let c = registry.create(0, 10, 64, ProcessPriority::Low).unwrap();

    assert_eq!((a, b, c), (1, 2, 3));
    assert!(registry.get(2).is_none());
    assert_eq!(registry.get(3).unwrap().name(), "Process_3");
}

#[test]
fn test_invalid_parameters_leave_registry_untouched() {
    let mut registry = ProcessRegistry::new();
    assert_eq!(
        registry.create(0, 0, 64, ProcessPriority::High),
        Err(ProcessError::InvalidParameters {
            burst_time: 0,
            memory_required: 64
        })
    );
    assert!(registry
        .create(0, 10, 0, ProcessPriority::High)
        .is_err());
    assert!(registry.is_empty());

    // The failed attempts did not consume PIDs
    assert_eq!(registry.create(0, 10, 64, ProcessPriority::High), Ok(1));
}

#[test]
fn test_by_state_preserves_insertion_order() {
    let mut registry = ProcessRegistry::new();
    for _ in 0..4 {
        registry.create(0, 10, 64, ProcessPriority::Medium).unwrap();
    }
    registry.get_mut(3).unwrap().set_state(ProcessState::Ready);
    registry.get_mut(1).unwrap().set_state(ProcessState::Ready);

    assert_eq!(registry.pids_by_state(ProcessState::Ready), vec![1, 3]);
    assert_eq!(registry.by_state(ProcessState::New).len(), 2);
    let all: Vec<u32> = registry.all().iter().map(|p| p.pid()).collect();
    assert_eq!(all, vec![1, 2, 3, 4]);
}

#[test]
fn test_cleanup_and_reset() {
    let mut registry = ProcessRegistry::new();
    for _ in 0..3 {
        registry.create(0, 10, 64, ProcessPriority::Medium).unwrap();
    }
    let process = registry.get_mut(2).unwrap();
    process.set_state(ProcessState::Running);
    assert!(process.execute(10));
    assert_eq!(registry.completed_count(), 1);

    assert_eq!(registry.cleanup_terminated(), 1);
    assert_eq!(registry.len(), 2);
    assert!(!registry.contains(2));
    assert_eq!(registry.get(3).unwrap().pid(), 3);

    registry.reset();
    assert!(registry.is_empty());
    assert_eq!(registry.create(0, 10, 64, ProcessPriority::Low), Ok(1));
}
