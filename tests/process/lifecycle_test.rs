/*!
 * Lifecycle Tests
 * Execution accounting and the RUNNING precondition
 */

use os_resource_sim::process::{ProcessPriority, ProcessRegistry, ProcessState};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
#[should_panic(expected = "must be RUNNING")]
fn test_execute_outside_running_panics() {
    let mut registry = ProcessRegistry::new();
    let pid = registry.create(0, 10, 64, ProcessPriority::Low).unwrap();
    registry.get_mut(pid).unwrap().execute(5);
}

#[test]
fn test_turnaround_and_waiting() {
    let mut registry = ProcessRegistry::new();
    let pid = registry.create(100, 30, 64, ProcessPriority::High).unwrap();
    let process = registry.get_mut(pid).unwrap();

    assert_eq!(process.turnaround_time(), 0);
    process.set_state(ProcessState::Running);
    assert!(!process.execute(20));
    process.record_execution(120);
    assert!(process.execute(20));
    process.record_execution(150);
    process.set_completion_time(160);

    assert_eq!(process.remaining_time(), 0);
    assert_eq!(process.state(), ProcessState::Terminated);
    assert_eq!(process.turnaround_time(), 60);
    assert_eq!(process.waiting_time(), 30);
    assert_eq!(process.execution_history(), &[120, 150]);
}

#[test]
fn test_priority_weights_are_ordered() {
    let weights: Vec<u8> = ProcessPriority::ALL.iter().map(|p| p.weight()).collect();
    assert_eq!(weights, vec![1, 5, 10, 15]);
    assert!(ProcessPriority::Critical > ProcessPriority::Low);
}

proptest! {
    #[test]
    fn prop_remaining_time_never_increases(
        burst in 1u64..2000,
        quanta in prop::collection::vec(1u64..100, 1..60),
    ) {
        let mut registry = ProcessRegistry::new();
        let pid = registry.create(0, burst, 64, ProcessPriority::Medium).unwrap();
        let process = registry.get_mut(pid).unwrap();

        let mut previous = process.remaining_time();
        for quantum in quanta {
            if process.state() == ProcessState::Terminated {
                break;
            }
            process.set_state(ProcessState::Running);
            let finished = process.execute(quantum);

            prop_assert!(process.remaining_time() <= previous);
            prop_assert!(process.remaining_time() <= process.burst_time());
            prop_assert_eq!(finished, process.remaining_time() == 0);
            prop_assert_eq!(finished, process.state() == ProcessState::Terminated);
            previous = process.remaining_time();
        }
    }
}
