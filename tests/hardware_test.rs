/*!
 * Hardware Event Bus Tests
 * Ordering, overhead accounting and history
 */

use os_resource_sim::hardware::{HardwareEventBus, Interrupt, InterruptType};
use pretty_assertions::assert_eq;

#[test]
fn test_out_of_order_raises_drain_by_timestamp() {
    let mut bus = HardwareEventBus::new();
    for (at, kind) in [
        (40, InterruptType::Syscall),
        (10, InterruptType::Fault),
        (25, InterruptType::Timer),
        (10, InterruptType::Io),
    ] {
        bus.raise(Interrupt::new(at, kind, 1, kind.as_str()));
    }

    assert_eq!(bus.drain(25), 3);
    let seen: Vec<(u64, InterruptType)> =
        bus.history().iter().map(|i| (i.timestamp, i.kind)).collect();
    assert_eq!(
        seen,
        vec![
            (10, InterruptType::Fault),
            (10, InterruptType::Io),
            (25, InterruptType::Timer),
        ]
    );
    assert_eq!(bus.total_overhead(), 10 + 3 + 1);

    assert_eq!(bus.drain(100), 1);
    assert_eq!(bus.total_overhead(), 10 + 3 + 1 + 5);
    assert_eq!(bus.pending_count(), 0);
}

#[test]
fn test_each_interrupt_consumed_once() {
    let mut bus = HardwareEventBus::new();
    bus.raise_io(3, 5);
    assert_eq!(bus.drain(5), 1);
    assert_eq!(bus.drain(5), 0);
    assert_eq!(bus.history().len(), 1);
    assert_eq!(bus.history()[0].description, "I/O operation completed");
}

#[test]
fn test_drain_with_reports_sources() {
    let mut bus = HardwareEventBus::new();
    bus.raise_io(7, 30);
    bus.raise_timer(2, 10);
    bus.raise_syscall(4, "write", 20);

    let mut io_sources = Vec::new();
    bus.drain_with(30, |interrupt| {
        if interrupt.kind == InterruptType::Io {
            io_sources.push(interrupt.source);
        }
    });
    assert_eq!(io_sources, vec![7]);
    assert_eq!(bus.history()[1].description, "System call: write");
}

#[test]
fn test_overhead_table() {
    assert_eq!(HardwareEventBus::overhead_for(InterruptType::Timer), 1);
    assert_eq!(HardwareEventBus::overhead_for(InterruptType::Io), 3);
    assert_eq!(HardwareEventBus::overhead_for(InterruptType::Syscall), 5);
    assert_eq!(HardwareEventBus::overhead_for(InterruptType::Fault), 10);
}

#[test]
fn test_clear_all_and_reset() {
    let mut bus = HardwareEventBus::new();
    bus.raise_timer(1, 0);
    bus.drain(0);
    bus.raise_fault("bus error", 50);

    bus.clear_all();
    assert_eq!(bus.pending_count(), 0);
    assert!(bus.history().is_empty());
    assert_eq!(bus.total_overhead(), 1);

    bus.reset();
    assert_eq!(bus.total_overhead(), 0);
}
