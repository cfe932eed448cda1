/*!
 * Hardware Event Bus
 * Time-ordered interrupt queue drained by the simulation clock
 */

use super::types::{Interrupt, InterruptType};
use crate::core::limits::HARDWARE_CONTEXT_SWITCH_OVERHEAD;
use crate::core::types::{Pid, Timestamp};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Heap slot; reversed ordering turns the max-heap into earliest-first
#[derive(Debug)]
struct Pending {
    seq: u64,
    interrupt: Interrupt,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Pending {}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .interrupt
            .timestamp
            .cmp(&self.interrupt.timestamp)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Interrupt queue with overhead accounting
#[derive(Debug, Default)]
pub struct HardwareEventBus {
    pending: BinaryHeap<Pending>,
    history: Vec<Interrupt>,
    next_seq: u64,
    total_overhead: Timestamp,
}

impl HardwareEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an interrupt
    pub fn raise(&mut self, interrupt: Interrupt) {
        trace!(
            kind = %interrupt.kind,
            source = interrupt.source,
            at = interrupt.timestamp,
            "interrupt raised"
        );
        self.pending.push(Pending {
            seq: self.next_seq,
            interrupt,
        });
        self.next_seq += 1;
    }

    pub fn raise_timer(&mut self, pid: Pid, at: Timestamp) {
        self.raise(Interrupt::new(at, InterruptType::Timer, pid, "Timer slice expired"));
    }

    pub fn raise_io(&mut self, pid: Pid, at: Timestamp) {
        self.raise(Interrupt::new(at, InterruptType::Io, pid, "I/O operation completed"));
    }

    pub fn raise_syscall(&mut self, pid: Pid, call: &str, at: Timestamp) {
        self.raise(Interrupt::new(
            at,
            InterruptType::Syscall,
            pid,
            format!("System call: {}", call),
        ));
    }

    pub fn raise_fault(&mut self, description: impl Into<String>, at: Timestamp) {
        self.raise(Interrupt::new(at, InterruptType::Fault, 0, description));
    }

    /// Handle every interrupt due at or before `now`, returning how many ran
    pub fn drain(&mut self, now: Timestamp) -> usize {
        self.drain_with(now, |_| {})
    }

    /// Like [`drain`](Self::drain), passing each handled interrupt to `handler`
    /// in timestamp order
    pub fn drain_with<F>(&mut self, now: Timestamp, mut handler: F) -> usize
    where
        F: FnMut(&Interrupt),
    {
        let mut processed = 0;

        while self
            .pending
            .peek()
            .is_some_and(|p| p.interrupt.timestamp <= now)
        {
            let Some(Pending { interrupt, .. }) = self.pending.pop() else {
                break;
            };

            self.total_overhead += interrupt.kind.overhead();
            handler(&interrupt);
            self.history.push(interrupt);
            processed += 1;
        }

        if processed > 0 {
            debug!(
                now,
                processed,
                pending = self.pending.len(),
                overhead = self.total_overhead,
                "interrupts drained"
            );
        }
        processed
    }

    /// Charge a hardware-level context switch (TLB flush, page table load)
    pub fn hardware_context_switch(&mut self) -> Timestamp {
        self.total_overhead += HARDWARE_CONTEXT_SWITCH_OVERHEAD;
        HARDWARE_CONTEXT_SWITCH_OVERHEAD
    }

    #[inline(always)]
    pub fn overhead_for(kind: InterruptType) -> Timestamp {
        kind.overhead()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drop pending interrupts and the handled history; overhead is kept
    pub fn clear_all(&mut self) {
        self.pending.clear();
        self.history.clear();
    }

    #[inline(always)]
    pub fn total_overhead(&self) -> Timestamp {
        self.total_overhead
    }

    /// Handled interrupts in the order they were processed
    pub fn history(&self) -> &[Interrupt] {
        &self.history
    }

    pub fn reset(&mut self) {
        self.clear_all();
        self.next_seq = 0;
        self.total_overhead = 0;
    }
}
