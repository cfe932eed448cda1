/*!
 * Simulator
 * Discrete-time orchestration of registry, scheduler, allocator and bus
 */

use super::config::SimulationConfig;
use super::sampler::{ParameterSampler, SeededSampler};
use super::stopwatch::{Stopwatch, TimeUnit};
use super::workload::generate_workload;
use crate::core::errors::SimResult;
use crate::core::types::{Pid, Size, TimeWindow, Timestamp};
use crate::hardware::{HardwareEventBus, InterruptType};
use crate::memory::{MemoryAllocator, MemoryStats, PlacementStrategy};
use crate::monitoring::{MetricsAggregator, PerformanceMetrics, RunSpan};
use crate::process::{ProcessRegistry, ProcessState};
use crate::scheduler::{Scheduler, SchedulerStats, SchedulingPolicy};
use serde::Serialize;
use tracing::{debug, info, trace};

/// What happened during one clock tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub now: Timestamp,
    /// Processes admitted to the ready queue
    pub admitted: Vec<Pid>,
    /// Arrived processes left NEW because no block fit their memory
    pub deferred: Vec<Pid>,
    pub dispatched: Option<Pid>,
    /// CPU time consumed by the dispatched process
    pub executed: Timestamp,
    pub completed: Option<Pid>,
    pub preempted: Option<Pid>,
    pub blocked: Option<Pid>,
    /// Processes whose I/O completion interrupt fired
    pub unblocked: Vec<Pid>,
    pub interrupts: usize,
    pub context_switch: bool,
    /// Context switch and interrupt handling cost charged this tick
    pub overhead: Timestamp,
    /// Bytes moved by compaction, when it ran
    pub compacted: Option<Size>,
}

/// Result of one full run
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub run_id: String,
    pub policy: SchedulingPolicy,
    pub strategy: PlacementStrategy,
    pub metrics: PerformanceMetrics,
    pub scheduler: SchedulerStats,
    pub memory: MemoryStats,
    pub interrupt_overhead: Timestamp,
    pub allocations: u64,
    pub allocation_failures: u64,
    pub bytes_compacted: u64,
    pub wall_time_ms: f64,
}

impl RunOutcome {
    /// Fraction of admission attempts that got memory, 1.0 with no attempts
    pub fn allocation_success_rate(&self) -> f64 {
        let attempts = self.allocations + self.allocation_failures;
        if attempts == 0 {
            return 1.0;
        }
        self.allocations as f64 / attempts as f64
    }
}

/// Owns private instances of every component
#[derive(Debug)]
pub struct Simulator {
    config: SimulationConfig,
    processes: ProcessRegistry,
    scheduler: Scheduler,
    memory: MemoryAllocator,
    bus: HardwareEventBus,
    sampler: SeededSampler,

    last_dispatched: Option<Pid>,
    busy_time: Timestamp,
    idle_time: Timestamp,
    overhead: Timestamp,
    allocations: u64,
    allocation_failures: u64,
    bytes_compacted: u64,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        config.validate()?;

        let scheduler = Scheduler::with_quantum(SchedulingPolicy::RoundRobin, config.quantum)?;
        let memory = MemoryAllocator::new(
            config.total_memory,
            config.page_size,
            PlacementStrategy::FirstFit,
        )?;
        let sampler = SeededSampler::new(config.seed);

        Ok(Self {
            config,
            processes: ProcessRegistry::new(),
            scheduler,
            memory,
            bus: HardwareEventBus::new(),
            sampler,
            last_dispatched: None,
            busy_time: 0,
            idle_time: 0,
            overhead: 0,
            allocations: 0,
            allocation_failures: 0,
            bytes_compacted: 0,
        })
    }

    /// Create the configured number of processes from the sampler
    pub fn generate_workload(&mut self) -> SimResult<Vec<Pid>> {
        generate_workload(&mut self.processes, &mut self.sampler, &self.config)
    }

    /// Return every component to its initial state and restart the sampler
    pub fn reset(&mut self) {
        self.processes.reset();
        self.scheduler.reset();
        self.memory.reset();
        self.bus.reset();
        self.sampler.reseed(self.config.seed);
        self.last_dispatched = None;
        self.busy_time = 0;
        self.idle_time = 0;
        self.overhead = 0;
        self.allocations = 0;
        self.allocation_failures = 0;
        self.bytes_compacted = 0;
    }

    /// Perform one clock tick at `now`
    pub fn advance(&mut self, now: Timestamp) -> SimResult<TickEvents> {
        let mut events = TickEvents {
            now,
            ..Default::default()
        };

        self.admit_arrivals(now, &mut events)?;
        self.run_cpu(now, &mut events)?;
        self.drain_interrupts(now, &mut events)?;

        if self.config.gc_interval > 0 && now % self.config.gc_interval == 0 {
            let moved = self.memory.garbage_collect();
            self.bytes_compacted += moved as u64;
            events.compacted = Some(moved);
        }

        self.overhead += events.overhead;
        trace!(
            now,
            dispatched = ?events.dispatched,
            executed = events.executed,
            queued = self.scheduler.len(),
            "tick complete"
        );
        Ok(events)
    }

    // Step 1: NEW processes whose arrival time has passed get memory, then a queue slot
    fn admit_arrivals(&mut self, now: Timestamp, events: &mut TickEvents) -> SimResult<()> {
        let arrived: Vec<(Pid, Size)> = self
            .processes
            .by_state(ProcessState::New)
            .into_iter()
            .filter(|p| p.arrival_time() <= now)
            .map(|p| (p.pid(), p.memory_required()))
            .collect();

        for (pid, size) in arrived {
            if self.memory.allocate(pid, size).is_none() {
                debug!(pid, size, "admission deferred, memory unavailable");
                self.allocation_failures += 1;
                events.deferred.push(pid);
                continue;
            }
            self.allocations += 1;
            self.scheduler.enqueue(&mut self.processes, pid, now)?;
            events.admitted.push(pid);
        }
        Ok(())
    }

    // Steps 2 to 4: dispatch, execute for one quantum, then finish, block or preempt
    fn run_cpu(&mut self, now: Timestamp, events: &mut TickEvents) -> SimResult<()> {
        let step = self.config.time_step;

        let Some(pid) = self.scheduler.dispatch(&mut self.processes, now) else {
            self.idle_time += step;
            return Ok(());
        };
        events.dispatched = Some(pid);

        if self.last_dispatched != Some(pid) {
            events.overhead += self
                .scheduler
                .context_switch(&mut self.processes, None, None, now);
            events.overhead += self.bus.hardware_context_switch();
            events.context_switch = true;
        }
        self.last_dispatched = Some(pid);

        let quantum = self.scheduler.quantum();
        let Some(process) = self.processes.get_mut(pid) else {
            self.idle_time += step;
            return Ok(());
        };

        let used = process.remaining_time().min(quantum);
        let finished = process.execute(quantum);
        process.record_execution(now);
        events.executed = used;
        self.busy_time += used;
        self.idle_time += step.saturating_sub(used);

        if finished {
            process.set_completion_time(now + used);
            self.scheduler.complete(&self.processes, pid, now)?;
            let freed = self.memory.free_process_memory(pid);
            debug!(pid, completion = now + used, freed, "process finished");
            events.completed = Some(pid);
        } else if self.sampler.sample(0, 99) < self.config.io_probability {
            self.scheduler
                .transition(&mut self.processes, pid, ProcessState::Blocked, now)?;
            self.bus.raise_io(pid, now + self.config.io_latency);
            events.blocked = Some(pid);
        } else {
            self.bus.raise_timer(pid, now);
            self.scheduler.enqueue(&mut self.processes, pid, now)?;
            events.preempted = Some(pid);
        }
        Ok(())
    }

    // Step 5: handle due interrupts; I/O completions put blocked processes back in line
    fn drain_interrupts(&mut self, now: Timestamp, events: &mut TickEvents) -> SimResult<()> {
        let before = self.bus.total_overhead();
        let mut completed_io = Vec::new();

        events.interrupts = self.bus.drain_with(now, |interrupt| {
            if interrupt.kind == InterruptType::Io {
                completed_io.push(interrupt.source);
            }
        });
        events.overhead += self.bus.total_overhead() - before;

        for pid in completed_io {
            let blocked = self
                .processes
                .get(pid)
                .is_some_and(|p| p.state() == ProcessState::Blocked);
            if blocked {
                self.scheduler.enqueue(&mut self.processes, pid, now)?;
                events.unblocked.push(pid);
            }
        }
        Ok(())
    }

    /// Run the configured duration under one policy and strategy
    ///
    /// Components are reset first, so repeated runs on the same simulator
    /// replay the same workload.
    pub fn run(
        &mut self,
        policy: SchedulingPolicy,
        strategy: PlacementStrategy,
    ) -> SimResult<RunOutcome> {
        let span = RunSpan::new(policy, strategy);
        let _guard = span.enter();

        self.reset();
        self.scheduler.set_policy(policy);
        self.memory.set_strategy(strategy);

        let mut stopwatch = Stopwatch::new();
        stopwatch.start();

        self.generate_workload()?;
        info!(
            processes = self.processes.len(),
            duration = self.config.duration,
            "simulation started"
        );

        let mut now = 0;
        while now < self.config.duration {
            self.advance(now)?;
            now += self.config.time_step;
        }

        stopwatch.stop();
        let metrics = self.metrics();

        info!(
            completed = metrics.completed_processes,
            throughput = metrics.throughput,
            context_switches = metrics.context_switches,
            wall_ms = stopwatch.elapsed_in(TimeUnit::Milliseconds),
            "simulation finished"
        );

        Ok(RunOutcome {
            run_id: span.run_id().to_string(),
            policy,
            strategy,
            metrics,
            scheduler: self.scheduler.stats(),
            memory: self.memory.stats(),
            interrupt_overhead: self.bus.total_overhead(),
            allocations: self.allocations,
            allocation_failures: self.allocation_failures,
            bytes_compacted: self.bytes_compacted,
            wall_time_ms: stopwatch.elapsed_in(TimeUnit::Milliseconds),
        })
    }

    /// Aggregator over `[0, duration)` with the idle time observed so far
    pub fn aggregator(&self) -> MetricsAggregator {
        MetricsAggregator::new(TimeWindow::new(0, self.config.duration))
            .with_idle_time(self.idle_time)
    }

    pub fn metrics(&self) -> PerformanceMetrics {
        self.aggregator()
            .compute(&self.processes, &self.scheduler, &self.memory)
    }

    /// Text report for the current state
    pub fn report(&self) -> String {
        self.aggregator()
            .report(&self.processes, &self.scheduler, &self.memory)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn processes(&self) -> &ProcessRegistry {
        &self.processes
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn memory(&self) -> &MemoryAllocator {
        &self.memory
    }

    pub fn bus(&self) -> &HardwareEventBus {
        &self.bus
    }

    #[inline(always)]
    pub fn busy_time(&self) -> Timestamp {
        self.busy_time
    }

    #[inline(always)]
    pub fn idle_time(&self) -> Timestamp {
        self.idle_time
    }

    /// Context switch and interrupt cost accumulated over the run
    #[inline(always)]
    pub fn overhead(&self) -> Timestamp {
        self.overhead
    }
}
