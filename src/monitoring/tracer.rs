/*!
 * Structured Tracing
 * Subscriber setup and per-run spans using the tracing crate
 *
 * Features:
 * - Unique run ID per simulation for log correlation
 * - JSON-formatted logs for structured parsing
 * - Wall-clock duration recorded when a run span closes
 */

use crate::memory::PlacementStrategy;
use crate::scheduler::SchedulingPolicy;
use std::time::Instant;
use tracing::{debug, info, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SIM_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("SIM_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("structured tracing initialized");
    }
}

/// Generate a unique run ID for log correlation
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one simulation run
pub struct RunSpan {
    span: Span,
    start: Instant,
    run_id: String,
}

impl RunSpan {
    pub fn new(policy: SchedulingPolicy, strategy: PlacementStrategy) -> Self {
        let run_id = generate_run_id();
        let span = span!(
            Level::INFO,
            "simulation",
            run_id = %run_id,
            policy = %policy,
            strategy = %strategy,
            wall_ms = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            run_id,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        self.span.record("wall_ms", elapsed.as_millis() as u64);
        let _entered = self.span.enter();
        debug!(run_id = %self.run_id, wall_us = elapsed.as_micros() as u64, "run span closed");
    }
}
