/*!
 * Performance Monitoring
 * Metrics aggregation, text reports and tracing
 */

mod metrics;
mod report;
mod tracer;

pub use metrics::{MetricsAggregator, PerformanceMetrics};
pub use report::{format_time, render_final_report, render_report, render_sweep_table, SweepRow};
pub use tracer::{generate_run_id, init_tracing, RunSpan};
