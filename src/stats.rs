//! Bounded rolling latency/rate statistics over a result stream.
//!
//! Two independent fixed-capacity histories are kept: per-frame latencies and
//! raw capture timestamps. Degenerate inputs (empty history, out-of-order
//! timestamps) degrade to neutral zero values, never to errors.

use crate::types::FrameResult;
use std::collections::VecDeque;

/// Number of samples retained by each history buffer.
pub const STAT_HISTORY: usize = 10;

/// Rolling latency/rate estimator fed by timestamped results.
#[derive(Clone, Debug, Default)]
pub struct RollingStats {
    latencies_sec: VecDeque<f64>,
    timestamps_sec: VecDeque<f64>,
}

impl RollingStats {
    pub fn new() -> Self {
        Self {
            latencies_sec: VecDeque::with_capacity(STAT_HISTORY),
            timestamps_sec: VecDeque::with_capacity(STAT_HISTORY),
        }
    }

    /// Records the latency and capture timestamp of `result`, evicting the
    /// oldest sample once the history holds [`STAT_HISTORY`] entries.
    pub fn observe(&mut self, result: &FrameResult) {
        push_bounded(&mut self.latencies_sec, result.latency_sec());
        push_bounded(&mut self.timestamps_sec, result.timestamp_sec);
    }

    /// Most recently observed latency, or 0 if nothing was observed yet.
    pub fn current_latency_sec(&self) -> f64 {
        self.latencies_sec.back().copied().unwrap_or(0.0)
    }

    /// Arithmetic mean of the buffered latencies, or 0 if empty.
    pub fn average_latency_sec(&self) -> f64 {
        if self.latencies_sec.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.latencies_sec.iter().sum();
        sum / self.latencies_sec.len() as f64
    }

    /// Observed result rate as `1 / mean(positive consecutive timestamp
    /// deltas)`. Returns 0 with fewer than two samples or when no positive
    /// delta exists; non-positive deltas are excluded from the mean rather
    /// than treated as errors.
    pub fn rate_hz(&self) -> f64 {
        if self.timestamps_sec.len() < 2 {
            return 0.0;
        }
        let mut sum = 0.0;
        let mut count = 0usize;
        for i in 1..self.timestamps_sec.len() {
            let delta = self.timestamps_sec[i] - self.timestamps_sec[i - 1];
            if delta > 0.0 {
                sum += delta;
                count += 1;
            }
        }
        if count == 0 {
            return 0.0;
        }
        1.0 / (sum / count as f64)
    }

    /// Number of buffered samples (≤ [`STAT_HISTORY`]).
    pub fn len(&self) -> usize {
        self.latencies_sec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latencies_sec.is_empty()
    }

    /// Human-readable two-line summary with millisecond latencies, one
    /// decimal place on every numeric field.
    pub fn summary(&self) -> String {
        format!(
            "Latency: {:.1} ms (avg {:.1} ms, n={})\nRate: {:.1} Hz",
            self.current_latency_sec() * 1000.0,
            self.average_latency_sec() * 1000.0,
            self.len(),
            self.rate_hz()
        )
    }
}

fn push_bounded(buffer: &mut VecDeque<f64>, value: f64) {
    if buffer.len() == STAT_HISTORY {
        buffer.pop_front();
    }
    buffer.push_back(value);
}
