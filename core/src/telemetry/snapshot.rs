// ## src/telemetry/snapshot.rs

//! Immutable per-call telemetry: counters, ratios, stage timings, elapsed time.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub ops_encrypt: u64,
    pub ops_decrypt: u64,
    pub bytes_plaintext: u64,
    pub bytes_padding: u64,
    pub bytes_ciphertext: u64,
    pub bytes_overhead: u64,
    /// Blob bytes per plaintext byte (0.0 for empty plaintext).
    pub expansion_ratio: f64,
    pub throughput_plaintext_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let expansion_ratio = if counters.bytes_plaintext > 0 {
            counters.blob_bytes() as f64 / counters.bytes_plaintext as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_plaintext as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            ops_encrypt: counters.ops_encrypt,
            ops_decrypt: counters.ops_decrypt,
            bytes_plaintext: counters.bytes_plaintext,
            bytes_padding: counters.bytes_padding,
            bytes_ciphertext: counters.bytes_ciphertext,
            bytes_overhead: counters.bytes_overhead,
            expansion_ratio,
            throughput_plaintext_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal invariants:
    /// - ciphertext covers plaintext + marker + padding
    /// - stage time never exceeds wall time
    pub fn sanity_check(&self) -> bool {
        let ops = self.ops_encrypt + self.ops_decrypt;
        let marker_bytes = ops * crate::constants::MARKER_LEN as u64;
        self.bytes_ciphertext == self.bytes_plaintext + marker_bytes + self.bytes_padding
            && self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
