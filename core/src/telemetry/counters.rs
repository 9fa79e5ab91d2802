// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters filled in during encrypt/decrypt calls.
//!
//! Summary: Collects operation and byte counts per call.
//! Converted into an immutable TelemetrySnapshot when the call ends.
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::constants::{HEADER_LEN, MARKER_LEN};

/// Deterministic counters collected around seal/open.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub ops_encrypt: u64,
    pub ops_decrypt: u64,
    pub bytes_plaintext: u64,
    pub bytes_padding: u64,
    pub bytes_ciphertext: u64,
    /// Salt + IV + marker.
    pub bytes_overhead: u64,
}

impl TelemetryCounters {
    /// Record one sealed blob.
    ///
    /// - `pt_len`: caller plaintext length (without marker)
    /// - `ct_len`: ciphertext body length (without salt/IV)
    pub fn add_encrypt(&mut self, pt_len: usize, ct_len: usize) {
        self.ops_encrypt += 1;
        self.record_sizes(pt_len, ct_len);
    }

    /// Record one opened blob.
    ///
    /// - `pt_len`: recovered plaintext length (marker stripped)
    /// - `ct_len`: ciphertext body length (without salt/IV)
    pub fn add_decrypt(&mut self, pt_len: usize, ct_len: usize) {
        self.ops_decrypt += 1;
        self.record_sizes(pt_len, ct_len);
    }

    fn record_sizes(&mut self, pt_len: usize, ct_len: usize) {
        let padding = ct_len.saturating_sub(pt_len + MARKER_LEN);
        self.bytes_plaintext += pt_len as u64;
        self.bytes_padding += padding as u64;
        self.bytes_ciphertext += ct_len as u64;
        self.bytes_overhead += (HEADER_LEN + MARKER_LEN) as u64;
    }

    /// Total bytes written to or read from storage.
    pub fn blob_bytes(&self) -> u64 {
        self.bytes_ciphertext + (self.ops_encrypt + self.ops_decrypt) * HEADER_LEN as u64
    }

    /// Fold another call's counters into this one, e.g. to total a batch of files.
    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.ops_encrypt += other.ops_encrypt;
        self.ops_decrypt += other.ops_decrypt;

        self.bytes_plaintext += other.bytes_plaintext;
        self.bytes_padding += other.bytes_padding;
        self.bytes_ciphertext += other.bytes_ciphertext;
        self.bytes_overhead += other.bytes_overhead;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
