// ## 📂 File: `src/sle/file.rs`

//! File-backed wrappers around seal/open.
//!
//! - `generate_file`: exactly one encrypt, then one whole-file overwrite.
//! - `read_file`: one whole-file read, no partial-read tolerance, no decrypt.
//! - No retries and no timeouts: storage errors surface immediately as `SleError::Io`.

use std::fs;
use std::path::Path;

use rand::rngs::OsRng;
use tracing::{debug, warn};

use crate::sle::Sle;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::SleError;

/// Overwrite `path` with `blob`.
pub fn write_blob(path: &Path, blob: &[u8]) -> Result<(), SleError> {
    fs::write(path, blob).map_err(|e| SleError::io(path, e))
}

/// Read the whole of `path`.
pub fn read_blob(path: &Path) -> Result<Vec<u8>, SleError> {
    fs::read(path).map_err(|e| SleError::io(path, e))
}

impl Sle {
    /// Encrypt `plaintext` and overwrite `path` with the blob.
    pub fn generate_file(&self, path: impl AsRef<Path>, plaintext: &[u8]) -> Result<(), SleError> {
        self.generate_file_with_telemetry(path, plaintext).map(|_| ())
    }

    /// Raw blob bytes from `path`. Pass them to `decrypt`, or use `open_file`.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, SleError> {
        read_blob(path.as_ref())
    }

    /// `read_file` followed by `decrypt`.
    pub fn open_file(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, SleError> {
        self.open_file_with_telemetry(path).map(|(pt, _)| pt)
    }

    pub fn generate_file_with_telemetry(
        &self,
        path: impl AsRef<Path>,
        plaintext: &[u8],
    ) -> Result<TelemetrySnapshot, SleError> {
        let path = path.as_ref();
        let mut timer = TelemetryTimer::new();
        let mut counters = TelemetryCounters::default();

        let blob = self.seal(&mut OsRng, plaintext, &mut timer, &mut counters)?;
        timer.time(Stage::Write, || write_blob(path, &blob))?;
        timer.finish();

        debug!(path = %path.display(), blob_len = blob.len(), "wrote encrypted file");
        Ok(TelemetrySnapshot::from(&counters, &timer))
    }

    pub fn open_file_with_telemetry(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(Vec<u8>, TelemetrySnapshot), SleError> {
        let path = path.as_ref();
        let mut timer = TelemetryTimer::new();
        let mut counters = TelemetryCounters::default();

        let blob = timer.time(Stage::Read, || read_blob(path))?;
        let plaintext = match self.open(&blob, &mut timer, &mut counters) {
            Ok(pt) => pt,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "decryption rejected");
                return Err(e);
            }
        };
        timer.finish();

        debug!(path = %path.display(), blob_len = blob.len(), "opened encrypted file");
        Ok((plaintext, TelemetrySnapshot::from(&counters, &timer)))
    }
}
