//! High-score ledger: one big-endian i64 best score per variant.
//!
//! The file is independent of save files. A missing, short, or negative-valued file is
//! read as all zeros.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::{VariantKind, VARIANT_COUNT};

/// Size of the ledger file in bytes.
pub const LEDGER_LEN: usize = VARIANT_COUNT * 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreLedger {
    path: PathBuf,
    scores: [u64; VARIANT_COUNT],
    dirty: bool,
}

impl HighScoreLedger {
    /// An all-zero ledger that will be written to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            scores: [0; VARIANT_COUNT],
            dirty: false,
        }
    }

    /// Read the ledger, falling back to zeros when the file is unusable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut ledger = Self::empty(path);
        match fs::read(&ledger.path) {
            Ok(bytes) => match decode(&bytes) {
                Some(scores) => ledger.scores = scores,
                None => tracing::warn!(
                    path = %ledger.path.display(),
                    len = bytes.len(),
                    "high-score file unreadable, starting from zero"
                ),
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(path = %ledger.path.display(), %err, "cannot read high scores"),
        }
        ledger
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn best(&self, kind: VariantKind) -> u64 {
        self.scores[kind.index()]
    }

    pub fn scores(&self) -> [u64; VARIANT_COUNT] {
        self.scores
    }

    /// Keep `score` if it beats the stored best. Returns true if it did.
    pub fn record(&mut self, kind: VariantKind, score: u64) -> bool {
        let slot = &mut self.scores[kind.index()];
        if score <= *slot {
            return false;
        }
        *slot = score;
        self.dirty = true;
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rewrite the whole file.
    pub fn save(&mut self) -> io::Result<()> {
        fs::write(&self.path, encode(&self.scores))?;
        self.dirty = false;
        tracing::debug!(path = %self.path.display(), "high scores written");
        Ok(())
    }
}

fn encode(scores: &[u64; VARIANT_COUNT]) -> [u8; LEDGER_LEN] {
    let mut out = [0u8; LEDGER_LEN];
    for (chunk, &score) in out.chunks_exact_mut(8).zip(scores) {
        let value = i64::try_from(score).unwrap_or(i64::MAX);
        chunk.copy_from_slice(&value.to_be_bytes());
    }
    out
}

fn decode(bytes: &[u8]) -> Option<[u64; VARIANT_COUNT]> {
    if bytes.len() < LEDGER_LEN {
        return None;
    }
    let mut scores = [0u64; VARIANT_COUNT];
    for (slot, chunk) in scores.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(chunk);
        *slot = u64::try_from(i64::from_be_bytes(raw)).ok()?;
    }
    Some(scores)
}
