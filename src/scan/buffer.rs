//! Fixed-capacity storage for the most recent scan.
//!
//! No locking of its own: the buffer is only ever reachable through the
//! permit that currently owns it (see `handshake`).

use super::ResultRecord;
use heapless::Vec;

/// Records of the latest scan plus the display traversal cursor.
#[derive(Debug)]
pub struct ResultBuffer<const N: usize> {
    records: Vec<ResultRecord, N>,
    /// Networks the provider found (may exceed `N`).
    reported_count: u16,
    /// Next record the display cycle will show.
    cursor: usize,
}

impl<const N: usize> ResultBuffer<N> {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            reported_count: 0,
            cursor: 0,
        }
    }

    /// Drop the previous result set and rewind the cursor.
    pub fn reset(&mut self) {
        self.records.clear();
        self.reported_count = 0;
        self.cursor = 0;
    }

    /// Copy up to `N` records; anything beyond capacity is dropped.
    pub fn store(&mut self, records: &[ResultRecord], reported_count: u16) {
        self.records.clear();
        for record in records.iter().take(N) {
            let _ = self.records.push(record.clone());
        }
        self.reported_count = reported_count;
    }

    /// Record at `cursor`, or `None` past the end of the set.
    pub fn next(&self, cursor: usize) -> Option<&ResultRecord> {
        self.records.get(cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor one record forward (saturates at the end).
    pub fn advance(&mut self) {
        if self.cursor < self.records.len() {
            self.cursor += 1;
        }
    }

    pub fn retained_count(&self) -> usize {
        self.records.len()
    }

    pub fn reported_count(&self) -> u16 {
        self.reported_count
    }
}

impl<const N: usize> Default for ResultBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
