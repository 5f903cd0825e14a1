//! Scan loop.
//!
//! Waits for the scan permit, runs one provider scan into the buffer it
//! arrived with, and hands the buffer on through `data_ready`. The
//! buffer is released even when the provider fails, so the display cycle
//! never stalls; it then simply sees an empty result set.

use super::handshake::Handshake;
use super::ScanProvider;
use crate::error::Error;

pub struct ScanCoordinator<'h, 'r, P, const N: usize> {
    handshake: &'h Handshake<'r, N>,
    provider: P,
    scans: u32,
}

impl<'h, 'r, P, const N: usize> ScanCoordinator<'h, 'r, P, N>
where
    P: ScanProvider<N>,
{
    pub fn new(handshake: &'h Handshake<'r, N>, provider: P) -> Self {
        Self {
            handshake,
            provider,
            scans: 0,
        }
    }

    /// Completed scan passes (successful or not).
    pub fn scans(&self) -> u32 {
        self.scans
    }

    /// Run exactly one scan pass.
    ///
    /// Returns the number of records retained, or the provider's error
    /// after the (empty) buffer has been released.
    pub async fn scan_once(&mut self) -> Result<usize, Error> {
        let results = self.handshake.acquire_scan_permit().await;
        results.reset();

        info!("WiFi background scan started");
        let outcome = match self.provider.scan().await {
            Ok(report) => {
                results.store(&report.records, report.reported_count);
                info!(
                    "WiFi scan done: {} found, {} kept",
                    results.reported_count(),
                    results.retained_count()
                );
                Ok(results.retained_count())
            }
            Err(e) => {
                error!("WiFi scan failed: {}", e);
                Err(Error::from(e))
            }
        };

        self.scans = self.scans.wrapping_add(1);
        self.handshake.release_data_ready(results);
        outcome
    }

    /// Scan forever; only returns when the provider fails.
    pub async fn run(&mut self) -> Error {
        info!("WiFi background scan task running");
        loop {
            if let Err(e) = self.scan_once().await {
                return e;
            }
        }
    }
}
