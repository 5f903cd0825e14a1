//! Scan/display handshake.
//!
//! Two single-permit signals, and the one `ResultBuffer` travels inside
//! whichever of them is currently released:
//!
//! ```text
//!   scan_permit ──► scan loop: reset, scan, store ──► data_ready
//!        ▲                                                │
//!        └── display cycle: idle again ◄── show records ◄─┘
//! ```
//!
//! Holding the buffer *is* holding the permit, so the scan loop can never
//! reset or store while the display cycle reads, and at most one result
//! set is ever in flight.

use super::buffer::ResultBuffer;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

type Permit<'r, const N: usize> = Signal<CriticalSectionRawMutex, &'r mut ResultBuffer<N>>;

pub struct Handshake<'r, const N: usize> {
    scan_permit: Permit<'r, N>,
    data_ready: Permit<'r, N>,
}

impl<'r, const N: usize> Handshake<'r, N> {
    /// Create the handshake with the scan permit available (the first
    /// scan may start right away) and no data ready.
    pub fn new(results: &'r mut ResultBuffer<N>) -> Self {
        let handshake = Self {
            scan_permit: Signal::new(),
            data_ready: Signal::new(),
        };
        handshake.scan_permit.signal(results);
        handshake
    }

    /// Wait until a scan may start and take the buffer with the permit.
    pub async fn acquire_scan_permit(&self) -> &'r mut ResultBuffer<N> {
        self.scan_permit.wait().await
    }

    /// Hand a completed result set to the display cycle.
    pub fn release_data_ready(&self, results: &'r mut ResultBuffer<N>) {
        debug_assert!(!self.data_ready.signaled());
        self.data_ready.signal(results);
    }

    /// Wait for a completed result set and claim it.
    pub async fn acquire_data_ready(&self) -> &'r mut ResultBuffer<N> {
        self.data_ready.wait().await
    }

    /// Give the buffer back to the scan loop, re-arming the next scan.
    pub fn release_scan_permit(&self, results: &'r mut ResultBuffer<N>) {
        debug_assert!(!self.scan_permit.signaled());
        self.scan_permit.signal(results);
    }

    pub fn scan_permit_available(&self) -> bool {
        self.scan_permit.signaled()
    }

    pub fn data_ready_available(&self) -> bool {
        self.data_ready.signaled()
    }
}
