//! Unified error type for wifi-scanner.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Startup
    /// The radio controller could not be initialised or started.
    RadioInit,

    /// I²C bus or SSD1306 setup failed.
    Display,

    /// An Embassy task could not be spawned (pool exhausted).
    TaskSpawn,

    // Scanning
    /// The scan provider reported a failure.
    Scan(ScanError),
}

/// Failures reported by a scan provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// The radio driver rejected or aborted the scan.
    Driver,
    /// The radio is not in station mode / not started.
    NotStarted,
}

/// Why a slot's QR image fell back to the blank placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QrError {
    /// Payload does not fit the largest QR version we allow.
    DataTooLong,
    /// The rendered code is larger than the screen area or pixel buffer.
    DoesNotFit,
}

// Convenience conversions

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Error::Scan(e)
    }
}
