//! WiFi scanning subsystem.
//!
//! 1. **Records** - `ResultRecord` / `AuthMode`, the snapshot of one
//!    discovered access point.
//! 2. **Buffer** - `ResultBuffer`, fixed-capacity storage for the latest
//!    scan plus the display cursor.
//! 3. **Handshake** - the two single-permit signals that move the buffer
//!    between the scan loop and the display cycle.
//! 4. **Coordinator** - the scan loop driving an external `ScanProvider`.
//! 5. **Radio** (embedded only) - `ScanProvider` on top of `esp-radio`.

pub mod buffer;
pub mod coordinator;
pub mod handshake;
pub mod payload;
#[cfg(feature = "embedded")]
pub mod radio;

use crate::error::ScanError;
use heapless::{String, Vec};

/// Longest SSID allowed by 802.11 (bytes).
pub const SSID_MAX_LEN: usize = 32;

/// Authentication mode advertised by an access point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuthMode {
    Open,
    Wep,
    WpaPsk,
    Wpa2Psk,
    WpaWpa2Psk,
    Enterprise,
    Wpa3Psk,
    Wpa2Wpa3Psk,
    Wpa3Enterprise192,
    Unknown,
}

impl AuthMode {
    /// Human-readable label for the detail screen.
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::Open => "Open",
            AuthMode::Wep => "WEP",
            AuthMode::WpaPsk => "WPA PSK",
            AuthMode::Wpa2Psk => "WPA2 PSK",
            AuthMode::WpaWpa2Psk => "WPA/WPA2 PSK",
            AuthMode::Enterprise => "Enterprise",
            AuthMode::Wpa3Psk => "WPA3 PSK",
            AuthMode::Wpa2Wpa3Psk => "WPA2/WPA3 PSK",
            AuthMode::Wpa3Enterprise192 => "WPA3 Enterprise 192",
            AuthMode::Unknown => "Unknown",
        }
    }
}

/// Immutable snapshot of one discovered network.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResultRecord {
    /// Network name (truncated to 32 bytes).
    pub ssid: String<SSID_MAX_LEN>,
    /// Received signal strength (dBm).
    pub rssi: i8,
    /// Advertised authentication mode.
    pub auth: AuthMode,
    /// Primary channel.
    pub channel: u8,
}

impl ResultRecord {
    /// Build a record, truncating the SSID on a character boundary.
    pub fn new(ssid: &str, rssi: i8, auth: AuthMode, channel: u8) -> Self {
        let mut name: String<SSID_MAX_LEN> = String::new();
        for c in ssid.chars() {
            if name.push(c).is_err() {
                break;
            }
        }
        Self {
            ssid: name,
            rssi,
            auth,
            channel,
        }
    }
}

/// What a provider hands back for one scan.
///
/// `reported_count` is every network the radio saw; `records` keeps at
/// most `N` of them.
#[derive(Clone, Debug, Default)]
pub struct ScanReport<const N: usize> {
    pub reported_count: u16,
    pub records: Vec<ResultRecord, N>,
}

impl<const N: usize> ScanReport<N> {
    pub const fn new() -> Self {
        Self {
            reported_count: 0,
            records: Vec::new(),
        }
    }

    /// Count a discovered network, keeping it only while there is room.
    pub fn push(&mut self, record: ResultRecord) {
        self.reported_count = self.reported_count.saturating_add(1);
        let _ = self.records.push(record);
    }
}

/// External radio back-end.
///
/// One call = one complete scan. It may take arbitrarily long; any
/// timeout policy belongs to the implementation.
#[allow(async_fn_in_trait)]
pub trait ScanProvider<const N: usize> {
    async fn scan(&mut self) -> Result<ScanReport<N>, ScanError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssid_is_truncated_to_capacity() {
        let long = "X".repeat(40);
        let record = ResultRecord::new(&long, -40, AuthMode::Open, 1);
        assert_eq!(record.ssid.len(), SSID_MAX_LEN);
    }

    #[test]
    fn ssid_truncation_keeps_char_boundary() {
        // 31 ASCII bytes + one 2-byte char does not fit in 32 bytes.
        let mut name = "a".repeat(31);
        name.push('é');
        let record = ResultRecord::new(&name, -40, AuthMode::Open, 1);
        assert_eq!(record.ssid.len(), 31);
    }

    #[test]
    fn report_counts_beyond_capacity() {
        let mut report: ScanReport<2> = ScanReport::new();
        for i in 0..5u8 {
            report.push(ResultRecord::new("net", -50, AuthMode::Wpa2Psk, i));
        }
        assert_eq!(report.reported_count, 5);
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[1].channel, 1);
    }

    #[test]
    fn auth_labels() {
        assert_eq!(AuthMode::Open.label(), "Open");
        assert_eq!(AuthMode::WpaWpa2Psk.label(), "WPA/WPA2 PSK");
        assert_eq!(AuthMode::Wpa3Enterprise192.label(), "WPA3 Enterprise 192");
        assert_eq!(AuthMode::Unknown.label(), "Unknown");
    }
}
