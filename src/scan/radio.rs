//! `ScanProvider` backed by the ESP32 radio (`esp-radio`, station mode).
//!
//! With `SCAN_CHANNELS` empty a single all-channel scan is run; otherwise
//! each listed channel is scanned in turn and the results are merged.

use super::{AuthMode, ResultRecord, ScanProvider, ScanReport};
use crate::config::SCAN_CHANNELS;
use crate::error::{Error, ScanError};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{AccessPointInfo, AuthMethod, ScanConfig, WifiController, WifiMode};

/// Settle time after mode/start changes before the first scan.
const RADIO_SETTLE_MS: u64 = 500;

pub struct RadioScanner {
    controller: &'static mut WifiController<'static>,
}

impl RadioScanner {
    /// Put the controller in station mode and start it.
    pub async fn start(controller: &'static mut WifiController<'static>) -> Result<Self, Error> {
        controller.set_mode(WifiMode::Sta).map_err(|e| {
            error!("Failed to set Wi-Fi mode: {}", e);
            Error::RadioInit
        })?;
        Timer::after(Duration::from_millis(RADIO_SETTLE_MS)).await;

        controller.start_async().await.map_err(|e| {
            error!("Failed to start Wi-Fi controller: {}", e);
            Error::RadioInit
        })?;
        info!("WiFi controller started");
        Timer::after(Duration::from_millis(RADIO_SETTLE_MS)).await;

        Ok(Self { controller })
    }

    async fn scan_into<const N: usize>(
        &mut self,
        config: ScanConfig<'_>,
        report: &mut ScanReport<N>,
    ) -> Result<(), ScanError> {
        let found = self
            .controller
            .scan_with_config_async(config)
            .await
            .map_err(|e| {
                error!("esp-radio scan error: {}", e);
                ScanError::Driver
            })?;

        for ap in found.iter() {
            debug!(
                "ssid: {}, rssi: {}, channel: {}",
                ap.ssid.as_str(),
                ap.signal_strength,
                ap.channel
            );
            report.push(to_record(ap));
        }
        Ok(())
    }
}

impl<const N: usize> ScanProvider<N> for RadioScanner {
    async fn scan(&mut self) -> Result<ScanReport<N>, ScanError> {
        let mut report = ScanReport::new();
        if SCAN_CHANNELS.is_empty() {
            self.scan_into(ScanConfig::default(), &mut report).await?;
        } else {
            for &channel in SCAN_CHANNELS {
                self.scan_into(ScanConfig::default().with_channel(channel), &mut report)
                    .await?;
            }
        }
        Ok(report)
    }
}

fn to_record(ap: &AccessPointInfo) -> ResultRecord {
    ResultRecord::new(
        ap.ssid.as_str(),
        ap.signal_strength,
        auth_mode(ap.auth_method),
        ap.channel,
    )
}

fn auth_mode(method: Option<AuthMethod>) -> AuthMode {
    match method {
        Some(AuthMethod::None) => AuthMode::Open,
        Some(AuthMethod::Wep) => AuthMode::Wep,
        Some(AuthMethod::Wpa) => AuthMode::WpaPsk,
        Some(AuthMethod::Wpa2Personal) => AuthMode::Wpa2Psk,
        Some(AuthMethod::WpaWpa2Personal) => AuthMode::WpaWpa2Psk,
        Some(AuthMethod::Wpa2Enterprise) => AuthMode::Enterprise,
        Some(AuthMethod::Wpa3Personal) => AuthMode::Wpa3Psk,
        Some(AuthMethod::Wpa2Wpa3Personal) => AuthMode::Wpa2Wpa3Psk,
        _ => AuthMode::Unknown,
    }
}
