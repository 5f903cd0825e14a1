//! Join-network payload for the QR code (`WIFI:` URI scheme).
//!
//! ```text
//! WIFI:T:WPA;S:my\;net;;
//! ```
//!
//! `T` is `nopass`, `WEP`, `WPA` or `WPA2-EAP` and is left out when the
//! mode is unknown. `\ ; , : "` inside the SSID are backslash-escaped.

use super::{AuthMode, ResultRecord};
use crate::error::QrError;
use core::fmt::Write;
use heapless::String;

/// Worst case: every SSID byte escaped plus the scheme framing.
pub const PAYLOAD_CAPACITY: usize = 96;

fn security_tag(auth: AuthMode) -> Option<&'static str> {
    match auth {
        AuthMode::Open => Some("nopass"),
        AuthMode::Wep => Some("WEP"),
        AuthMode::WpaPsk
        | AuthMode::Wpa2Psk
        | AuthMode::WpaWpa2Psk
        | AuthMode::Wpa3Psk
        | AuthMode::Wpa2Wpa3Psk => Some("WPA"),
        AuthMode::Enterprise | AuthMode::Wpa3Enterprise192 => Some("WPA2-EAP"),
        AuthMode::Unknown => None,
    }
}

/// Build the payload a phone camera turns into a "join network" prompt.
pub fn connection_payload(record: &ResultRecord) -> Result<String<PAYLOAD_CAPACITY>, QrError> {
    let mut out: String<PAYLOAD_CAPACITY> = String::new();
    write_payload(&mut out, record).map_err(|_| QrError::DataTooLong)?;
    Ok(out)
}

fn write_payload(out: &mut impl Write, record: &ResultRecord) -> core::fmt::Result {
    out.write_str("WIFI:")?;
    if let Some(tag) = security_tag(record.auth) {
        write!(out, "T:{};", tag)?;
    }
    out.write_str("S:")?;
    for c in record.ssid.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            out.write_char('\\')?;
        }
        out.write_char(c)?;
    }
    out.write_str(";;")
}
