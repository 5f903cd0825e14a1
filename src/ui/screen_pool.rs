//! Presentation state for the idle screen and the two detail slots.
//!
//! Created once, mutated in place. The display cycle writes a slot, the
//! render task reads both while animating; ping-pong rotation keeps the
//! cycle off the slot that is on screen.

use super::qr::{self, QrImage};
use super::{Screen, Slot};
use crate::config::{APP_TITLE, QR_ENABLED, QR_MODULE_SIZE};
use crate::scan::payload::connection_payload;
use crate::scan::{ResultRecord, SSID_MAX_LEN};
use core::fmt::Write;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use heapless::String;

/// Pool shared between the display cycle and the render task.
pub type SharedScreenPool = Mutex<CriticalSectionRawMutex, ScreenPool>;

/// Where a record sits in the current result set (for the title line).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position of the record.
    pub position: usize,
    /// Records held in the buffer.
    pub retained: usize,
    /// Networks the scan found.
    pub reported: u16,
}

/// Text and image of one detail screen.
#[derive(Clone, Debug)]
pub struct SlotContent {
    pub title: String<32>,
    pub ssid: String<SSID_MAX_LEN>,
    pub rssi: String<16>,
    pub auth: String<32>,
    pub channel: String<12>,
    pub qr: QrImage,
    /// Set once a record has been written; hidden networks have an empty SSID.
    populated: bool,
}

impl SlotContent {
    pub const fn new() -> Self {
        Self {
            title: String::new(),
            ssid: String::new(),
            rssi: String::new(),
            auth: String::new(),
            channel: String::new(),
            qr: QrImage::blank(),
            populated: false,
        }
    }
}

impl Default for SlotContent {
    fn default() -> Self {
        Self::new()
    }
}

/// Idle / summary screen.
#[derive(Clone, Debug)]
pub struct IdleContent {
    pub title: &'static str,
    pub status: &'static str,
    /// Empty until the first result set has been shown.
    pub summary: String<32>,
}

pub struct ScreenPool {
    idle: IdleContent,
    slots: [SlotContent; 2],
}

impl ScreenPool {
    pub const fn new() -> Self {
        Self {
            idle: IdleContent {
                title: APP_TITLE,
                status: "Scanning ...",
                summary: String::new(),
            },
            slots: [SlotContent::new(), SlotContent::new()],
        }
    }

    /// The slot to write next while `slot` is on screen.
    pub const fn other_than(slot: Slot) -> Slot {
        slot.other()
    }

    pub fn slot(&self, slot: Slot) -> &SlotContent {
        &self.slots[slot.index()]
    }

    pub fn idle(&self) -> &IdleContent {
        &self.idle
    }

    /// Whether a record has been written to `screen`. A detail slot that
    /// was never populated draws blank.
    pub fn is_populated(&self, screen: Screen) -> bool {
        match screen {
            Screen::Idle => true,
            Screen::Detail(slot) => self.slot(slot).populated,
        }
    }

    /// Write `record` into `slot`, including its QR code.
    ///
    /// A QR code that cannot be produced leaves the blank placeholder.
    pub fn populate(&mut self, slot: Slot, record: &ResultRecord, progress: Progress) {
        let content = &mut self.slots[slot.index()];
        content.populated = true;

        content.title.clear();
        let _ = write!(
            content.title,
            "Network {}/{} ({})",
            progress.position, progress.retained, progress.reported
        );

        content.ssid.clear();
        let _ = content.ssid.push_str(record.ssid.as_str());

        content.rssi.clear();
        let _ = write!(content.rssi, "RSSI: {}", record.rssi);

        content.auth.clear();
        let _ = write!(content.auth, "Auth: {}", record.auth.label());

        content.channel.clear();
        let _ = write!(content.channel, "Ch: {}", record.channel);

        if !QR_ENABLED {
            content.qr.clear();
            return;
        }

        let rendered = connection_payload(record)
            .and_then(|payload| qr::encode(payload.as_str(), QR_MODULE_SIZE, &mut content.qr));
        if let Err(e) = rendered {
            warn!("QR fallback for slot {}: {}", slot, e);
            content.qr.clear();
        }
    }

    /// Update the idle summary with the size of the set just shown.
    pub fn set_summary(&mut self, reported: u16) {
        self.idle.summary.clear();
        let _ = write!(self.idle.summary, "Last scan: {} found", reported);
    }
}

impl Default for ScreenPool {
    fn default() -> Self {
        Self::new()
    }
}
