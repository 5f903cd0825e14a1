//! Background WiFi scanner with a cycling OLED display.
//!
//! A scan loop and a periodic display cycle share one result buffer
//! through two single-permit signals (`scan_permit`, `data_ready`). The
//! display walks each result set network by network, ping-ponging between
//! two detail screens, then returns to idle and lets the next scan start.
//!
//! Everything except the radio back-end, the panel driver and the task
//! wiring is plain `no_std` logic and is tested on the host:
//!
//! Usage: `cargo test --lib` / `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is built with `--features embedded`.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod scan;
pub mod ui;

pub use error::{Error, QrError, ScanError};
pub use scan::buffer::ResultBuffer;
pub use scan::coordinator::ScanCoordinator;
pub use scan::handshake::Handshake;
pub use scan::{AuthMode, ResultRecord, ScanProvider, ScanReport};
pub use ui::cycler::{CycleState, DisplayCycler};
pub use ui::screen_pool::{ScreenPool, SharedScreenPool};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - scan loop and display cycle together
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Animation, RenderBoundary, Screen, Slot};
    use core::future::Future;
    use core::task::{Context, Waker};
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_sync::mutex::Mutex;

    /// Provider returning a scripted list of scan outcomes, then empty scans.
    struct ScriptedProvider {
        passes: &'static [&'static [&'static str]],
        next: usize,
    }

    impl ScriptedProvider {
        fn new(passes: &'static [&'static [&'static str]]) -> Self {
            Self { passes, next: 0 }
        }
    }

    impl<const N: usize> ScanProvider<N> for ScriptedProvider {
        async fn scan(&mut self) -> Result<ScanReport<N>, ScanError> {
            let mut report = ScanReport::new();
            if let Some(names) = self.passes.get(self.next) {
                for (i, name) in names.iter().enumerate() {
                    report.push(ResultRecord::new(name, -30 - i as i8, AuthMode::Wpa2Psk, 6));
                }
            }
            self.next += 1;
            Ok(report)
        }
    }

    #[derive(Default)]
    struct Screens {
        log: heapless::Vec<Screen, 32>,
    }

    impl RenderBoundary for Screens {
        fn transition_to(&mut self, screen: Screen, animation: Animation, _duration_ms: u16) {
            assert_eq!(animation, Animation::OverLeft);
            let _ = self.log.push(screen);
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Handshake protocol
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn scan_waits_for_display_to_finish() {
        let mut buffer: ResultBuffer<4> = ResultBuffer::new();
        let handshake = Handshake::new(&mut buffer);
        let pool: SharedScreenPool = Mutex::new(ScreenPool::new());
        let mut scanner = ScanCoordinator::new(
            &handshake,
            ScriptedProvider::new(&[&["alpha", "beta"], &["gamma"]]),
        );
        let mut cycler = DisplayCycler::new(&handshake, &pool, Screens::default());

        assert_eq!(block_on(scanner.scan_once()), Ok(2));
        // No second scan until the display hands the buffer back.
        assert!(!handshake.scan_permit_available());

        block_on(cycler.tick());
        block_on(cycler.tick());
        assert!(!handshake.scan_permit_available());
        assert_eq!(block_on(cycler.tick()), CycleState::AtIdle);
        assert!(handshake.scan_permit_available());

        assert_eq!(block_on(scanner.scan_once()), Ok(1));
        assert_eq!(block_on(cycler.tick()), CycleState::ShowingDetail(Slot::A, 1));
        assert_eq!(block_on(pool.lock()).slot(Slot::A).ssid.as_str(), "gamma");
    }

    #[test]
    fn concurrent_scan_and_cycle() {
        let mut buffer: ResultBuffer<4> = ResultBuffer::new();
        let handshake = Handshake::new(&mut buffer);
        let pool: SharedScreenPool = Mutex::new(ScreenPool::new());
        let mut scanner = ScanCoordinator::new(
            &handshake,
            ScriptedProvider::new(&[&["alpha", "beta"], &[], &["gamma"]]),
        );
        let mut cycler = DisplayCycler::new(&handshake, &pool, Screens::default());

        let scans = async {
            for _ in 0..3 {
                assert!(scanner.scan_once().await.is_ok());
            }
        };
        let cycle = async {
            // 2 records + idle, empty set, 1 record + idle.
            for _ in 0..6 {
                cycler.tick().await;
            }
        };
        block_on(join(scans, cycle));

        assert_eq!(scanner.scans(), 3);
        assert_eq!(cycler.state(), CycleState::AtIdle);
        assert!(handshake.scan_permit_available());
        assert!(!handshake.data_ready_available());
        assert_eq!(
            cycler.renderer().log.as_slice(),
            &[
                Screen::Detail(Slot::A),
                Screen::Detail(Slot::B),
                Screen::Idle,
                Screen::Idle,
                Screen::Detail(Slot::A),
                Screen::Idle,
            ]
        );
        assert_eq!(
            block_on(pool.lock()).idle().summary.as_str(),
            "Last scan: 1 found"
        );
    }

    #[test]
    fn display_never_sees_a_partial_reset() {
        let mut buffer: ResultBuffer<4> = ResultBuffer::new();
        let handshake = Handshake::new(&mut buffer);
        let pool: SharedScreenPool = Mutex::new(ScreenPool::new());
        let mut scanner = ScanCoordinator::new(
            &handshake,
            ScriptedProvider::new(&[&["a", "b", "c"], &["d", "e", "f"]]),
        );
        let mut cycler = DisplayCycler::new(&handshake, &pool, Screens::default());

        block_on(scanner.scan_once()).ok();
        block_on(cycler.tick());

        // While the cycle holds the set a second scan cannot even start.
        let mut pending = core::pin::pin!(scanner.scan_once());
        let mut cx = Context::from_waker(Waker::noop());
        assert!(pending.as_mut().poll(&mut cx).is_pending());

        assert_eq!(block_on(cycler.tick()), CycleState::ShowingDetail(Slot::B, 2));
        assert_eq!(block_on(pool.lock()).slot(Slot::B).ssid.as_str(), "b");
    }
}
