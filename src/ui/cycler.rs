//! Display cycle state machine.
//!
//! One `tick` per interval. From idle the cycle claims the next result
//! set (waiting on `data_ready`); while it holds a set, each tick shows
//! the next record in the slot that is *not* on screen; once the set is
//! exhausted it returns to idle and hands the buffer back through
//! `scan_permit`, which starts the next scan.
//!
//! ```text
//!   AtIdle ──(claim, record 0)──► ShowingDetail(A, 1)
//!      ▲                               │ next record
//!      │                               ▼
//!      └──(no more records)──── ShowingDetail(B, 2) ◄─► ShowingDetail(A, 3) ...
//! ```

use super::screen_pool::{Progress, ScreenPool, SharedScreenPool};
use super::{Animation, RenderBoundary, Screen, Slot};
use crate::config::TRANSITION_MS;
use crate::scan::buffer::ResultBuffer;
use crate::scan::handshake::Handshake;

/// Where the display cycle is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleState {
    /// Idle screen up; no result set held.
    AtIdle,
    /// The slot on screen and how many records of the set have been shown
    /// (the cursor after this record).
    ShowingDetail(Slot, usize),
}

pub struct DisplayCycler<'h, 'r, R, const N: usize> {
    handshake: &'h Handshake<'r, N>,
    pool: &'h SharedScreenPool,
    renderer: R,
    state: CycleState,
    /// The result set being shown; `None` exactly while at idle.
    results: Option<&'r mut ResultBuffer<N>>,
}

impl<'h, 'r, R, const N: usize> DisplayCycler<'h, 'r, R, N>
where
    R: RenderBoundary,
{
    pub fn new(handshake: &'h Handshake<'r, N>, pool: &'h SharedScreenPool, renderer: R) -> Self {
        Self {
            handshake,
            pool,
            renderer,
            state: CycleState::AtIdle,
            results: None,
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Advance the cycle by one step and return the new state.
    ///
    /// At idle this waits until a result set is ready.
    pub async fn tick(&mut self) -> CycleState {
        let results = match self.results.take() {
            Some(results) => results,
            None => {
                debug!("Display cycle: waiting for scan results");
                let results = self.handshake.acquire_data_ready().await;
                debug!(
                    "Display cycle: {} of {} networks to show",
                    results.retained_count(),
                    results.reported_count()
                );
                results
            }
        };

        let index = results.cursor();
        match results.next(index) {
            Some(record) => {
                let target = match self.state {
                    CycleState::ShowingDetail(on_screen, _) => ScreenPool::other_than(on_screen),
                    CycleState::AtIdle => Slot::A,
                };
                let progress = Progress {
                    position: index + 1,
                    retained: results.retained_count(),
                    reported: results.reported_count(),
                };
                self.pool.lock().await.populate(target, record, progress);
                results.advance();
                let shown = results.cursor();
                self.results = Some(results);

                self.renderer
                    .transition_to(Screen::Detail(target), Animation::OverLeft, TRANSITION_MS);
                self.state = CycleState::ShowingDetail(target, shown);
            }
            None => {
                self.pool.lock().await.set_summary(results.reported_count());
                self.handshake.release_scan_permit(results);

                self.renderer
                    .transition_to(Screen::Idle, Animation::OverLeft, TRANSITION_MS);
                self.state = CycleState::AtIdle;
            }
        }
        self.state
    }
}
