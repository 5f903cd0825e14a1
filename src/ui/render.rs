//! Render boundary: transition queue plus the task that animates it.
//!
//! The display cycle only ever calls `ChannelRenderer::transition_to`,
//! which queues and returns. The render task (embedded only) owns the
//! panel, reads the ScreenPool frame by frame and flushes.

use super::{Animation, RenderBoundary, Screen, Transition};
use crate::config::TRANSITION_QUEUE_DEPTH;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};

/// Queue between the display cycle and the render task.
pub type TransitionChannel = Channel<CriticalSectionRawMutex, Transition, TRANSITION_QUEUE_DEPTH>;

/// `RenderBoundary` that queues transitions without waiting.
pub struct ChannelRenderer<'a> {
    tx: Sender<'a, CriticalSectionRawMutex, Transition, TRANSITION_QUEUE_DEPTH>,
}

impl<'a> ChannelRenderer<'a> {
    pub fn new(channel: &'a TransitionChannel) -> Self {
        Self {
            tx: channel.sender(),
        }
    }
}

impl RenderBoundary for ChannelRenderer<'_> {
    fn transition_to(&mut self, screen: Screen, animation: Animation, duration_ms: u16) {
        let transition = Transition {
            screen,
            animation,
            duration_ms,
        };
        if self.tx.try_send(transition).is_err() {
            warn!("Render queue full - dropping transition to {}", screen);
        }
    }
}

#[cfg(feature = "embedded")]
mod task {
    use super::TransitionChannel;
    use crate::config::{DISPLAY_WIDTH, RENDER_FRAME_MS};
    use crate::ui::animation::incoming_offset;
    use crate::ui::display::{self, Display};
    use crate::ui::screen_pool::SharedScreenPool;
    use crate::ui::Screen;
    use embassy_time::{Duration, Instant, Timer};

    fn flush<I2C>(oled: &mut Display<I2C>)
    where
        I2C: embedded_hal::i2c::I2c,
    {
        if oled.flush().is_err() {
            warn!("Display flush failed");
        }
    }

    /// Render loop - must be spawned as a dedicated Embassy task.
    ///
    /// Starts on the idle screen. A transition to the screen already
    /// shown is not animated, only redrawn.
    pub async fn run<I2C>(
        oled: &mut Display<I2C>,
        transitions: &TransitionChannel,
        pool: &SharedScreenPool,
    ) -> !
    where
        I2C: embedded_hal::i2c::I2c,
    {
        info!("Render task started");

        let mut shown = Screen::Idle;
        {
            let pool = pool.lock().await;
            oled.clear_buffer();
            display::draw_screen(oled, &pool, shown, 0);
        }
        flush(oled);

        loop {
            let transition = transitions.receive().await;
            if transition.screen == shown {
                // Idle content may have changed (summary line).
                let pool = pool.lock().await;
                display::draw_screen(oled, &pool, shown, 0);
                drop(pool);
                flush(oled);
                continue;
            }
            debug!("Render: {} -> {}", shown, transition.screen);

            let start = Instant::now();
            loop {
                let offset = incoming_offset(
                    transition.animation,
                    start.elapsed().as_millis(),
                    transition.duration_ms,
                    DISPLAY_WIDTH,
                );
                {
                    let pool = pool.lock().await;
                    display::draw_screen(oled, &pool, shown, 0);
                    display::draw_screen(oled, &pool, transition.screen, offset);
                }
                flush(oled);
                if offset == 0 {
                    break;
                }
                Timer::after(Duration::from_millis(RENDER_FRAME_MS)).await;
            }
            shown = transition.screen;
        }
    }
}

#[cfg(feature = "embedded")]
pub use task::run;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Slot;

    #[test]
    fn transitions_are_queued_in_order() {
        let channel = TransitionChannel::new();
        let mut renderer = ChannelRenderer::new(&channel);

        renderer.transition_to(Screen::Detail(Slot::A), Animation::OverLeft, 300);
        renderer.transition_to(Screen::Idle, Animation::None, 0);

        assert_eq!(
            channel.try_receive().ok(),
            Some(Transition {
                screen: Screen::Detail(Slot::A),
                animation: Animation::OverLeft,
                duration_ms: 300,
            })
        );
        assert_eq!(channel.try_receive().ok().map(|t| t.screen), Some(Screen::Idle));
        assert!(channel.try_receive().is_err());
    }

    #[test]
    fn full_queue_drops_without_blocking() {
        let channel = TransitionChannel::new();
        let mut renderer = ChannelRenderer::new(&channel);

        for _ in 0..TRANSITION_QUEUE_DEPTH + 3 {
            renderer.transition_to(Screen::Idle, Animation::OverLeft, 300);
        }

        let mut queued = 0;
        while channel.try_receive().is_ok() {
            queued += 1;
        }
        assert_eq!(queued, TRANSITION_QUEUE_DEPTH);
    }

    #[test]
    fn full_queue_keeps_oldest_transitions() {
        let channel = TransitionChannel::new();
        let mut renderer = ChannelRenderer::new(&channel);

        for _ in 0..TRANSITION_QUEUE_DEPTH {
            renderer.transition_to(Screen::Detail(Slot::A), Animation::OverLeft, 300);
        }
        // Dropped: the render task never hears about the move to idle.
        renderer.transition_to(Screen::Idle, Animation::OverLeft, 300);

        let mut last = None;
        while let Ok(t) = channel.try_receive() {
            last = Some(t.screen);
        }
        assert_eq!(last, Some(Screen::Detail(Slot::A)));
    }
}
