//! User interface subsystem - SSD1306 OLED showing one network at a time.
//!
//! The display cycle is a periodic state machine that walks the latest
//! result set, writing each network into one of two detail slots and
//! asking the render task to slide it over the screen that is up now.
//!
//! ## Components
//!
//! - **ScreenPool**: idle screen + two ping-pong detail slots
//! - **Cycler**: tick-driven state machine, one side of the scan handshake
//! - **Render**: transition queue and (embedded) the animation task
//! - **Display**: embedded-graphics drawing of idle/detail screens

pub mod animation;
pub mod cycler;
pub mod display;
pub mod qr;
pub mod render;
pub mod screen_pool;

/// One of the two interchangeable detail slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// The alternate slot (A↔B).
    pub const fn other(self) -> Self {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }
}

/// Screens the render boundary can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Title, scan status and last-scan summary.
    Idle,
    /// One network, from the given slot.
    Detail(Slot),
}

/// How the incoming screen replaces the outgoing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Animation {
    /// Switch immediately.
    None,
    /// Incoming screen slides in from the right, over the outgoing one.
    OverLeft,
}

/// A queued request to change the visible screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub screen: Screen,
    pub animation: Animation,
    pub duration_ms: u16,
}

/// Where the display cycle sends screen changes.
///
/// Fire-and-forget: implementations must return without waiting for the
/// animation to run.
pub trait RenderBoundary {
    fn transition_to(&mut self, screen: Screen, animation: Animation, duration_ms: u16);
}
