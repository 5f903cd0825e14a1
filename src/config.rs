//! Application-wide constants and compile-time configuration.
//!
//! Scan capacity, timing parameters, QR limits and display geometry live
//! here so they can be tuned in one place.

// Scanning

/// Maximum number of access points kept from one scan (the ResultBuffer
/// capacity). Extra networks are counted but not stored.
pub const SCAN_LIST_SIZE: usize = 10;

/// Channels to scan, one after another. Empty = let the radio sweep all
/// channels in a single pass.
///
/// A typical 2.4 GHz selection is `&[1, 6, 11]`.
pub const SCAN_CHANNELS: &[u8] = &[];

// Display cycling

/// Period of the display cycle tick (ms). Each tick shows the next
/// network, or returns to the idle screen.
pub const CYCLE_INTERVAL_MS: u64 = 5000;

/// Duration of the screen transition animation (ms).
pub const TRANSITION_MS: u16 = 300;

/// Delay between animation frames (ms). An I²C flush of the full
/// 128×64 buffer takes ~25 ms at 400 kHz.
pub const RENDER_FRAME_MS: u64 = 30;

/// Pending screen transitions the render task can lag behind.
///
/// A full queue drops the newest transition, after which the screen the
/// render task shows no longer matches the cycle state, and the cycle may
/// then write the slot that is on screen. One transition is queued per
/// `CYCLE_INTERVAL_MS` and each takes `TRANSITION_MS` to play, so the
/// queue never holds more than one entry unless the render task stalls for
/// `TRANSITION_QUEUE_DEPTH` whole cycle intervals.
pub const TRANSITION_QUEUE_DEPTH: usize = 4;

// QR code

/// Render a join-network QR code on each detail screen.
pub const QR_ENABLED: bool = true;

/// Pixels per QR module (each module is drawn as an N×N square).
pub const QR_MODULE_SIZE: u8 = 2;

/// Largest QR version tried. Version 3 = 29×29 modules, which at 2 px per
/// module plus the quiet zone still fits the panel height.
pub const QR_MAX_VERSION: u8 = 3;

/// Lit border around the code, in modules. Scanners need contrast around
/// the finder patterns; more than 1 does not fit version 3 at 2 px.
pub const QR_QUIET_MODULES: u8 = 1;

/// Capacity of a slot's QR pixel buffer (bytes, 1 bit per pixel).
pub const QR_DATA_CAPACITY: usize = 1024;

/// Largest QR side (pixels, quiet zone included) that fits on the detail
/// screen.
pub const QR_MAX_SIDE_PX: usize = DISPLAY_HEIGHT as usize;

// Display (SSD1306 128×64 over I²C)
//
//   I²C SDA  → GPIO21
//   I²C SCL  → GPIO22

/// Panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// I²C bus frequency for the panel (kHz).
pub const DISPLAY_I2C_KHZ: u32 = 400;

/// Title shown on the idle screen.
pub const APP_TITLE: &str = "WiFi Scanner";
