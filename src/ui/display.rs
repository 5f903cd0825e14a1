//! Screen drawing (embedded-graphics) and the SSD1306 OLED wrapper.
//!
//! The draw functions are generic over any `BinaryColor` target so the
//! layout can be checked on the host; only `init` touches the panel.

use super::screen_pool::ScreenPool;
use super::{Screen, Slot};
use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

#[cfg(feature = "embedded")]
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
#[cfg(feature = "embedded")]
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
#[cfg(feature = "embedded")]
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, crate::error::Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| crate::error::Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| crate::error::Error::Display)?;
    Ok(display)
}

/// Baselines of the five text rows (FONT_6X10).
const ROWS: [i32; 5] = [8, 20, 32, 44, 56];

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn screen_area() -> Rectangle {
    Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT))
}

/// Draw `screen` with its left edge at `x`, over whatever is beneath it.
///
/// The covered area is blanked first and drawing is clipped to the
/// panel, so an offset screen slides over the previous one.
pub fn draw_screen<D>(target: &mut D, pool: &ScreenPool, screen: Screen, x: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let visible = Rectangle::new(
        Point::new(x.max(0), 0),
        Size::new(
            DISPLAY_WIDTH.saturating_sub(x.max(0) as u32),
            DISPLAY_HEIGHT,
        ),
    );
    let _ = visible
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(target);

    let mut clipped = target.clipped(&screen_area());
    let mut shifted = clipped.translated(Point::new(x, 0));
    match screen {
        Screen::Idle => draw_idle(&mut shifted, pool),
        Screen::Detail(slot) => draw_detail(&mut shifted, pool, slot),
    }
}

/// Render the idle screen.
fn draw_idle<D>(target: &mut D, pool: &ScreenPool)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let idle = pool.idle();
    let _ = Text::new(idle.title, Point::new(0, ROWS[0]), text_style()).draw(target);
    let _ = Text::new(idle.status, Point::new(0, ROWS[2]), text_style()).draw(target);
    if !idle.summary.is_empty() {
        let _ = Text::new(idle.summary.as_str(), Point::new(0, ROWS[4]), text_style())
            .draw(target);
    }
}

/// Render one detail slot: QR code right-aligned, text clipped to the
/// column left of it. An unpopulated slot stays blank.
fn draw_detail<D>(target: &mut D, pool: &ScreenPool, slot: Slot)
where
    D: DrawTarget<Color = BinaryColor>,
{
    if !pool.is_populated(Screen::Detail(slot)) {
        return;
    }
    let content = pool.slot(slot);

    let qr = &content.qr;
    let qr_width = u32::from(qr.width());
    if !qr.is_blank() {
        let height = u32::from(qr.height());
        let origin = Point::new(
            DISPLAY_WIDTH.saturating_sub(qr_width) as i32,
            (DISPLAY_HEIGHT.saturating_sub(height) / 2) as i32,
        );
        let raw: ImageRaw<BinaryColor> = ImageRaw::new(qr.data(), qr_width);
        let _ = Image::new(&raw, origin).draw(target);
    }

    let lines = [
        content.title.as_str(),
        content.ssid.as_str(),
        content.rssi.as_str(),
        content.auth.as_str(),
        content.channel.as_str(),
    ];
    let text_area = Rectangle::new(
        Point::zero(),
        Size::new(DISPLAY_WIDTH.saturating_sub(qr_width), DISPLAY_HEIGHT),
    );
    let mut column = target.clipped(&text_area);
    for (line, y) in lines.iter().zip(ROWS) {
        let _ = Text::new(line, Point::new(0, y), text_style()).draw(&mut column);
    }
}
