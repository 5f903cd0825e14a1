//! QR code rasteriser for the detail screens.
//!
//! Encodes with `qrcodegen-no-heap` and packs the modules into a 1 bit per
//! pixel image (MSB first, rows padded to whole bytes), the layout
//! `ImageRaw<BinaryColor>` draws directly. Light modules are lit pixels
//! so the code reads as dark-on-light on the OLED, and the image carries
//! its own lit quiet zone of `QR_QUIET_MODULES` around the code.

use crate::config::{QR_DATA_CAPACITY, QR_MAX_SIDE_PX, QR_MAX_VERSION, QR_QUIET_MODULES};
use crate::error::QrError;
use qrcodegen_no_heap::{QrCode, QrCodeEcc, Version};

/// Scratch size qrcodegen needs for the largest version we allow.
const QR_BUFFER_LEN: usize = buffer_len(QR_MAX_VERSION);

const fn buffer_len(version: u8) -> usize {
    let side = version as usize * 4 + 17;
    (side * side).div_ceil(8) + 1
}

/// Raster image of one QR code. `width == 0` is the blank placeholder.
#[derive(Clone, Debug)]
pub struct QrImage {
    data: [u8; QR_DATA_CAPACITY],
    len: usize,
    width: u16,
    height: u16,
}

impl QrImage {
    pub const fn blank() -> Self {
        Self {
            data: [0; QR_DATA_CAPACITY],
            len: 0,
            width: 0,
            height: 0,
        }
    }

    /// Reset to the blank placeholder.
    pub fn clear(&mut self) {
        self.len = 0;
        self.width = 0;
        self.height = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.width == 0
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Packed pixel rows.
    pub fn data(&self) -> &[u8] {
        &self.data[..self.len]
    }

    fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Whether the pixel at (x, y) is lit. Out of range reads as unlit.
    pub fn is_lit(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y as usize * self.stride() + x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }
}

impl Default for QrImage {
    fn default() -> Self {
        Self::blank()
    }
}

/// Render `payload` into `image`, `module_size` pixels per module.
///
/// The image side includes the quiet zone. Bounded and synchronous. On
/// error the image is left blank.
pub fn encode(payload: &str, module_size: u8, image: &mut QrImage) -> Result<(), QrError> {
    image.clear();

    let mut temp = [0u8; QR_BUFFER_LEN];
    let mut out = [0u8; QR_BUFFER_LEN];
    let code = QrCode::encode_text(
        payload,
        &mut temp,
        &mut out,
        QrCodeEcc::Low,
        Version::MIN,
        Version::new(QR_MAX_VERSION),
        None,
        true,
    )
    .map_err(|_| QrError::DataTooLong)?;

    let quiet = QR_QUIET_MODULES as i32;
    let modules = code.size() as usize + 2 * QR_QUIET_MODULES as usize;
    let scale = module_size.max(1) as usize;
    let side = modules * scale;
    let stride = side.div_ceil(8);
    if side > QR_MAX_SIDE_PX || stride * side > QR_DATA_CAPACITY {
        return Err(QrError::DoesNotFit);
    }

    let len = stride * side;
    image.data[..len].fill(0);
    for y in 0..side {
        let row = &mut image.data[y * stride..(y + 1) * stride];
        for x in 0..side {
            // Out-of-range modules (the quiet zone) read as light.
            let dark = code.get_module((x / scale) as i32 - quiet, (y / scale) as i32 - quiet);
            if !dark {
                row[x / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    image.len = len;
    image.width = side as u16;
    image.height = side as u16;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_image_has_no_pixels() {
        let image = QrImage::blank();
        assert!(image.is_blank());
        assert!(image.data().is_empty());
        assert!(!image.is_lit(0, 0));
    }

    #[test]
    fn short_payload_is_version_one() {
        let mut image = QrImage::blank();
        encode("WIFI:S:x;;", 1, &mut image).unwrap();
        // 21 modules plus one quiet module each side.
        assert_eq!(image.width(), 23);
        assert_eq!(image.height(), 23);
        // 23 px rows pad to 3 bytes.
        assert_eq!(image.data().len(), 3 * 23);
    }

    #[test]
    fn module_size_scales_image() {
        let mut image = QrImage::blank();
        encode("WIFI:S:x;;", 2, &mut image).unwrap();
        assert_eq!(image.width(), 46);
        assert_eq!(image.data().len(), 6 * 46);
    }

    #[test]
    fn quiet_zone_is_lit() {
        let mut image = QrImage::blank();
        encode("WIFI:T:WPA;S:HomeNet;;", 2, &mut image).unwrap();
        let side = image.width();
        let quiet = u16::from(QR_QUIET_MODULES) * 2;

        for i in 0..side {
            for q in 0..quiet {
                assert!(image.is_lit(i, q), "top ({i},{q})");
                assert!(image.is_lit(i, side - 1 - q), "bottom ({i},{q})");
                assert!(image.is_lit(q, i), "left ({q},{i})");
                assert!(image.is_lit(side - 1 - q, i), "right ({q},{i})");
            }
        }
    }

    #[test]
    fn finder_pattern_corners() {
        let mut image = QrImage::blank();
        encode("WIFI:T:WPA;S:HomeNet;;", 2, &mut image).unwrap();
        let side = image.width();
        let q = u16::from(QR_QUIET_MODULES) * 2;

        // Finder pattern outer ring is dark, the ring inside it and the
        // separator next to it light.
        assert!(!image.is_lit(q, q));
        assert!(!image.is_lit(q + 1, q + 1));
        assert!(!image.is_lit(side - 1 - q, q));
        assert!(!image.is_lit(q, side - 1 - q));
        assert!(image.is_lit(q + 2, q + 2));
        assert!(image.is_lit(q + 14, q));
    }

    #[test]
    fn largest_version_fits_with_quiet_zone() {
        let mut image = QrImage::blank();
        // 40 bytes needs version 3 (29 modules) at ECC Low.
        let payload = "x".repeat(40);
        encode(&payload, 2, &mut image).unwrap();
        assert_eq!(image.width(), (29 + 2 * u16::from(QR_QUIET_MODULES)) * 2);
        assert!(usize::from(image.width()) <= QR_MAX_SIDE_PX);
    }

    #[test]
    fn payload_too_long_for_max_version() {
        let mut image = QrImage::blank();
        let payload = "x".repeat(200);
        assert_eq!(encode(&payload, 1, &mut image), Err(QrError::DataTooLong));
        assert!(image.is_blank());
    }

    #[test]
    fn oversized_modules_do_not_fit() {
        let mut image = QrImage::blank();
        // (21 + 2) modules * 4 px = 92 px > panel height.
        assert_eq!(encode("WIFI:S:x;;", 4, &mut image), Err(QrError::DoesNotFit));
        assert!(image.is_blank());
    }

    #[test]
    fn failed_encode_clears_previous_image() {
        let mut image = QrImage::blank();
        encode("WIFI:S:x;;", 2, &mut image).unwrap();
        assert!(!image.is_blank());
        let _ = encode("WIFI:S:x;;", 4, &mut image);
        assert!(image.is_blank());
    }
}
