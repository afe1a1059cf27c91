//! Display color carried by each grain.

use std::fmt;

/// Opaque RGBA color. `#[repr(C)]` so slices map straight onto a GPU texture.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    /// Unpack from `0xRRGGBBAA`.
    #[must_use]
    pub const fn from_rgba_u32(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Pack as `0xRRGGBBAA`.
    #[must_use]
    pub const fn to_rgba_u32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    /// Opaque color from hue in degrees (any value, wrapped into `[0, 360)`)
    /// and saturation/value in `[0, 1]`.
    #[must_use]
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_byte = |channel: f32| ((channel + m) * 255.0).round() as u8;
        Self::rgb(to_byte(r), to_byte(g), to_byte(b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.to_rgba_u32())
    }
}
