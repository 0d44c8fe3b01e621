/// A color as seen by users of the bitmap: red, green and blue channels.
///
/// In the pixel buffer the channels are stored in blue, green, red order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::splat(0);
    pub const WHITE: Pixel = Pixel::splat(255);

    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r: r, g: g, b: b }
    }

    /// A grey with every channel set to `value`
    #[inline(always)]
    pub const fn splat(value: u8) -> Pixel {
        Pixel::new(value, value, value)
    }

    /// Build a pixel from its on-disk `[b, g, r]` bytes
    #[inline(always)]
    pub(crate) fn from_bgr(bytes: &[u8]) -> Pixel {
        Pixel::new(bytes[2], bytes[1], bytes[0])
    }

    /// Store the pixel as `[b, g, r]`
    #[inline(always)]
    pub(crate) fn write_bgr(&self, bytes: &mut [u8]) {
        bytes[0] = self.b;
        bytes[1] = self.g;
        bytes[2] = self.r;
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Pixel {
        Pixel::new(r, g, b)
    }
}
