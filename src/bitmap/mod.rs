use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Error as IoError;
use std::io::ErrorKind as IoErrorKind;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::path::Path;
use std::vec::Vec;

pub mod consts;
mod header;
mod pixel;

pub use self::header::FileHeader;
pub use self::header::Header;
pub use self::header::InfoHeader;
pub use self::pixel::Pixel;
use super::error::Error;
use super::error::Result;
use super::util;

/// A decoded 24 or 32 bit bitmap.
///
/// The only way to get one is to load it. The pixel buffer is owned by the
/// image and is only ever duplicated through an explicit `clone()`.
///
/// Rows are kept in the order they are stored on disk: row 0 of the buffer is
/// the first row of the file, which for the usual bottom-up bitmaps is the
/// bottom of the picture.
#[derive(Debug, Clone)]
pub struct Image {
    // image dimensions
    width: u32,
    height: u32,
    // bits per pixel, 24 or 32
    bit_depth: u16,
    // bytes appended to each row
    row_padding: u32,
    // row length in bytes (with padding)
    stride: u32,
    // raw pixel bytes, `stride * height` long
    pixels: Vec<u8>,
    // headers as loaded, written back untouched
    header: Header,
}

impl Image {

    /// Load a bitmap from a seekable byte source.
    ///
    /// Pixel data is read from the offset declared in the file header, which
    /// may leave a gap after the headers. A short read is an `Io` error; no
    /// partially filled image is ever returned.
    ///
    /// The headers are read from the start of the source, wherever it is
    /// currently positioned.
    pub fn load<T: Read + Seek>(mut data: T) -> Result<Image> {
        data.seek(SeekFrom::Start(0))?;
        let header = Header::read(&mut data)?;

        let width = header.info.width as u32;
        let height = header.info.height as u32;
        let bit_depth = header.info.bit_depth;

        let bytes = bit_depth as u32 / 8;
        let row_padding = util::row_padding(width, bytes);
        let stride = match util::stride(width, bytes) {
            Some(stride) => stride,
            None => return Err(Error::unsupported("row too long")),
        };
        let len = match util::buffer_len(stride, height) {
            Some(len) => len,
            None => return Err(Error::unsupported("image too large")),
        };

        data.seek(SeekFrom::Start(header.file.offset as u64))?;

        // grow the buffer as bytes arrive instead of trusting the header for
        // one big allocation
        let mut pixels = Vec::new();
        data.take(len as u64).read_to_end(&mut pixels)?;
        if pixels.len() != len {
            return Err(Error::Io(IoError::new(IoErrorKind::UnexpectedEof, "truncated pixel data")))
        }

        Ok(Image {
            width: width,
            height: height,
            bit_depth: bit_depth,
            row_padding: row_padding,
            stride: stride,
            pixels: pixels,
            header: header,
        })
    }

    /// Load the bitmap stored at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Image> {
        let file = File::open(path)?;
        Self::load(BufReader::new(file))
    }

    /// Write the bitmap to a seekable destination.
    ///
    /// The headers go out exactly as they were loaded: `size` and `image_size`
    /// are not recomputed. The pixel buffer is written at the header's pixel
    /// offset, then the destination is flushed. Both are placed from the
    /// start of the destination, wherever it is currently positioned.
    pub fn save<T: Write + Seek>(&self, mut out: T) -> Result<()> {
        out.seek(SeekFrom::Start(0))?;
        self.header.write(&mut out)?;
        out.seek(SeekFrom::Start(self.header.file.offset as u64))?;
        out.write_all(&self.pixels)?;
        out.flush()?;
        Ok(())
    }

    /// Create (or truncate) the file at `path` and save into it
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.save(BufWriter::new(file))
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    pub fn dimension(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline(always)]
    pub fn bit_depth(&self) -> u16 {
        self.bit_depth
    }

    #[inline(always)]
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bit_depth as u32 / 8
    }

    #[inline(always)]
    pub fn row_padding(&self) -> u32 {
        self.row_padding
    }

    #[inline(always)]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[inline(always)]
    pub fn file_header(&self) -> &FileHeader {
        &self.header.file
    }

    #[inline(always)]
    pub fn info_header(&self) -> &InfoHeader {
        &self.header.info
    }

    /// Raw pixel bytes, rows of `stride()` bytes in `[b, g, r(, x)]` order
    #[inline(always)]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline(always)]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Whether `(x, y)` names a pixel of the image. Negative coordinates never do.
    pub fn in_bounds<C: TryInto<u32>>(&self, x: C, y: C) -> bool {
        self.checked_coords(x, y).is_some()
    }

    /// Byte offset of pixel `(x, y)` in the buffer. No bounds checking.
    #[inline(always)]
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride as usize + x as usize * self.bytes_per_pixel() as usize
    }

    /// Read a pixel, or `None` when `(x, y)` is outside the image
    pub fn get_pixel<C: TryInto<u32>>(&self, x: C, y: C) -> Option<Pixel> {
        let (x, y) = self.checked_coords(x, y)?;
        let index = self.pixel_offset(x, y);
        Some(Pixel::from_bgr(&self.pixels[index..index + 3]))
    }

    /// Read a pixel the caller knows to be inside the image.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        match self.get_pixel(x, y) {
            Some(pixel) => pixel,
            None => panic!("pixel ({}, {}) out of {}x{} image", x, y, self.width, self.height),
        }
    }

    /// Overwrite a pixel.
    ///
    /// On 32 bit images the fourth byte is always set to 0, whatever it held.
    pub fn set_pixel<C: TryInto<u32>>(&mut self, x: C, y: C, color: Pixel) -> Result<()> {
        let (x, y) = match self.checked_coords(x, y) {
            Some(coords) => coords,
            None => return Err(Error::OutOfBounds),
        };
        let index = self.pixel_offset(x, y);

        color.write_bgr(&mut self.pixels[index..index + 3]);
        if self.bit_depth == consts::DEPTH_32 {
            self.pixels[index + 3] = 0;
        }
        Ok(())
    }

    fn checked_coords<C: TryInto<u32>>(&self, x: C, y: C) -> Option<(u32, u32)> {
        let x = x.try_into().ok()?;
        let y = y.try_into().ok()?;
        if x < self.width && y < self.height {
            Some((x, y))
        } else {
            None
        }
    }
}
