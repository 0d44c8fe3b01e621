//! Load, edit and save uncompressed 24 and 32 bit bitmap (BMP) files.
//!
//! The pixel buffer is kept exactly as it is laid out on disk: rows of
//! `stride` bytes, padded to a multiple of 4, pixels stored as `[b, g, r]`
//! (plus one ignored byte at 32 bits). Rows are not flipped.
//!
//! ```no_run
//! use bmpdraw::{draw_line, Image, Pixel};
//!
//! let mut image = Image::open("in.bmp")?;
//! let (w, h) = image.dimension();
//! draw_line(&mut image, (0, 0), (w as i32 - 1, h as i32 - 1), Pixel::WHITE)?;
//! image.save_to("out.bmp")?;
//! # Ok::<(), bmpdraw::Error>(())
//! ```

pub mod bitmap;
pub mod draw;
mod error;
pub mod preview;
pub mod util;

pub use bitmap::FileHeader;
pub use bitmap::Image;
pub use bitmap::InfoHeader;
pub use bitmap::Pixel;
pub use draw::line as draw_line;
pub use error::Error;
pub use error::Result;
