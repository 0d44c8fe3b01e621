use std::io::Result;
use std::io::Write;

use super::bitmap::Image;
use super::bitmap::Pixel;

/// Symbol used to show a pixel: `*` for black, blank for white, `?` otherwise
#[inline(always)]
pub fn symbol(pixel: Pixel) -> char {
    match pixel {
        Pixel::BLACK => '*',
        Pixel::WHITE => ' ',
        _ => '?',
    }
}

/// Print one line per buffer row, each symbol followed by a space
pub fn display<W: Write>(out: &mut W, image: &Image) -> Result<()> {
    let (width, height) = image.dimension();

    for y in 0..height {
        let mut line = String::with_capacity(width as usize * 2);
        for x in 0..width {
            line.push(symbol(image.pixel(x, y)));
            line.push(' ');
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
