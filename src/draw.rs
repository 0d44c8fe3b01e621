use super::bitmap::Image;
use super::bitmap::Pixel;
use super::error::Error;
use super::error::Result;

/// Draw a straight line from `from` to `to`, both ends included, with
/// Bresenham's algorithm.
///
/// Both endpoints must lie inside the image, otherwise `OutOfBounds` is
/// returned and no pixel is touched. Every point of the line lies in the
/// rectangle spanned by its endpoints, so an accepted line is always drawn
/// whole.
pub fn line(image: &mut Image, from: (i32, i32), to: (i32, i32), color: Pixel) -> Result<()> {
    if !image.in_bounds(from.0, from.1) || !image.in_bounds(to.0, to.1) {
        return Err(Error::OutOfBounds)
    }

    let (mut x, mut y) = (from.0 as i64, from.1 as i64);
    let (x2, y2) = (to.0 as i64, to.1 as i64);

    let dx = (x2 - x).abs();
    let dy = (y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        image.set_pixel(x, y, color)?;
        if x == x2 && y == y2 {
            break
        }

        // both steps may happen in one iteration, giving a diagonal move
        if err * 2 > -dy {
            err -= dy;
            x += sx;
        }
        if err * 2 < dx {
            err += dx;
            y += sy;
        }
    }

    Ok(())
}
