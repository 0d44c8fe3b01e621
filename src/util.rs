use super::bitmap::consts::ROW_ALIGNMENT;

/// Number of bytes (0 to 3) appended to a row so its length is a multiple of 4
#[inline(always)]
pub fn row_padding(width: u32, bytes_per_pixel: u32) -> u32 {
    let row = width.wrapping_mul(bytes_per_pixel) % ROW_ALIGNMENT;
    (ROW_ALIGNMENT - row) % ROW_ALIGNMENT
}

/// Length in bytes of one row, padding included.
///
/// Returns `None` when the row length does not fit in a `u32`.
#[inline(always)]
pub fn stride(width: u32, bytes_per_pixel: u32) -> Option<u32> {
    width
        .checked_mul(bytes_per_pixel)
        .and_then(|row| row.checked_add(row_padding(width, bytes_per_pixel)))
}

/// Total length of a pixel buffer of `height` rows of `stride` bytes
#[inline(always)]
pub fn buffer_len(stride: u32, height: u32) -> Option<usize> {
    (stride as usize).checked_mul(height as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_fills_row_to_four_bytes() {
        assert_eq!(row_padding(1, 3), 1);
        assert_eq!(row_padding(2, 3), 2);
        assert_eq!(row_padding(3, 3), 3);
        assert_eq!(row_padding(4, 3), 0);
        assert_eq!(row_padding(0, 3), 0);
        assert_eq!(row_padding(7, 4), 0);
    }

    #[test]
    fn known_strides() {
        assert_eq!(stride(1, 3), Some(4));
        assert_eq!(stride(4, 3), Some(12));
        assert_eq!(stride(1, 4), Some(4));
        assert_eq!(stride(3, 4), Some(12));
        assert_eq!(stride(5, 3), Some(16));
    }

    #[test]
    fn stride_is_always_aligned() {
        for width in 0..256u32 {
            for bytes in [3u32, 4] {
                let stride = stride(width, bytes).unwrap();
                assert_eq!(stride % 4, 0, "width {} bytes {}", width, bytes);
                assert!(stride - width * bytes < 4);
            }
        }
    }

    #[test]
    fn oversized_rows_are_rejected() {
        assert_eq!(stride(u32::MAX, 3), None);
        assert_eq!(stride(u32::MAX / 4, 4), Some(u32::MAX / 4 * 4));
    }

    #[test]
    fn buffer_len_multiplies_rows() {
        assert_eq!(buffer_len(12, 3), Some(36));
        assert_eq!(buffer_len(12, 0), Some(0));
    }
}
