use std::io::{self, Error, ErrorKind};

use crate::raster::{Image, PixelFormat};

impl Image {
    /// Composites `top` over this image with its top-left corner at
    /// (`x`, `y`), using straight-alpha "over" blending.  Parts of `top` that
    /// fall outside this image are clipped.  Both images must be RGBA.
    pub fn overlay(&mut self, top: &Image, x: u32, y: u32) -> io::Result<()> {
        if self.format != PixelFormat::RGBA || top.format != PixelFormat::RGBA {
            let msg = format!("overlay requires RGBA images (got {:?} over \
                               {:?})",
                              top.format,
                              self.format);
            return Err(Error::new(ErrorKind::InvalidInput, msg));
        }
        let cols = top.width.min(self.width.saturating_sub(x)) as usize;
        let rows = top.height.min(self.height.saturating_sub(y)) as usize;
        if cols == 0 || rows == 0 {
            return Ok(());
        }
        let dst_stride = 4 * self.width as usize;
        let src_stride = 4 * top.width as usize;
        for row in 0..rows {
            let dst_start = (y as usize + row) * dst_stride + 4 * x as usize;
            let src_start = row * src_stride;
            let dst_row = &mut self.data[dst_start..dst_start + 4 * cols];
            let src_row = &top.data[src_start..src_start + 4 * cols];
            for (dst, src) in dst_row.chunks_exact_mut(4)
                                     .zip(src_row.chunks_exact(4)) {
                blend_over(src, dst);
            }
        }
        Ok(())
    }
}

/// Porter-Duff "over" for one straight-alpha RGBA pixel, rounded to nearest.
fn blend_over(src: &[u8], dst: &mut [u8]) {
    let src_alpha = u32::from(src[3]);
    if src_alpha == 0 {
        return;
    }
    if src_alpha == 255 {
        dst.copy_from_slice(src);
        return;
    }
    let dst_weight = u32::from(dst[3]) * (255 - src_alpha);
    let src_weight = src_alpha * 255;
    // Output alpha scaled by 255; nonzero since src_alpha > 0.
    let out_alpha = src_weight + dst_weight;
    for channel in 0..3 {
        let value = u32::from(src[channel]) * src_weight +
                    u32::from(dst[channel]) * dst_weight;
        dst[channel] = ((value + out_alpha / 2) / out_alpha) as u8;
    }
    dst[3] = ((out_alpha + 127) / 255) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Color;

    #[test]
    fn half_transparent_over_white_is_opaque() {
        let mut canvas = Image::filled(1, 1, Color::WHITE);
        let top = Image::filled(1, 1, Color::rgba(0, 0, 0, 128));
        canvas.overlay(&top, 0, 0).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some([127, 127, 127, 255]));
    }

    #[test]
    fn over_transparent_keeps_source_pixel() {
        let mut canvas = Image::filled(1, 1, Color::TRANSPARENT);
        let top = Image::filled(1, 1, Color::rgba(200, 100, 50, 77));
        canvas.overlay(&top, 0, 0).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some([200, 100, 50, 77]));
    }

    #[test]
    fn fully_transparent_source_changes_nothing() {
        let mut canvas = Image::filled(2, 2, Color::rgba(1, 2, 3, 4));
        let top = Image::filled(2, 2, Color::rgba(9, 9, 9, 0));
        canvas.overlay(&top, 0, 0).unwrap();
        assert_eq!(canvas.pixel(1, 1), Some([1, 2, 3, 4]));
    }

    #[test]
    fn overlay_at_offset_is_clipped() {
        let mut canvas = Image::filled(4, 4, Color::TRANSPARENT);
        let top = Image::filled(3, 3, Color::rgba(0, 0, 255, 255));
        canvas.overlay(&top, 2, 1).unwrap();
        assert_eq!(canvas.pixel(1, 1), Some([255, 255, 255, 0]));
        assert_eq!(canvas.pixel(2, 0), Some([255, 255, 255, 0]));
        assert_eq!(canvas.pixel(2, 1), Some([0, 0, 255, 255]));
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 255, 255]));
    }

    #[test]
    fn overlay_entirely_outside_is_a_no_op() {
        let mut canvas = Image::filled(4, 4, Color::TRANSPARENT);
        let top = Image::filled(2, 2, Color::rgba(0, 0, 255, 255));
        canvas.overlay(&top, 10, 3).unwrap();
        canvas.overlay(&top, 1, 4).unwrap();
        canvas.overlay(&top, u32::MAX, u32::MAX).unwrap();
        assert!(canvas.data().chunks_exact(4).all(|p| p == [255, 255, 255, 0]));
    }

    #[test]
    fn overlay_rejects_non_rgba() {
        let mut canvas = Image::filled(2, 2, Color::WHITE);
        let top = Image::new(PixelFormat::Gray, 2, 2);
        assert!(canvas.overlay(&top, 0, 0).is_err());
    }
}
