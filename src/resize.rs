use fast_image_resize as fr;
use std::io::{self, Error, ErrorKind};

use crate::raster::{Image, PixelFormat};

/// Computes the largest size with the source's aspect ratio that fits inside
/// the target size (letterboxing, never cropping).
///
/// The constrained axis is truncated toward zero, then clamped to at least
/// one pixel so very thin sources still produce a drawable image.
///
/// # Examples
/// ```
/// use pwaicons::fit_dimensions;
/// assert_eq!(fit_dimensions(200, 100, 64, 64), (64, 32));
/// assert_eq!(fit_dimensions(100, 300, 64, 64), (21, 64));
/// assert_eq!(fit_dimensions(50, 50, 180, 180), (180, 180));
/// ```
pub fn fit_dimensions(src_width: u32,
                      src_height: u32,
                      target_width: u32,
                      target_height: u32)
                      -> (u32, u32) {
    let img_ratio = src_width as f64 / src_height as f64;
    let target_ratio = target_width as f64 / target_height as f64;
    if img_ratio > target_ratio {
        let height = (target_width as f64 / img_ratio) as u32;
        (target_width, height.clamp(1, target_height))
    } else {
        let width = (target_height as f64 * img_ratio) as u32;
        (width.clamp(1, target_width), target_height)
    }
}

/// Returns the offset that centers a `fitted` size inside a `target` size.
/// An odd leftover pixel goes to the right/bottom edge.
pub fn center_offset(target: (u32, u32), fitted: (u32, u32)) -> (u32, u32) {
    (target.0.saturating_sub(fitted.0) / 2,
     target.1.saturating_sub(fitted.1) / 2)
}

impl Image {
    /// Returns a copy of this RGBA image scaled to exactly `width` x `height`
    /// with a Lanczos3 filter.  Color is filtered premultiplied by alpha, so
    /// transparent pixels do not bleed into their neighbours.
    pub fn resize(&self, width: u32, height: u32) -> io::Result<Image> {
        if self.format != PixelFormat::RGBA {
            return self.to_rgba().resize(width, height);
        }
        if width == 0 || height == 0 {
            let msg = format!("cannot resize to {}x{}", width, height);
            return Err(Error::new(ErrorKind::InvalidInput, msg));
        }
        if (width, height) == (self.width, self.height) {
            return Ok(self.clone());
        }
        let src_image = fr::images::Image::from_vec_u8(self.width,
                                                       self.height,
                                                       self.data.to_vec(),
                                                       fr::PixelType::U8x4)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        let mut dst_image =
            fr::images::Image::new(width, height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));
        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| Error::new(ErrorKind::Other, e))?;

        Image::from_data(PixelFormat::RGBA, width, height, dst_image.into_vec())
    }
}
