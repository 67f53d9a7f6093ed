use std::io::{self, Error, ErrorKind};

/// A decoded raster image.
#[derive(Clone, Debug)]
pub struct Image {
    pub(crate) format: PixelFormat,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Box<[u8]>,
}

impl Image {
    /// Creates a new image with all pixel data set to zero.
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Image {
        let num_bytes = format.channels() * (width as usize) * (height as usize);
        Image {
            format,
            width,
            height,
            data: vec![0u8; num_bytes].into_boxed_slice(),
        }
    }

    /// Creates a new RGBA image with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Image {
        let num_pixels = (width as usize) * (height as usize);
        let rgba = color.to_array();
        let mut data = Vec::with_capacity(num_pixels * 4);
        for _ in 0..num_pixels {
            data.extend_from_slice(&rgba);
        }
        Image {
            format: PixelFormat::RGBA,
            width,
            height,
            data: data.into_boxed_slice(),
        }
    }

    /// Wraps raw pixel data.  Returns an error if the buffer length does not
    /// match the given format and dimensions.
    pub fn from_data(format: PixelFormat,
                     width: u32,
                     height: u32,
                     data: Vec<u8>)
                     -> io::Result<Image> {
        let expected = format.channels() * (width as usize) * (height as usize);
        if data.len() != expected {
            let msg = format!("wrong pixel data length ({} instead of {})",
                              data.len(),
                              expected);
            return Err(Error::new(ErrorKind::InvalidInput, msg));
        }
        Ok(Image {
            format,
            width,
            height,
            data: data.into_boxed_slice(),
        })
    }

    /// Creates a copy of this image using the RGBA pixel format (that is,
    /// `foo.to_rgba().pixel_format()` will always return `PixelFormat::RGBA`).
    /// If the source image is already in RGBA format, this is equivalent to
    /// simply calling `clone()`.
    pub fn to_rgba(&self) -> Image {
        let rgba_data = match self.format {
            PixelFormat::RGBA => self.data.clone(),
            PixelFormat::RGB => rgb_to_rgba(&self.data),
            PixelFormat::GrayAlpha => gray_alpha_to_rgba(&self.data),
            PixelFormat::Gray => gray_to_rgba(&self.data),
        };
        Image {
            format: PixelFormat::RGBA,
            width: self.width,
            height: self.height,
            data: rgba_data,
        }
    }

    /// Returns the format in which this image's pixel data is stored.
    pub fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the image's pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the image's pixel data.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the RGBA value of the pixel at (`x`, `y`), or `None` if the
    /// coordinates are out of bounds or the image is not in RGBA format.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if self.format != PixelFormat::RGBA || x >= self.width ||
           y >= self.height {
            return None;
        }
        let start = 4 * ((y as usize) * (self.width as usize) + (x as usize));
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.data[start..start + 4]);
        Some(rgba)
    }
}

/// A format for storing pixel data in an image.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PixelFormat {
    /// 32-bit color with alpha channel.
    RGBA,
    /// 24-bit color with no alpha.
    RGB,
    /// 16-bit grayscale with alpha channel.
    GrayAlpha,
    /// 8-bit grayscale with no alpha.
    Gray,
}

impl PixelFormat {
    /// Returns the number of bits needed to store a single pixel in this
    /// format.
    pub fn bits_per_pixel(self) -> u32 {
        8 * self.channels() as u32
    }

    /// Returns the number of 8-bit channels per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::RGBA => 4,
            PixelFormat::RGB => 3,
            PixelFormat::GrayAlpha => 2,
            PixelFormat::Gray => 1,
        }
    }
}

/// An 8-bit-per-channel RGBA color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 0 is fully transparent, 255 fully opaque.
    pub a: u8,
}

impl Color {
    /// White with zero alpha, the fill of a freshly allocated canvas.
    pub const TRANSPARENT: Color = Color::rgba(255, 255, 255, 0);

    /// Fully opaque white.
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    /// Creates a color from its four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Returns the channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Converts RGB image data into RGBA.
fn rgb_to_rgba(rgb: &[u8]) -> Box<[u8]> {
    assert_eq!(rgb.len() % 3, 0);
    let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
    for pixel in rgb.chunks_exact(3) {
        rgba.extend_from_slice(pixel);
        rgba.push(u8::MAX);
    }
    rgba.into_boxed_slice()
}

/// Converts grayscale+alpha image data into RGBA.
fn gray_alpha_to_rgba(gray_alpha: &[u8]) -> Box<[u8]> {
    assert_eq!(gray_alpha.len() % 2, 0);
    let mut rgba = Vec::with_capacity(gray_alpha.len() * 2);
    for pixel in gray_alpha.chunks_exact(2) {
        rgba.extend_from_slice(&[pixel[0], pixel[0], pixel[0], pixel[1]]);
    }
    rgba.into_boxed_slice()
}

/// Converts grayscale image data into RGBA.
fn gray_to_rgba(gray: &[u8]) -> Box<[u8]> {
    let mut rgba = Vec::with_capacity(gray.len() * 4);
    for &value in gray {
        rgba.extend_from_slice(&[value, value, value, u8::MAX]);
    }
    rgba.into_boxed_slice()
}
