use crate::raster::{Image, PixelFormat};
use hayro_jpeg2000::{self, ColorSpace};
use std::io::{self, Error, ErrorKind};

impl Image {
    /// Reads an image from a JPEG 2000 file (either a JP2 container or a raw
    /// codestream).
    pub fn read_jp2(input: &[u8]) -> io::Result<Image> {
        let image = hayro_jpeg2000::Image::new(
            input,
            &hayro_jpeg2000::DecodeSettings {
                resolve_palette_indices: true,
                strict: false,
                target_resolution: None,
            },
        )
        .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

        let pixel_format = match (image.color_space(), image.has_alpha()) {
            (ColorSpace::Gray, true) => PixelFormat::GrayAlpha,
            (ColorSpace::Gray, false) => PixelFormat::Gray,
            (ColorSpace::RGB, true) => PixelFormat::RGBA,
            (ColorSpace::RGB, false) => PixelFormat::RGB,
            (ColorSpace::CMYK, _) => {
                return Err(unsupported("CMYK color space"));
            }
            (ColorSpace::Unknown { num_channels }, _) => {
                return Err(unsupported(&format!("unknown \
                                                 ({num_channels}-channel) \
                                                 color space")));
            }
            (ColorSpace::Icc { .. }, _) => {
                return Err(unsupported("ICC profile"));
            }
        };
        let (width, height) = (image.width(), image.height());
        let img_data = image
            .decode()
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        Image::from_data(pixel_format, width, height, img_data).map_err(|e| {
            Error::new(ErrorKind::InvalidData,
                       format!("decoded JPEG 2000 data: {e}"))
        })
    }
}

fn unsupported(what: &str) -> Error {
    Error::new(ErrorKind::InvalidData,
               format!("jpeg2000 images with {what} not supported"))
}
