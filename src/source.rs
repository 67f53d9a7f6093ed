use byteorder::{BigEndian, ReadBytesExt};
use std::fs;
use std::io::{self, Cursor, Error, ErrorKind, Read};
use std::path::Path;

use crate::raster::{Image, PixelFormat};

/// Box type and payload of the signature box opening a JP2 file.
const JP2_SIGNATURE_BOX_TYPE: &[u8; 4] = b"jP  ";
const JP2_SIGNATURE_BOX_CONTENT: u32 = 0x0d0a_870a;
const JP2_SIGNATURE_BOX_LENGTH: u32 = 12;

/// Start-of-codestream followed by image-and-tile-size markers.
const J2K_SOC_MARKER: u16 = 0xff4f;
const J2K_SIZ_MARKER: u16 = 0xff51;

/// Returns true if `bytes` starts like a JPEG 2000 file, either a JP2
/// container or a raw codestream.
pub(crate) fn is_jpeg2000(bytes: &[u8]) -> bool {
    let mut reader = Cursor::new(bytes);
    if let (Ok(J2K_SOC_MARKER), Ok(J2K_SIZ_MARKER)) =
        (reader.read_u16::<BigEndian>(), reader.read_u16::<BigEndian>()) {
        return true;
    }
    read_jp2_signature_box(bytes).unwrap_or(false)
}

fn read_jp2_signature_box(bytes: &[u8]) -> io::Result<bool> {
    let mut reader = Cursor::new(bytes);
    let length = reader.read_u32::<BigEndian>()?;
    let mut box_type = [0u8; 4];
    reader.read_exact(&mut box_type)?;
    let content = reader.read_u32::<BigEndian>()?;
    Ok(length == JP2_SIGNATURE_BOX_LENGTH &&
       box_type == *JP2_SIGNATURE_BOX_TYPE &&
       content == JP2_SIGNATURE_BOX_CONTENT)
}

impl Image {
    /// Decodes an encoded image of any format the `image` crate can guess
    /// (PNG, JPEG, GIF, BMP, WebP, TIFF, ...), or JPEG 2000.  The result is
    /// always RGBA.
    pub fn decode(bytes: &[u8]) -> io::Result<Image> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?;
        let Some(format) = reader.format() else {
            if is_jpeg2000(bytes) {
                return decode_jpeg2000(bytes).map(|decoded| decoded.to_rgba());
            }
            return Err(Error::new(ErrorKind::InvalidData,
                                  "unrecognized image format"));
        };
        log::debug!("decoding {:?} source", format);
        let rgba = reader
            .decode()
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))?
            .into_rgba8();
        let (width, height) = rgba.dimensions();
        Image::from_data(PixelFormat::RGBA, width, height, rgba.into_raw())
    }

    /// Reads and decodes the image file at `path`, normalized to RGBA.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Image> {
        let bytes = fs::read(path.as_ref())?;
        let image = Image::decode(&bytes)?;
        log::debug!("decoded {} ({}x{})",
                    path.as_ref().display(),
                    image.width(),
                    image.height());
        Ok(image)
    }
}

#[cfg(feature = "jp2io")]
fn decode_jpeg2000(bytes: &[u8]) -> io::Result<Image> {
    Image::read_jp2(bytes)
}

#[cfg(not(feature = "jp2io"))]
fn decode_jpeg2000(_bytes: &[u8]) -> io::Result<Image> {
    Err(Error::new(ErrorKind::InvalidData,
                   "JPEG 2000 support is disabled (enable the `jp2io` \
                    feature)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg2000_signatures() {
        assert!(is_jpeg2000(b"\0\0\0\x0cjP  \r\n\x87\n\0\0\0\x14ftyp"));
        assert!(is_jpeg2000(b"\xff\x4f\xff\x51\0\x2f"));
        assert!(!is_jpeg2000(b"\0\0\0\x0cjP  \r\n\x87\x0b"));
        assert!(!is_jpeg2000(b"\x89PNG\r\n\x1a\n"));
        assert!(!is_jpeg2000(b""));
    }

    #[test]
    fn decode_rejects_unknown_data() {
        for input in [&b""[..], b"not an image at all"] {
            let err = Image::decode(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData);
            assert_eq!(err.to_string(), "unrecognized image format");
        }
    }

    #[test]
    fn decode_reports_the_decoder_failure() {
        let err = Image::decode(b"GIF89a\x01\0\x01\0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn gray_png_opens_as_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let image = Image::from_data(PixelFormat::Gray, 2, 1, vec![9, 200])
            .unwrap();
        image.write_png(std::fs::File::create(&path).unwrap()).unwrap();
        let opened = Image::open(&path).unwrap();
        assert_eq!(opened.pixel_format(), PixelFormat::RGBA);
        assert_eq!(opened.pixel(1, 0), Some([200, 200, 200, 255]));
    }

    #[test]
    fn bmp_and_jpeg_sources_decode() {
        let dir = tempfile::tempdir().unwrap();
        let rgb = image::RgbImage::from_pixel(6, 4, image::Rgb([0, 0, 255]));
        for name in ["logo.bmp", "logo.jpg"] {
            let path = dir.path().join(name);
            rgb.save(&path).unwrap();
            let opened = Image::open(&path).unwrap();
            assert_eq!((opened.width(), opened.height()), (6, 4));
            assert_eq!(opened.pixel(0, 0).map(|p| p[3]), Some(255));
        }
    }
}
