use std::fs::File;
use std::io::{self, BufWriter, Error, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{self, Result};
use crate::raster::{Color, Image};
use crate::resize::{center_offset, fit_dimensions};
use crate::table::{Background, IconSpec, ICON_SPECS};

/// Renders one icon from an RGBA source image: scales it to fit the entry's
/// size without cropping, centers it on a transparent canvas, and flattens
/// it onto the entry's background color if it has one.
pub fn render_icon(source: &Image, spec: &IconSpec) -> io::Result<Image> {
    let fitted = fit_dimensions(source.width(),
                                source.height(),
                                spec.width,
                                spec.height);
    let (x, y) = center_offset(spec.size(), fitted);
    log::debug!("{}: fitting {}x{} source into {}x{} at ({}, {})",
                spec.filename,
                source.width(),
                source.height(),
                fitted.0,
                fitted.1,
                x,
                y);
    let resized = source.resize(fitted.0, fitted.1)?;
    let mut canvas = Image::filled(spec.width, spec.height, Color::TRANSPARENT);
    canvas.overlay(&resized, x, y)?;
    match spec.background {
        Background::Transparent => Ok(canvas),
        Background::Opaque(color) => {
            let mut flattened = Image::filled(spec.width, spec.height, color);
            flattened.overlay(&canvas, 0, 0)?;
            Ok(flattened)
        }
    }
}

/// Writes every icon in [`ICON_SPECS`] for one source image.
pub struct IconGenerator {
    config: Config,
}

impl IconGenerator {
    /// Creates a generator for the given source and output directory.
    pub fn new(config: Config) -> IconGenerator {
        IconGenerator { config }
    }

    /// Returns the configuration this generator was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generates all icons in table order, calling `on_generated` after each
    /// file is written.  Stops at the first failure; files written before it
    /// are not removed.
    pub fn generate<F>(&self, mut on_generated: F) -> Result<()>
        where F: FnMut(&IconSpec, &Path)
    {
        let source_path = &self.config.source;
        if !source_path.try_exists()? {
            return Err(error::Error::MissingSource(source_path.clone()));
        }
        let output_dir = &self.config.output_dir;
        if !output_dir.is_dir() {
            let msg = format!("output directory `{}` does not exist",
                              output_dir.display());
            return Err(Error::new(ErrorKind::NotFound, msg).into());
        }

        let source = Image::open(source_path)?;
        for spec in &ICON_SPECS {
            let icon = render_icon(&source, spec)?;
            let path = output_dir.join(spec.filename);
            let mut file = BufWriter::new(File::create(&path)?);
            icon.write_png(&mut file)?;
            file.flush()?;
            log::info!("wrote {} ({}x{})",
                       path.display(),
                       icon.width(),
                       icon.height());
            on_generated(spec, &path);
        }
        Ok(())
    }
}

/// Generates all icons for `config`, returning the written paths in table
/// order.
pub fn generate_icons(config: &Config) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ICON_SPECS.len());
    IconGenerator::new(config.clone())
        .generate(|_, path| written.push(path.to_path_buf()))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_source(width: u32, height: u32) -> Image {
        Image::filled(width, height, Color::rgba(255, 0, 0, 255))
    }

    #[test]
    fn wide_source_is_padded_top_and_bottom() {
        let favicon = IconSpec::find("favicon.png").unwrap();
        let icon = render_icon(&red_source(200, 100), favicon).unwrap();
        assert_eq!((icon.width(), icon.height()), (64, 64));
        for x in [0, 31, 63] {
            assert_eq!(icon.pixel(x, 15).map(|p| p[3]), Some(0));
            assert!(icon.pixel(x, 32).map_or(false, |p| p[3] > 250));
            assert_eq!(icon.pixel(x, 48).map(|p| p[3]), Some(0));
        }
    }

    #[test]
    fn touch_icon_padding_is_white() {
        let touch = IconSpec::find("apple-touch-icon.png").unwrap();
        let icon = render_icon(&red_source(100, 300), touch).unwrap();
        assert_eq!((icon.width(), icon.height()), (180, 180));
        assert_eq!(icon.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(icon.pixel(179, 90), Some([255, 255, 255, 255]));
        assert!(icon.data().chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn render_does_not_touch_source() {
        let source = red_source(30, 10);
        let before = source.data().to_vec();
        for spec in &ICON_SPECS {
            render_icon(&source, spec).unwrap();
        }
        assert!(source.data() == &before[..]);
    }

    #[test]
    fn missing_output_dir_is_a_processing_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("logo.png");
        red_source(4, 4)
            .write_png(File::create(&source).unwrap())
            .unwrap();
        let config = Config::new(&source, dir.path().join("nope"));
        match generate_icons(&config) {
            Err(error::Error::Processing(err)) => {
                assert_eq!(err.kind(), ErrorKind::NotFound)
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!dir.path().join("nope").exists());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_source_path_keeps_its_cause() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain.txt");
        std::fs::write(&not_a_dir, b"text").unwrap();
        let config = Config::new(not_a_dir.join("logo.png"), dir.path());
        match generate_icons(&config) {
            Err(error::Error::Processing(err)) => {
                assert_ne!(err.kind(), ErrorKind::NotFound)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
