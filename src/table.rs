use crate::raster::Color;

/// How the area around (and beneath) the scaled source is filled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Background {
    /// Padding stays fully transparent.
    Transparent,
    /// The icon is flattened onto a solid color.
    Opaque(Color),
}

/// One output file: its name, exact pixel size, and background treatment.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IconSpec {
    /// File name written inside the output directory.
    pub filename: &'static str,
    /// Width of the output, in pixels.
    pub width: u32,
    /// Height of the output, in pixels.
    pub height: u32,
    /// Background treatment for the output.
    pub background: Background,
}

impl IconSpec {
    const fn square(filename: &'static str,
                    size: u32,
                    background: Background)
                    -> IconSpec {
        IconSpec {
            filename,
            width: size,
            height: size,
            background,
        }
    }

    /// Looks up the entry of [`ICON_SPECS`](constant.ICON_SPECS.html) with
    /// the given file name.
    ///
    /// # Examples
    /// ```
    /// use pwaicons::{Background, Color, IconSpec};
    /// let touch = IconSpec::find("apple-touch-icon.png").unwrap();
    /// assert_eq!(touch.width, 180);
    /// assert_eq!(touch.background, Background::Opaque(Color::WHITE));
    /// assert!(IconSpec::find("icon-1024.png").is_none());
    /// ```
    pub fn find(filename: &str) -> Option<&'static IconSpec> {
        ICON_SPECS.iter().find(|spec| spec.filename == filename)
    }

    /// Returns the (width, height) pair of this entry.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Every icon the generator writes, in the order they are written.
pub const ICON_SPECS: [IconSpec; 4] = [
    IconSpec::square("favicon.png", 64, Background::Transparent),
    IconSpec::square("apple-touch-icon.png", 180, Background::Opaque(Color::WHITE)),
    IconSpec::square("icon-192.png", 192, Background::Transparent),
    IconSpec::square("icon-512.png", 512, Background::Transparent),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_and_sizes() {
        let entries: Vec<(&str, u32, u32)> = ICON_SPECS
            .iter()
            .map(|spec| (spec.filename, spec.width, spec.height))
            .collect();
        assert_eq!(entries,
                   vec![("favicon.png", 64, 64),
                        ("apple-touch-icon.png", 180, 180),
                        ("icon-192.png", 192, 192),
                        ("icon-512.png", 512, 512)]);
    }

    #[test]
    fn only_touch_icon_is_opaque() {
        let opaque: Vec<&str> = ICON_SPECS
            .iter()
            .filter(|spec| spec.background != Background::Transparent)
            .map(|spec| spec.filename)
            .collect();
        assert_eq!(opaque, vec!["apple-touch-icon.png"]);
    }
}
