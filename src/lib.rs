//! Library for generating the icon set of a web app (favicon, Apple touch
//! icon and PWA icons) from a single source image.
//!
//! Each icon is the source scaled to fit its size without cropping, centered
//! on a transparent canvas, and (for the Apple touch icon) flattened onto
//! opaque white.  See [`ICON_SPECS`](constant.ICON_SPECS.html) for the full
//! list of outputs.
//!
//! ```no_run
//! use pwaicons::{generate_icons, Config};
//! let written = generate_icons(&Config::new("logo.png", "public"))
//!     .expect("icon generation failed");
//! assert_eq!(written.len(), 4);
//! ```

#![warn(missing_docs)]

mod composite;
mod config;
mod error;
mod generator;
#[cfg(feature = "jp2io")]
mod jp2io;
mod pngio;
mod raster;
mod resize;
mod source;
mod table;

pub use self::config::{Config, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE,
                       OUTPUT_DIR_ENV_VAR, SOURCE_ENV_VAR};
pub use self::error::{Error, Result};
pub use self::generator::{generate_icons, render_icon, IconGenerator};
pub use self::raster::{Color, Image, PixelFormat};
pub use self::resize::{center_offset, fit_dimensions};
pub use self::table::{Background, IconSpec, ICON_SPECS};
