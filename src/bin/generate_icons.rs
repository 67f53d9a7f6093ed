//! Writes favicon.png, apple-touch-icon.png, icon-192.png and icon-512.png
//! into an existing directory, from one source image.
//!
//! ```shell
//! generate_icons <path/to/logo.png> <output/dir>
//! ```
//!
//! With fewer than two arguments, the source and output directory fall back
//! to `$PWAICONS_SOURCE` / `$PWAICONS_OUTPUT_DIR`, or to `public/logo.png`
//! and `public`.

use pwaicons::{Config, IconGenerator};
use std::env;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default()
                                      .default_filter_or("warn"))
        .init();

    let config = Config::from_args(env::args_os().skip(1));
    println!("Generating icons from: {}", config.source.display());
    println!("Output directory: {}", config.output_dir.display());

    let generator = IconGenerator::new(config);
    let result = generator.generate(|spec, _| {
        println!("Generated {}", spec.filename);
    });
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
