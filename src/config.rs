use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Source image used when no arguments are given.
pub const DEFAULT_SOURCE: &str = "public/logo.png";
/// Output directory used when no arguments are given.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Environment variable overriding [`DEFAULT_SOURCE`].
pub const SOURCE_ENV_VAR: &str = "PWAICONS_SOURCE";
/// Environment variable overriding [`DEFAULT_OUTPUT_DIR`].
pub const OUTPUT_DIR_ENV_VAR: &str = "PWAICONS_OUTPUT_DIR";

/// Where to read the source image and where to write the icons.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Path of the source image.
    pub source: PathBuf,
    /// Existing directory the icons are written into.
    pub output_dir: PathBuf,
}

impl Config {
    /// Creates a configuration from explicit paths.
    pub fn new<S, O>(source: S, output_dir: O) -> Config
        where S: Into<PathBuf>,
              O: Into<PathBuf>
    {
        Config {
            source: source.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Builds a configuration from command-line arguments, not including
    /// the program name.  The first two arguments are the source path and
    /// output directory; with fewer than two, both fall back to
    /// [`Config::default`].
    pub fn from_args<I, A>(args: I) -> Config
        where I: IntoIterator<Item = A>,
              A: Into<OsString>
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match args.as_slice() {
            [source, output_dir, rest @ ..] => {
                if !rest.is_empty() {
                    log::warn!("ignoring {} extra argument(s)", rest.len());
                }
                Config::new(source, output_dir)
            }
            _ => Config::default(),
        }
    }
}

impl Default for Config {
    /// Uses `PWAICONS_SOURCE` and `PWAICONS_OUTPUT_DIR` when set, and the
    /// built-in defaults otherwise.
    fn default() -> Config {
        let source = env::var_os(SOURCE_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_SOURCE.into());
        let output_dir = env::var_os(OUTPUT_DIR_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());
        Config::new(source, output_dir)
    }
}
