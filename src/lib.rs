//! Read and bump the `const Version = "..."` declaration in source files.
//!
//! The crate exposes the two operations a version-bumping release pipeline
//! expects from an updater plugin. The caller reads the target file, hands
//! its contents over as text and persists whatever comes back.
//!
//! ```
//! let contents = "package version\n\nconst Version = \"1.0.0\"\n";
//! assert_eq!(cvu::read_version(contents).unwrap(), "1.0.0");
//!
//! let bumped = cvu::write_version(contents, "1.1.0").unwrap();
//! assert_eq!(bumped, "package version\n\nconst Version = \"1.1.0\"\n");
//! ```

pub mod config;
pub mod error;
pub mod reporter;
pub mod updater;

pub use config::{ReplaceStrategy, UpdaterConfig, Verbosity};
pub use error::{CvuError, Result};
pub use reporter::{ConsoleReporter, ReporterFactory, SilentReporter, VersionReporter};
pub use updater::{VersionMatch, VersionUpdater};

/// Return the version declared in `contents` using the default configuration.
pub fn read_version(contents: &str) -> Result<String> {
    VersionUpdater::new(UpdaterConfig::default())?.read_version(contents)
}

/// Return `contents` with its declared version replaced by `version`, using
/// the default configuration.
pub fn write_version(contents: &str, version: &str) -> Result<String> {
    VersionUpdater::new(UpdaterConfig::default())?.write_version(contents, version)
}
