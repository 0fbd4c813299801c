use crate::config::{ReplaceStrategy, UpdaterConfig};
use crate::error::Result;
use crate::reporter::{ReporterFactory, VersionReporter};
use crate::updater::declaration::{DeclarationPattern, VersionMatch};
use std::sync::Arc;

/// VersionUpdater reads and rewrites the `const Version = "..."` declaration
/// in caller-supplied file contents. It never touches the filesystem.
pub struct VersionUpdater {
    pattern: DeclarationPattern,
    replace: ReplaceStrategy,
    reporter: Arc<dyn VersionReporter>,
}

impl VersionUpdater {
    pub fn new(config: UpdaterConfig) -> Result<Self> {
        Self::with_reporter(config, ReporterFactory::console(config.verbosity))
    }

    pub fn with_reporter(
        config: UpdaterConfig,
        reporter: Arc<dyn VersionReporter>,
    ) -> Result<Self> {
        Ok(Self {
            pattern: DeclarationPattern::new()?,
            replace: config.replace,
            reporter,
        })
    }

    pub fn silent() -> Result<Self> {
        Self::with_reporter(UpdaterConfig::silent(), ReporterFactory::silent())
    }

    pub fn replace_strategy(&self) -> ReplaceStrategy {
        self.replace
    }

    /// Locate the first version declaration in `contents`.
    pub fn locate<'a>(&self, contents: &'a str) -> Result<VersionMatch<'a>> {
        self.pattern.find(contents)
    }

    /// Return the current version declared in `contents`.
    pub fn read_version(&self, contents: &str) -> Result<String> {
        let found = self.locate(contents)?;
        self.reporter.version_found(found.value);
        Ok(found.value.to_string())
    }

    /// Return a copy of `contents` with the version replaced by `new_version`.
    ///
    /// With [`ReplaceStrategy::FirstOccurrence`] the first textual occurrence
    /// of the old version is substituted, wherever it appears; if the old
    /// value is mentioned before the declaration, that earlier mention is
    /// the one rewritten.
    pub fn write_version(&self, contents: &str, new_version: &str) -> Result<String> {
        let found = self.locate(contents)?;
        self.reporter.version_changed(found.value, new_version);

        let updated = match self.replace {
            ReplaceStrategy::FirstOccurrence => contents.replacen(found.value, new_version, 1),
            ReplaceStrategy::Declaration => {
                let mut updated =
                    String::with_capacity(contents.len() - found.span.len() + new_version.len());
                updated.push_str(&contents[..found.span.start]);
                updated.push_str(new_version);
                updated.push_str(&contents[found.span.end..]);
                updated
            }
        };

        self.reporter.contents_rewritten(&updated);
        Ok(updated)
    }
}
