use crate::config::Verbosity;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

const SEPARATOR: &str = "--------------";

/// Receives diagnostics from [`crate::VersionUpdater`]. Output is purely for
/// operator visibility and never affects the returned contents.
pub trait VersionReporter: Send + Sync {
    fn version_found(&self, version: &str);

    fn version_changed(&self, old_version: &str, new_version: &str);

    fn contents_rewritten(&self, contents: &str);
}

/// Writes diagnostics to a sink (stderr by default), gated on the configured
/// verbosity. Write failures are dropped.
pub struct ConsoleReporter {
    verbosity: Verbosity,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_sink(verbosity, io::stderr())
    }

    pub fn with_sink(verbosity: Verbosity, sink: impl Write + Send + 'static) -> Self {
        Self {
            verbosity,
            sink: Mutex::new(Box::new(sink)),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn emit(&self, lines: &[String]) {
        if let Ok(mut sink) = self.sink.lock() {
            for line in lines {
                let _ = writeln!(sink, "{}", line);
            }
            let _ = sink.flush();
        }
    }
}

impl VersionReporter for ConsoleReporter {
    fn version_found(&self, version: &str) {
        if self.verbosity.is_silent() {
            return;
        }
        self.emit(&[
            SEPARATOR.dimmed().to_string(),
            version.green().to_string(),
        ]);
    }

    fn version_changed(&self, old_version: &str, new_version: &str) {
        if self.verbosity.is_silent() {
            return;
        }
        self.emit(&[
            SEPARATOR.dimmed().to_string(),
            format!("{} {}", old_version.yellow(), new_version.green().bold()),
        ]);
    }

    fn contents_rewritten(&self, contents: &str) {
        if self.verbosity != Verbosity::Verbose {
            return;
        }
        self.emit(&[contents.to_string()]);
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl VersionReporter for SilentReporter {
    fn version_found(&self, _version: &str) {}

    fn version_changed(&self, _old_version: &str, _new_version: &str) {}

    fn contents_rewritten(&self, _contents: &str) {}
}

pub struct ReporterFactory;

impl ReporterFactory {
    pub fn console(verbosity: Verbosity) -> Arc<dyn VersionReporter> {
        if verbosity.is_silent() {
            return Self::silent();
        }
        Arc::new(ConsoleReporter::new(verbosity))
    }

    pub fn silent() -> Arc<dyn VersionReporter> {
        Arc::new(SilentReporter)
    }
}
