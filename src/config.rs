use crate::error::{CvuError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much the updater reports while reading and rewriting versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    #[serde(alias = "quiet")]
    Silent,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn is_silent(self) -> bool {
        self == Verbosity::Silent
    }
}

impl FromStr for Verbosity {
    type Err = CvuError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "silent" | "quiet" => Ok(Verbosity::Silent),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            other => Err(CvuError::Config(format!("Unknown verbosity '{}'", other))),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::Silent => "silent",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
        };
        f.write_str(name)
    }
}

/// Where the new version is written once the declaration has been located.
///
/// `FirstOccurrence` substitutes the first textual occurrence of the old
/// version anywhere in the contents, which may be an earlier mention (a
/// changelog comment, say) rather than the declaration itself.
/// `Declaration` rewrites only the value inside the matched declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplaceStrategy {
    #[default]
    FirstOccurrence,
    Declaration,
}

impl FromStr for ReplaceStrategy {
    type Err = CvuError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first-occurrence" => Ok(ReplaceStrategy::FirstOccurrence),
            "declaration" => Ok(ReplaceStrategy::Declaration),
            other => Err(CvuError::Config(format!(
                "Unknown replace strategy '{}'",
                other
            ))),
        }
    }
}

/// Options accepted by [`crate::VersionUpdater`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdaterConfig {
    pub verbosity: Verbosity,
    pub replace: ReplaceStrategy,
}

impl UpdaterConfig {
    pub fn silent() -> Self {
        Self {
            verbosity: Verbosity::Silent,
            ..Self::default()
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_replace(mut self, replace: ReplaceStrategy) -> Self {
        self.replace = replace;
        self
    }

    /// Parse options from a TOML snippet, e.g. a table embedded in a host config.
    /// Empty input yields the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Parse options handed over by a release pipeline as JSON.
    /// Empty input yields the defaults, as with [`Self::from_toml_str`].
    pub fn from_json_str(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_logging_and_first_occurrence() {
        let config = UpdaterConfig::default();
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.replace, ReplaceStrategy::FirstOccurrence);
    }

    #[test]
    fn parses_toml_snippet() {
        let config = UpdaterConfig::from_toml_str(
            r#"
verbosity = "verbose"
replace = "declaration"
"#,
        )
        .unwrap();
        assert_eq!(config.verbosity, Verbosity::Verbose);
        assert_eq!(config.replace, ReplaceStrategy::Declaration);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = UpdaterConfig::from_toml_str(r#"verbosity = "silent""#).unwrap();
        assert!(config.verbosity.is_silent());
        assert_eq!(config.replace, ReplaceStrategy::FirstOccurrence);
    }

    #[test]
    fn parses_json_options() {
        let config =
            UpdaterConfig::from_json_str(r#"{ "replace": "declaration" }"#).unwrap();
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.replace, ReplaceStrategy::Declaration);
    }

    #[test]
    fn empty_input_is_default_for_both_formats() {
        assert_eq!(
            UpdaterConfig::from_json_str("  ").unwrap(),
            UpdaterConfig::default()
        );
        assert_eq!(
            UpdaterConfig::from_toml_str("\n").unwrap(),
            UpdaterConfig::default()
        );
    }

    #[test]
    fn quiet_alias_is_accepted_everywhere() {
        assert_eq!("quiet".parse::<Verbosity>().unwrap(), Verbosity::Silent);
        assert!(
            UpdaterConfig::from_json_str(r#"{ "verbosity": "quiet" }"#)
                .unwrap()
                .verbosity
                .is_silent()
        );
        assert!(
            UpdaterConfig::from_toml_str(r#"verbosity = "quiet""#)
                .unwrap()
                .verbosity
                .is_silent()
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = UpdaterConfig::from_json_str(r#"{ "pattern": "x" }"#).unwrap_err();
        assert!(matches!(err, CvuError::Json(_)));

        let err = UpdaterConfig::from_toml_str(r#"replace = "everywhere""#).unwrap_err();
        assert!(matches!(err, CvuError::Toml(_)));
    }

    #[test]
    fn verbosity_from_str() {
        assert_eq!("Quiet".parse::<Verbosity>().unwrap(), Verbosity::Silent);
        assert_eq!(" verbose ".parse::<Verbosity>().unwrap(), Verbosity::Verbose);
        assert!(matches!(
            "loud".parse::<Verbosity>(),
            Err(CvuError::Config(_))
        ));
    }

    #[test]
    fn replace_strategy_from_str() {
        assert_eq!(
            "declaration".parse::<ReplaceStrategy>().unwrap(),
            ReplaceStrategy::Declaration
        );
        assert!("global".parse::<ReplaceStrategy>().is_err());
    }

    #[test]
    fn builder_helpers_override_fields() {
        let config = UpdaterConfig::silent().with_replace(ReplaceStrategy::Declaration);
        assert!(config.verbosity.is_silent());
        assert_eq!(config.replace, ReplaceStrategy::Declaration);
        assert_eq!(
            config.with_verbosity(Verbosity::Verbose).verbosity.to_string(),
            "verbose"
        );
    }
}
