use crate::error::{CvuError, Result};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// The declaration shape the host file format uses. Single literal spaces,
/// double-quoted value on one line.
const DECLARATION_PATTERN: &str = r#"const Version = "([^"\r\n]*)""#;

/// Compiled once per process; every `DeclarationPattern` shares this regex.
static DECLARATION_REGEX: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(DECLARATION_PATTERN));

/// A located `const Version = "..."` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatch<'a> {
    pub value: &'a str,
    /// Byte range of `value` within the searched contents.
    pub span: Range<usize>,
}

pub struct DeclarationPattern {
    regex: Regex,
}

impl DeclarationPattern {
    pub fn new() -> Result<Self> {
        let regex = DECLARATION_REGEX.as_ref().map_err(|e| {
            CvuError::Pattern(format!("Invalid pattern '{}': {}", DECLARATION_PATTERN, e))
        })?;
        Ok(Self {
            regex: regex.clone(),
        })
    }

    /// Finds the first declaration. A missing declaration and an empty value
    /// are both reported as `VersionNotFound`.
    pub fn find<'a>(&self, contents: &'a str) -> Result<VersionMatch<'a>> {
        let value = self
            .regex
            .captures(contents)
            .and_then(|caps| caps.get(1))
            .filter(|m| !m.as_str().is_empty())
            .ok_or(CvuError::VersionNotFound)?;

        Ok(VersionMatch {
            value: value.as_str(),
            span: value.range(),
        })
    }
}
