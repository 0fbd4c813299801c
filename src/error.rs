use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvuError {
    #[error("Could not find version.")]
    VersionNotFound,

    #[error("Version pattern failed to compile: {0}")]
    Pattern(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CvuError>;
