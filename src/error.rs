use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SiteError {
    #[error("config error: {0}")]
    Config(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<String> for SiteError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for SiteError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
