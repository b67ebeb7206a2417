use std::path::PathBuf;

pub type OgResult<T> = Result<T, OgError>;

#[derive(thiserror::Error, Debug)]
pub enum OgError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OgError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
