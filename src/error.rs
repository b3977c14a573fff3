use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostviewError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("fixture error: {0}")]
    Fixture(String),

    #[error("{0} unavailable")]
    Unavailable(String),

    #[error("page element not found: {0}")]
    MissingNode(String),
}

pub type Result<T> = std::result::Result<T, PostviewError>;
