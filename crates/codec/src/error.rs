#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("token is empty")]
    EmptyToken,
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("fragment carries no share token")]
    MalformedFragment,
    #[error("unknown fragment key: {0}")]
    UnknownFragment(String),
}
