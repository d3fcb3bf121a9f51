#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("template {template} uses undeclared placeholder {{{placeholder}}}")]
    UndeclaredPlaceholder {
        template: String,
        placeholder: String,
    },
    #[error("template {template} declares field {field} twice")]
    DuplicateField { template: String, field: String },
    #[error("no answer given for {0}")]
    MissingAnswer(String),
    #[error("{field} expects a number, got {value:?}")]
    InvalidNumber { field: String, value: String },
}
