use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0} change is not supported")]
    UnsupportedChange(i64),

    #[error("{action} change is missing the {field} field")]
    MissingField {
        action: &'static str,
        field: &'static str,
    },

    #[error("invalid changes payload: {0}")]
    InvalidChanges(#[source] serde_json::Error),

    #[error("invalid input for {method}: {source}")]
    InvalidInput {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} is not a supported method")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
