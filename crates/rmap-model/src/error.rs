use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate output column: {0}")]
    DuplicateOutputColumn(String),
    #[error("mapping has no output columns")]
    EmptyMapping,
}

pub type Result<T> = std::result::Result<T, ModelError>;
