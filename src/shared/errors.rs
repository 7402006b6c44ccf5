use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("Unknown menu entry: {0}")]
    UnknownEntry(String),

    #[error("Index {index} out of range for {len} menu entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Duplicate menu entry id: {0}")]
    DuplicateId(String),

    #[error("Menu entry nested too deep: {0}")]
    NestingTooDeep(String),

    #[error("Reordering requires edit mode")]
    EditModeDisabled,

    #[error("No drag in progress")]
    NoActiveDrag,

    #[error("Invalid shell configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
