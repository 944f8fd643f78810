use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate column '{0}' in table header")]
    DuplicateColumn(String),
    #[error("row has {actual} cells but the header has {expected} columns")]
    RowWidth { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
