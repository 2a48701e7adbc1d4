use thiserror::Error;

#[derive(Debug, Error)]
pub enum VitrineError {
    #[error("Invalid page file: {0}")]
    InvalidPage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
