use thiserror::Error;

#[derive(Error, Debug)]
pub enum CategorizeError {
    #[error("failed to access categorization cache: {0}")]
    Io(#[from] std::io::Error),

    #[error("categorization service failed: {0}")]
    Upstream(String),
}
