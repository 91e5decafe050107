use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse recipe store: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse inventory snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed recipe row '{title}' (record {record}): {reason}")]
    MalformedRow {
        title: String,
        record: u64,
        reason: String,
    },
}
