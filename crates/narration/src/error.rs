use thiserror::Error;

#[derive(Error, Debug)]
pub enum NarrationError {
    #[error("narration request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("narration service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("narration service returned an unexpected payload: {0}")]
    MalformedResponse(String),

    #[error("narration service unavailable after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },
}
