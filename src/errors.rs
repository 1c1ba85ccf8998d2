use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
    #[error("http error: {0}")]
    Http(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("provider error: {0}")]
    Provider(String),
    #[error("decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
    #[error("http error: {0}")]
    Http(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("empty response")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
