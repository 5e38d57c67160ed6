use thiserror::Error;

/// Ways a subgraph fetch can fail.
///
/// None of these reach the caller of the fetcher: every variant is logged
/// and replaced by the demo dataset.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("subgraph errors: {0}")]
    GraphQl(String),

    #[error("response contained no pools")]
    EmptyPools,
}

#[cfg(feature = "full")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err.to_string())
    }
}
