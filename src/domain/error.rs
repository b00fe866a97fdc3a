#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned status {status}")]
    Api {
        service: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("missing data: {0}")]
    MissingData(String),
}
