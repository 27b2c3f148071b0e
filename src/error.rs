#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encode error: {0}")]
    Binary(#[from] bincode::Error),
}
