use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogSchemaError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
