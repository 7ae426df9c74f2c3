use parquet::errors::ParquetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to open parquet file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read parquet footer of '{path}': {source}")]
    Footer {
        path: String,
        #[source]
        source: ParquetError,
    },
}
