use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("data parse error: {0}")]
    Parse(String),

    #[error("coordinate out of range: ({lat}, {lon})")]
    CoordinateRange { lat: f64, lon: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DataResult<T> = Result<T, DataError>;
