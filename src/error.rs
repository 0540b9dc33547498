use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid grid size: width={width}, height={height}")]
    InvalidGrid { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid listener `{id}`: {reason}")]
    InvalidListener { id: String, reason: &'static str },
}
