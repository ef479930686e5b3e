use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("samples must be ascending by timestamp: sample {index} is older than its predecessor")]
    UnsortedSamples { index: usize },

    #[error("render backend failure: {0}")]
    Backend(String),

    #[error("invalid config: {0}")]
    Config(String),
}
