use thiserror::Error;

pub type WindowResult<T> = Result<T, WindowError>;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("invalid visible range: start={start}, end={end}")]
    InvalidRange { start: f64, end: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
