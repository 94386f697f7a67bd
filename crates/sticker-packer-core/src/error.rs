use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid paper size: {width}x{height} mm")]
    InvalidPaper { width: f64, height: f64 },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
