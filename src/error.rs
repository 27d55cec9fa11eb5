use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: i32, height: i32 },
    #[error("window must have a positive size, got {width}x{height}")]
    InvalidWindow { width: f32, height: f32 },
}
