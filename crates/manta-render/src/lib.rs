#![forbid(unsafe_code)]

pub mod axis;
pub mod interaction;
pub mod model;
pub mod scatter;
pub mod svg;

pub use scatter::layout_scatter;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid view config: {message}")]
    InvalidConfig { message: String },
    #[error("layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
