use gw_core::CoreError;
use gw_path::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration error: {0}")]
    Config(String),

    #[error("core error: {0}")]
    Core(#[from] CoreError),

    #[error("pathfinding error: {0}")]
    Path(#[from] PathError),
}

pub type SimResult<T> = Result<T, SimError>;
