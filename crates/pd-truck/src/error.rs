use pd_material::MaterialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TruckError {
    #[error("truck configuration error: {0}")]
    Config(String),

    #[error("inventory error: {0}")]
    Material(#[from] MaterialError),
}

pub type TruckResult<T> = Result<T, TruckError>;
