use thiserror::Error;

use crate::army::catalog::UnitType;
use crate::core::types::Gold;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Insufficient gold: need {required}, have {available}")]
    InsufficientGold { required: Gold, available: Gold },

    #[error("No transformation available for {0:?}")]
    InvalidTransformation(UnitType),

    #[error("No unit at index {0}")]
    UnitNotFound(usize),

    #[error("Army not found: {0}")]
    ArmyNotFound(String),

    #[error("Unknown civilization: {0}. Valid options: chinese, english, byzantine")]
    UnknownCivilization(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
