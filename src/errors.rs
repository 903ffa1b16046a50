use thiserror::Error;

use crate::recipe::{Drink, Resource};

#[derive(Debug, Error)]
pub enum CoffeeMachineError {
    /// No alcanza un recurso para preparar la bebida
    #[error("not enough {0}")]
    InsufficientResource(Resource),
    #[error("'{0}' is not on the menu")]
    InvalidSelection(String),
    #[error("'{0}' is not a valid quantity")]
    BadRefillInput(String),
    #[error("there is no recipe for {0}")]
    UnknownDrink(Drink),
    #[error("invalid configuration: {0}")]
    ConfigError(String),
    #[error("error while taking the machine lock")]
    LockError,
    #[error("input closed")]
    InputClosed,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl<T> From<std::sync::PoisonError<T>> for CoffeeMachineError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        CoffeeMachineError::LockError
    }
}
