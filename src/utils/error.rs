use std::fmt;

use thiserror::Error;

/// Which record map an identifier failed to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Mushroom,
    Basket,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Mushroom => write!(f, "Mushroom"),
            Entity::Basket => write!(f, "Basket"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("{entity} not found: id={id}")]
    NotFound { entity: Entity, id: u64 },

    #[error(
        "basket {basket_id} capacity exceeded: {current} + {candidate} > {capacity}"
    )]
    CapacityExceeded {
        basket_id: u64,
        capacity: i64,
        current: i64,
        candidate: i64,
    },

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl TrackerError {
    /// Stable machine-readable tag for logs and exit handling.
    pub fn code(&self) -> &'static str {
        match self {
            TrackerError::NotFound { .. } => "not_found",
            TrackerError::CapacityExceeded { .. } => "capacity_exceeded",
            TrackerError::LockPoisoned => "lock_poisoned",
            TrackerError::Io(_) => "io",
            TrackerError::Serialization(_) => "serialization",
            TrackerError::Config { .. } => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
