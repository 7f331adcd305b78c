pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{Request, Response, Session};
pub use config::SeedConfig;
pub use crate::core::service::BasketService;
pub use crate::core::store::InMemoryStore;
pub use domain::model::{Basket, Mushroom, NewBasket, NewMushroom};
pub use utils::error::{Entity, Result, TrackerError};
