pub mod containment;
pub mod service;
pub mod store;

pub use crate::domain::model::{Basket, Mushroom, NewBasket, NewMushroom};
pub use crate::domain::ports::{Containment, EntityStore};
pub use crate::utils::error::Result;
