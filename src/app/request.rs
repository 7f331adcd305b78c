use serde::{Deserialize, Serialize};

use crate::domain::model::{Basket, Mushroom};
use crate::utils::error::{Entity, TrackerError};

pub const MUSHROOM_ADDED: &str = "Mushroom added to basket";
pub const MUSHROOM_REMOVED: &str = "Mushroom removed from basket";

/// One operation per line, tagged with `op`. Field typing is the only
/// validation the boundary performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    CreateMushroom {
        name: String,
        edible: bool,
        weight: i64,
        fresh: bool,
    },
    UpdateMushroom {
        id: u64,
        name: String,
        edible: bool,
        weight: i64,
        fresh: bool,
    },
    GetMushroom {
        id: u64,
    },
    CreateBasket {
        owner: String,
        capacity: i64,
    },
    GetBasket {
        id: u64,
    },
    AddMushroomToBasket {
        basket_id: u64,
        mushroom_id: u64,
    },
    RemoveMushroomFromBasket {
        basket_id: u64,
        mushroom_id: u64,
    },
}

/// Wire responses: a record, an acknowledgement, or a classified failure.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Mushroom(Mushroom),
    Basket(Basket),
    Message { message: String },
    Failure { detail: String },
}

impl Response {
    pub fn message(text: &str) -> Self {
        Response::Message {
            message: text.to_string(),
        }
    }

    pub fn failure(err: &TrackerError) -> Self {
        let detail = match err {
            TrackerError::NotFound {
                entity: Entity::Mushroom,
                ..
            } => "Mushroom not found".to_string(),
            TrackerError::NotFound {
                entity: Entity::Basket,
                ..
            } => "Basket not found".to_string(),
            TrackerError::CapacityExceeded { .. } => "Basket capacity exceeded".to_string(),
            other => other.to_string(),
        };
        Response::Failure { detail }
    }
}
