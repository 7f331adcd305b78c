use crate::domain::model::{Basket, Mushroom, NewBasket, NewMushroom};
use crate::domain::ports::EntityStore;
use crate::utils::error::{Entity, Result, TrackerError};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// The record maps and identifier counters. Kept together so one guard
/// covers everything a single operation touches.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) mushrooms: HashMap<u64, Mushroom>,
    pub(crate) baskets: HashMap<u64, Basket>,
    last_mushroom_id: u64,
    last_basket_id: u64,
}

impl StoreState {
    pub(crate) fn next_mushroom_id(&mut self) -> u64 {
        self.last_mushroom_id += 1;
        self.last_mushroom_id
    }

    pub(crate) fn next_basket_id(&mut self) -> u64 {
        self.last_basket_id += 1;
        self.last_basket_id
    }
}

/// Process-local store. A single mutex guards both maps and both counters,
/// so concurrent callers cannot observe duplicate identifiers or a partially
/// applied mutation.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| TrackerError::LockPoisoned)
    }
}

impl EntityStore for InMemoryStore {
    fn create_mushroom(&self, new: NewMushroom) -> Result<Mushroom> {
        let mut state = self.lock()?;
        let id = state.next_mushroom_id();
        let mushroom = Mushroom::from_new(id, new);
        state.mushrooms.insert(id, mushroom.clone());
        Ok(mushroom)
    }

    fn update_mushroom(&self, id: u64, new: NewMushroom) -> Result<Mushroom> {
        let mut state = self.lock()?;
        let record = state.mushrooms.get_mut(&id).ok_or(TrackerError::NotFound {
            entity: Entity::Mushroom,
            id,
        })?;
        record.replace_fields(new);
        Ok(record.clone())
    }

    fn get_mushroom(&self, id: u64) -> Result<Mushroom> {
        let state = self.lock()?;
        state
            .mushrooms
            .get(&id)
            .cloned()
            .ok_or(TrackerError::NotFound {
                entity: Entity::Mushroom,
                id,
            })
    }

    fn create_basket(&self, new: NewBasket) -> Result<Basket> {
        let mut state = self.lock()?;
        let id = state.next_basket_id();
        let basket = Basket::from_new(id, new);
        state.baskets.insert(id, basket.clone());
        Ok(basket)
    }

    fn get_basket(&self, id: u64) -> Result<Basket> {
        let state = self.lock()?;
        state
            .baskets
            .get(&id)
            .cloned()
            .ok_or(TrackerError::NotFound {
                entity: Entity::Basket,
                id,
            })
    }
}
