use crate::core::{Basket, Containment, EntityStore, Mushroom, NewBasket, NewMushroom, Result};

/// The boundary surface the request layer calls: the store operations and
/// the containment operations behind one object, with logging around each.
pub struct BasketService<S: EntityStore + Containment> {
    store: S,
}

impl<S: EntityStore + Containment> BasketService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_mushroom(&self, new: NewMushroom) -> Result<Mushroom> {
        let mushroom = self.store.create_mushroom(new)?;
        tracing::info!(id = mushroom.id, name = %mushroom.name, "mushroom created");
        Ok(mushroom)
    }

    pub fn update_mushroom(&self, id: u64, new: NewMushroom) -> Result<Mushroom> {
        let mushroom = self.store.update_mushroom(id, new)?;
        tracing::info!(id, "mushroom updated");
        Ok(mushroom)
    }

    pub fn get_mushroom(&self, id: u64) -> Result<Mushroom> {
        self.store.get_mushroom(id)
    }

    pub fn create_basket(&self, new: NewBasket) -> Result<Basket> {
        let basket = self.store.create_basket(new)?;
        tracing::info!(id = basket.id, owner = %basket.owner, capacity = basket.capacity, "basket created");
        Ok(basket)
    }

    pub fn get_basket(&self, id: u64) -> Result<Basket> {
        self.store.get_basket(id)
    }

    pub fn add_mushroom_to_basket(&self, basket_id: u64, mushroom_id: u64) -> Result<()> {
        match self.store.add_mushroom_to_basket(basket_id, mushroom_id) {
            Ok(()) => {
                tracing::info!(basket_id, mushroom_id, "mushroom added to basket");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(basket_id, mushroom_id, code = e.code(), "add rejected: {}", e);
                Err(e)
            }
        }
    }

    pub fn remove_mushroom_from_basket(&self, basket_id: u64, mushroom_id: u64) -> Result<()> {
        self.store.remove_mushroom_from_basket(basket_id, mushroom_id)?;
        tracing::info!(basket_id, mushroom_id, "mushroom removed from basket");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::InMemoryStore;
    use crate::domain::model::{NewBasket, NewMushroom};

    #[test]
    fn test_service_delegates_to_the_store() {
        let service = BasketService::new(InMemoryStore::new());

        let m = service
            .create_mushroom(NewMushroom {
                name: "Shiitake".to_string(),
                edible: true,
                weight: 180,
                fresh: true,
            })
            .unwrap();
        let b = service
            .create_basket(NewBasket {
                owner: "John Doe".to_string(),
                capacity: 1000,
            })
            .unwrap();

        service.add_mushroom_to_basket(b.id, m.id).unwrap();
        assert_eq!(service.get_basket(b.id).unwrap().mushrooms.len(), 1);

        service.remove_mushroom_from_basket(b.id, m.id).unwrap();
        assert!(service.get_basket(b.id).unwrap().mushrooms.is_empty());
    }
}
