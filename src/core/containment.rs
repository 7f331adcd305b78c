use crate::domain::ports::Containment;
use crate::utils::error::{Entity, Result, TrackerError};

use super::store::InMemoryStore;

impl Containment for InMemoryStore {
    fn add_mushroom_to_basket(&self, basket_id: u64, mushroom_id: u64) -> Result<()> {
        let mut guard = self.lock()?;
        let state = &mut *guard;

        // Basket is resolved first, so a request where both ids are unknown
        // reports the basket.
        let basket = state
            .baskets
            .get_mut(&basket_id)
            .ok_or(TrackerError::NotFound {
                entity: Entity::Basket,
                id: basket_id,
            })?;
        let mushroom = state
            .mushrooms
            .get(&mushroom_id)
            .ok_or(TrackerError::NotFound {
                entity: Entity::Mushroom,
                id: mushroom_id,
            })?;

        let current = basket.total_weight();
        if current + mushroom.weight > basket.capacity {
            return Err(TrackerError::CapacityExceeded {
                basket_id,
                capacity: basket.capacity,
                current,
                candidate: mushroom.weight,
            });
        }

        // A value copy: later updates to the stored mushroom must not reach
        // into the basket.
        basket.mushrooms.push(mushroom.clone());
        tracing::debug!(basket_id, mushroom_id, total = current + mushroom.weight, "mushroom added");
        Ok(())
    }

    fn remove_mushroom_from_basket(&self, basket_id: u64, mushroom_id: u64) -> Result<()> {
        let mut state = self.lock()?;
        let basket = state
            .baskets
            .get_mut(&basket_id)
            .ok_or(TrackerError::NotFound {
                entity: Entity::Basket,
                id: basket_id,
            })?;

        // The mushroom id is deliberately not checked against the mushroom
        // map; every matching snapshot goes, duplicates included.
        basket.mushrooms.retain(|m| m.id != mushroom_id);
        tracing::debug!(basket_id, mushroom_id, "mushroom removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{NewBasket, NewMushroom};
    use crate::domain::ports::EntityStore;

    fn mushroom(name: &str, weight: i64) -> NewMushroom {
        NewMushroom {
            name: name.to_string(),
            edible: true,
            weight,
            fresh: true,
        }
    }

    fn basket(capacity: i64) -> NewBasket {
        NewBasket {
            owner: "John Doe".to_string(),
            capacity,
        }
    }

    #[test]
    fn test_add_within_capacity_appends_snapshot() {
        let store = InMemoryStore::new();
        let b = store.create_basket(basket(1000)).unwrap();
        let m = store.create_mushroom(mushroom("Portobello", 150)).unwrap();

        store.add_mushroom_to_basket(b.id, m.id).unwrap();

        let b = store.get_basket(b.id).unwrap();
        assert_eq!(b.mushrooms.len(), 1);
        assert_eq!(b.mushrooms[0].name, "Portobello");
        assert_eq!(b.mushrooms[0].id, m.id);
    }

    #[test]
    fn test_add_over_capacity_fails_without_mutation() {
        let store = InMemoryStore::new();
        let b = store.create_basket(basket(100)).unwrap();
        let m = store.create_mushroom(mushroom("Chanterelle", 150)).unwrap();

        let err = store.add_mushroom_to_basket(b.id, m.id).unwrap_err();
        match err {
            TrackerError::CapacityExceeded {
                capacity,
                current,
                candidate,
                ..
            } => {
                assert_eq!(capacity, 100);
                assert_eq!(current, 0);
                assert_eq!(candidate, 150);
            }
            other => panic!("expected CapacityExceeded, got {other}"),
        }

        assert!(store.get_basket(b.id).unwrap().mushrooms.is_empty());
    }

    #[test]
    fn test_exact_fit_is_allowed() {
        let store = InMemoryStore::new();
        let b = store.create_basket(basket(300)).unwrap();
        let m = store.create_mushroom(mushroom("Shiitake", 150)).unwrap();

        store.add_mushroom_to_basket(b.id, m.id).unwrap();
        store.add_mushroom_to_basket(b.id, m.id).unwrap();

        assert_eq!(store.get_basket(b.id).unwrap().total_weight(), 300);
        assert!(matches!(
            store.add_mushroom_to_basket(b.id, m.id),
            Err(TrackerError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_basket_is_checked_before_mushroom() {
        let store = InMemoryStore::new();
        let err = store.add_mushroom_to_basket(8, 9).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::NotFound {
                entity: Entity::Basket,
                id: 8
            }
        ));

        let b = store.create_basket(basket(100)).unwrap();
        let err = store.add_mushroom_to_basket(b.id, 9).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::NotFound {
                entity: Entity::Mushroom,
                id: 9
            }
        ));
    }

    #[test]
    fn test_snapshot_is_isolated_from_updates() {
        let store = InMemoryStore::new();
        let b = store.create_basket(basket(1000)).unwrap();
        let m = store.create_mushroom(mushroom("Enoki", 100)).unwrap();
        store.add_mushroom_to_basket(b.id, m.id).unwrap();

        store
            .update_mushroom(m.id, mushroom("Enoki (bruised)", 90))
            .unwrap();

        let snapshot = &store.get_basket(b.id).unwrap().mushrooms[0];
        assert_eq!(snapshot.name, "Enoki");
        assert_eq!(snapshot.weight, 100);
    }

    #[test]
    fn test_remove_drops_all_matching_snapshots() {
        let store = InMemoryStore::new();
        let b = store.create_basket(basket(1000)).unwrap();
        let m = store.create_mushroom(mushroom("Morel", 50)).unwrap();
        let other = store.create_mushroom(mushroom("Porcini", 60)).unwrap();

        store.add_mushroom_to_basket(b.id, m.id).unwrap();
        store.add_mushroom_to_basket(b.id, other.id).unwrap();
        store.add_mushroom_to_basket(b.id, m.id).unwrap();

        store.remove_mushroom_from_basket(b.id, m.id).unwrap();

        let remaining = store.get_basket(b.id).unwrap().mushrooms;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, other.id);
    }

    #[test]
    fn test_remove_absent_id_is_a_no_op() {
        let store = InMemoryStore::new();
        let b = store.create_basket(basket(1000)).unwrap();
        let m = store.create_mushroom(mushroom("Morel", 50)).unwrap();
        store.add_mushroom_to_basket(b.id, m.id).unwrap();

        // Never a real mushroom, never in the basket. Still success.
        store.remove_mushroom_from_basket(b.id, 999).unwrap();
        assert_eq!(store.get_basket(b.id).unwrap().mushrooms.len(), 1);
    }

    #[test]
    fn test_remove_requires_the_basket_only() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.remove_mushroom_from_basket(1, 1),
            Err(TrackerError::NotFound {
                entity: Entity::Basket,
                ..
            })
        ));
    }

    #[test]
    fn test_add_then_remove_restores_prior_contents() {
        let store = InMemoryStore::new();
        let b = store.create_basket(basket(1000)).unwrap();
        let keep = store.create_mushroom(mushroom("Porcini", 60)).unwrap();
        let transient = store.create_mushroom(mushroom("Morel", 50)).unwrap();

        store.add_mushroom_to_basket(b.id, keep.id).unwrap();
        let before = store.get_basket(b.id).unwrap().mushrooms;

        store.add_mushroom_to_basket(b.id, transient.id).unwrap();
        store
            .remove_mushroom_from_basket(b.id, transient.id)
            .unwrap();

        assert_eq!(store.get_basket(b.id).unwrap().mushrooms, before);
    }
}
