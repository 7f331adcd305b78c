use crate::domain::model::{Basket, Mushroom, NewBasket, NewMushroom};
use crate::utils::error::Result;

/// Identifier-keyed access to the tracked records. Implementations own the
/// maps and counters so callers get them injected instead of reaching for
/// process-wide globals.
pub trait EntityStore: Send + Sync {
    /// Assigns the next mushroom identifier (starting at 1, never reused)
    /// and stores the record. No field validation.
    fn create_mushroom(&self, new: NewMushroom) -> Result<Mushroom>;

    /// Replaces every field except the identifier.
    fn update_mushroom(&self, id: u64, new: NewMushroom) -> Result<Mushroom>;

    fn get_mushroom(&self, id: u64) -> Result<Mushroom>;

    /// Independent identifier counter from mushrooms; the new basket starts
    /// with an empty contained sequence.
    fn create_basket(&self, new: NewBasket) -> Result<Basket>;

    fn get_basket(&self, id: u64) -> Result<Basket>;
}

/// Moving mushroom snapshots in and out of baskets.
pub trait Containment: Send + Sync {
    /// Appends a value copy of the mushroom to the basket. Fails with
    /// `NotFound` (basket checked first) or `CapacityExceeded`; on failure
    /// nothing is mutated.
    fn add_mushroom_to_basket(&self, basket_id: u64, mushroom_id: u64) -> Result<()>;

    /// Drops every contained snapshot with the given identifier. Only the
    /// basket id is resolved; removing an absent id is a successful no-op.
    fn remove_mushroom_from_basket(&self, basket_id: u64, mushroom_id: u64) -> Result<()>;
}
