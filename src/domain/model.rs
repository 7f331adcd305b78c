use serde::{Deserialize, Serialize};

/// Creation/update payload for a mushroom. Carries every field except the
/// store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMushroom {
    pub name: String,
    pub edible: bool,
    /// Grams. The contract accepts any integer, negatives included.
    pub weight: i64,
    pub fresh: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mushroom {
    pub id: u64,
    pub name: String,
    pub edible: bool,
    pub weight: i64,
    pub fresh: bool,
}

impl Mushroom {
    pub fn from_new(id: u64, new: NewMushroom) -> Self {
        Self {
            id,
            name: new.name,
            edible: new.edible,
            weight: new.weight,
            fresh: new.fresh,
        }
    }

    /// Replaces every field except the identifier.
    pub fn replace_fields(&mut self, new: NewMushroom) {
        self.name = new.name;
        self.edible = new.edible;
        self.weight = new.weight;
        self.fresh = new.fresh;
    }
}

/// Creation payload for a basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBasket {
    pub owner: String,
    /// Maximum total weight in grams, checked at insertion time only.
    pub capacity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basket {
    pub id: u64,
    pub owner: String,
    pub capacity: i64,
    /// Snapshots copied in at insertion time, in insertion order. Updating
    /// the original mushroom afterwards does not touch these.
    pub mushrooms: Vec<Mushroom>,
}

impl Basket {
    pub fn from_new(id: u64, new: NewBasket) -> Self {
        Self {
            id,
            owner: new.owner,
            capacity: new.capacity,
            mushrooms: Vec::new(),
        }
    }

    /// Sum of the contained snapshot weights.
    pub fn total_weight(&self) -> i64 {
        self.mushrooms.iter().map(|m| m.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_fields_keeps_id() {
        let mut mushroom = Mushroom::from_new(
            7,
            NewMushroom {
                name: "Porcini".to_string(),
                edible: true,
                weight: 200,
                fresh: true,
            },
        );

        mushroom.replace_fields(NewMushroom {
            name: "Dried Porcini".to_string(),
            edible: true,
            weight: 40,
            fresh: false,
        });

        assert_eq!(mushroom.id, 7);
        assert_eq!(mushroom.name, "Dried Porcini");
        assert_eq!(mushroom.weight, 40);
        assert!(!mushroom.fresh);
    }

    #[test]
    fn test_total_weight_sums_snapshots() {
        let mut basket = Basket::from_new(
            1,
            NewBasket {
                owner: "John Doe".to_string(),
                capacity: 1000,
            },
        );
        assert_eq!(basket.total_weight(), 0);

        for (id, weight) in [(1, 150), (2, -30), (3, 80)] {
            basket.mushrooms.push(Mushroom {
                id,
                name: format!("m{}", id),
                edible: true,
                weight,
                fresh: true,
            });
        }
        assert_eq!(basket.total_weight(), 200);
    }
}
