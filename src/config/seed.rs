use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::service::BasketService;
use crate::core::{Containment, EntityStore};
use crate::domain::model::{NewBasket, NewMushroom};
use crate::utils::error::{Result, TrackerError};

/// Records to create at startup, before any request is served. Fills go
/// through the normal capacity-checked insert, so an over-capacity seed
/// fails startup instead of loading silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub mushrooms: Vec<NewMushroom>,
    #[serde(default)]
    pub baskets: Vec<BasketSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketSeed {
    pub owner: String,
    pub capacity: i64,
    /// 1-based positions into `mushrooms` to place in this basket, in order.
    #[serde(default)]
    pub fill: Vec<usize>,
}

impl SeedConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SeedConfig = toml::from_str(content).map_err(|e| TrackerError::Config {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Structural checks only; weights and capacities stay unvalidated like
    /// everywhere else.
    pub fn validate(&self) -> Result<()> {
        for (position, basket) in self.baskets.iter().enumerate() {
            for &index in &basket.fill {
                if index == 0 || index > self.mushrooms.len() {
                    return Err(TrackerError::Config {
                        message: format!(
                            "baskets[{}].fill references mushroom {} but the seed declares {}",
                            position,
                            index,
                            self.mushrooms.len()
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Creates the seeded records through the service. Propagates the first
    /// failure, including `CapacityExceeded` from an overfull `fill`.
    pub fn apply<S: EntityStore + Containment>(&self, service: &BasketService<S>) -> Result<()> {
        self.validate()?;

        let mut mushroom_ids = Vec::with_capacity(self.mushrooms.len());
        for mushroom in &self.mushrooms {
            mushroom_ids.push(service.create_mushroom(mushroom.clone())?.id);
        }

        for basket in &self.baskets {
            let created = service.create_basket(NewBasket {
                owner: basket.owner.clone(),
                capacity: basket.capacity,
            })?;
            for &index in &basket.fill {
                service.add_mushroom_to_basket(created.id, mushroom_ids[index - 1])?;
            }
        }

        tracing::debug!(
            mushrooms = self.mushrooms.len(),
            baskets = self.baskets.len(),
            "seed applied"
        );
        Ok(())
    }
}
