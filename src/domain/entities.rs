use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a cow in the marketplace catalog.
pub type CowId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Breed {
    Sahiwal,
    Jersey,
    Friesian,
}

impl Breed {
    pub fn name(&self) -> &'static str {
        match self {
            Breed::Sahiwal => "Sahiwal",
            Breed::Jersey => "Jersey",
            Breed::Friesian => "Friesian",
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A row of the cow catalog. Values are fixed for the life of the process.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cow {
    pub id: CowId,
    pub breed: Breed,
    pub age_months: u32,
    pub weight_kg: f64,
    /// Health on a 0-10 scale, as reported by the IoT tag.
    pub health_score: f64,
    pub iot_verified: bool,
    /// Whether an animal passport document is on file.
    pub passport_available: bool,
    pub price_pkr: u64,
}

/// A storage farm offering monthly boarding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farm {
    pub name: String,
    pub location: String,
    pub monthly_fee_pkr: u64,
    pub vacant_slots: u32,
}
