//! Read-only sample catalogs shown on the marketplace and farm pages.

use std::sync::OnceLock;

use thiserror::Error;

use super::entities::{Breed, Cow, CowId, Farm};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("cow #{0} is not in the catalog")]
    CowNotFound(CowId),
    #[error("farm '{0}' is not in the catalog")]
    FarmNotFound(String),
}

#[derive(Clone, Debug)]
pub struct Catalog {
    cows: Vec<Cow>,
    farms: Vec<Farm>,
}

impl Catalog {
    /// The fixed sample data the marketplace ships with.
    pub fn sample() -> Self {
        Self {
            cows: vec![
                cow(101, Breed::Sahiwal, 36, 350.0, 9.0, 75_000),
                cow(102, Breed::Jersey, 24, 400.0, 8.5, 82_000),
                cow(103, Breed::Friesian, 48, 450.0, 7.8, 88_000),
            ],
            farms: vec![
                farm("GreenPasture", "Lahore", 1_500, 10),
                farm("DairyHub", "Faisalabad", 1_200, 6),
                farm("OrganicHeards", "Sahiwal", 1_800, 3),
            ],
        }
    }

    /// Process-wide catalog, built on first access and never mutated.
    pub fn shared() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::sample)
    }

    pub fn list_cows(&self) -> &[Cow] {
        &self.cows
    }

    pub fn list_farms(&self) -> &[Farm] {
        &self.farms
    }

    pub fn cow_by_id(&self, id: CowId) -> Result<&Cow, CatalogError> {
        self.cows
            .iter()
            .find(|cow| cow.id == id)
            .ok_or(CatalogError::CowNotFound(id))
    }

    pub fn farm_by_name(&self, name: &str) -> Result<&Farm, CatalogError> {
        self.farms
            .iter()
            .find(|farm| farm.name == name)
            .ok_or_else(|| CatalogError::FarmNotFound(name.to_string()))
    }

    pub fn cow_ids(&self) -> impl Iterator<Item = CowId> + '_ {
        self.cows.iter().map(|cow| cow.id)
    }
}

fn cow(
    id: CowId,
    breed: Breed,
    age_months: u32,
    weight_kg: f64,
    health_score: f64,
    price_pkr: u64,
) -> Cow {
    Cow {
        id,
        breed,
        age_months,
        weight_kg,
        health_score,
        iot_verified: true,
        passport_available: true,
        price_pkr,
    }
}

fn farm(name: &str, location: &str, monthly_fee_pkr: u64, vacant_slots: u32) -> Farm {
    Farm {
        name: name.to_string(),
        location: location.to_string(),
        monthly_fee_pkr,
        vacant_slots,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalogs_have_three_unique_rows_in_order() {
        let catalog = Catalog::sample();

        let ids: Vec<_> = catalog.cow_ids().collect();
        assert_eq!(ids, vec![101, 102, 103]);

        let names: Vec<_> = catalog.list_farms().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["GreenPasture", "DairyHub", "OrganicHeards"]);
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), 3);
    }

    #[test]
    fn repeated_listing_is_stable() {
        let catalog = Catalog::shared();
        let first = catalog.list_cows().to_vec();
        for _ in 0..10 {
            assert_eq!(catalog.list_cows(), first.as_slice());
            assert_eq!(catalog.list_farms().len(), 3);
        }
    }

    #[test]
    fn looks_up_sahiwal_by_id() {
        let catalog = Catalog::sample();
        let cow = catalog.cow_by_id(101).unwrap();
        assert_eq!(cow.breed, Breed::Sahiwal);
        assert_eq!(cow.age_months, 36);
        assert_eq!(cow.weight_kg, 350.0);
        assert_eq!(cow.health_score, 9.0);
        assert_eq!(cow.price_pkr, 75_000);
        assert!(catalog
            .list_cows()
            .iter()
            .all(|cow| cow.iot_verified && cow.passport_available));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.cow_by_id(104), Err(CatalogError::CowNotFound(104)));
        assert_eq!(catalog.cow_by_id(0), Err(CatalogError::CowNotFound(0)));
        assert_eq!(
            catalog.farm_by_name("greenpasture"),
            Err(CatalogError::FarmNotFound("greenpasture".to_string()))
        );
        assert_eq!(catalog.farm_by_name("DairyHub").unwrap().vacant_slots, 6);
    }
}
