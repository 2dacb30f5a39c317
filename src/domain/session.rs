use thiserror::Error;
use uuid::Uuid;

use super::catalog::{Catalog, CatalogError};
use super::entities::CowId;
use crate::util::format::format_pkr;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please enter your MetaMask wallet address manually.")]
    EmptyWallet,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Wallet address as typed by the user. Only checked for being non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(input: &str) -> Result<Self, SessionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyWallet);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A simulated marketplace action. Nothing is submitted anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activity {
    Bought { cow_id: CowId },
    Stored { farm: String, monthly_fee_pkr: u64 },
}

impl Activity {
    pub fn message(&self) -> String {
        match self {
            Activity::Bought { cow_id } => {
                format!("Cow #{cow_id} has been added to your wallet (simulation).")
            }
            Activity::Stored { farm, .. } => {
                format!("Cow stored at {farm}. Monthly fee applied.")
            }
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            Activity::Bought { .. } => None,
            Activity::Stored {
                monthly_fee_pkr, ..
            } => Some(format!("{} / month", format_pkr(*monthly_fee_pkr as i64))),
        }
    }
}

/// Per-window state handed to every handler.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub id: Uuid,
    wallet: Option<WalletAddress>,
    activity: Vec<Activity>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            wallet: None,
            activity: Vec::new(),
        }
    }

    pub fn wallet(&self) -> Option<&WalletAddress> {
        self.wallet.as_ref()
    }

    /// Replaces the connected wallet; clears it when the input is blank.
    pub fn connect_wallet(&mut self, input: &str) -> Result<&WalletAddress, SessionError> {
        match WalletAddress::parse(input) {
            Ok(address) => {
                log::info!("session {} connected wallet {}", self.id, address.as_str());
                Ok(&*self.wallet.insert(address))
            }
            Err(err) => {
                self.wallet = None;
                Err(err)
            }
        }
    }

    pub fn buy_cow(&mut self, catalog: &Catalog, cow_id: CowId) -> Result<Activity, SessionError> {
        let cow = catalog.cow_by_id(cow_id)?;
        let activity = Activity::Bought { cow_id: cow.id };
        self.record(activity.clone());
        Ok(activity)
    }

    pub fn store_at(&mut self, catalog: &Catalog, farm_name: &str) -> Result<Activity, SessionError> {
        let farm = catalog.farm_by_name(farm_name)?;
        let activity = Activity::Stored {
            farm: farm.name.clone(),
            monthly_fee_pkr: farm.monthly_fee_pkr,
        };
        self.record(activity.clone());
        Ok(activity)
    }

    pub fn activity(&self) -> &[Activity] {
        &self.activity
    }

    fn record(&mut self, activity: Activity) {
        log::debug!("session {}: {}", self.id, activity.message());
        self.activity.push(activity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_must_not_be_blank() {
        let mut session = Session::new();
        assert_eq!(session.connect_wallet("   "), Err(SessionError::EmptyWallet));
        assert!(session.wallet().is_none());

        let wallet = session.connect_wallet(" 0xabc ").unwrap();
        assert_eq!(wallet.as_str(), "0xabc");

        session.connect_wallet("").unwrap_err();
        assert!(session.wallet().is_none());
    }

    #[test]
    fn buying_records_simulated_activity() {
        let catalog = Catalog::sample();
        let mut session = Session::new();

        let activity = session.buy_cow(&catalog, 102).unwrap();
        assert_eq!(
            activity.message(),
            "Cow #102 has been added to your wallet (simulation)."
        );
        assert_eq!(session.activity(), &[activity]);
    }

    #[test]
    fn storing_reports_farm_fee() {
        let catalog = Catalog::sample();
        let mut session = Session::new();

        let activity = session.store_at(&catalog, "OrganicHeards").unwrap();
        assert_eq!(activity.message(), "Cow stored at OrganicHeards. Monthly fee applied.");
        assert_eq!(activity.detail().as_deref(), Some("PKR 1,800 / month"));
        // The catalog itself is untouched.
        assert_eq!(catalog.farm_by_name("OrganicHeards").unwrap().vacant_slots, 3);
    }

    #[test]
    fn unknown_targets_leave_session_unchanged() {
        let catalog = Catalog::sample();
        let mut session = Session::new();

        assert_eq!(
            session.buy_cow(&catalog, 999),
            Err(SessionError::Catalog(CatalogError::CowNotFound(999)))
        );
        assert!(session.store_at(&catalog, "Nowhere").is_err());
        assert!(session.activity().is_empty());
    }

    #[test]
    fn sessions_are_independent() {
        let catalog = Catalog::sample();
        let mut first = Session::new();
        let second = Session::new();
        first.buy_cow(&catalog, 101).unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.activity().is_empty());
    }
}
