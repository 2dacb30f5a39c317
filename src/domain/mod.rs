//! Marketplace domain: catalogs, sessions and the price forecast.

pub mod catalog;
pub mod entities;
pub mod forecast;
pub mod session;

pub use catalog::{Catalog, CatalogError};
pub use entities::{Breed, Cow, CowId, Farm};
pub use forecast::{
    forecast_once, Estimator, EstimatorError, FeatureRow, Forecast, ForecastError,
    ForecastInput, PriceForecaster,
};
pub use session::{Activity, Session, SessionError, WalletAddress};
