//! Monthly price forecast for a catalog cow.
//!
//! - The regressor is a placeholder: it is fitted on a single reference
//!   sample, so every prediction collapses to that sample's price.
//! - The seasonal and government constants have no documented derivation
//!   and are reproduced as-is.

use thiserror::Error;

use super::entities::Cow;

/// Feature layout: breed code, age (months), weight (kg), health score, milk yield.
pub const FEATURE_COUNT: usize = 5;

pub type FeatureRow = [f64; FEATURE_COUNT];

/// Breed code fed to the model for every cow.
pub const BREED_CODE: f64 = 0.0;
/// Milk yield assumed for every forecast request.
pub const ASSUMED_MILK_YIELD: f64 = 12.0;

/// The one training sample the model ever sees.
pub const REFERENCE_SAMPLE: FeatureRow = [0.0, 24.0, 300.0, 8.0, 10.0];
pub const REFERENCE_PRICE: f64 = 70_000.0;

/// Simulated monthly change applied on top of the prediction.
pub const SEASONAL_CHANGE: f64 = 1_000.0;
/// Government price-control adjustment.
pub const GOVERNMENT_ADJUSTMENT: f64 = -500.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct EstimatorError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    #[error("invalid forecast input: {0}")]
    InvalidInput(String),
    #[error("estimator failed: {0}")]
    Estimator(#[from] EstimatorError),
    #[error("estimator produced a non-finite price")]
    NonFinite,
}

/// A regression model that can be fitted and queried one row at a time.
pub trait Estimator {
    fn fit(&mut self, features: &[FeatureRow], targets: &[f64]) -> Result<(), EstimatorError>;

    fn predict(&self, features: &FeatureRow) -> Result<f64, EstimatorError>;
}

/// Model input derived from a cow for a single request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForecastInput {
    pub breed_code: f64,
    pub age_months: f64,
    pub weight_kg: f64,
    pub health_score: f64,
    pub milk_yield: f64,
}

impl ForecastInput {
    pub fn from_cow(cow: &Cow) -> Result<Self, ForecastError> {
        if !cow.weight_kg.is_finite() || cow.weight_kg <= 0.0 {
            return Err(ForecastError::InvalidInput(format!(
                "weight must be a positive number, got {}",
                cow.weight_kg
            )));
        }
        if !cow.health_score.is_finite() || !(0.0..=10.0).contains(&cow.health_score) {
            return Err(ForecastError::InvalidInput(format!(
                "health score must be between 0 and 10, got {}",
                cow.health_score
            )));
        }

        Ok(Self {
            breed_code: BREED_CODE,
            age_months: f64::from(cow.age_months),
            weight_kg: cow.weight_kg,
            health_score: cow.health_score,
            milk_yield: ASSUMED_MILK_YIELD,
        })
    }

    pub fn features(&self) -> FeatureRow {
        [
            self.breed_code,
            self.age_months,
            self.weight_kg,
            self.health_score,
            self.milk_yield,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Forecast {
    /// Raw model output before adjustments.
    pub base_price: f64,
    pub seasonal_change: f64,
    pub government_adjustment: f64,
    /// Adjusted price truncated toward zero.
    pub final_price: i64,
}

impl Forecast {
    fn from_prediction(base_price: f64) -> Result<Self, ForecastError> {
        let adjusted = base_price + SEASONAL_CHANGE + GOVERNMENT_ADJUSTMENT;
        if !adjusted.is_finite() || adjusted.abs() >= i64::MAX as f64 {
            return Err(ForecastError::NonFinite);
        }

        Ok(Self {
            base_price,
            seasonal_change: SEASONAL_CHANGE,
            government_adjustment: GOVERNMENT_ADJUSTMENT,
            final_price: adjusted.trunc() as i64,
        })
    }
}

/// A forecaster whose estimator has already been fitted on the reference sample.
#[derive(Debug)]
pub struct PriceForecaster<E> {
    estimator: E,
}

impl<E: Estimator> PriceForecaster<E> {
    pub fn train(mut estimator: E) -> Result<Self, ForecastError> {
        estimator.fit(&[REFERENCE_SAMPLE], &[REFERENCE_PRICE])?;
        Ok(Self { estimator })
    }

    pub fn forecast(&self, cow: &Cow) -> Result<Forecast, ForecastError> {
        let input = ForecastInput::from_cow(cow)?;
        let base_price = self.estimator.predict(&input.features())?;
        if !base_price.is_finite() {
            return Err(ForecastError::NonFinite);
        }
        Forecast::from_prediction(base_price)
    }
}

/// Fits a fresh estimator, forecasts once and drops the model.
pub fn forecast_once<E: Estimator>(estimator: E, cow: &Cow) -> Result<Forecast, ForecastError> {
    PriceForecaster::train(estimator)?.forecast(cow)
}
