//! Random-forest regressor backed by smartcore.

use smartcore::{
    ensemble::random_forest_regressor::{
        RandomForestRegressor, RandomForestRegressorParameters,
    },
    linalg::basic::matrix::DenseMatrix,
};

use crate::domain::{Estimator, EstimatorError, FeatureRow, ForecastError, PriceForecaster};
use crate::util::config::AppConfig;

type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

pub const DEFAULT_TREES: usize = 100;

pub struct RandomForestEstimator {
    parameters: RandomForestRegressorParameters,
    model: Option<Forest>,
}

impl RandomForestEstimator {
    pub fn new(seed: u64, n_trees: usize) -> Self {
        let parameters = RandomForestRegressorParameters::default()
            .with_seed(seed)
            .with_n_trees(n_trees.max(1));
        Self {
            parameters,
            model: None,
        }
    }
}

impl Default for RandomForestEstimator {
    fn default() -> Self {
        Self::new(0, DEFAULT_TREES)
    }
}

/// Fits the production forecaster once, using the configured seed and tree count.
pub fn trained_forecaster(
    config: &AppConfig,
) -> Result<PriceForecaster<RandomForestEstimator>, ForecastError> {
    PriceForecaster::train(RandomForestEstimator::new(
        config.forecast_seed,
        config.forecast_trees,
    ))
}

impl Estimator for RandomForestEstimator {
    fn fit(&mut self, features: &[FeatureRow], targets: &[f64]) -> Result<(), EstimatorError> {
        let rows: Vec<&[f64]> = features.iter().map(|row| row.as_slice()).collect();
        let x = DenseMatrix::from_2d_array(&rows).map_err(|err| EstimatorError(err.to_string()))?;
        let y = targets.to_vec();

        let model = Forest::fit(&x, &y, self.parameters.clone())
            .map_err(|err| EstimatorError(err.to_string()))?;
        log::debug!(
            "fitted random forest on {} sample(s) with {} trees",
            features.len(),
            self.parameters.n_trees
        );
        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, features: &FeatureRow) -> Result<f64, EstimatorError> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| EstimatorError("random forest has not been fitted".to_string()))?;
        let x = DenseMatrix::from_2d_array(&[features.as_slice()])
            .map_err(|err| EstimatorError(err.to_string()))?;
        let predictions = model
            .predict(&x)
            .map_err(|err| EstimatorError(err.to_string()))?;
        predictions
            .first()
            .copied()
            .ok_or_else(|| EstimatorError("random forest returned no prediction".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{forecast::REFERENCE_SAMPLE, Catalog, PriceForecaster};

    #[test]
    fn predict_before_fit_fails() {
        let estimator = RandomForestEstimator::default();
        assert!(estimator.predict(&REFERENCE_SAMPLE).is_err());
    }

    #[test]
    fn single_sample_forest_reproduces_reference_price() {
        let forecaster = PriceForecaster::train(RandomForestEstimator::new(7, 10)).unwrap();
        let catalog = Catalog::sample();

        for cow in catalog.list_cows() {
            let forecast = forecaster.forecast(cow).unwrap();
            assert!((forecast.base_price - 70_000.0).abs() < 1.0);
            assert!((forecast.final_price - 70_500).abs() <= 1);
        }
    }

    #[test]
    fn configured_forecaster_is_deterministic() {
        let config = AppConfig {
            forecast_seed: 1234,
            forecast_trees: 5,
            ..AppConfig::default()
        };
        let cow = Catalog::sample().cow_by_id(102).unwrap().clone();

        let first = trained_forecaster(&config).unwrap().forecast(&cow).unwrap();
        let second = trained_forecaster(&config).unwrap().forecast(&cow).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn mismatched_targets_are_reported() {
        let mut estimator = RandomForestEstimator::default();
        let err = estimator
            .fit(&[REFERENCE_SAMPLE, REFERENCE_SAMPLE], &[1.0])
            .unwrap_err();
        assert!(!err.0.is_empty());
    }
}
