//! Core of the cow marketplace demo: static catalogs, the price forecaster
//! and the read-only network checks. The dioxus front-end lives in the
//! binary target behind the `ui` feature.

pub mod domain;
pub mod infra;
pub mod util;
