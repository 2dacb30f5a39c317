pub mod farms;
pub mod forecast;
pub mod marketplace;
pub mod network;

pub use farms::FarmsPage;
pub use forecast::ForecastPage;
pub use marketplace::MarketplacePage;
pub use network::NetworkPage;
