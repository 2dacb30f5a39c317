pub mod cow_table;
pub mod farm_table;
pub mod kpi_card;
pub mod status_banner;
pub mod toast;
