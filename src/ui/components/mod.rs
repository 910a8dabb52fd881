pub mod fetched_preview;
pub mod kpi_card;
pub mod number_field;
pub mod toast;
