//! Network access to the storefront.

pub mod relay;
pub mod steam;
