//! Calculator core: input resolution, the revenue pipelines and session state.

pub mod entities;
pub mod resolver;
pub mod revenue;
pub mod session;

pub use entities::{AppId, FetchedRecord, InputMode};
pub use resolver::{field_state, FieldState, RawInputs};
pub use revenue::RevenueBreakdown;
pub use session::{fetched_message, Session};
