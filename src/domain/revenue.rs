//! Revenue estimation from review count and price.
//!
//! The multipliers are fixed heuristics and must stay as they are so results
//! match the figures people already quote from this calculator. No rounding
//! happens here; see `util::format` for display rounding.

use super::resolver::ResolvedInputs;
use crate::error::CalcError;

/// Buyers assumed per written review.
pub const USERS_PER_REVIEW: f64 = 40.0;
/// Share kept after the storefront's 30% cut.
pub const PLATFORM_CUT_KEEP: f64 = 0.7;
/// Share kept after regional pricing and discounts.
pub const MARKET_ADJUSTMENT_KEEP: f64 = 0.7;
/// Share kept after the generic uncertainty buffer.
pub const GENERIC_MODIFIER_KEEP: f64 = 0.9;

pub const PER_DEV_INPUT_MESSAGE: &str = "Please enter valid positive numbers for both fields.";
pub const TOTAL_REQUIRED_MESSAGE: &str = "Please calculate total revenue first.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueBreakdown {
    pub estimated_users: f64,
    pub gross_revenue: f64,
    pub after_platform_cut: f64,
    pub after_market_adjustment: f64,
    pub final_revenue: f64,
}

pub fn compute_revenue(inputs: ResolvedInputs) -> RevenueBreakdown {
    let estimated_users = inputs.review_count * USERS_PER_REVIEW;
    let gross_revenue = estimated_users * inputs.price;
    let after_platform_cut = gross_revenue * PLATFORM_CUT_KEEP;
    let after_market_adjustment = after_platform_cut * MARKET_ADJUSTMENT_KEEP;
    let final_revenue = after_market_adjustment * GENERIC_MODIFIER_KEEP;

    RevenueBreakdown {
        estimated_users,
        gross_revenue,
        after_platform_cut,
        after_market_adjustment,
        final_revenue,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerDeveloperResult {
    pub revenue_per_developer: f64,
    pub yearly_per_developer: f64,
}

/// Splits a calculated total across the team and the development period.
///
/// `total_revenue` must be positive (a total has been calculated); both
/// denominators must be positive. A non-finite result is reported as a
/// validation failure rather than returned.
pub fn compute_per_developer(
    total_revenue: f64,
    developer_count: f64,
    development_years: f64,
) -> Result<PerDeveloperResult, CalcError> {
    if !(total_revenue > 0.0) {
        return Err(CalcError::state(TOTAL_REQUIRED_MESSAGE));
    }
    if !(developer_count > 0.0 && development_years > 0.0) {
        return Err(CalcError::validation(PER_DEV_INPUT_MESSAGE));
    }

    let revenue_per_developer = total_revenue / developer_count;
    let yearly_per_developer = revenue_per_developer / development_years;

    if !revenue_per_developer.is_finite() || !yearly_per_developer.is_finite() {
        return Err(CalcError::validation(PER_DEV_INPUT_MESSAGE));
    }

    Ok(PerDeveloperResult {
        revenue_per_developer,
        yearly_per_developer,
    })
}
