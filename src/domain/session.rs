use super::entities::{FetchedRecord, InputMode};
use super::resolver::{parse_positive, resolve_inputs, RawInputs};
use super::revenue::{
    compute_per_developer, compute_revenue, PerDeveloperResult, RevenueBreakdown,
    PER_DEV_INPUT_MESSAGE, TOTAL_REQUIRED_MESSAGE,
};
use crate::error::CalcError;

pub const FETCH_IN_PROGRESS_MESSAGE: &str = "A fetch is already in progress.";

/// Per-window calculator state.
///
/// `total_revenue` is written only by [`Session::calculate_total_revenue`] and
/// read only by [`Session::calculate_per_developer`]. A failed command leaves
/// every field untouched, except that a failed per-developer calculation
/// clears the previous per-developer result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub mode: InputMode,
    total_revenue: f64,
    per_developer: Option<PerDeveloperResult>,
    fetched: Option<FetchedRecord>,
    fetch_in_flight: bool,
}

impl Session {
    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    pub fn has_total(&self) -> bool {
        self.total_revenue > 0.0
    }

    /// Last successful per-developer split, if the latest attempt succeeded.
    pub fn per_developer(&self) -> Option<PerDeveloperResult> {
        self.per_developer
    }

    pub fn fetched(&self) -> Option<&FetchedRecord> {
        self.fetched.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn calculate_total_revenue(
        &mut self,
        raw: &RawInputs,
    ) -> Result<RevenueBreakdown, CalcError> {
        let inputs = resolve_inputs(self.mode, raw, self.fetched.as_ref())?;
        let breakdown = compute_revenue(inputs);
        self.total_revenue = breakdown.final_revenue;
        tracing::info!(
            review_count = inputs.review_count,
            price = inputs.price,
            final_revenue = breakdown.final_revenue,
            "Calculated total revenue"
        );
        Ok(breakdown)
    }

    pub fn calculate_per_developer(
        &mut self,
        developer_count: &str,
        development_years: &str,
    ) -> Result<PerDeveloperResult, CalcError> {
        let outcome = self.split_per_developer(developer_count, development_years);
        self.per_developer = outcome.as_ref().ok().copied();
        outcome
    }

    fn split_per_developer(
        &self,
        developer_count: &str,
        development_years: &str,
    ) -> Result<PerDeveloperResult, CalcError> {
        if !self.has_total() {
            return Err(CalcError::state(TOTAL_REQUIRED_MESSAGE));
        }
        let (Some(developers), Some(years)) = (
            parse_positive(developer_count),
            parse_positive(development_years),
        ) else {
            return Err(CalcError::validation(PER_DEV_INPUT_MESSAGE));
        };
        compute_per_developer(self.total_revenue, developers, years)
    }

    /// Takes the acquisition lock. Fails while another acquisition runs.
    pub fn begin_fetch(&mut self) -> Result<(), CalcError> {
        if self.fetch_in_flight {
            return Err(CalcError::state(FETCH_IN_PROGRESS_MESSAGE));
        }
        self.fetch_in_flight = true;
        Ok(())
    }

    /// Releases the acquisition lock and stores the record on success.
    /// On failure the previous record stays in place.
    pub fn complete_fetch(
        &mut self,
        outcome: Result<FetchedRecord, CalcError>,
    ) -> Result<FetchedRecord, CalcError> {
        self.fetch_in_flight = false;
        let record = outcome?;
        self.fetched = Some(record.clone());
        Ok(record)
    }
}

/// Advisory text shown after a successful acquisition.
pub fn fetched_message(record: &FetchedRecord) -> String {
    if record.needs_review_override() {
        format!(
            "Fetched price for \"{}\". Please enter the review count manually from the Steam page.",
            record.name
        )
    } else {
        format!("Successfully fetched data for \"{}\"", record.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolver::{FETCH_FIRST_MESSAGE, REVIEW_OVERRIDE_MESSAGE};

    fn manual(review_count: &str, price: &str) -> RawInputs {
        RawInputs {
            review_count: review_count.to_string(),
            price: price.to_string(),
            review_override: String::new(),
        }
    }

    fn record(review_count: Option<u64>) -> FetchedRecord {
        FetchedRecord {
            app_id: "440".to_string(),
            name: "Team Fortress 2".to_string(),
            price: 9.99,
            review_count,
        }
    }

    #[test]
    fn starts_empty() {
        let session = Session::default();
        assert_eq!(session.mode, InputMode::Manual);
        assert_eq!(session.total_revenue(), 0.0);
        assert!(session.fetched().is_none());
        assert!(!session.is_fetching());
    }

    #[test]
    fn total_revenue_is_stored_after_calculation() {
        let mut session = Session::default();
        let breakdown = session
            .calculate_total_revenue(&manual("1000", "9.99"))
            .unwrap();
        assert_eq!(session.total_revenue(), breakdown.final_revenue);
        assert!((session.total_revenue() - 176_223.6).abs() < 1e-6);
    }

    #[test]
    fn failed_calculation_keeps_previous_total() {
        let mut session = Session::default();
        session
            .calculate_total_revenue(&manual("1000", "9.99"))
            .unwrap();
        let before = session.total_revenue();

        let err = session
            .calculate_total_revenue(&manual("-5", "9.99"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.total_revenue(), before);
    }

    #[test]
    fn per_developer_before_total_is_a_state_error() {
        let mut session = Session::default();
        let err = session.calculate_per_developer("2", "1.5").unwrap_err();
        assert!(err.is_state());
    }

    #[test]
    fn per_developer_checks_order_before_inputs() {
        let mut session = Session::default();
        let err = session.calculate_per_developer("", "abc").unwrap_err();
        assert!(err.is_state());
    }

    #[test]
    fn per_developer_after_total() {
        let mut session = Session::default();
        session
            .calculate_total_revenue(&manual("1000", "9.99"))
            .unwrap();

        let result = session.calculate_per_developer("2", "1.5").unwrap();
        assert!((result.revenue_per_developer - 88_111.8).abs() < 1e-6);
        assert!((result.yearly_per_developer - 58_741.2).abs() < 1e-6);

        assert!(session
            .calculate_per_developer("0", "1")
            .unwrap_err()
            .is_validation());
        assert!(session
            .calculate_per_developer("2", "")
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn failed_per_developer_clears_previous_split() {
        let mut session = Session::default();
        session
            .calculate_total_revenue(&manual("1000", "9.99"))
            .unwrap();

        let result = session.calculate_per_developer("2", "1.5").unwrap();
        assert_eq!(session.per_developer(), Some(result));

        let err = session.calculate_per_developer("0", "1.5").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.per_developer(), None);
        assert!((session.total_revenue() - 176_223.6).abs() < 1e-6);
    }

    #[test]
    fn per_developer_state_error_leaves_nothing_stored() {
        let mut session = Session::default();
        session.calculate_per_developer("2", "1").unwrap_err();
        assert_eq!(session.per_developer(), None);
    }

    #[test]
    fn fetched_mode_without_record() {
        let mut session = Session::default();
        session.set_mode(InputMode::Fetched);
        let err = session
            .calculate_total_revenue(&RawInputs::default())
            .unwrap_err();
        assert_eq!(err, CalcError::state(FETCH_FIRST_MESSAGE));
        assert_eq!(session.total_revenue(), 0.0);
    }

    #[test]
    fn fetched_mode_with_override() {
        let mut session = Session::default();
        session.begin_fetch().unwrap();
        session.complete_fetch(Ok(record(None))).unwrap();
        session.set_mode(InputMode::Fetched);

        let err = session
            .calculate_total_revenue(&RawInputs::default())
            .unwrap_err();
        assert_eq!(err, CalcError::validation(REVIEW_OVERRIDE_MESSAGE));

        let raw = RawInputs {
            review_override: "1000".to_string(),
            ..RawInputs::default()
        };
        let breakdown = session.calculate_total_revenue(&raw).unwrap();
        assert!((breakdown.final_revenue - 176_223.6).abs() < 1e-6);
    }

    #[test]
    fn only_one_fetch_at_a_time() {
        let mut session = Session::default();
        session.begin_fetch().unwrap();
        assert!(session.is_fetching());
        assert!(session.begin_fetch().unwrap_err().is_state());

        session
            .complete_fetch(Err(CalcError::fetch("boom")))
            .unwrap_err();
        assert!(!session.is_fetching());
        assert!(session.begin_fetch().is_ok());
    }

    #[test]
    fn failed_fetch_keeps_previous_record() {
        let mut session = Session::default();
        session.begin_fetch().unwrap();
        session.complete_fetch(Ok(record(Some(10)))).unwrap();

        session.begin_fetch().unwrap();
        session
            .complete_fetch(Err(CalcError::fetch("offline")))
            .unwrap_err();
        assert_eq!(session.fetched(), Some(&record(Some(10))));
    }

    #[test]
    fn newer_fetch_replaces_record() {
        let mut session = Session::default();
        session.complete_fetch(Ok(record(Some(10)))).unwrap();
        session.complete_fetch(Ok(record(None))).unwrap();
        assert_eq!(session.fetched().and_then(|r| r.review_count), None);
    }

    #[test]
    fn advisory_mentions_manual_reviews_when_missing() {
        assert_eq!(
            fetched_message(&record(Some(3))),
            "Successfully fetched data for \"Team Fortress 2\""
        );
        assert!(fetched_message(&record(None)).contains("enter the review count manually"));
    }
}
