/// Numeric storefront identifier taken from an `/app/<digits>` URL segment.
pub type AppId = String;

/// Which set of fields feeds the next total-revenue calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Manual,
    Fetched,
}

impl InputMode {
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Manual => "Manual Input",
            InputMode::Fetched => "Steam URL",
        }
    }
}

/// Result of one successful acquisition. Replaced wholesale by the next one.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchedRecord {
    pub app_id: AppId,
    pub name: String,
    /// USD, derived from the minor-unit price or the free/default fallback.
    pub price: f64,
    /// `None` when the review statistics carried no usable total; a manual
    /// override must then be supplied before calculating.
    pub review_count: Option<u64>,
}

impl FetchedRecord {
    pub fn needs_review_override(&self) -> bool {
        self.review_count.is_none()
    }
}
