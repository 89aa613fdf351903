//! Filtered views over the donation collection.
//!
//! A [`DonationQuery`] never changes the collection it reads; it returns a
//! fresh ordered subsequence. Donor-facing views only show active requests,
//! the NGO dashboard shows everything one NGO has posted.

use tracing::trace;

use crate::donation::{Category, DonationRecord, Urgency};

/// Criteria for selecting donation records.
///
/// All set criteria must hold. An empty search string and `None` constraints
/// match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationQuery {
    /// Case-insensitive text matched against title, description and NGO name.
    pub search: String,
    /// Exact category, if constrained.
    pub category: Option<Category>,
    /// Exact urgency, if constrained.
    pub urgency: Option<Urgency>,
    /// Only return records whose status is active.
    pub active_only: bool,
    /// Only return records posted by this NGO.
    pub ngo_id: Option<i64>,
}

impl DonationQuery {
    /// Query for the donor listing: active records matching `search`.
    #[must_use]
    pub fn donor_view(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            active_only: true,
            ..Self::default()
        }
    }

    /// Query for an NGO dashboard: every record the NGO posted, any status.
    #[must_use]
    pub fn ngo_view(ngo_id: i64) -> Self {
        Self {
            ngo_id: Some(ngo_id),
            ..Self::default()
        }
    }

    /// Constrain to a category.
    #[must_use]
    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    /// Constrain to an urgency.
    #[must_use]
    pub fn with_urgency(mut self, urgency: Option<Urgency>) -> Self {
        self.urgency = urgency;
        self
    }

    /// Whether a single record satisfies every criterion.
    #[must_use]
    pub fn matches(&self, record: &DonationRecord) -> bool {
        if self.active_only && !record.is_active() {
            return false;
        }
        if self.ngo_id.is_some_and(|id| id != record.ngo_id) {
            return false;
        }
        if self.category.is_some_and(|c| c != record.category) {
            return false;
        }
        if self.urgency.is_some_and(|u| u != record.urgency) {
            return false;
        }
        self.matches_search(record)
    }

    fn matches_search(&self, record: &DonationRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&record.title, &record.description, &record.ngo_name]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Select the matching records, preserving their order.
    #[must_use]
    pub fn apply(&self, records: &[DonationRecord]) -> Vec<DonationRecord> {
        let selected: Vec<DonationRecord> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();
        trace!(
            total = records.len(),
            selected = selected.len(),
            "Applied donation query"
        );
        selected
    }
}
