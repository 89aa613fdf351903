//! Dashboard summary counts.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::donation::{DonationRecord, Urgency};

/// Summary shown on an NGO's dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NgoStats {
    /// Requests the NGO has posted, any status.
    pub total: usize,
    /// Requests still active.
    pub active: usize,
    /// Requests posted in the same calendar month as `now` (UTC).
    pub this_month: usize,
}

impl NgoStats {
    /// Count the requests posted by `ngo_id`.
    ///
    /// Records whose `posted_at` does not parse are left out of `this_month`.
    #[must_use]
    pub fn compute(records: &[DonationRecord], ngo_id: i64, now: DateTime<Utc>) -> Self {
        records
            .iter()
            .filter(|record| record.ngo_id == ngo_id)
            .fold(Self::default(), |mut stats, record| {
                stats.total += 1;
                if record.is_active() {
                    stats.active += 1;
                }
                if record
                    .posted_at_utc()
                    .is_some_and(|at| at.year() == now.year() && at.month() == now.month())
                {
                    stats.this_month += 1;
                }
                stats
            })
    }
}

/// Summary shown above the donor listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DonorStats {
    /// Requests currently shown.
    pub available: usize,
    /// Shown requests marked high urgency.
    pub high_urgency: usize,
}

impl DonorStats {
    /// Count over the already-filtered donor listing.
    #[must_use]
    pub fn compute(visible: &[DonationRecord]) -> Self {
        Self {
            available: visible.len(),
            high_urgency: visible
                .iter()
                .filter(|record| record.urgency == Urgency::High)
                .count(),
        }
    }
}
