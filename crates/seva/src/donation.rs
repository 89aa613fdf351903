//! Core donation types for seva.
//!
//! A [`DonationRecord`] is a single material need posted by an NGO. Records are
//! built from a [`DonationDraft`] (the NGO's form input) plus the posting
//! [`NgoIdentity`], and the serialized shape matches the durable blob format.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Kind of material being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Non-perishable food and groceries.
    #[serde(rename = "Food & Groceries")]
    FoodAndGroceries,
    /// Garments, blankets and other textiles.
    #[serde(rename = "Clothing & Textiles")]
    ClothingAndTextiles,
    /// Books and school supplies.
    #[serde(rename = "Books & Education")]
    BooksAndEducation,
    /// Medicines and medical equipment.
    #[serde(rename = "Medical Supplies")]
    MedicalSupplies,
    /// Toys and games.
    #[serde(rename = "Toys & Games")]
    ToysAndGames,
    /// Electronics.
    #[serde(rename = "Electronics")]
    Electronics,
    /// Furniture.
    #[serde(rename = "Furniture")]
    Furniture,
    /// Anything else.
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every category, in the order the posting form lists them.
    pub const ALL: [Category; 8] = [
        Self::FoodAndGroceries,
        Self::ClothingAndTextiles,
        Self::BooksAndEducation,
        Self::MedicalSupplies,
        Self::ToysAndGames,
        Self::Electronics,
        Self::Furniture,
        Self::Other,
    ];

    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FoodAndGroceries => "Food & Groceries",
            Self::ClothingAndTextiles => "Clothing & Textiles",
            Self::BooksAndEducation => "Books & Education",
            Self::MedicalSupplies => "Medical Supplies",
            Self::ToysAndGames => "Toys & Games",
            Self::Electronics => "Electronics",
            Self::Furniture => "Furniture",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Display priority of a request. Has no scheduling effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Low priority.
    Low,
    /// Medium priority (form default).
    #[default]
    Medium,
    /// High priority.
    High,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Lifecycle of a request.
///
/// `Active` may move to `Completed` or `Cancelled`; both of those are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Visible to donors.
    #[default]
    Active,
    /// Fulfilled.
    Completed,
    /// Withdrawn by the NGO.
    Cancelled,
}

impl Status {
    /// Whether no further transitions are allowed.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }

    /// Whether moving from `self` to `next` is allowed.
    ///
    /// Staying in the same status is always allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Status) -> bool {
        self == next || !self.is_terminal()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Identity of the NGO posting a request, as handed over by the sign-in flow.
///
/// Copied into records verbatim; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgoIdentity {
    /// NGO account id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Phone number, stored on records as `ngo_contact`.
    pub phone: String,
    /// Email address, if known.
    pub email: Option<String>,
}

/// The editable fields of a request, as entered on the NGO posting form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationDraft {
    /// Short headline of the need.
    pub title: String,
    /// Longer explanation.
    pub description: String,
    /// Kind of material.
    pub category: Category,
    /// Free-form amount.
    pub quantity: String,
    /// Display priority.
    pub urgency: Urgency,
    /// Where the donation should go.
    pub location: String,
    /// Requester phone or email.
    pub contact_info: String,
}

/// A posted material need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    /// Caller-assigned id, unique within a store.
    pub id: i64,
    /// Short headline of the need.
    pub title: String,
    /// Longer explanation.
    pub description: String,
    /// Kind of material.
    pub category: Category,
    /// Free-form amount, e.g. "50 pieces".
    pub quantity: String,
    /// Display priority.
    pub urgency: Urgency,
    /// Where the donation should go.
    pub location: String,
    /// Requester phone or email.
    pub contact_info: String,
    /// Id of the posting NGO.
    pub ngo_id: i64,
    /// Name of the posting NGO at the time of the last write.
    pub ngo_name: String,
    /// Phone of the posting NGO at the time of the last write.
    pub ngo_contact: String,
    /// RFC 3339 timestamp, fixed at creation.
    pub posted_at: String,
    /// Lifecycle state.
    #[serde(default)]
    pub status: Status,
}

/// Generate a record id from the given instant (milliseconds since the epoch).
#[must_use]
pub fn generate_id(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis()
}

/// Format an instant the way `posted_at` is stored.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl DonationRecord {
    /// Create a new active record from form input.
    #[must_use]
    pub fn from_draft(
        draft: DonationDraft,
        ngo: &NgoIdentity,
        id: i64,
        posted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            quantity: draft.quantity,
            urgency: draft.urgency,
            location: draft.location,
            contact_info: draft.contact_info,
            ngo_id: ngo.id,
            ngo_name: ngo.name.clone(),
            ngo_contact: ngo.phone.clone(),
            posted_at: format_timestamp(posted_at),
            status: Status::Active,
        }
    }

    /// Build the replacement for an edited record.
    ///
    /// `id`, `posted_at` and `status` carry over; every other field comes from
    /// the draft and the (possibly refreshed) NGO identity.
    #[must_use]
    pub fn revise(&self, draft: DonationDraft, ngo: &NgoIdentity) -> Self {
        Self {
            id: self.id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            quantity: draft.quantity,
            urgency: draft.urgency,
            location: draft.location,
            contact_info: draft.contact_info,
            ngo_id: ngo.id,
            ngo_name: ngo.name.clone(),
            ngo_contact: ngo.phone.clone(),
            posted_at: self.posted_at.clone(),
            status: self.status,
        }
    }

    /// The form fields of this record, for pre-filling an edit.
    #[must_use]
    pub fn to_draft(&self) -> DonationDraft {
        DonationDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            quantity: self.quantity.clone(),
            urgency: self.urgency,
            location: self.location.clone(),
            contact_info: self.contact_info.clone(),
        }
    }

    /// The posting NGO as recorded on this request. Email is not stored.
    #[must_use]
    pub fn ngo_identity(&self) -> NgoIdentity {
        NgoIdentity {
            id: self.ngo_id,
            name: self.ngo_name.clone(),
            phone: self.ngo_contact.clone(),
            email: None,
        }
    }

    /// Parse `posted_at`, if it is a valid RFC 3339 timestamp.
    #[must_use]
    pub fn posted_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.posted_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether donors can see and respond to this request.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}
