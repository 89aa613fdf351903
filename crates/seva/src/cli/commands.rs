//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::donation::{Category, DonationDraft, Status, Urgency};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Text to look for in title, description or NGO name
    #[arg(default_value = "")]
    pub search: String,

    /// Filter by category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Filter by urgency
    #[arg(short, long, value_enum)]
    pub urgency: Option<UrgencyArg>,

    /// Include completed and cancelled requests
    #[arg(short, long)]
    pub all: bool,

    /// Only show requests posted by this NGO (implies --all)
    #[arg(long, value_name = "NGO_ID")]
    pub ngo: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Request id
    pub id: i64,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// The posting NGO, given on the command line.
#[derive(Debug, Args)]
pub struct NgoArgs {
    /// NGO account id
    #[arg(long = "ngo-id")]
    pub id: i64,

    /// NGO display name
    #[arg(long = "ngo-name")]
    pub name: String,

    /// NGO phone number
    #[arg(long = "ngo-phone")]
    pub phone: String,

    /// NGO email address
    #[arg(long = "ngo-email")]
    pub email: Option<String>,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Short headline of the need
    #[arg(short, long)]
    pub title: String,

    /// Longer explanation
    #[arg(short, long)]
    pub description: String,

    /// Kind of material
    #[arg(long, value_enum)]
    pub category: CategoryArg,

    /// Amount needed, e.g. "50 pieces"
    #[arg(long)]
    pub quantity: String,

    /// Display priority
    #[arg(short, long, value_enum, default_value = "medium")]
    pub urgency: UrgencyArg,

    /// Where the donation should go
    #[arg(short, long)]
    pub location: String,

    /// Requester phone or email
    #[arg(long = "contact")]
    pub contact_info: String,

    /// Posting NGO
    #[command(flatten)]
    pub ngo: NgoArgs,
}

impl AddCommand {
    /// The form fields given on the command line.
    #[must_use]
    pub fn draft(&self) -> DonationDraft {
        DonationDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.into(),
            quantity: self.quantity.clone(),
            urgency: self.urgency.into(),
            location: self.location.clone(),
            contact_info: self.contact_info.clone(),
        }
    }
}

/// Edit command arguments. Omitted fields keep their current value.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Request id
    pub id: i64,

    /// New headline
    #[arg(short, long)]
    pub title: Option<String>,

    /// New explanation
    #[arg(short, long)]
    pub description: Option<String>,

    /// New category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,

    /// New amount
    #[arg(long)]
    pub quantity: Option<String>,

    /// New priority
    #[arg(short, long, value_enum)]
    pub urgency: Option<UrgencyArg>,

    /// New location
    #[arg(short, long)]
    pub location: Option<String>,

    /// New requester contact
    #[arg(long = "contact")]
    pub contact_info: Option<String>,

    /// Refreshed NGO name
    #[arg(long = "ngo-name")]
    pub ngo_name: Option<String>,

    /// Refreshed NGO phone
    #[arg(long = "ngo-phone")]
    pub ngo_phone: Option<String>,
}

impl EditCommand {
    /// Overlay the given fields on an existing draft.
    #[must_use]
    pub fn apply_to(&self, mut draft: DonationDraft) -> DonationDraft {
        if let Some(title) = &self.title {
            draft.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            draft.description.clone_from(description);
        }
        if let Some(category) = self.category {
            draft.category = category.into();
        }
        if let Some(quantity) = &self.quantity {
            draft.quantity.clone_from(quantity);
        }
        if let Some(urgency) = self.urgency {
            draft.urgency = urgency.into();
        }
        if let Some(location) = &self.location {
            draft.location.clone_from(location);
        }
        if let Some(contact_info) = &self.contact_info {
            draft.contact_info.clone_from(contact_info);
        }
        draft
    }
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Request id
    pub id: i64,

    /// New status
    #[arg(value_enum)]
    pub status: StatusArg,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Request id
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Show the dashboard counts for this NGO instead of the donor summary
    #[arg(long, value_name = "NGO_ID")]
    pub ngo: Option<i64>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Category argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Food & Groceries
    Food,
    /// Clothing & Textiles
    Clothing,
    /// Books & Education
    Books,
    /// Medical Supplies
    Medical,
    /// Toys & Games
    Toys,
    /// Electronics
    Electronics,
    /// Furniture
    Furniture,
    /// Other
    Other,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Food => Self::FoodAndGroceries,
            CategoryArg::Clothing => Self::ClothingAndTextiles,
            CategoryArg::Books => Self::BooksAndEducation,
            CategoryArg::Medical => Self::MedicalSupplies,
            CategoryArg::Toys => Self::ToysAndGames,
            CategoryArg::Electronics => Self::Electronics,
            CategoryArg::Furniture => Self::Furniture,
            CategoryArg::Other => Self::Other,
        }
    }
}

/// Urgency argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UrgencyArg {
    /// Low priority
    Low,
    /// Medium priority
    Medium,
    /// High priority
    High,
}

impl From<UrgencyArg> for Urgency {
    fn from(arg: UrgencyArg) -> Self {
        match arg {
            UrgencyArg::Low => Self::Low,
            UrgencyArg::Medium => Self::Medium,
            UrgencyArg::High => Self::High,
        }
    }
}

/// Status argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Visible to donors
    Active,
    /// Fulfilled
    Completed,
    /// Withdrawn
    Cancelled,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => Self::Active,
            StatusArg::Completed => Self::Completed,
            StatusArg::Cancelled => Self::Cancelled,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}
