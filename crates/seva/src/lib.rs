//! `seva` - Donation requests for NGO and donor matchmaking
//!
//! This library keeps the ordered collection of donation requests that NGOs
//! post and donors browse, mirrored to durable storage after every change.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod donation;
pub mod error;
pub mod logging;
pub mod query;
pub mod seed;
pub mod stats;
pub mod storage;
pub mod store;

pub use config::Config;
pub use donation::{Category, DonationDraft, DonationRecord, NgoIdentity, Status, Urgency};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use query::DonationQuery;
pub use seed::sample_donations;
pub use stats::{DonorStats, NgoStats};
pub use storage::{BlobStore, MemoryBlobStore, SqliteBlobStore};
pub use store::{DonationStore, InitOutcome};
