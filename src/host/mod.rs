pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use memory::{HostOperation, InMemoryItem};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("{0}")]
    Failed(String),
    #[error("{0} is not supported on this client")]
    Unsupported(&'static str),
}

/// The open appointment as exposed by the mail client.
///
/// Every call is awaited before the next one is issued; implementations never
/// see two writes in flight for the same item.
#[async_trait]
pub trait CalendarHost: Send + Sync {
    async fn set_subject(&mut self, subject: &str) -> Result<(), HostError>;

    async fn set_location(&mut self, location: &str) -> Result<(), HostError>;

    async fn add_categories(&mut self, names: &[String]) -> Result<(), HostError>;

    async fn add_attendees(&mut self, emails: &[String]) -> Result<(), HostError>;

    async fn start(&self) -> Result<DateTime<Utc>, HostError>;

    async fn end(&self) -> Result<DateTime<Utc>, HostError>;

    async fn set_end(&mut self, end: DateTime<Utc>) -> Result<(), HostError>;

    async fn set_all_day(&mut self, all_day: bool) -> Result<(), HostError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterCategory {
    pub display_name: String,
    pub color: String,
}

/// Mailbox-wide list of named, colored categories.
#[async_trait]
pub trait MasterCategoryRegistry: Send + Sync {
    async fn master_categories(&self) -> Result<Vec<MasterCategory>, HostError>;

    async fn add_master_categories(&mut self, categories: &[MasterCategory]) -> Result<(), HostError>;
}
