use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::calendar::CalendarItem;
use super::{CalendarHost, HostError, MasterCategory, MasterCategoryRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOperation {
    SetSubject,
    SetLocation,
    AddCategories,
    AddAttendees,
    GetStart,
    GetEnd,
    SetEnd,
    SetAllDay,
    GetMasterCategories,
    AddMasterCategories,
}

impl HostOperation {
    fn name(&self) -> &'static str {
        match self {
            HostOperation::SetSubject => "subject",
            HostOperation::SetLocation => "location",
            HostOperation::AddCategories => "categories",
            HostOperation::AddAttendees => "attendees",
            HostOperation::GetStart | HostOperation::GetEnd | HostOperation::SetEnd => "time",
            HostOperation::SetAllDay => "all-day flag",
            HostOperation::GetMasterCategories | HostOperation::AddMasterCategories => {
                "master categories"
            }
        }
    }
}

/// Host item kept in memory, with switches to make individual operations
/// fail or report themselves as unsupported.
#[derive(Debug)]
pub struct InMemoryItem {
    pub item: CalendarItem,
    pub master_categories: Vec<MasterCategory>,
    failing: HashSet<HostOperation>,
    unsupported: HashSet<HostOperation>,
    calls: Mutex<Vec<HostOperation>>,
}

impl InMemoryItem {
    pub fn new(item: CalendarItem) -> Self {
        Self {
            item,
            master_categories: vec![],
            failing: HashSet::new(),
            unsupported: HashSet::new(),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn failing_on(mut self, operation: HostOperation) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn without(mut self, operation: HostOperation) -> Self {
        self.unsupported.insert(operation);
        self
    }

    pub fn with_master_categories(mut self, categories: Vec<MasterCategory>) -> Self {
        self.master_categories = categories;
        self
    }

    /// Operations attempted so far, in call order.
    pub fn calls(&self) -> Vec<HostOperation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn attempt(&self, operation: HostOperation) -> Result<(), HostError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(operation);
        }

        if self.unsupported.contains(&operation) {
            return Err(HostError::Unsupported(operation.name()));
        }

        if self.failing.contains(&operation) {
            return Err(HostError::Failed(format!("The {} could not be updated.", operation.name())));
        }

        Ok(())
    }
}

#[async_trait]
impl CalendarHost for InMemoryItem {
    async fn set_subject(&mut self, subject: &str) -> Result<(), HostError> {
        self.attempt(HostOperation::SetSubject)?;
        self.item.subject = subject.to_string();
        Ok(())
    }

    async fn set_location(&mut self, location: &str) -> Result<(), HostError> {
        self.attempt(HostOperation::SetLocation)?;
        self.item.location = location.to_string();
        Ok(())
    }

    async fn add_categories(&mut self, names: &[String]) -> Result<(), HostError> {
        self.attempt(HostOperation::AddCategories)?;
        for name in names {
            if !self.item.categories.contains(name) {
                self.item.categories.push(name.clone());
            }
        }
        Ok(())
    }

    async fn add_attendees(&mut self, emails: &[String]) -> Result<(), HostError> {
        self.attempt(HostOperation::AddAttendees)?;
        for email in emails {
            if !self.item.attendees.contains(email) {
                self.item.attendees.push(email.clone());
            }
        }
        Ok(())
    }

    async fn start(&self) -> Result<DateTime<Utc>, HostError> {
        self.attempt(HostOperation::GetStart)?;
        Ok(self.item.start)
    }

    async fn end(&self) -> Result<DateTime<Utc>, HostError> {
        self.attempt(HostOperation::GetEnd)?;
        Ok(self.item.end)
    }

    async fn set_end(&mut self, end: DateTime<Utc>) -> Result<(), HostError> {
        self.attempt(HostOperation::SetEnd)?;
        self.item.end = end;
        Ok(())
    }

    async fn set_all_day(&mut self, all_day: bool) -> Result<(), HostError> {
        self.attempt(HostOperation::SetAllDay)?;
        self.item.all_day = all_day;
        Ok(())
    }
}

#[async_trait]
impl MasterCategoryRegistry for InMemoryItem {
    async fn master_categories(&self) -> Result<Vec<MasterCategory>, HostError> {
        self.attempt(HostOperation::GetMasterCategories)?;
        Ok(self.master_categories.clone())
    }

    async fn add_master_categories(&mut self, categories: &[MasterCategory]) -> Result<(), HostError> {
        self.attempt(HostOperation::AddMasterCategories)?;
        self.master_categories.extend_from_slice(categories);
        Ok(())
    }
}
