//! Authoritative in-memory lead collection.
//!
//! The store owns every `LeadRecord` exclusively: readers get shared
//! references (or clones), and writes happen only through the lifecycle
//! functions, each of which performs one logical read-modify-write. New
//! leads are prepended, so iteration order is newest-first.

use crate::errors::AppError;
use crate::models::LeadRecord;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct LeadStore {
    leads: Vec<LeadRecord>,
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from pre-existing records, preserving the given
    /// order (index 0 is treated as newest).
    pub fn from_records(leads: Vec<LeadRecord>) -> Self {
        Self { leads }
    }

    /// Prepends a freshly created lead.
    pub fn insert(&mut self, lead: LeadRecord) {
        self.leads.insert(0, lead);
    }

    pub fn get(&self, id: &Uuid) -> Option<&LeadRecord> {
        self.leads.iter().find(|lead| lead.id == *id)
    }

    /// Replaces the stored record with the same id in place, keeping its
    /// position in the ordering.
    pub fn replace(&mut self, lead: LeadRecord) -> Result<(), AppError> {
        match self.leads.iter_mut().find(|existing| existing.id == lead.id) {
            Some(slot) => {
                *slot = lead;
                Ok(())
            }
            None => Err(AppError::NotFound(format!("lead {} not found", lead.id))),
        }
    }

    /// All leads, newest first.
    pub fn all(&self) -> &[LeadRecord] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}
