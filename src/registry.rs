//! Partner-defined lead-capture form registry.
//!
//! Forms select a subset of the applicant-attribute fields; the closed
//! `LeadField` enumeration is the whole universe a form may draw from, so a
//! selection is valid exactly when it is non-empty. The registry generates
//! the shareable link but performs no routing.

use crate::errors::AppError;
use crate::models::{Identity, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The lead fields a capture form may include. Mirrors the applicant
/// attributes of `LeadRecord` plus `source`; the process fields (id,
/// timestamps, status, documents) are never form-selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeadField {
    LoanType,
    Profile,
    MonthlyIncome,
    LoanAmount,
    FirstName,
    LastName,
    MobileNumber,
    EmailId,
    Gender,
    DateOfBirth,
    PanCard,
    Pincode,
    Consent,
    Source,
}

/// A partner's saved lead-capture form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    pub id: Uuid,
    pub partner_id: String,
    pub name: String,
    pub fields: Vec<LeadField>,
    pub shareable_link: String,
}

#[derive(Debug, Default)]
pub struct FormRegistry {
    forms: Vec<FormDefinition>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a capture form for the acting partner.
    ///
    /// Admin actors are rejected (form building is a partner feature), and
    /// the selection must name the form and at least one field. Duplicate
    /// fields collapse, keeping first occurrence order.
    pub fn create_form(
        &mut self,
        identity: &Identity,
        name: &str,
        fields: &[LeadField],
    ) -> Result<FormDefinition, AppError> {
        if identity.role != Role::Partner {
            return Err(AppError::Authorization(
                "only partners can create capture forms".to_string(),
            ));
        }
        if name.trim().is_empty() {
            return Err(AppError::Validation("form name is required".to_string()));
        }
        if fields.is_empty() {
            return Err(AppError::Validation(
                "at least one form field is required".to_string(),
            ));
        }

        let mut selected: Vec<LeadField> = Vec::with_capacity(fields.len());
        for field in fields {
            if !selected.contains(field) {
                selected.push(*field);
            }
        }

        let id = Uuid::new_v4();
        let form = FormDefinition {
            id,
            partner_id: identity.id.clone(),
            name: name.trim().to_string(),
            fields: selected,
            shareable_link: format!("/capture-lead?formId=form-{}", id.simple()),
        };
        self.forms.push(form.clone());
        tracing::info!(
            form_id = %form.id,
            partner = %form.partner_id,
            fields = form.fields.len(),
            "capture form created"
        );
        Ok(form)
    }

    /// The forms a partner has created, in creation order.
    pub fn forms_for(&self, partner_id: &str) -> Vec<&FormDefinition> {
        self.forms
            .iter()
            .filter(|form| form.partner_id == partner_id)
            .collect()
    }
}
