//! Lead lifecycle engine: creation, update merging, document attachment.
//!
//! The merge step is deliberately lenient: numeric and consent inputs
//! coerce instead of rejecting (bad or missing amounts land at 0, consent
//! follows JS-style truthiness). Strict validation belongs to the input
//! boundary (`validate`); the engine only guarantees it never writes a
//! record that breaks a field-type invariant.

use crate::errors::AppError;
use crate::models::{Identity, LeadDocument, LeadDraft, LeadPatch, LeadRecord, LeadStatus, Role};
use crate::policy::can_mutate;
use crate::store::LeadStore;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

/// Coerces a lenient numeric input to a non-negative amount.
///
/// JSON numbers pass through, numeric strings parse, everything else
/// (including absent input) coerces to 0. Negative and non-finite values
/// clamp to 0 so the non-negative invariant always holds.
pub fn coerce_amount(value: Option<&Value>) -> f64 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    if number.is_finite() && number > 0.0 {
        number
    } else {
        0.0
    }
}

/// Coerces a lenient input to a boolean with JS truthiness: any non-empty
/// string (even "false") is true, zero and absent input are false.
pub fn coerce_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        _ => false,
    }
}

/// Creates a lead on behalf of the actor and prepends it to the store.
///
/// Always succeeds for a well-formed draft: fresh id, current timestamp,
/// status `New`, empty document list. `source` is "Admin" for the admin,
/// otherwise the partner's display name.
pub fn create_lead(store: &mut LeadStore, identity: &Identity, draft: LeadDraft) -> LeadRecord {
    let record = LeadRecord {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        created_by: identity.id.clone(),
        source: match identity.role {
            Role::Admin => "Admin".to_string(),
            Role::Partner => identity.display_name.clone(),
        },
        loan_type: draft.loan_type.unwrap_or(crate::models::LoanType::Personal),
        profile: draft
            .profile
            .unwrap_or(crate::models::ApplicantProfile::Salaried),
        monthly_income: coerce_amount(draft.monthly_income.as_ref()),
        loan_amount: coerce_amount(draft.loan_amount.as_ref()),
        first_name: draft.first_name.unwrap_or_default(),
        last_name: draft.last_name.unwrap_or_default(),
        mobile_number: draft.mobile_number.unwrap_or_default(),
        email_id: draft.email_id.unwrap_or_default(),
        gender: draft.gender.unwrap_or_default(),
        date_of_birth: draft.date_of_birth,
        pan_card: draft.pan_card.unwrap_or_default(),
        pincode: draft.pincode.unwrap_or_default(),
        consent: coerce_flag(draft.consent.as_ref()),
        status: LeadStatus::New,
        documents: Vec::new(),
    };

    store.insert(record.clone());
    tracing::info!(
        lead_id = %record.id,
        created_by = %record.created_by,
        source = %record.source,
        "lead created"
    );
    record
}

/// Merges a patch onto an existing lead and writes it back atomically.
///
/// Resolution failures surface as `NotFound`, authorization failures as
/// `Authorization`; in both cases the stored record is untouched. `id`,
/// `created_by`, `created_at`, and `documents` are always preserved.
/// Re-applying the same patch yields the same record.
pub fn apply_update(
    store: &mut LeadStore,
    identity: &Identity,
    lead_id: Uuid,
    patch: LeadPatch,
) -> Result<LeadRecord, AppError> {
    let existing = store
        .get(&lead_id)
        .ok_or_else(|| AppError::NotFound(format!("lead {} not found", lead_id)))?;

    if !can_mutate(identity, existing) {
        return Err(AppError::Authorization(format!(
            "actor {} may not edit lead {}",
            identity.id, lead_id
        )));
    }

    let mut updated = existing.clone();
    if let Some(loan_type) = patch.loan_type {
        updated.loan_type = loan_type;
    }
    if let Some(profile) = patch.profile {
        updated.profile = profile;
    }
    if let Some(first_name) = patch.first_name {
        updated.first_name = first_name;
    }
    if let Some(last_name) = patch.last_name {
        updated.last_name = last_name;
    }
    if let Some(mobile_number) = patch.mobile_number {
        updated.mobile_number = mobile_number;
    }
    if let Some(email_id) = patch.email_id {
        updated.email_id = email_id;
    }
    if let Some(gender) = patch.gender {
        updated.gender = gender;
    }
    if let Some(date_of_birth) = patch.date_of_birth {
        updated.date_of_birth = Some(date_of_birth);
    }
    if let Some(pan_card) = patch.pan_card {
        updated.pan_card = pan_card;
    }
    if let Some(pincode) = patch.pincode {
        updated.pincode = pincode;
    }
    if let Some(source) = patch.source {
        updated.source = source;
    }
    // The amounts and consent are always rewritten from the patch; a patch
    // that omits them coerces to 0 / false.
    updated.monthly_income = coerce_amount(patch.monthly_income.as_ref());
    updated.loan_amount = coerce_amount(patch.loan_amount.as_ref());
    updated.consent = coerce_flag(patch.consent.as_ref());
    // Requested status is set verbatim; no transition table constrains it.
    if let Some(status) = patch.status {
        updated.status = status;
    }

    store.replace(updated.clone())?;
    tracing::info!(
        lead_id = %lead_id,
        actor = %identity.id,
        status = ?updated.status,
        "lead updated"
    );
    Ok(updated)
}

/// Appends a document to a lead, preserving insertion order.
///
/// No ownership check is performed here: any actor who reached the lead's
/// detail view may attach.
pub fn attach_document(
    store: &mut LeadStore,
    lead_id: Uuid,
    document: LeadDocument,
) -> Result<LeadRecord, AppError> {
    let existing = store
        .get(&lead_id)
        .ok_or_else(|| AppError::NotFound(format!("lead {} not found", lead_id)))?;

    let mut updated = existing.clone();
    updated.documents.push(document.clone());
    store.replace(updated.clone())?;
    tracing::info!(
        lead_id = %lead_id,
        document = %document.name,
        count = updated.documents.len(),
        "document attached"
    );
    Ok(updated)
}
