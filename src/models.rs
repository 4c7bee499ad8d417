use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ============ Identity Models ============

/// Role of an authenticated actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full access: sees and mutates every lead.
    Admin,
    /// Scoped access: sees and mutates only self-created leads.
    Partner,
}

/// An authenticated principal. Resolved once per request by the shell and
/// treated as immutable by every policy function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Actor identifier (e.g. "admin001" or a partner id).
    pub id: String,
    /// Display name, used as the lead `source` label for partners.
    pub display_name: String,
    /// Actor role.
    pub role: Role,
}

// ============ Lead Domain Models ============

/// Lifecycle status of a lead. `New` is the sole initial state; any status
/// may follow any other (no transition table is enforced).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Processing,
    #[serde(rename = "Docs Pending")]
    DocsPending,
    Approved,
    Rejected,
}

/// Requested loan product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoanType {
    Personal,
    Home,
    Car,
    Business,
}

/// Applicant gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

/// Applicant employment profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicantProfile {
    Salaried,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    #[serde(rename = "Business Owner")]
    BusinessOwner,
}

/// A document attached to a lead. The locator is opaque to the core; the
/// upload shell owns locator generation and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadDocument {
    pub name: String,
    pub locator: String,
}

/// A loan-application lead. Owned exclusively by the `LeadStore`; all
/// mutation goes through the lifecycle functions.
///
/// `id`, `created_by`, and `created_at` are immutable after creation, and
/// `documents` is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    /// Unique identifier, generated at creation and never reused.
    pub id: Uuid,
    /// Creation timestamp, set once.
    pub created_at: DateTime<Utc>,
    /// Identifier of the creating actor.
    pub created_by: String,
    /// Display label: "Admin" or the partner's display name.
    pub source: String,
    pub loan_type: LoanType,
    pub profile: ApplicantProfile,
    /// Non-negative; lenient inputs coerce (never reject) in the merge step.
    pub monthly_income: f64,
    /// Non-negative; same coercion rules as `monthly_income`.
    pub loan_amount: f64,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub email_id: String,
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
    /// Identity document: 5 letters + 4 digits + 1 letter.
    pub pan_card: String,
    /// 6-digit postal code.
    pub pincode: String,
    pub consent: bool,
    pub status: LeadStatus,
    pub documents: Vec<LeadDocument>,
}

// ============ API Request Models ============

/// New-lead input. Enumerated fields are strictly typed at the wire
/// boundary; numeric amounts and consent arrive as raw JSON to allow the
/// lenient coercion the update path also applies (`"50000"` is a valid
/// income).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadDraft {
    pub loan_type: Option<LoanType>,
    pub profile: Option<ApplicantProfile>,
    pub monthly_income: Option<Value>,
    pub loan_amount: Option<Value>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    pub email_id: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub pan_card: Option<String>,
    pub pincode: Option<String>,
    pub consent: Option<Value>,
}

/// Partial lead update. Absent fields are left untouched, except the
/// amounts and consent, which are always rewritten through coercion
/// (absent coerces to 0 / false), and `status`, which when present is set
/// verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadPatch {
    pub loan_type: Option<LoanType>,
    pub profile: Option<ApplicantProfile>,
    pub monthly_income: Option<Value>,
    pub loan_amount: Option<Value>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    pub email_id: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub pan_card: Option<String>,
    pub pincode: Option<String>,
    pub consent: Option<Value>,
    pub source: Option<String>,
    pub status: Option<LeadStatus>,
}

/// Login request payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Partner self-registration payload. Admin "add partner" reuses the same
/// shape.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}
