use crate::aggregate::{self, DashboardSnapshot, ReportSnapshot};
use crate::config::Config;
use crate::directory::{PartnerAccount, PartnerDirectory};
use crate::errors::AppError;
use crate::lifecycle;
use crate::models::{
    Identity, LeadDocument, LeadDraft, LeadPatch, LeadRecord, LoginRequest, RegisterRequest, Role,
};
use crate::policy;
use crate::registry::{FormDefinition, FormRegistry, LeadField};
use crate::store::LeadStore;
use crate::validate;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Shared application state injected into handlers.
///
/// Each stateful collaborator sits behind its own `RwLock`; every mutation
/// holds the write lock for a single read-modify-write, so no two
/// mutations interleave mid-update. No lock is held across an await.
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Authoritative lead collection.
    pub store: RwLock<LeadStore>,
    /// Identity resolution collaborator (partner accounts + mock credentials).
    pub directory: RwLock<PartnerDirectory>,
    /// Partner lead-capture form registry.
    pub forms: RwLock<FormRegistry>,
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, AppError> {
    lock.read()
        .map_err(|_| AppError::Internal("state lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, AppError> {
    lock.write()
        .map_err(|_| AppError::Internal("state lock poisoned".to_string()))
}

/// Resolves the acting identity from the `x-actor-id` request header.
///
/// The core treats the result as opaque and already authenticated; this is
/// the only place the shell consults the directory per request.
fn resolve_actor(state: &AppState, headers: &HeaderMap) -> Result<Identity, AppError> {
    let actor_id = headers
        .get("x-actor-id")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Authorization("missing x-actor-id header".to_string()))?;
    read(&state.directory)?
        .identity_for(actor_id)
        .ok_or_else(|| AppError::Authorization(format!("unknown actor '{}'", actor_id)))
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "lead-crm-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/v1/auth/login
///
/// Validates credentials against the directory and returns the resolved
/// identity. Subsequent requests carry `identity.id` in `x-actor-id`.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Identity>, AppError> {
    let identity = read(&state.directory)?.authenticate(&request.username, &request.password)?;
    tracing::info!(actor = %identity.id, role = ?identity.role, "login successful");
    Ok(Json(identity))
}

/// POST /api/v1/auth/register
///
/// Partner self-registration. Duplicate usernames (including the admin's)
/// are rejected.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PartnerAccount>), AppError> {
    let account = write(&state.directory)?.add_partner(
        &request.name,
        &request.username,
        &request.password,
    )?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /api/v1/leads
///
/// The actor's visible leads, newest first.
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<LeadRecord>>, AppError> {
    let identity = resolve_actor(&state, &headers)?;
    let store = read(&state.store)?;
    let visible: Vec<LeadRecord> = policy::visible_leads(&identity, store.all())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(visible))
}

/// POST /api/v1/leads
///
/// Validates the draft at the input boundary, then creates the lead.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<LeadDraft>,
) -> Result<(StatusCode, Json<LeadRecord>), AppError> {
    let identity = resolve_actor(&state, &headers)?;
    validate::validate_draft(&draft)?;
    let record = lifecycle::create_lead(&mut *write(&state.store)?, &identity, draft);
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/leads/:id
///
/// Lead detail. A lead outside the actor's visible set reads as not found,
/// so visibility does not leak record existence.
pub async fn get_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<LeadRecord>, AppError> {
    let identity = resolve_actor(&state, &headers)?;
    let store = read(&state.store)?;
    policy::visible_leads(&identity, store.all())
        .into_iter()
        .find(|lead| lead.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("lead {} not found", id)))
}

/// PUT /api/v1/leads/:id
///
/// Merges the patch through the lifecycle engine, which re-checks
/// authorization regardless of what the caller already verified.
pub async fn update_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(patch): Json<LeadPatch>,
) -> Result<Json<LeadRecord>, AppError> {
    let identity = resolve_actor(&state, &headers)?;
    let record = lifecycle::apply_update(&mut *write(&state.store)?, &identity, id, patch)?;
    Ok(Json(record))
}

/// POST /api/v1/leads/:id/documents
///
/// Appends a document. No actor resolution: attachment is open to anyone
/// who can address the lead, matching observed behavior.
pub async fn attach_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(document): Json<LeadDocument>,
) -> Result<Json<LeadRecord>, AppError> {
    let record = lifecycle::attach_document(&mut *write(&state.store)?, id, document)?;
    Ok(Json(record))
}

/// GET /api/v1/dashboard
///
/// Status counts over the actor's visible set, recomputed per request.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let identity = resolve_actor(&state, &headers)?;
    let store = read(&state.store)?;
    let visible = policy::visible_leads(&identity, store.all());
    Ok(Json(aggregate::summarize(visible.into_iter())))
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Calendar month in "YYYY-MM" form.
    pub month: String,
}

/// GET /api/v1/reports?month=YYYY-MM
///
/// Monthly report over the full store for any authenticated actor. This
/// is wider than the role-scoped dashboard on purpose; see DESIGN.md.
pub async fn monthly_report(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportSnapshot>, AppError> {
    let identity = resolve_actor(&state, &headers)?;
    let (year, month) = aggregate::parse_year_month(&query.month)?;
    let store = read(&state.store)?;
    let snapshot = aggregate::report(store.all().iter(), year, month);
    tracing::info!(
        actor = %identity.id,
        month = %query.month,
        total = snapshot.total,
        "monthly report generated"
    );
    Ok(Json(snapshot))
}

#[derive(Debug, Deserialize)]
pub struct CreateFormRequest {
    pub name: String,
    pub fields: Vec<LeadField>,
}

/// POST /api/v1/forms
///
/// Partner-only: saves a lead-capture form and returns it with its
/// generated shareable link.
pub async fn create_form(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<CreateFormRequest>,
) -> Result<(StatusCode, Json<FormDefinition>), AppError> {
    let identity = resolve_actor(&state, &headers)?;
    let form = write(&state.forms)?.create_form(&identity, &request.name, &request.fields)?;
    Ok((StatusCode::CREATED, Json(form)))
}

/// GET /api/v1/forms
///
/// The acting partner's saved forms.
pub async fn list_forms(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<FormDefinition>>, AppError> {
    let identity = resolve_actor(&state, &headers)?;
    if identity.role != Role::Partner {
        return Err(AppError::Authorization(
            "only partners have capture forms".to_string(),
        ));
    }
    let forms = read(&state.forms)?;
    Ok(Json(
        forms.forms_for(&identity.id).into_iter().cloned().collect(),
    ))
}

/// GET /api/v1/partners
///
/// Admin-only partner listing.
pub async fn list_partners(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<PartnerAccount>>, AppError> {
    let identity = resolve_actor(&state, &headers)?;
    if identity.role != Role::Admin {
        return Err(AppError::Authorization(
            "only the admin can manage partners".to_string(),
        ));
    }
    let directory = read(&state.directory)?;
    Ok(Json(directory.partners().to_vec()))
}

/// POST /api/v1/partners
///
/// Admin-only partner creation; same contract as self-registration.
pub async fn add_partner(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PartnerAccount>), AppError> {
    let identity = resolve_actor(&state, &headers)?;
    if identity.role != Role::Admin {
        return Err(AppError::Authorization(
            "only the admin can manage partners".to_string(),
        ));
    }
    let account = write(&state.directory)?.add_partner(
        &request.name,
        &request.username,
        &request.password,
    )?;
    Ok((StatusCode::CREATED, Json(account)))
}
