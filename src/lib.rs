//! Lead CRM API Library
//!
//! Role-scoped lead management: an admin and any number of partners
//! create, view, and progress loan-application leads through a fixed
//! status lifecycle, attach documents, and view aggregated statistics.
//! The policy core (visibility, authorization, lifecycle, aggregation) is
//! pure and in-memory; the axum shell around it carries no policy logic.
//!
//! # Modules
//!
//! - `aggregate`: Dashboard and monthly-report aggregation.
//! - `config`: Configuration management.
//! - `directory`: Identity resolution (partner accounts, mock credentials).
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `lifecycle`: Lead creation, update merging, document attachment.
//! - `models`: Core data models.
//! - `policy`: Visibility and authorization rules.
//! - `registry`: Partner lead-capture form registry.
//! - `seed`: Demo fixture data.
//! - `store`: In-memory lead store.
//! - `validate`: Input-boundary validation.

pub mod aggregate;
pub mod config;
pub mod directory;
pub mod errors;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod policy;
pub mod registry;
pub mod seed;
pub mod store;
pub mod validate;
