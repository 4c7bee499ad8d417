//! Identity resolution collaborator: partner accounts and the mock
//! credential map.
//!
//! The policy core never touches this module directly; handlers resolve an
//! `Identity` here and hand the core an opaque, already-authenticated
//! actor. Passwords are stored in plaintext because this is the mock
//! contract the system specifies; a real deployment replaces this
//! collaborator with salted hashing and durable storage without the core
//! noticing.

use crate::errors::AppError;
use crate::models::{Identity, Role};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// A registered partner account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerAccount {
    pub id: String,
    pub name: String,
    pub username: String,
}

#[derive(Debug)]
pub struct PartnerDirectory {
    admin: Identity,
    admin_username: String,
    admin_password: String,
    partners: Vec<PartnerAccount>,
    // username -> plaintext password (mock credential store)
    passwords: HashMap<String, String>,
}

impl PartnerDirectory {
    pub fn new(admin_username: &str, admin_password: &str, admin_name: &str) -> Self {
        Self {
            admin: Identity {
                id: "admin001".to_string(),
                display_name: admin_name.to_string(),
                role: Role::Admin,
            },
            admin_username: admin_username.to_string(),
            admin_password: admin_password.to_string(),
            partners: Vec::new(),
            passwords: HashMap::new(),
        }
    }

    /// The system-wide admin identity.
    pub fn admin(&self) -> &Identity {
        &self.admin
    }

    /// Registers a partner with a generated id. Used for both partner
    /// self-registration and admin "add partner".
    pub fn add_partner(
        &mut self,
        name: &str,
        username: &str,
        password: &str,
    ) -> Result<PartnerAccount, AppError> {
        let id = format!("partner-{}", Uuid::new_v4().simple());
        self.add_partner_with_id(&id, name, username, password)
    }

    /// Registers a partner under a caller-chosen id (demo seeding needs
    /// stable ids).
    pub fn add_partner_with_id(
        &mut self,
        id: &str,
        name: &str,
        username: &str,
        password: &str,
    ) -> Result<PartnerAccount, AppError> {
        if name.trim().is_empty() || username.trim().is_empty() || password.trim().is_empty() {
            return Err(AppError::Validation(
                "name, username, and password are all required".to_string(),
            ));
        }
        if username == self.admin_username
            || self.partners.iter().any(|p| p.username == username)
        {
            return Err(AppError::Validation(format!(
                "username '{}' already exists",
                username
            )));
        }

        let account = PartnerAccount {
            id: id.to_string(),
            name: name.trim().to_string(),
            username: username.to_string(),
        };
        self.passwords
            .insert(username.to_string(), password.to_string());
        self.partners.push(account.clone());
        tracing::info!(partner_id = %account.id, username = %account.username, "partner registered");
        Ok(account)
    }

    /// Validates credentials and returns the matching identity.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Identity, AppError> {
        if username == self.admin_username && password == self.admin_password {
            return Ok(self.admin.clone());
        }
        let partner = self
            .partners
            .iter()
            .find(|p| p.username == username)
            .filter(|p| self.passwords.get(&p.username).map(String::as_str) == Some(password));
        match partner {
            Some(account) => Ok(Identity {
                id: account.id.clone(),
                display_name: account.name.clone(),
                role: Role::Partner,
            }),
            None => Err(AppError::Authorization(
                "invalid username or password".to_string(),
            )),
        }
    }

    /// Resolves an opaque actor id (as carried in request headers) to an
    /// identity.
    pub fn identity_for(&self, actor_id: &str) -> Option<Identity> {
        if actor_id == self.admin.id {
            return Some(self.admin.clone());
        }
        self.partners
            .iter()
            .find(|p| p.id == actor_id)
            .map(|account| Identity {
                id: account.id.clone(),
                display_name: account.name.clone(),
                role: Role::Partner,
            })
    }

    /// All registered partner accounts, in registration order.
    pub fn partners(&self) -> &[PartnerAccount] {
        &self.partners
    }
}
