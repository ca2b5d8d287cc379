//! Identity returned by the external authenticator.

use super::{AccessDomainError, Page};
use crate::workflow::domain::{FieldName, TaskRecord};
use std::collections::BTreeSet;

/// An authenticated operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: String,
    role: String,
    access: BTreeSet<Page>,
}

impl Identity {
    /// Creates an identity.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDomainError::EmptyUsername`] when the username is
    /// empty after trimming.
    pub fn new(
        username: impl Into<String>,
        role: impl Into<String>,
        access: impl IntoIterator<Item = Page>,
    ) -> Result<Self, AccessDomainError> {
        let raw = username.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AccessDomainError::EmptyUsername);
        }
        Ok(Self {
            username: trimmed.to_owned(),
            role: role.into().trim().to_owned(),
            access: access.into_iter().collect(),
        })
    }

    /// Creates an identity from a comma-separated page list.
    ///
    /// Unknown page names are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDomainError::EmptyUsername`] when the username is
    /// empty after trimming.
    pub fn from_access_list(
        username: impl Into<String>,
        role: impl Into<String>,
        access_list: &str,
    ) -> Result<Self, AccessDomainError> {
        let pages = access_list
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .filter_map(|entry| match entry.parse::<Page>() {
                Ok(page) => Some(page),
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring access list entry");
                    None
                }
            });
        Self::new(username, role, pages)
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the granted pages.
    #[must_use]
    pub const fn access(&self) -> &BTreeSet<Page> {
        &self.access
    }

    /// Returns `true` when this identity holds `admin_role`.
    #[must_use]
    pub fn is_admin(&self, admin_role: &str) -> bool {
        self.role.eq_ignore_ascii_case(admin_role.trim())
    }

    /// Returns `true` when `record` is visible to this identity.
    ///
    /// Admins see everything; sheets without an owner field are visible to
    /// everyone; otherwise the owner must equal the username.
    #[must_use]
    pub fn sees(&self, record: &TaskRecord, owner_field: Option<FieldName>, admin_role: &str) -> bool {
        if self.is_admin(admin_role) {
            return true;
        }
        owner_field.is_none_or(|field| record.get(field).trim() == self.username)
    }

    /// Returns `true` when this identity may open `page`.
    #[must_use]
    pub fn can_open(&self, page: Page, admin_role: &str) -> bool {
        self.is_admin(admin_role) || self.access.contains(&page)
    }
}
