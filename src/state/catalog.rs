//! Client-side copy of the activity catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns the catalog. This state is a cache of the last fetch plus
//! optimistic signup patches, and the list view is rendered from it alone.
//! A full reload always replaces it wholesale.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Catalog;

/// Where the catalog load stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No rendered card exists for the activity.
    #[error("activity not in client state: {0}")]
    UnknownActivity(String),
}

/// Catalog cache and load status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub activities: Catalog,
    pub status: LoadStatus,
}

impl CatalogState {
    /// Install a freshly fetched catalog.
    pub fn replace(&mut self, catalog: Catalog) {
        self.activities = catalog;
        self.status = LoadStatus::Ready;
    }

    /// Record a failed load. Known activities stay for the selection control.
    pub fn mark_failed(&mut self) {
        self.status = LoadStatus::Failed;
    }

    /// Append a confirmed signup to the matching card.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownActivity`] when no card for `activity`
    /// is currently rendered; the caller falls back to a full reload.
    pub fn apply_signup(&mut self, activity: &str, email: &str) -> Result<(), CatalogError> {
        if self.status != LoadStatus::Ready {
            return Err(CatalogError::UnknownActivity(activity.to_owned()));
        }
        let card = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| CatalogError::UnknownActivity(activity.to_owned()))?;
        card.participants.push(email.to_owned());
        Ok(())
    }

    /// Options for the activity selection control, in render order.
    pub fn option_names(&self) -> Vec<String> {
        self.activities.names().map(str::to_owned).collect()
    }
}
