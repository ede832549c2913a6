//! Active-record lookups for association pickers
//!
//! Association screens render foreign keys by resolving them against
//! active-only reference lists (`VIEWACTIVE`), fetched when the page or
//! dialog opens and cached only for its lifetime. There is no cross-page
//! cache and no invalidation beyond refetching on open.

use aivision_client::ManageApi;
use aivision_core::{ManagedResource, Result};
use futures::future::try_join;

/// One pickable reference record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    /// Referenced record id
    pub id: i64,
    /// Display label
    pub label: String,
}

/// A resolved reference list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupCache {
    entries: Vec<LookupEntry>,
}

impl LookupCache {
    /// Fetch the active records of one resource into a cache
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying `VIEWACTIVE` request.
    pub async fn load<T: ManagedResource>(api: &dyn ManageApi<T>) -> Result<Self> {
        let entries = api
            .list_active()
            .await?
            .into_iter()
            .filter_map(|record| {
                record.id().map(|id| LookupEntry {
                    id,
                    label: record.label(),
                })
            })
            .collect();
        Ok(Self { entries })
    }

    /// Fetch two reference lists concurrently (both sides of an
    /// association form)
    ///
    /// # Errors
    ///
    /// Fails if either `VIEWACTIVE` request fails.
    pub async fn load_pair<A: ManagedResource, B: ManagedResource>(
        left: &dyn ManageApi<A>,
        right: &dyn ManageApi<B>,
    ) -> Result<(Self, Self)> {
        try_join(Self::load(left), Self::load(right)).await
    }

    /// All entries, in server order
    #[must_use]
    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    /// Label of the referenced record, if it is in the active list
    #[must_use]
    pub fn label_for(&self, id: i64) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.label.as_str())
    }

    /// Label to render for an optional foreign key; falls back to the raw
    /// id (the record may reference something no longer active)
    #[must_use]
    pub fn display(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => self
                .label_for(id)
                .map_or_else(|| format!("#{id}"), String::from),
            None => "-".to_string(),
        }
    }

    /// Number of active entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the reference list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cache() -> LookupCache {
        LookupCache {
            entries: vec![
                LookupEntry {
                    id: 1,
                    label: "Front Gate".to_string(),
                },
                LookupEntry {
                    id: 3,
                    label: "Loading Dock".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_label_resolution() {
        let cache = cache();

        assert_eq!(cache.label_for(1), Some("Front Gate"));
        assert_eq!(cache.label_for(2), None);
    }

    #[test]
    fn test_display_falls_back_to_raw_id() {
        let cache = cache();

        assert_eq!(cache.display(Some(3)), "Loading Dock");
        assert_eq!(cache.display(Some(99)), "#99");
        assert_eq!(cache.display(None), "-");
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(cache().len(), 2);
        assert!(!cache().is_empty());
        assert!(LookupCache::default().is_empty());
    }
}
