use std::sync::Arc;

use super::state::AppState;
use super::state::Notification;
use super::state::Region;
use super::state::User;

/// Partial update for [`AppState`]. Only `Some` fields are applied, and each
/// applied field replaces the old value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppStatePatch {
    pub search_query: Option<String>,
    pub selected_region: Option<Region>,
    pub notifications: Option<Vec<Notification>>,
    pub current_user: Option<Option<User>>,
}

impl AppStatePatch {
    pub fn search_query(query: impl Into<String>) -> Self {
        Self {
            search_query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn selected_region(region: Region) -> Self {
        Self {
            selected_region: Some(region),
            ..Self::default()
        }
    }

    pub fn notifications(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: Some(notifications),
            ..Self::default()
        }
    }

    pub fn current_user(user: Option<User>) -> Self {
        Self {
            current_user: Some(user),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search_query.is_none()
            && self.selected_region.is_none()
            && self.notifications.is_none()
            && self.current_user.is_none()
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.search_query.is_some() {
            names.push("search_query");
        }
        if self.selected_region.is_some() {
            names.push("selected_region");
        }
        if self.notifications.is_some() {
            names.push("notifications");
        }
        if self.current_user.is_some() {
            names.push("current_user");
        }
        names
    }

    fn apply_to(self, target: &mut AppState) {
        if let Some(query) = self.search_query {
            target.search_query = query;
        }
        if let Some(region) = self.selected_region {
            target.selected_region = region;
        }
        if let Some(notifications) = self.notifications {
            target.notifications = notifications;
        }
        if let Some(user) = self.current_user {
            target.current_user = user;
        }
    }
}

/// Copy-on-write container for the shared state. Readers hold `Arc`
/// snapshots that never change underneath them; `merge` swaps in a new one.
#[derive(Debug, Clone)]
pub struct Store {
    snapshot: Arc<AppState>,
    revision: u64,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            snapshot: Arc::new(initial),
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.snapshot)
    }

    pub fn get(&self) -> &AppState {
        &self.snapshot
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Shallow merge. Total: every patch, including an empty one, produces
    /// a new revision.
    pub fn merge(&mut self, patch: AppStatePatch) -> u64 {
        let mut next = AppState::clone(&self.snapshot);
        patch.apply_to(&mut next);
        self.snapshot = Arc::new(next);
        self.revision = self.revision.saturating_add(1);
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::session::derive_user;
    use crate::session::Credentials;
    use crate::session::RoleCategory;

    fn store() -> Store {
        let user = derive_user(&Credentials::for_role(RoleCategory::Admin));
        Store::new(AppState::for_user(user, Region::All))
    }

    #[test]
    fn merge_search_query_leaves_siblings_untouched() {
        let mut store = store();
        let before = store.snapshot();

        store.merge(AppStatePatch::search_query("sugar"));

        let after = store.get();
        assert_eq!(after.search_query, "sugar");
        assert_eq!(after.selected_region, before.selected_region);
        assert_eq!(after.notifications, before.notifications);
        assert_eq!(after.current_user, before.current_user);
    }

    #[test]
    fn held_snapshot_is_not_affected_by_later_merges() {
        let mut store = store();
        let held = store.snapshot();

        store.merge(AppStatePatch::selected_region(Region::Nigeria));

        assert_eq!(held.selected_region, Region::All);
        assert_eq!(store.get().selected_region, Region::Nigeria);
    }

    #[test]
    fn array_fields_are_replaced_not_merged() {
        let mut store = store();
        let first = store.get().notifications[0].clone();

        store.merge(AppStatePatch::notifications(vec![first.clone()]));

        assert_eq!(store.get().notifications, vec![first]);
    }

    #[test]
    fn every_merge_bumps_revision() {
        let mut store = store();
        assert_eq!(store.revision(), 0);
        assert_eq!(store.merge(AppStatePatch::default()), 1);
        assert_eq!(store.merge(AppStatePatch::search_query("")), 2);
    }

    #[test]
    fn patch_reports_named_fields() {
        let patch = AppStatePatch {
            search_query: Some(String::new()),
            current_user: Some(None),
            ..AppStatePatch::default()
        };
        assert_eq!(patch.field_names(), vec!["search_query", "current_user"]);
        assert!(AppStatePatch::default().is_empty());
    }
}
