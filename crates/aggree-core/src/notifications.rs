//! Notification list operations.
//!
//! The shared store is the only owner of notifications. Each operation here
//! takes the current list and returns a fresh copy to merge back, or `None`
//! when nothing would change.

use super::state::Notification;
use super::state::NotificationFilter;
use super::state::NotificationKind;

struct Seed {
    id: &'static str,
    title: &'static str,
    message: &'static str,
    kind: NotificationKind,
    time: &'static str,
    read: bool,
    category: &'static str,
}

const SEED: [Seed; 7] = [
    Seed {
        id: "1",
        title: "Price Approval Required",
        message: "Premium Sugar 50kg price update from $120 to $125 requires your approval",
        kind: NotificationKind::Warning,
        time: "2 hours ago",
        read: false,
        category: "Pricing",
    },
    Seed {
        id: "2",
        title: "Campaign Performance Alert",
        message: "Q1 Sugar Bundle Promotion has exceeded target by 15% in Kenya region",
        kind: NotificationKind::Success,
        time: "4 hours ago",
        read: false,
        category: "Campaigns",
    },
    Seed {
        id: "3",
        title: "Weather Advisory",
        message: "Heavy rains expected in Tanzania region. Consider adjusting harvest schedules.",
        kind: NotificationKind::Info,
        time: "6 hours ago",
        read: true,
        category: "Weather",
    },
    Seed {
        id: "4",
        title: "API Integration Error",
        message: "SAP ERP connection failed. Last successful sync was 8 hours ago.",
        kind: NotificationKind::Error,
        time: "8 hours ago",
        read: false,
        category: "System",
    },
    Seed {
        id: "5",
        title: "New User Registration",
        message: "David Mwangi has been added as Field Agent for Kenya region",
        kind: NotificationKind::Info,
        time: "1 day ago",
        read: true,
        category: "Users",
    },
    Seed {
        id: "6",
        title: "Revenue Milestone",
        message: "Monthly revenue target of $2M achieved 5 days ahead of schedule",
        kind: NotificationKind::Success,
        time: "1 day ago",
        read: true,
        category: "Revenue",
    },
    Seed {
        id: "7",
        title: "WhatsApp Rate Limit",
        message: "WhatsApp API rate limit reached. Some messages may be delayed.",
        kind: NotificationKind::Warning,
        time: "2 days ago",
        read: false,
        category: "Communication",
    },
];

pub fn seed_notifications() -> Vec<Notification> {
    SEED.iter()
        .map(|seed| Notification {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            message: seed.message.to_string(),
            kind: seed.kind,
            time: seed.time.to_string(),
            read: seed.read,
            category: seed.category.to_string(),
        })
        .collect()
}

pub fn visible<'a>(
    notifications: &'a [Notification],
    filter: NotificationFilter,
) -> Vec<&'a Notification> {
    notifications
        .iter()
        .filter(|notification| filter.matches(notification))
        .collect()
}

pub fn mark_read(notifications: &[Notification], id: &str) -> Option<Vec<Notification>> {
    let target = notifications.iter().find(|n| n.id == id)?;
    if target.read {
        return None;
    }

    Some(
        notifications
            .iter()
            .cloned()
            .map(|mut n| {
                if n.id == id {
                    n.read = true;
                }
                n
            })
            .collect(),
    )
}

pub fn mark_all_read(notifications: &[Notification]) -> Option<Vec<Notification>> {
    if notifications.iter().all(|n| n.read) {
        return None;
    }

    Some(
        notifications
            .iter()
            .cloned()
            .map(|mut n| {
                n.read = true;
                n
            })
            .collect(),
    )
}

pub fn delete(notifications: &[Notification], id: &str) -> Option<Vec<Notification>> {
    if !notifications.iter().any(|n| n.id == id) {
        return None;
    }

    Some(
        notifications
            .iter()
            .filter(|n| n.id != id)
            .cloned()
            .collect(),
    )
}

pub fn clear(notifications: &[Notification]) -> Option<Vec<Notification>> {
    if notifications.is_empty() {
        None
    } else {
        Some(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seed_has_four_unread() {
        let seeded = seed_notifications();
        assert_eq!(seeded.len(), 7);
        assert_eq!(seeded.iter().filter(|n| !n.read).count(), 4);
    }

    #[test]
    fn mark_read_copies_instead_of_mutating() {
        let seeded = seed_notifications();
        let next = mark_read(&seeded, "1").expect("unread id changes the list");
        assert!(!seeded[0].read);
        assert!(next[0].read);
        assert_eq!(next[1..], seeded[1..]);
    }

    #[test]
    fn unknown_or_already_read_ids_are_noops() {
        let seeded = seed_notifications();
        assert_eq!(mark_read(&seeded, "404"), None);
        assert_eq!(mark_read(&seeded, "3"), None);
        assert_eq!(delete(&seeded, "404"), None);
    }

    #[test]
    fn filters_select_expected_rows() {
        let seeded = seed_notifications();
        let unread: Vec<&str> = visible(&seeded, NotificationFilter::Unread)
            .into_iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(unread, vec!["1", "2", "4", "7"]);

        let errors = visible(&seeded, NotificationFilter::Kind(NotificationKind::Error));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].title, "API Integration Error");
    }

    #[test]
    fn delete_and_clear() {
        let seeded = seed_notifications();
        let next = delete(&seeded, "2").expect("known id");
        assert_eq!(next.len(), 6);
        assert!(next.iter().all(|n| n.id != "2"));
        assert_eq!(clear(&next), Some(Vec::new()));
        assert_eq!(clear(&[]), None);
    }

    #[test]
    fn mark_all_read_is_noop_when_nothing_unread() {
        let all_read = mark_all_read(&seed_notifications()).expect("has unread");
        assert!(all_read.iter().all(|n| n.read));
        assert_eq!(mark_all_read(&all_read), None);
    }
}
