use super::*;
use crate::state::NotificationFilter;
use crate::state::NotificationKind;
use pretty_assertions::assert_eq;

fn unread(state: &ConsoleState) -> usize {
    state.app().unwrap().unread_count()
}

#[test]
fn seeded_list_has_four_unread() {
    let state = logged_in(RoleCategory::Admin);
    assert_eq!(state.app().unwrap().notifications.len(), 7);
    assert_eq!(unread(&state), 4);
}

#[test]
fn mark_read_goes_through_store() {
    let mut state = logged_in(RoleCategory::Admin);
    let held = state.store.as_ref().unwrap().snapshot();

    let effects = user(&mut state, UserAction::MarkNotificationRead("1".to_string()));

    assert_only_frame(&effects);
    assert_eq!(unread(&state), 3);
    assert_eq!(held.unread_count(), 4);
}

#[test]
fn unknown_or_repeated_ids_are_noops() {
    let mut state = logged_in(RoleCategory::Admin);
    let revision = state.store.as_ref().unwrap().revision();

    assert!(user(&mut state, UserAction::MarkNotificationRead("42".to_string())).is_empty());
    assert!(user(&mut state, UserAction::MarkNotificationRead("3".to_string())).is_empty());
    assert!(user(&mut state, UserAction::DeleteNotification("42".to_string())).is_empty());
    assert_eq!(state.store.as_ref().unwrap().revision(), revision);
}

#[test]
fn mark_all_then_clear() {
    let mut state = logged_in(RoleCategory::Admin);

    user(&mut state, UserAction::MarkAllNotificationsRead);
    assert_eq!(unread(&state), 0);
    assert!(user(&mut state, UserAction::MarkAllNotificationsRead).is_empty());

    user(&mut state, UserAction::ClearNotifications);
    assert!(state.app().unwrap().notifications.is_empty());
    assert!(user(&mut state, UserAction::ClearNotifications).is_empty());
}

#[test]
fn delete_keeps_cursor_in_range() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::Navigate(ViewId::Notifications));
    for _ in 0..6 {
        user(&mut state, UserAction::RowDown);
    }
    assert_eq!(state.views.cursor(ViewId::Notifications).row, 6);

    user(&mut state, UserAction::DeleteNotification("7".to_string()));

    assert_eq!(state.app().unwrap().notifications.len(), 6);
    assert_eq!(state.views.cursor(ViewId::Notifications).row, 5);
}

#[test]
fn filter_is_view_local_and_cycles() {
    let mut state = logged_in(RoleCategory::Admin);
    let revision = state.store.as_ref().unwrap().revision();

    user(&mut state, UserAction::CycleNotificationFilter);
    assert_eq!(state.views.notification_filter, NotificationFilter::Unread);
    user(&mut state, UserAction::CycleNotificationFilter);
    assert_eq!(
        state.views.notification_filter,
        NotificationFilter::Kind(NotificationKind::Success)
    );

    assert_eq!(state.store.as_ref().unwrap().revision(), revision);
}
