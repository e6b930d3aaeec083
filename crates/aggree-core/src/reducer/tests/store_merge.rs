use super::*;
use pretty_assertions::assert_eq;

#[test]
fn merge_search_query_changes_only_search_query() {
    let mut state = logged_in(RoleCategory::Admin);
    let before = state.store.as_ref().unwrap().snapshot();

    let effects = user(
        &mut state,
        UserAction::Merge(AppStatePatch::search_query("beverage")),
    );

    assert_only_frame(&effects);
    let after = state.app().unwrap();
    assert_eq!(after.search_query, "beverage");
    assert_eq!(after.selected_region, before.selected_region);
    assert_eq!(after.notifications, before.notifications);
    assert_eq!(after.current_user, before.current_user);
}

#[test]
fn merge_region_from_all_to_kenya_keeps_other_fields() {
    let mut state = logged_in(RoleCategory::Admin);
    let before = state.store.as_ref().unwrap().snapshot();
    assert_eq!(before.selected_region, Region::All);

    user(
        &mut state,
        UserAction::Merge(AppStatePatch::selected_region(Region::Kenya)),
    );

    let after = state.app().unwrap();
    assert_eq!(after.selected_region, Region::Kenya);
    assert_eq!(after.search_query, before.search_query);
    assert_eq!(after.notifications, before.notifications);
    assert_eq!(after.current_user, before.current_user);
    assert_eq!(before.selected_region, Region::All);
}

#[test]
fn default_region_seeds_the_store() {
    let mut state = ConsoleState::new(ConsoleOptions {
        default_region: Region::Uganda,
        ..ConsoleOptions::default()
    });
    user(&mut state, UserAction::LoginQuickFill(RoleCategory::Manager));
    login_with_form(&mut state);

    assert_eq!(state.app().unwrap().selected_region, Region::Uganda);
}

#[test]
fn each_merge_advances_revision() {
    let mut state = logged_in(RoleCategory::Admin);
    let start = state.store.as_ref().unwrap().revision();

    user(&mut state, UserAction::Merge(AppStatePatch::search_query("a")));
    user(&mut state, UserAction::Merge(AppStatePatch::default()));

    assert_eq!(state.store.as_ref().unwrap().revision(), start + 2);
}
