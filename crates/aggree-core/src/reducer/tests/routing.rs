use super::*;
use crate::{catalog, router};
use pretty_assertions::assert_eq;

#[test]
fn navigate_sets_active_view_and_closes_overlays() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::ToggleProfileMenu);

    let effects = user(&mut state, UserAction::Navigate(ViewId::Pricing));

    assert_only_frame(&effects);
    assert_eq!(state.routing.view, ViewId::Pricing);
    assert_eq!(state.interaction.overlay, ShellOverlay::None);
}

#[test]
fn every_view_resolves_to_its_registration() {
    let mut state = logged_in(RoleCategory::Admin);
    for view in ViewId::ALL {
        user(&mut state, UserAction::Navigate(view));
        assert_eq!(router::resolve(state.routing.view).id, view);
    }
}

#[test]
fn unknown_raw_view_falls_back_to_dashboard() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::Navigate(ViewId::Users));

    user(&mut state, UserAction::NavigateRaw("marketplace".to_string()));
    assert_eq!(state.routing.view, ViewId::Dashboard);

    user(&mut state, UserAction::NavigateRaw("Revenue".to_string()));
    assert_eq!(state.routing.view, ViewId::Revenue);
}

#[test]
fn sidebar_keys_cycle_through_nav_entries() {
    let mut state = logged_in(RoleCategory::Admin);

    user(&mut state, UserAction::PrevSidebarView);
    assert_eq!(state.routing.view, ViewId::Users);

    user(&mut state, UserAction::NextSidebarView);
    user(&mut state, UserAction::NextSidebarView);
    assert_eq!(state.routing.view, ViewId::Campaigns);
}

#[test]
fn view_cursors_are_independent() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::Navigate(ViewId::Campaigns));
    user(&mut state, UserAction::RowDown);
    user(&mut state, UserAction::RowDown);

    user(&mut state, UserAction::Navigate(ViewId::Pricing));
    user(&mut state, UserAction::RowDown);

    assert_eq!(state.views.cursor(ViewId::Campaigns).row, 2);
    assert_eq!(state.views.cursor(ViewId::Pricing).row, 1);
}

#[test]
fn region_change_clamps_filtered_rows() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::Navigate(ViewId::Campaigns));
    for _ in 0..3 {
        user(&mut state, UserAction::RowDown);
    }
    assert_eq!(state.views.cursor(ViewId::Campaigns).row, 3);

    user(&mut state, UserAction::Merge(AppStatePatch::selected_region(Region::Nigeria)));
    assert_eq!(state.views.cursor(ViewId::Campaigns).row, 0);
}

#[test]
fn region_change_elsewhere_clamps_rows_on_return() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::Navigate(ViewId::Campaigns));
    for _ in 0..3 {
        user(&mut state, UserAction::RowDown);
    }

    user(&mut state, UserAction::Navigate(ViewId::Dashboard));
    user(&mut state, UserAction::Merge(AppStatePatch::selected_region(Region::Nigeria)));
    user(&mut state, UserAction::Navigate(ViewId::Campaigns));

    let rows = catalog::campaigns_in(Region::Nigeria).len();
    assert!(state.views.cursor(ViewId::Campaigns).row < rows);
}

#[test]
fn row_cursor_stops_at_last_row() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::Navigate(ViewId::Campaigns));
    for _ in 0..10 {
        user(&mut state, UserAction::RowDown);
    }
    assert_eq!(state.views.cursor(ViewId::Campaigns).row, 3);
    assert!(user(&mut state, UserAction::RowDown).is_empty());
}

#[test]
fn local_tabs_cycle_and_reset_row() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::Navigate(ViewId::Api));
    user(&mut state, UserAction::RowDown);

    user(&mut state, UserAction::NextLocalTab);
    assert_eq!(state.views.cursor(ViewId::Api).tab, 1);
    assert_eq!(state.views.cursor(ViewId::Api).row, 0);

    user(&mut state, UserAction::NextLocalTab);
    assert_eq!(state.views.cursor(ViewId::Api).tab, 2);

    user(&mut state, UserAction::NextLocalTab);
    assert_eq!(state.views.cursor(ViewId::Api).tab, 0);

    user(&mut state, UserAction::Navigate(ViewId::Dashboard));
    assert!(user(&mut state, UserAction::NextLocalTab).is_empty());
}

#[test]
fn communication_campaigns_tab_lists_broadcasts() {
    let mut state = logged_in(RoleCategory::Agent);
    user(&mut state, UserAction::Navigate(ViewId::Communication));
    user(&mut state, UserAction::NextLocalTab);
    user(&mut state, UserAction::NextLocalTab);
    for _ in 0..5 {
        user(&mut state, UserAction::RowDown);
    }
    let cursor = state.views.cursor(ViewId::Communication);
    assert_eq!(cursor.tab, 2);
    assert_eq!(cursor.row, catalog::BROADCASTS.len() - 1);
}

#[test]
fn settings_toggle_only_flips_boolean_entries() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::Navigate(ViewId::Settings));

    // General tab, first row is the language selector.
    assert!(user(&mut state, UserAction::ToggleSetting).is_empty());

    user(&mut state, UserAction::NextLocalTab);
    assert_only_frame(&user(&mut state, UserAction::ToggleSetting));
    assert!(state.views.toggled_settings.contains("notifications.email"));

    user(&mut state, UserAction::ToggleSetting);
    assert!(state.views.toggled_settings.is_empty());
}

#[test]
fn sidebar_collapse_is_shell_local() {
    let mut state = logged_in(RoleCategory::Admin);
    let before = state.store.as_ref().unwrap().revision();

    user(&mut state, UserAction::ToggleSidebar);

    assert!(state.customization.sidebar_collapsed);
    assert_eq!(state.store.as_ref().unwrap().revision(), before);
}
