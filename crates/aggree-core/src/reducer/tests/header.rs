use super::*;
use crate::export::EXPORT_TYPE_DASHBOARD_SUMMARY;
use pretty_assertions::assert_eq;

fn type_search(state: &mut ConsoleState, text: &str) {
    user(state, UserAction::OpenSearch);
    for ch in text.chars() {
        user(state, UserAction::SearchInput(ch));
    }
}

#[test]
fn search_typing_merges_query_into_store() {
    let mut state = logged_in(RoleCategory::Admin);

    type_search(&mut state, "okafor");

    assert_eq!(state.app().unwrap().search_query, "okafor");
    assert_eq!(
        state.interaction.overlay,
        ShellOverlay::Search { selected: 0 }
    );

    user(&mut state, UserAction::SearchBackspace);
    assert_eq!(state.app().unwrap().search_query, "okafo");
}

#[test]
fn search_input_without_overlay_is_ignored() {
    let mut state = logged_in(RoleCategory::Admin);
    assert!(user(&mut state, UserAction::SearchInput('x')).is_empty());
    assert_eq!(state.app().unwrap().search_query, "");
}

#[test]
fn selecting_search_result_navigates_and_clears_query() {
    let mut state = logged_in(RoleCategory::Admin);
    type_search(&mut state, "sugar");
    user(&mut state, UserAction::OverlayMoveDown);

    let effects = user(&mut state, UserAction::OverlaySubmit);

    assert_only_frame(&effects);
    assert_eq!(state.routing.view, ViewId::Pricing);
    assert_eq!(state.app().unwrap().search_query, "");
    assert_eq!(state.interaction.overlay, ShellOverlay::None);
}

#[test]
fn search_selection_wraps() {
    let mut state = logged_in(RoleCategory::Admin);
    type_search(&mut state, "sugar");

    user(&mut state, UserAction::OverlayMoveUp);

    assert_eq!(
        state.interaction.overlay,
        ShellOverlay::Search { selected: 1 }
    );
}

#[test]
fn submit_without_results_only_closes() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::Navigate(ViewId::Users));
    type_search(&mut state, "zzz");

    user(&mut state, UserAction::OverlaySubmit);

    assert_eq!(state.routing.view, ViewId::Users);
    assert_eq!(state.app().unwrap().search_query, "zzz");
}

#[test]
fn region_menu_merges_selected_region() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::ToggleRegionMenu);
    assert_eq!(
        state.interaction.overlay,
        ShellOverlay::RegionMenu { selected: 0 }
    );

    user(&mut state, UserAction::OverlayMoveDown);
    user(&mut state, UserAction::OverlayMoveDown);
    user(&mut state, UserAction::OverlaySubmit);

    assert_eq!(state.app().unwrap().selected_region, Region::Nigeria);
    assert_eq!(state.interaction.overlay, ShellOverlay::None);
}

#[test]
fn region_menu_opens_on_current_region() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::SelectRegion(3));

    user(&mut state, UserAction::ToggleRegionMenu);

    assert_eq!(
        state.interaction.overlay,
        ShellOverlay::RegionMenu { selected: 3 }
    );
}

#[test]
fn out_of_range_region_is_ignored() {
    let mut state = logged_in(RoleCategory::Admin);
    assert!(user(&mut state, UserAction::SelectRegion(99)).is_empty());
    assert_eq!(state.app().unwrap().selected_region, Region::All);
}

#[test]
fn profile_menu_entries() {
    let mut state = logged_in(RoleCategory::Admin);

    user(&mut state, UserAction::ToggleProfileMenu);
    user(&mut state, UserAction::OverlaySubmit);
    assert_eq!(state.routing.view, ViewId::Profile);

    user(&mut state, UserAction::ToggleProfileMenu);
    user(&mut state, UserAction::OverlayMoveDown);
    user(&mut state, UserAction::OverlaySubmit);
    assert_eq!(state.routing.view, ViewId::Settings);

    user(&mut state, UserAction::ToggleProfileMenu);
    user(&mut state, UserAction::OverlayMoveUp);
    let effects = user(&mut state, UserAction::OverlaySubmit);
    assert!(effects.contains(&ConsoleEffect::CancelAllTasks));
    assert!(!state.is_authenticated());
}

#[test]
fn export_snapshots_region_and_query() {
    let mut state = logged_in(RoleCategory::Admin);
    user(&mut state, UserAction::SelectRegion(1));
    user(
        &mut state,
        UserAction::Merge(AppStatePatch::search_query("syrup")),
    );

    let effects = user(&mut state, UserAction::Export);

    let [ConsoleEffect::WriteExport { file_name, payload }] = effects.as_slice() else {
        panic!("expected one WriteExport, got {effects:?}");
    };
    assert!(file_name.starts_with("aggree-export-"));
    assert!(file_name.ends_with(".json"));
    assert_eq!(payload.region, "kenya");
    assert_eq!(payload.search_query, "syrup");
    assert_eq!(payload.export_type, EXPORT_TYPE_DASHBOARD_SUMMARY);
}

#[test]
fn export_outcomes_land_in_status_line() {
    let mut state = logged_in(RoleCategory::Admin);

    runtime(
        &mut state,
        RuntimeAction::ExportWritten {
            path: "/tmp/out.json".to_string(),
        },
    );
    assert_eq!(
        state.interaction.status.as_deref(),
        Some("Exported to /tmp/out.json")
    );

    runtime(
        &mut state,
        RuntimeAction::ExportFailed {
            message: "disk full".to_string(),
        },
    );
    assert_eq!(
        state.interaction.status.as_deref(),
        Some("Export failed: disk full")
    );
}

#[test]
fn close_overlay_without_overlay_is_noop() {
    let mut state = logged_in(RoleCategory::Admin);
    assert!(user(&mut state, UserAction::CloseOverlay).is_empty());
}
