use super::*;
use pretty_assertions::assert_eq;

#[test]
fn two_uploads_in_one_tick_complete_in_any_order() {
    let mut state = logged_in(RoleCategory::Manager);

    let effects = user(
        &mut state,
        UserAction::UploadFiles(vec![
            file("sales.csv", "text/csv", 4_096),
            file("map.png", "image/png", 10_240),
        ]),
    );

    let ids = scheduled_uploads(&effects);
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    assert_eq!(state.uploads.processing_count(), 2);
    assert_eq!(effects.last(), Some(&ConsoleEffect::RequestFrame));

    runtime(
        &mut state,
        RuntimeAction::UploadProcessed {
            file_id: ids[1].clone(),
            insights: insights(),
        },
    );
    assert_eq!(state.uploads.processing_count(), 1);

    runtime(
        &mut state,
        RuntimeAction::UploadProcessed {
            file_id: ids[0].clone(),
            insights: insights(),
        },
    );
    for id in &ids {
        let entry = state.uploads.get(id).unwrap();
        assert_eq!(entry.status, UploadStatus::Completed);
        assert!(!entry.insights.as_ref().unwrap().is_empty());
    }
    assert_eq!(state.interaction.status.as_deref(), Some("Analysis complete"));
}

#[test]
fn completion_for_unknown_file_is_ignored() {
    let mut state = logged_in(RoleCategory::Manager);

    let effects = runtime(
        &mut state,
        RuntimeAction::UploadProcessed {
            file_id: "file-99".to_string(),
            insights: insights(),
        },
    );

    assert!(effects.is_empty());
}

#[test]
fn late_completion_after_logout_is_ignored() {
    let mut state = logged_in(RoleCategory::Manager);
    let effects = user(
        &mut state,
        UserAction::UploadFiles(vec![file("a.csv", "text/csv", 1)]),
    );
    let ids = scheduled_uploads(&effects);
    user(&mut state, UserAction::Logout);

    let effects = runtime(
        &mut state,
        RuntimeAction::UploadProcessed {
            file_id: ids[0].clone(),
            insights: insights(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.uploads.files().is_empty());
}

#[test]
fn empty_upload_batch_is_noop() {
    let mut state = logged_in(RoleCategory::Manager);
    assert!(user(&mut state, UserAction::UploadFiles(Vec::new())).is_empty());
}

#[test]
fn upload_prompt_splits_paths() {
    let mut state = logged_in(RoleCategory::Manager);
    user(&mut state, UserAction::OpenUploadPrompt);
    assert_eq!(state.routing.view, ViewId::Upload);

    for ch in " data/a.csv ; ;b.xlsx".chars() {
        user(&mut state, UserAction::UploadPromptInput(ch));
    }
    let effects = user(&mut state, UserAction::UploadPromptSubmit);

    assert_eq!(
        effects,
        vec![
            ConsoleEffect::StatUploadPaths(vec!["data/a.csv".to_string(), "b.xlsx".to_string()]),
            ConsoleEffect::RequestFrame,
        ]
    );
    assert_eq!(state.interaction.overlay, ShellOverlay::None);
}

#[test]
fn blank_upload_prompt_just_closes() {
    let mut state = logged_in(RoleCategory::Manager);
    user(&mut state, UserAction::OpenUploadPrompt);
    user(&mut state, UserAction::UploadPromptInput(' '));

    assert_only_frame(&user(&mut state, UserAction::OverlaySubmit));
}

#[test]
fn quick_action_merges_file_name_into_search() {
    let mut state = logged_in(RoleCategory::Manager);
    let effects = user(
        &mut state,
        UserAction::UploadFiles(vec![file("q1-sales.csv", "text/csv", 10)]),
    );
    let ids = scheduled_uploads(&effects);

    user(
        &mut state,
        UserAction::UploadQuickAction {
            file_id: ids[0].clone(),
        },
    );

    assert_eq!(state.app().unwrap().search_query, "q1-sales.csv");
}

#[test]
fn rejected_path_is_reported() {
    let mut state = logged_in(RoleCategory::Manager);
    runtime(
        &mut state,
        RuntimeAction::UploadRejected {
            path: "missing.csv".to_string(),
            reason: "not found".to_string(),
        },
    );
    assert_eq!(
        state.interaction.status.as_deref(),
        Some("Skipped missing.csv: not found")
    );
}
