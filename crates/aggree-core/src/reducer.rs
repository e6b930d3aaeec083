use chrono::SecondsFormat;
use chrono::Utc;

use super::actions::ConsoleAction;
use super::actions::RuntimeAction;
use super::actions::UserAction;
use super::catalog;
use super::catalog::SettingValue;
use super::catalog::SEARCH_ITEMS;
use super::catalog::SETTINGS_GROUPS;
use super::export::export_file_name;
use super::export::ExportPayload;
use super::notifications;
use super::router;
use super::session::derive_user;
use super::session::LoginForm;
use super::session::Session;
use super::state::AppState;
use super::state::ConsoleState;
use super::state::Notification;
use super::state::ProfileMenuEntry;
use super::state::Region;
use super::state::ShellOverlay;
use super::state::ViewId;
use super::state::ViewLocalState;
use super::store::AppStatePatch;
use super::store::Store;
use super::upload::FileMeta;

/// Separator accepted between paths in the upload prompt.
pub const UPLOAD_PATH_SEPARATOR: char = ';';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEffect {
    RequestFrame,
    ScheduleLogin {
        ticket: u64,
        delay_ms: u64,
    },
    /// The scheduler picks the delay.
    ScheduleUpload {
        file_id: String,
    },
    CancelAllTasks,
    WriteExport {
        file_name: String,
        payload: ExportPayload,
    },
    StatUploadPaths(Vec<String>),
    Quit,
}

pub fn reduce(state: &mut ConsoleState, action: ConsoleAction) -> Vec<ConsoleEffect> {
    match action {
        ConsoleAction::User(user) => reduce_user(state, user),
        ConsoleAction::Runtime(runtime) => reduce_runtime(state, runtime),
    }
}

fn reduce_user(state: &mut ConsoleState, action: UserAction) -> Vec<ConsoleEffect> {
    if matches!(action, UserAction::Quit) {
        return vec![ConsoleEffect::Quit];
    }
    if !state.is_authenticated() {
        return reduce_login(state, action);
    }

    match action {
        UserAction::Logout => logout(state),
        UserAction::Navigate(view) => navigate(state, view),
        UserAction::NavigateRaw(raw) => {
            let route = router::resolve_raw(&raw);
            if route.fallback {
                tracing::warn!(raw = %raw, "unknown view id, falling back to dashboard");
            }
            navigate(state, route.view)
        }
        UserAction::NextSidebarView => {
            let view = router::next_sidebar_view(state.routing.view);
            navigate(state, view)
        }
        UserAction::PrevSidebarView => {
            let view = router::prev_sidebar_view(state.routing.view);
            navigate(state, view)
        }
        UserAction::Merge(patch) => merge(state, patch),
        UserAction::ToggleSidebar => {
            state.customization.sidebar_collapsed = !state.customization.sidebar_collapsed;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::OpenSearch => {
            state.interaction.overlay = ShellOverlay::Search { selected: 0 };
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::SearchInput(ch) => {
            let Some(query) = search_query_if_searching(state) else {
                return Vec::new();
            };
            let mut next = query;
            next.push(ch);
            state.interaction.overlay = ShellOverlay::Search { selected: 0 };
            merge(state, AppStatePatch::search_query(next))
        }
        UserAction::SearchBackspace => {
            let Some(mut query) = search_query_if_searching(state) else {
                return Vec::new();
            };
            query.pop();
            state.interaction.overlay = ShellOverlay::Search { selected: 0 };
            merge(state, AppStatePatch::search_query(query))
        }
        UserAction::ToggleRegionMenu => {
            state.interaction.overlay = match state.interaction.overlay {
                ShellOverlay::RegionMenu { .. } => ShellOverlay::None,
                _ => ShellOverlay::RegionMenu {
                    selected: state
                        .app()
                        .map(|app| app.selected_region.index())
                        .unwrap_or(0),
                },
            };
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::SelectRegion(idx) => {
            let Some(region) = Region::ALL.get(idx).copied() else {
                return Vec::new();
            };
            state.interaction.overlay = ShellOverlay::None;
            merge(state, AppStatePatch::selected_region(region))
        }
        UserAction::ToggleProfileMenu => {
            state.interaction.overlay = match state.interaction.overlay {
                ShellOverlay::ProfileMenu { .. } => ShellOverlay::None,
                _ => ShellOverlay::ProfileMenu { selected: 0 },
            };
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::OverlayMoveUp => move_overlay_selection(state, false),
        UserAction::OverlayMoveDown => move_overlay_selection(state, true),
        UserAction::OverlaySubmit => submit_overlay(state),
        UserAction::CloseOverlay => {
            if matches!(state.interaction.overlay, ShellOverlay::None) {
                return Vec::new();
            }
            state.interaction.overlay = ShellOverlay::None;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::Export => export(state),
        UserAction::OpenUploadPrompt => {
            state.routing.view = ViewId::Upload;
            state.interaction.overlay = ShellOverlay::UploadPrompt {
                input: String::new(),
            };
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::UploadPromptInput(ch) => {
            if let ShellOverlay::UploadPrompt { input } = &mut state.interaction.overlay {
                input.push(ch);
                return vec![ConsoleEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::UploadPromptBackspace => {
            if let ShellOverlay::UploadPrompt { input } = &mut state.interaction.overlay {
                input.pop();
                return vec![ConsoleEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::UploadPromptSubmit => submit_upload_prompt(state),
        UserAction::UploadFiles(files) => upload_files(state, files),
        UserAction::UploadQuickAction { file_id } => {
            let Some(name) = state.uploads.get(&file_id).map(|file| file.name.clone()) else {
                return Vec::new();
            };
            merge(state, AppStatePatch::search_query(name))
        }
        UserAction::MarkNotificationRead(id) => {
            update_notifications(state, |list| notifications::mark_read(list, &id))
        }
        UserAction::MarkAllNotificationsRead => {
            update_notifications(state, notifications::mark_all_read)
        }
        UserAction::DeleteNotification(id) => {
            update_notifications(state, |list| notifications::delete(list, &id))
        }
        UserAction::ClearNotifications => update_notifications(state, notifications::clear),
        UserAction::CycleNotificationFilter => {
            state.views.notification_filter = state.views.notification_filter.next();
            state.views.cursor_mut(ViewId::Notifications).row = 0;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::RowUp => {
            let cursor = state.views.cursor_mut(state.routing.view);
            if cursor.row == 0 {
                return Vec::new();
            }
            cursor.row -= 1;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::RowDown => {
            let view = state.routing.view;
            let count = row_count(state, view);
            let cursor = state.views.cursor_mut(view);
            if cursor.row + 1 >= count {
                return Vec::new();
            }
            cursor.row += 1;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::NextLocalTab => {
            let view = state.routing.view;
            let tabs = catalog::tab_count(view);
            if tabs <= 1 {
                return Vec::new();
            }
            let cursor = state.views.cursor_mut(view);
            cursor.tab = (cursor.tab + 1) % tabs;
            cursor.row = 0;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ToggleSetting => toggle_setting(state),
        UserAction::LoginInput(_)
        | UserAction::LoginBackspace
        | UserAction::LoginFocusNext
        | UserAction::LoginCycleRole { .. }
        | UserAction::LoginQuickFill(_)
        | UserAction::ToggleShowPassword
        | UserAction::SubmitLogin
        | UserAction::Quit => Vec::new(),
    }
}

/// Actions available before a session exists. Everything else is dropped.
fn reduce_login(state: &mut ConsoleState, action: UserAction) -> Vec<ConsoleEffect> {
    if state.session.is_pending() {
        return Vec::new();
    }

    let form = &mut state.login;
    match action {
        UserAction::LoginInput(ch) => form.focused_mut().push(ch),
        UserAction::LoginBackspace => {
            form.focused_mut().pop();
        }
        UserAction::LoginFocusNext => form.focus = form.focus.next(),
        UserAction::LoginCycleRole { forward } => {
            form.role = if forward {
                form.role.next()
            } else {
                form.role.prev()
            };
        }
        UserAction::LoginQuickFill(role) => form.quick_fill(role),
        UserAction::ToggleShowPassword => form.show_password = !form.show_password,
        UserAction::SubmitLogin => return submit_login(state),
        _ => return Vec::new(),
    }
    vec![ConsoleEffect::RequestFrame]
}

fn submit_login(state: &mut ConsoleState) -> Vec<ConsoleEffect> {
    let ticket = state.allocate_ticket();
    let credentials = state.login.credentials();
    let delay_ms = state.customization.login_latency_ms;
    tracing::info!(ticket, role = credentials.role.as_str(), "login submitted");

    state.session = Session::Authenticating {
        ticket,
        credentials,
    };
    vec![
        ConsoleEffect::ScheduleLogin { ticket, delay_ms },
        ConsoleEffect::RequestFrame,
    ]
}

fn complete_login(state: &mut ConsoleState, ticket: u64) -> Vec<ConsoleEffect> {
    let credentials = match &state.session {
        Session::Authenticating {
            ticket: pending,
            credentials,
        } if *pending == ticket => credentials.clone(),
        _ => {
            tracing::debug!(ticket, "ignoring stale login completion");
            return Vec::new();
        }
    };

    let user = derive_user(&credentials);
    tracing::info!(user = %user.id, role = %user.role, "login completed");

    state.store = Some(Store::new(AppState::for_user(
        user.clone(),
        state.customization.default_region,
    )));
    state.session = Session::Authenticated { user };
    state.routing.view = ViewId::Dashboard;
    state.interaction.overlay = ShellOverlay::None;
    state.interaction.status = None;
    state.views = ViewLocalState::default();
    state.uploads.clear();
    state.login = LoginForm {
        role: credentials.role,
        ..LoginForm::default()
    };
    vec![ConsoleEffect::RequestFrame]
}

fn logout(state: &mut ConsoleState) -> Vec<ConsoleEffect> {
    if matches!(state.session, Session::Anonymous) {
        return Vec::new();
    }
    if let Some(user) = state.current_user() {
        tracing::info!(user = %user.id, "logout");
    }

    state.session = Session::Anonymous;
    state.store = None;
    state.routing.view = ViewId::Dashboard;
    state.interaction.overlay = ShellOverlay::None;
    state.interaction.status = None;
    state.views = ViewLocalState::default();
    state.uploads.clear();
    vec![ConsoleEffect::CancelAllTasks, ConsoleEffect::RequestFrame]
}

fn navigate(state: &mut ConsoleState, view: ViewId) -> Vec<ConsoleEffect> {
    tracing::debug!(view = view.as_str(), "navigate");
    state.routing.view = view;
    state.interaction.overlay = ShellOverlay::None;
    state.interaction.status = None;
    // The region may have changed while this view was off screen.
    clamp_row(state, view);
    vec![ConsoleEffect::RequestFrame]
}

fn merge(state: &mut ConsoleState, patch: AppStatePatch) -> Vec<ConsoleEffect> {
    let Some(store) = state.store.as_mut() else {
        return Vec::new();
    };
    let fields = patch.field_names();
    let revision = store.merge(patch);
    tracing::debug!(revision, ?fields, "state merged");

    // Region and notification changes can shrink the current list.
    clamp_row(state, state.routing.view);
    vec![ConsoleEffect::RequestFrame]
}

fn search_query_if_searching(state: &ConsoleState) -> Option<String> {
    if !matches!(state.interaction.overlay, ShellOverlay::Search { .. }) {
        return None;
    }
    state.app().map(|app| app.search_query.clone())
}

fn overlay_len(state: &ConsoleState) -> usize {
    match &state.interaction.overlay {
        ShellOverlay::Search { .. } => state
            .app()
            .map(|app| catalog::filtered_search_indices(&app.search_query).len())
            .unwrap_or(0),
        ShellOverlay::RegionMenu { .. } => Region::ALL.len(),
        ShellOverlay::ProfileMenu { .. } => ProfileMenuEntry::ALL.len(),
        ShellOverlay::None | ShellOverlay::UploadPrompt { .. } => 0,
    }
}

fn move_overlay_selection(state: &mut ConsoleState, down: bool) -> Vec<ConsoleEffect> {
    let len = overlay_len(state);
    let selected = match &mut state.interaction.overlay {
        ShellOverlay::Search { selected }
        | ShellOverlay::RegionMenu { selected }
        | ShellOverlay::ProfileMenu { selected } => selected,
        ShellOverlay::None | ShellOverlay::UploadPrompt { .. } => return Vec::new(),
    };
    if len > 0 {
        *selected = if down {
            (*selected + 1) % len
        } else if *selected == 0 {
            len - 1
        } else {
            *selected - 1
        };
    }
    vec![ConsoleEffect::RequestFrame]
}

fn submit_overlay(state: &mut ConsoleState) -> Vec<ConsoleEffect> {
    match state.interaction.overlay.clone() {
        ShellOverlay::None => Vec::new(),
        ShellOverlay::Search { selected } => {
            let target = state.app().and_then(|app| {
                catalog::filtered_search_indices(&app.search_query)
                    .get(selected)
                    .map(|idx| SEARCH_ITEMS[*idx].target)
            });
            state.interaction.overlay = ShellOverlay::None;
            let Some(view) = target else {
                return vec![ConsoleEffect::RequestFrame];
            };
            let mut effects = navigate(state, view);
            effects.extend(merge(state, AppStatePatch::search_query("")));
            effects.dedup();
            effects
        }
        ShellOverlay::RegionMenu { selected } => {
            reduce_user(state, UserAction::SelectRegion(selected))
        }
        ShellOverlay::ProfileMenu { selected } => {
            match ProfileMenuEntry::ALL.get(selected).copied() {
                Some(ProfileMenuEntry::Profile) => navigate(state, ViewId::Profile),
                Some(ProfileMenuEntry::Settings) => navigate(state, ViewId::Settings),
                Some(ProfileMenuEntry::SignOut) => logout(state),
                None => Vec::new(),
            }
        }
        ShellOverlay::UploadPrompt { .. } => submit_upload_prompt(state),
    }
}

fn export(state: &mut ConsoleState) -> Vec<ConsoleEffect> {
    let Some(app) = state.app() else {
        return Vec::new();
    };
    let now = Utc::now();
    let payload = ExportPayload::from_state(app, now);
    let file_name = export_file_name(now.timestamp_millis());
    tracing::info!(file = %file_name, region = %payload.region, "export requested");
    vec![ConsoleEffect::WriteExport { file_name, payload }]
}

fn submit_upload_prompt(state: &mut ConsoleState) -> Vec<ConsoleEffect> {
    let ShellOverlay::UploadPrompt { input } = &state.interaction.overlay else {
        return Vec::new();
    };
    let paths: Vec<String> = input
        .split(UPLOAD_PATH_SEPARATOR)
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect();
    state.interaction.overlay = ShellOverlay::None;

    if paths.is_empty() {
        return vec![ConsoleEffect::RequestFrame];
    }
    vec![
        ConsoleEffect::StatUploadPaths(paths),
        ConsoleEffect::RequestFrame,
    ]
}

fn upload_files(state: &mut ConsoleState, files: Vec<FileMeta>) -> Vec<ConsoleEffect> {
    if files.is_empty() {
        return Vec::new();
    }

    let uploaded_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut effects = Vec::with_capacity(files.len() + 1);
    for meta in files {
        let name = meta.name.clone();
        let file_id = state.uploads.enqueue(meta, uploaded_at.clone());
        tracing::info!(file = %file_id, name = %name, "upload processing");
        effects.push(ConsoleEffect::ScheduleUpload { file_id });
    }
    state.interaction.status = Some(format!(
        "Processing {} file(s)",
        state.uploads.processing_count()
    ));
    effects.push(ConsoleEffect::RequestFrame);
    effects
}

fn update_notifications<F>(state: &mut ConsoleState, update: F) -> Vec<ConsoleEffect>
where
    F: FnOnce(&[Notification]) -> Option<Vec<Notification>>,
{
    let Some(next) = state.app().and_then(|app| update(&app.notifications)) else {
        return Vec::new();
    };
    merge(state, AppStatePatch::notifications(next))
}

fn row_count(state: &ConsoleState, view: ViewId) -> usize {
    let cursor = state.views.cursor(view);
    match view {
        ViewId::Notifications => {
            let filter = state.views.notification_filter;
            state
                .app()
                .map(|app| notifications::visible(&app.notifications, filter).len())
                .unwrap_or(0)
        }
        ViewId::Upload => state.uploads.files().len(),
        _ => {
            let region = state
                .app()
                .map(|app| app.selected_region)
                .unwrap_or_default();
            catalog::row_count(view, region, cursor.tab)
        }
    }
}

fn clamp_row(state: &mut ConsoleState, view: ViewId) {
    let count = row_count(state, view);
    let cursor = state.views.cursor_mut(view);
    cursor.row = cursor.row.min(count.saturating_sub(1));
}

fn toggle_setting(state: &mut ConsoleState) -> Vec<ConsoleEffect> {
    if state.routing.view != ViewId::Settings {
        return Vec::new();
    }
    let cursor = state.views.cursor(ViewId::Settings);
    let group = &SETTINGS_GROUPS[cursor.tab % SETTINGS_GROUPS.len()];
    let Some(entry) = group.entries.get(cursor.row) else {
        return Vec::new();
    };
    if !matches!(entry.default, SettingValue::Toggle(_)) {
        return Vec::new();
    }

    let toggled = &mut state.views.toggled_settings;
    if !toggled.remove(entry.key) {
        toggled.insert(entry.key);
    }
    vec![ConsoleEffect::RequestFrame]
}

fn reduce_runtime(state: &mut ConsoleState, action: RuntimeAction) -> Vec<ConsoleEffect> {
    match action {
        RuntimeAction::LoginCompleted { ticket } => complete_login(state, ticket),
        RuntimeAction::UploadProcessed { file_id, insights } => {
            if !state.uploads.complete(&file_id, insights) {
                tracing::debug!(file = %file_id, "ignoring completion for unknown upload");
                return Vec::new();
            }
            tracing::info!(file = %file_id, "upload analysed");
            let pending = state.uploads.processing_count();
            state.interaction.status = Some(if pending == 0 {
                "Analysis complete".to_string()
            } else {
                format!("Processing {pending} file(s)")
            });
            vec![ConsoleEffect::RequestFrame]
        }
        RuntimeAction::ExportWritten { path } => {
            tracing::info!(path = %path, "export written");
            state.interaction.status = Some(format!("Exported to {path}"));
            vec![ConsoleEffect::RequestFrame]
        }
        RuntimeAction::ExportFailed { message } => {
            tracing::warn!(error = %message, "export failed");
            state.interaction.status = Some(format!("Export failed: {message}"));
            vec![ConsoleEffect::RequestFrame]
        }
        RuntimeAction::UploadRejected { path, reason } => {
            tracing::warn!(path = %path, reason = %reason, "upload skipped");
            state.interaction.status = Some(format!("Skipped {path}: {reason}"));
            vec![ConsoleEffect::RequestFrame]
        }
    }
}

#[cfg(test)]
mod tests;
