use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use super::ConsoleEffect;
pub(super) use crate::actions::ConsoleAction;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::session::RoleCategory;
pub(super) use crate::session::Session;
pub(super) use crate::state::ConsoleOptions;
pub(super) use crate::state::ConsoleState;
pub(super) use crate::state::Region;
pub(super) use crate::state::ShellOverlay;
pub(super) use crate::state::ViewId;
pub(super) use crate::store::AppStatePatch;
pub(super) use crate::upload::FileInsights;
pub(super) use crate::upload::FileMeta;
pub(super) use crate::upload::InsightSummary;
pub(super) use crate::upload::KeyMetric;
pub(super) use crate::upload::Trend;
pub(super) use crate::upload::UploadStatus;

mod header;
mod notifications;
mod routing;
mod store_merge;
mod uploads;

fn state() -> ConsoleState {
    ConsoleState::new(ConsoleOptions::default())
}

fn user(state: &mut ConsoleState, action: UserAction) -> Vec<ConsoleEffect> {
    reduce(state, ConsoleAction::User(action))
}

fn runtime(state: &mut ConsoleState, action: RuntimeAction) -> Vec<ConsoleEffect> {
    reduce(state, ConsoleAction::Runtime(action))
}

/// Submits the form as-is and fires the login timer immediately.
fn login_with_form(state: &mut ConsoleState) {
    let effects = user(state, UserAction::SubmitLogin);
    let ticket = effects
        .iter()
        .find_map(|effect| match effect {
            ConsoleEffect::ScheduleLogin { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("submit schedules the login timer");
    runtime(state, RuntimeAction::LoginCompleted { ticket });
}

fn logged_in(role: RoleCategory) -> ConsoleState {
    let mut state = state();
    user(&mut state, UserAction::LoginQuickFill(role));
    login_with_form(&mut state);
    assert!(state.is_authenticated());
    state
}

fn file(name: &str, mime: &str, size: u64) -> FileMeta {
    FileMeta {
        name: name.to_string(),
        mime: mime.to_string(),
        size,
    }
}

fn insights() -> FileInsights {
    FileInsights {
        summary: InsightSummary {
            total_records: 1_200,
            data_quality: 91,
            completeness: 97,
            anomalies: 12,
        },
        key_metrics: vec![KeyMetric {
            label: "Revenue Impact".to_string(),
            value: "+$240K".to_string(),
            trend: Trend::Up,
        }],
        recommendations: vec!["Launch targeted campaign".to_string()],
        regions: Vec::new(),
        products: Vec::new(),
        ai_suggestions: Vec::new(),
    }
}

fn scheduled_uploads(effects: &[ConsoleEffect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            ConsoleEffect::ScheduleUpload { file_id } => Some(file_id.clone()),
            _ => None,
        })
        .collect()
}

fn assert_only_frame(effects: &[ConsoleEffect]) {
    assert_eq!(effects, [ConsoleEffect::RequestFrame].as_slice());
}
