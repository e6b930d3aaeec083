use super::session::RoleCategory;
use super::state::ViewId;
use super::store::AppStatePatch;
use super::upload::FileInsights;
use super::upload::FileMeta;

#[derive(Debug, Clone)]
pub enum ConsoleAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone)]
pub enum UserAction {
    LoginInput(char),
    LoginBackspace,
    LoginFocusNext,
    LoginCycleRole { forward: bool },
    LoginQuickFill(RoleCategory),
    ToggleShowPassword,
    SubmitLogin,
    Logout,
    Navigate(ViewId),
    NavigateRaw(String),
    NextSidebarView,
    PrevSidebarView,
    Merge(AppStatePatch),
    ToggleSidebar,
    OpenSearch,
    SearchInput(char),
    SearchBackspace,
    ToggleRegionMenu,
    SelectRegion(usize),
    ToggleProfileMenu,
    OverlayMoveUp,
    OverlayMoveDown,
    OverlaySubmit,
    CloseOverlay,
    Export,
    OpenUploadPrompt,
    UploadPromptInput(char),
    UploadPromptBackspace,
    UploadPromptSubmit,
    UploadFiles(Vec<FileMeta>),
    UploadQuickAction { file_id: String },
    MarkNotificationRead(String),
    MarkAllNotificationsRead,
    DeleteNotification(String),
    ClearNotifications,
    CycleNotificationFilter,
    RowUp,
    RowDown,
    NextLocalTab,
    ToggleSetting,
    Quit,
}

/// Completions fed back by the event loop once a deferred task or an I/O
/// effect has run.
#[derive(Debug, Clone)]
pub enum RuntimeAction {
    LoginCompleted { ticket: u64 },
    UploadProcessed { file_id: String, insights: FileInsights },
    ExportWritten { path: String },
    ExportFailed { message: String },
    UploadRejected { path: String, reason: String },
}

impl From<UserAction> for ConsoleAction {
    fn from(action: UserAction) -> Self {
        Self::User(action)
    }
}

impl From<RuntimeAction> for ConsoleAction {
    fn from(action: RuntimeAction) -> Self {
        Self::Runtime(action)
    }
}
