use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use super::session::LoginForm;
use super::session::Session;
use super::store::Store;
use super::upload::UploadQueue;

pub const VIEW_COUNT: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Dashboard,
    Campaigns,
    Pricing,
    Communication,
    Revenue,
    Api,
    Users,
    Upload,
    Notifications,
    Profile,
    Settings,
}

impl ViewId {
    pub const ALL: [ViewId; VIEW_COUNT] = [
        Self::Dashboard,
        Self::Campaigns,
        Self::Pricing,
        Self::Communication,
        Self::Revenue,
        Self::Api,
        Self::Users,
        Self::Upload,
        Self::Notifications,
        Self::Profile,
        Self::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Campaigns => "campaigns",
            Self::Pricing => "pricing",
            Self::Communication => "communication",
            Self::Revenue => "revenue",
            Self::Api => "api",
            Self::Users => "users",
            Self::Upload => "upload",
            Self::Notifications => "notifications",
            Self::Profile => "profile",
            Self::Settings => "settings",
        }
    }

    /// Case-insensitive parse of a view identifier. Returns `None` for
    /// anything outside the closed set; the router decides the fallback.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    All,
    Kenya,
    Nigeria,
    Tanzania,
    Uganda,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Self::All,
        Self::Kenya,
        Self::Nigeria,
        Self::Tanzania,
        Self::Uganda,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Kenya => "kenya",
            Self::Nigeria => "nigeria",
            Self::Tanzania => "tanzania",
            Self::Uganda => "uganda",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Regions",
            Self::Kenya => "Kenya",
            Self::Nigeria => "Nigeria",
            Self::Tanzania => "Tanzania",
            Self::Uganda => "Uganda",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Kenya,
            Self::Kenya => Self::Nigeria,
            Self::Nigeria => Self::Tanzania,
            Self::Tanzania => Self::Uganda,
            Self::Uganda => Self::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Uganda,
            Self::Kenya => Self::All,
            Self::Nigeria => Self::Kenya,
            Self::Tanzania => Self::Nigeria,
            Self::Uganda => Self::Tanzania,
        }
    }

    /// `All` matches every row; a concrete region only matches itself.
    pub fn includes(self, other: Region) -> bool {
        self == Self::All || self == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
    Info,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub time: String,
    pub read: bool,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub region: String,
    pub permissions: Vec<String>,
    pub avatar: Option<String>,
}

impl User {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// The record every view reads. Lives only while a session is
/// authenticated and is rebuilt on each login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub search_query: String,
    pub selected_region: Region,
    pub notifications: Vec<Notification>,
    pub current_user: Option<User>,
}

impl AppState {
    pub fn for_user(user: User, region: Region) -> Self {
        Self {
            search_query: String::new(),
            selected_region: region,
            notifications: super::notifications::seed_notifications(),
            current_user: Some(user),
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationFilter {
    All,
    Unread,
    Kind(NotificationKind),
}

impl NotificationFilter {
    pub const CYCLE: [NotificationFilter; 6] = [
        Self::All,
        Self::Unread,
        Self::Kind(NotificationKind::Success),
        Self::Kind(NotificationKind::Warning),
        Self::Kind(NotificationKind::Error),
        Self::Kind(NotificationKind::Info),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unread => "unread",
            Self::Kind(kind) => kind.label(),
        }
    }

    pub fn matches(self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.read,
            Self::Kind(kind) => notification.kind == kind,
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::CYCLE
            .iter()
            .position(|filter| *filter == self)
            .unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOverlay {
    None,
    Search { selected: usize },
    RegionMenu { selected: usize },
    ProfileMenu { selected: usize },
    UploadPrompt { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuEntry {
    Profile,
    Settings,
    SignOut,
}

impl ProfileMenuEntry {
    pub const ALL: [ProfileMenuEntry; 3] = [Self::Profile, Self::Settings, Self::SignOut];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::SignOut => "Sign Out",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShellRouting {
    pub view: ViewId,
}

#[derive(Debug, Clone)]
pub struct ShellInteraction {
    pub overlay: ShellOverlay,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ShellCustomization {
    pub sidebar_collapsed: bool,
    pub default_region: Region,
    pub login_latency_ms: u64,
}

/// Cursor and sub-tab per view. Never shared between views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewCursor {
    pub row: usize,
    pub tab: usize,
}

#[derive(Debug, Clone)]
pub struct ViewLocalState {
    cursors: [ViewCursor; VIEW_COUNT],
    pub notification_filter: NotificationFilter,
    /// Setting keys flipped away from their catalog default.
    pub toggled_settings: BTreeSet<&'static str>,
}

impl Default for ViewLocalState {
    fn default() -> Self {
        Self {
            cursors: [ViewCursor::default(); VIEW_COUNT],
            notification_filter: NotificationFilter::All,
            toggled_settings: BTreeSet::new(),
        }
    }
}

impl ViewLocalState {
    pub fn cursor(&self, view: ViewId) -> ViewCursor {
        self.cursors[view.index()]
    }

    pub fn cursor_mut(&mut self, view: ViewId) -> &mut ViewCursor {
        &mut self.cursors[view.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub login_latency_ms: u64,
    pub default_region: Region,
    pub sidebar_collapsed: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            login_latency_ms: 1_500,
            default_region: Region::All,
            sidebar_collapsed: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsoleState {
    pub session: Session,
    pub store: Option<Store>,
    pub login: LoginForm,
    pub routing: ShellRouting,
    pub interaction: ShellInteraction,
    pub customization: ShellCustomization,
    pub uploads: UploadQueue,
    pub views: ViewLocalState,
    pub next_ticket: u64,
}

impl ConsoleState {
    pub fn new(options: ConsoleOptions) -> Self {
        Self {
            session: Session::Anonymous,
            store: None,
            login: LoginForm::default(),
            routing: ShellRouting {
                view: ViewId::Dashboard,
            },
            interaction: ShellInteraction {
                overlay: ShellOverlay::None,
                status: None,
            },
            customization: ShellCustomization {
                sidebar_collapsed: options.sidebar_collapsed,
                default_region: options.default_region,
                login_latency_ms: options.login_latency_ms,
            },
            uploads: UploadQueue::default(),
            views: ViewLocalState::default(),
            next_ticket: 1,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// Shared state of the authenticated session, if any.
    pub fn app(&self) -> Option<&AppState> {
        self.store.as_ref().map(Store::get)
    }

    pub fn allocate_ticket(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.saturating_add(1);
        ticket
    }
}
