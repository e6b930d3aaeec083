use super::state::ViewId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSpec {
    pub id: ViewId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub nav_label: &'static str,
    pub in_sidebar: bool,
    pub hotkey: char,
}

pub static VIEW_REGISTRY: [ViewSpec; 11] = [
    ViewSpec {
        id: ViewId::Dashboard,
        title: "Platform Overview",
        subtitle: "Real-time insights across your agri-value chain operations",
        nav_label: "Dashboard",
        in_sidebar: true,
        hotkey: '1',
    },
    ViewSpec {
        id: ViewId::Campaigns,
        title: "GTM Campaign Manager",
        subtitle: "Plan, launch and track go-to-market campaigns",
        nav_label: "GTM Campaigns",
        in_sidebar: true,
        hotkey: '2',
    },
    ViewSpec {
        id: ViewId::Pricing,
        title: "Dynamic Pricing Engine",
        subtitle: "AI-recommended price changes awaiting approval",
        nav_label: "Dynamic Pricing",
        in_sidebar: true,
        hotkey: '3',
    },
    ViewSpec {
        id: ViewId::Communication,
        title: "Communication Center",
        subtitle: "WhatsApp and SMS messaging with field contacts",
        nav_label: "Communication",
        in_sidebar: true,
        hotkey: '4',
    },
    ViewSpec {
        id: ViewId::Revenue,
        title: "Revenue Analytics",
        subtitle: "Comprehensive revenue insights and performance tracking",
        nav_label: "Revenue Analytics",
        in_sidebar: true,
        hotkey: '5',
    },
    ViewSpec {
        id: ViewId::Api,
        title: "API Integrations",
        subtitle: "Connected enterprise systems and data feeds",
        nav_label: "API Integrations",
        in_sidebar: true,
        hotkey: '6',
    },
    ViewSpec {
        id: ViewId::Users,
        title: "User Management",
        subtitle: "Team members, roles and permissions",
        nav_label: "User Management",
        in_sidebar: true,
        hotkey: '7',
    },
    ViewSpec {
        id: ViewId::Upload,
        title: "File Upload & AI Analysis",
        subtitle: "Upload data files to get instant AI-powered insights",
        nav_label: "Upload",
        in_sidebar: false,
        hotkey: 'u',
    },
    ViewSpec {
        id: ViewId::Notifications,
        title: "Notifications",
        subtitle: "Alerts from pricing, campaigns, systems and the field",
        nav_label: "Notifications",
        in_sidebar: false,
        hotkey: 'n',
    },
    ViewSpec {
        id: ViewId::Profile,
        title: "User Profile",
        subtitle: "Your account details and recent activity",
        nav_label: "Profile",
        in_sidebar: false,
        hotkey: 'P',
    },
    ViewSpec {
        id: ViewId::Settings,
        title: "Settings",
        subtitle: "Platform preferences",
        nav_label: "Settings",
        in_sidebar: false,
        hotkey: 's',
    },
];

/// Result of routing a raw identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub view: ViewId,
    pub fallback: bool,
}

pub fn resolve(view: ViewId) -> &'static ViewSpec {
    &VIEW_REGISTRY[view.index()]
}

/// Routes an unchecked identifier. Anything outside the closed set lands on
/// the dashboard with `fallback` set.
pub fn resolve_raw(raw: &str) -> Route {
    match ViewId::parse(raw) {
        Some(view) => Route {
            view,
            fallback: false,
        },
        None => Route {
            view: ViewId::Dashboard,
            fallback: true,
        },
    }
}

pub fn view_for_hotkey(key: char) -> Option<ViewId> {
    VIEW_REGISTRY
        .iter()
        .find(|spec| spec.hotkey == key)
        .map(|spec| spec.id)
}

pub fn sidebar_views() -> impl Iterator<Item = &'static ViewSpec> {
    VIEW_REGISTRY.iter().filter(|spec| spec.in_sidebar)
}

pub fn next_sidebar_view(current: ViewId) -> ViewId {
    step_sidebar(current, 1)
}

pub fn prev_sidebar_view(current: ViewId) -> ViewId {
    step_sidebar(current, -1)
}

fn step_sidebar(current: ViewId, delta: isize) -> ViewId {
    let order: Vec<ViewId> = sidebar_views().map(|spec| spec.id).collect();
    if order.is_empty() {
        return current;
    }

    let Some(idx) = order.iter().position(|view| *view == current) else {
        return order[0];
    };
    let len = order.len() as isize;
    order[(idx as isize + delta).rem_euclid(len) as usize]
}
