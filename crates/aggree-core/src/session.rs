use serde::Deserialize;
use serde::Serialize;

use super::state::User;

pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    #[default]
    Admin,
    Manager,
    Agent,
}

impl RoleCategory {
    pub const ALL: [RoleCategory; 3] = [Self::Admin, Self::Manager, Self::Agent];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Agent => "agent",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn next(self) -> Self {
        match self {
            Self::Admin => Self::Manager,
            Self::Manager => Self::Agent,
            Self::Agent => Self::Admin,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Admin => Self::Agent,
            Self::Manager => Self::Admin,
            Self::Agent => Self::Manager,
        }
    }

    pub fn profile(self) -> &'static RoleProfile {
        role_profile(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub category: RoleCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub default_name: &'static str,
    pub default_email: &'static str,
    pub default_region: &'static str,
    pub permissions: &'static [&'static str],
}

pub static ROLE_PROFILES: [RoleProfile; 3] = [
    RoleProfile {
        category: RoleCategory::Admin,
        title: "System Administrator",
        description: "Full platform access with user management",
        default_name: "Sarah Mwangi",
        default_email: "admin@aggree.ai",
        default_region: "All Regions",
        permissions: &["campaigns", "pricing", "analytics", "api", "users", "settings"],
    },
    RoleProfile {
        category: RoleCategory::Manager,
        title: "Regional Manager",
        description: "Campaign and pricing management",
        default_name: "John Okafor",
        default_email: "manager@aggree.ai",
        default_region: "Kenya",
        permissions: &["campaigns", "pricing", "analytics", "communication"],
    },
    RoleProfile {
        category: RoleCategory::Agent,
        title: "Field Agent",
        description: "Communication and field operations",
        default_name: "Grace Ndovu",
        default_email: "agent@aggree.ai",
        default_region: "Tanzania",
        permissions: &["communication", "campaigns"],
    },
];

pub fn role_profile(category: RoleCategory) -> &'static RoleProfile {
    match category {
        RoleCategory::Admin => &ROLE_PROFILES[0],
        RoleCategory::Manager => &ROLE_PROFILES[1],
        RoleCategory::Agent => &ROLE_PROFILES[2],
    }
}

/// Whatever the login form holds at submit time. Nothing here is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub role: RoleCategory,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn for_role(role: RoleCategory) -> Self {
        Self {
            role,
            email: String::new(),
            password: String::new(),
        }
    }
}

/// Builds the signed-in user from the role table. The password is ignored
/// and an empty email falls back to the role's default address. Any other
/// email is kept exactly as typed.
pub fn derive_user(credentials: &Credentials) -> User {
    let profile = role_profile(credentials.role);
    let email = credentials.email.as_str();
    User {
        id: format!("{}-001", credentials.role.as_str()),
        name: profile.default_name.to_string(),
        email: if email.is_empty() {
            profile.default_email.to_string()
        } else {
            email.to_string()
        },
        role: profile.title.to_string(),
        region: profile.default_region.to_string(),
        permissions: profile
            .permissions
            .iter()
            .map(|permission| permission.to_string())
            .collect(),
        avatar: None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    /// Login submitted, waiting on the simulated latency timer.
    Authenticating {
        ticket: u64,
        credentials: Credentials,
    },
    Authenticated {
        user: User,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Authenticating { .. })
    }

    pub fn current_user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user } => Some(user),
            _ => None,
        }
    }

    pub fn pending_ticket(&self) -> Option<u64> {
        match self {
            Self::Authenticating { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub role: RoleCategory,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            role: self.role,
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Demo shortcut: selects the role and fills its default credentials.
    pub fn quick_fill(&mut self, role: RoleCategory) {
        self.role = role;
        self.email = role_profile(role).default_email.to_string();
        self.password = DEMO_PASSWORD.to_string();
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn masked_password(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "*".repeat(self.password.chars().count())
        }
    }
}
