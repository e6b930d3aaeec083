//! Fixed demo datasets rendered by the views.

use super::state::Region;
use super::state::ViewId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub up: bool,
}

pub static DASHBOARD_METRICS: [MetricCard; 4] = [
    MetricCard { title: "Total Revenue", value: "$2.4M", change: "+12.5%", up: true },
    MetricCard { title: "Active Campaigns", value: "12", change: "+3 this week", up: true },
    MetricCard { title: "Field Contacts", value: "1,247", change: "+8.2%", up: true },
    MetricCard { title: "Price Updates", value: "248", change: "-2.1%", up: false },
];

pub static QUICK_STATS: [(&str, &str); 3] = [
    ("Active Campaigns", "12"),
    ("Revenue This Month", "$2.4M"),
    ("Price Updates", "248"),
];

pub static MONTHLY_PERFORMANCE: [(&str, u64); 8] = [
    ("Jan", 65),
    ("Feb", 78),
    ("Mar", 52),
    ("Apr", 89),
    ("May", 76),
    ("Jun", 95),
    ("Jul", 88),
    ("Aug", 92),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSummary {
    pub region: Region,
    pub revenue: &'static str,
    pub growth: &'static str,
    pub campaigns: u32,
    pub active: bool,
}

pub static REGION_SUMMARIES: [RegionSummary; 4] = [
    RegionSummary { region: Region::Kenya, revenue: "$1.2M", growth: "+15%", campaigns: 5, active: true },
    RegionSummary { region: Region::Nigeria, revenue: "$950K", growth: "+12%", campaigns: 4, active: true },
    RegionSummary { region: Region::Tanzania, revenue: "$280K", growth: "+8%", campaigns: 2, active: true },
    RegionSummary { region: Region::Uganda, revenue: "$125K", growth: "+5%", campaigns: 1, active: false },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityItem {
    pub action: &'static str,
    pub product: &'static str,
    pub region: Region,
    pub time: &'static str,
}

pub static RECENT_ACTIVITY: [ActivityItem; 4] = [
    ActivityItem { action: "Price update approved", product: "Sugar Bundle A", region: Region::Kenya, time: "2 hours ago" },
    ActivityItem { action: "Campaign launched", product: "Beverage Mix Pro", region: Region::Nigeria, time: "4 hours ago" },
    ActivityItem { action: "WhatsApp message sent", product: "Seasonal Promo", region: Region::Kenya, time: "6 hours ago" },
    ActivityItem { action: "Revenue threshold reached", product: "Premium Sugar", region: Region::Tanzania, time: "1 day ago" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopProduct {
    pub name: &'static str,
    pub revenue: &'static str,
    pub margin: &'static str,
    pub growth: &'static str,
}

pub static TOP_PRODUCTS: [TopProduct; 4] = [
    TopProduct { name: "Premium Sugar 50kg", revenue: "$245K", margin: "23%", growth: "+15%" },
    TopProduct { name: "Beverage Mix Pro", revenue: "$189K", margin: "18%", growth: "+12%" },
    TopProduct { name: "Organic Cane Sugar", revenue: "$156K", margin: "28%", growth: "+8%" },
    TopProduct { name: "Industrial Syrup", revenue: "$134K", margin: "15%", growth: "+5%" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Paused,
    Scheduled,
}

impl CampaignStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Scheduled => "scheduled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Campaign {
    pub name: &'static str,
    pub product: &'static str,
    pub region: Region,
    pub status: CampaignStatus,
    pub start: &'static str,
    pub end: &'static str,
    pub budget: &'static str,
    pub spent: &'static str,
    pub reach: &'static str,
    pub conversions: &'static str,
    pub performance: u16,
}

pub static CAMPAIGNS: [Campaign; 4] = [
    Campaign {
        name: "Q1 Sugar Bundle Promotion",
        product: "Premium Sugar 50kg",
        region: Region::Kenya,
        status: CampaignStatus::Active,
        start: "2024-01-15",
        end: "2024-03-15",
        budget: "$25,000",
        spent: "$18,500",
        reach: "12,450",
        conversions: "2,890",
        performance: 92,
    },
    Campaign {
        name: "Beverage Mix Launch",
        product: "Beverage Mix Pro",
        region: Region::Nigeria,
        status: CampaignStatus::Active,
        start: "2024-02-01",
        end: "2024-04-01",
        budget: "$35,000",
        spent: "$22,100",
        reach: "18,750",
        conversions: "4,230",
        performance: 87,
    },
    Campaign {
        name: "Seasonal Harvest Offer",
        product: "Organic Cane Sugar",
        region: Region::Tanzania,
        status: CampaignStatus::Paused,
        start: "2024-01-20",
        end: "2024-03-20",
        budget: "$15,000",
        spent: "$8,900",
        reach: "7,890",
        conversions: "1,560",
        performance: 78,
    },
    Campaign {
        name: "Industrial Syrup B2B",
        product: "Industrial Syrup",
        region: Region::Kenya,
        status: CampaignStatus::Scheduled,
        start: "2024-03-01",
        end: "2024-05-01",
        budget: "$40,000",
        spent: "$0",
        reach: "0",
        conversions: "0",
        performance: 0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceStatus {
    PendingApproval,
    Approved,
    Rejected,
    AutoApproved,
}

impl PriceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::PendingApproval => "pending approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::AutoApproved => "auto approved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceProposal {
    pub product: &'static str,
    pub current_price: u32,
    pub suggested_price: u32,
    pub region: Region,
    pub demand: &'static str,
    pub elasticity: f32,
    pub margin: u8,
    pub last_update: &'static str,
    pub status: PriceStatus,
}

impl PriceProposal {
    pub fn change_percent(&self) -> f32 {
        if self.current_price == 0 {
            return 0.0;
        }
        (self.suggested_price as f32 - self.current_price as f32) / self.current_price as f32
            * 100.0
    }
}

pub static PRICE_PROPOSALS: [PriceProposal; 4] = [
    PriceProposal {
        product: "Premium Sugar 50kg",
        current_price: 120,
        suggested_price: 125,
        region: Region::Kenya,
        demand: "high",
        elasticity: 0.85,
        margin: 23,
        last_update: "2 hours ago",
        status: PriceStatus::PendingApproval,
    },
    PriceProposal {
        product: "Beverage Mix Pro",
        current_price: 85,
        suggested_price: 88,
        region: Region::Nigeria,
        demand: "medium",
        elasticity: 0.92,
        margin: 18,
        last_update: "4 hours ago",
        status: PriceStatus::Approved,
    },
    PriceProposal {
        product: "Organic Cane Sugar",
        current_price: 145,
        suggested_price: 140,
        region: Region::Tanzania,
        demand: "low",
        elasticity: 0.78,
        margin: 28,
        last_update: "1 day ago",
        status: PriceStatus::Rejected,
    },
    PriceProposal {
        product: "Industrial Syrup",
        current_price: 200,
        suggested_price: 205,
        region: Region::Kenya,
        demand: "high",
        elasticity: 0.65,
        margin: 15,
        last_update: "6 hours ago",
        status: PriceStatus::AutoApproved,
    },
];

pub static PRICING_RULES: [(&str, bool); 4] = [
    ("Auto-approve price changes < 5%", true),
    ("Require approval for margin drop > 3%", true),
    ("Block price increases during low demand", true),
    ("Consider competitor pricing data", false),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    WhatsApp,
    Sms,
}

impl Channel {
    pub fn label(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Sms => "SMS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub channel: Channel,
    pub recipient: &'static str,
    pub phone: &'static str,
    pub body: &'static str,
    pub status: &'static str,
    pub timestamp: &'static str,
    pub response: Option<&'static str>,
    pub campaign: &'static str,
}

pub static MESSAGES: [Message; 4] = [
    Message {
        channel: Channel::WhatsApp,
        recipient: "John Kamau",
        phone: "+254712345678",
        body: "New pricing for Premium Sugar 50kg: $125. Accept or reject?",
        status: "delivered",
        timestamp: "2024-01-15 10:30",
        response: Some("Accept"),
        campaign: "Q1 Sugar Bundle Promotion",
    },
    Message {
        channel: Channel::Sms,
        recipient: "Mary Okafor",
        phone: "+2348012345678",
        body: "Beverage Mix Pro launch: Special offer 20% off. Reply YES to order.",
        status: "pending",
        timestamp: "2024-01-15 09:15",
        response: None,
        campaign: "Beverage Mix Launch",
    },
    Message {
        channel: Channel::WhatsApp,
        recipient: "David Mwangi",
        phone: "+254722345678",
        body: "Weather alert: Rain expected. Adjust harvest schedule accordingly.",
        status: "read",
        timestamp: "2024-01-15 08:45",
        response: Some("Acknowledged"),
        campaign: "Weather Advisory",
    },
    Message {
        channel: Channel::Sms,
        recipient: "Grace Ndovu",
        phone: "+255712345678",
        body: "Organic Cane Sugar available. Price: $140/50kg. Bulk discounts available.",
        status: "failed",
        timestamp: "2024-01-15 07:30",
        response: None,
        campaign: "Seasonal Harvest Offer",
    },
];

pub static MESSAGE_TABS: [&str; 3] = ["WhatsApp", "SMS", "Campaigns"];

/// Messages sent over the channel shown by `tab`. The campaigns tab lists
/// [`BROADCASTS`] instead, so it has no messages.
pub fn messages_for_tab(tab: usize) -> Vec<&'static Message> {
    let channel = match tab % MESSAGE_TABS.len() {
        0 => Channel::WhatsApp,
        1 => Channel::Sms,
        _ => return Vec::new(),
    };
    MESSAGES
        .iter()
        .filter(|message| message.channel == channel)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Broadcast {
    pub name: &'static str,
    pub kind: &'static str,
    pub recipients: u32,
    pub sent: u32,
    pub delivered: u32,
    pub responded: u32,
    pub active: bool,
}

impl Broadcast {
    /// Responses as a whole percentage of messages sent.
    pub fn response_rate(&self) -> u16 {
        if self.sent == 0 {
            return 0;
        }
        ((u64::from(self.responded) * 100) / u64::from(self.sent)) as u16
    }
}

pub static BROADCASTS: [Broadcast; 3] = [
    Broadcast {
        name: "Q1 Sugar Bundle Promotion",
        kind: "pricing",
        recipients: 1_247,
        sent: 1_247,
        delivered: 1_198,
        responded: 892,
        active: true,
    },
    Broadcast {
        name: "Beverage Mix Launch",
        kind: "product",
        recipients: 1_850,
        sent: 1_850,
        delivered: 1_789,
        responded: 1_234,
        active: true,
    },
    Broadcast {
        name: "Weather Advisory",
        kind: "advisory",
        recipients: 890,
        sent: 890,
        delivered: 876,
        responded: 654,
        active: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    pub kenya: u64,
    pub nigeria: u64,
    pub tanzania: u64,
}

impl MonthlyRevenue {
    pub fn for_region(&self, region: Region) -> u64 {
        match region {
            Region::All => self.kenya + self.nigeria + self.tanzania,
            Region::Kenya => self.kenya,
            Region::Nigeria => self.nigeria,
            Region::Tanzania => self.tanzania,
            Region::Uganda => 0,
        }
    }
}

pub static MONTHLY_REVENUE: [MonthlyRevenue; 6] = [
    MonthlyRevenue { month: "Jan", kenya: 450_000, nigeria: 380_000, tanzania: 120_000 },
    MonthlyRevenue { month: "Feb", kenya: 520_000, nigeria: 420_000, tanzania: 150_000 },
    MonthlyRevenue { month: "Mar", kenya: 490_000, nigeria: 460_000, tanzania: 180_000 },
    MonthlyRevenue { month: "Apr", kenya: 580_000, nigeria: 510_000, tanzania: 210_000 },
    MonthlyRevenue { month: "May", kenya: 640_000, nigeria: 580_000, tanzania: 240_000 },
    MonthlyRevenue { month: "Jun", kenya: 710_000, nigeria: 620_000, tanzania: 280_000 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRevenue {
    pub name: &'static str,
    pub revenue: u64,
    pub margin: u8,
    pub growth: u8,
    pub volume: u32,
}

pub static PRODUCT_REVENUE: [ProductRevenue; 4] = [
    ProductRevenue { name: "Premium Sugar 50kg", revenue: 850_000, margin: 23, growth: 15, volume: 3_400 },
    ProductRevenue { name: "Beverage Mix Pro", revenue: 620_000, margin: 18, growth: 12, volume: 2_800 },
    ProductRevenue { name: "Organic Cane Sugar", revenue: 450_000, margin: 28, growth: 8, volume: 1_800 },
    ProductRevenue { name: "Industrial Syrup", revenue: 380_000, margin: 15, growth: 5, volume: 1_200 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionRevenue {
    pub region: Region,
    pub revenue: u64,
    pub target: u64,
    pub growth: u8,
    pub customers: u32,
}

pub static REGION_REVENUE: [RegionRevenue; 3] = [
    RegionRevenue { region: Region::Kenya, revenue: 1_200_000, target: 1_100_000, growth: 15, customers: 450 },
    RegionRevenue { region: Region::Nigeria, revenue: 950_000, target: 900_000, growth: 12, customers: 380 },
    RegionRevenue { region: Region::Tanzania, revenue: 280_000, target: 250_000, growth: 8, customers: 120 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationStatus {
    Connected,
    Warning,
    Error,
}

impl IntegrationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integration {
    pub name: &'static str,
    pub description: &'static str,
    pub status: IntegrationStatus,
    pub last_sync: &'static str,
    pub endpoint: &'static str,
    pub requests: u32,
    pub uptime: &'static str,
}

pub static INTEGRATIONS: [Integration; 5] = [
    Integration {
        name: "SAP ERP",
        description: "Enterprise resource planning system integration",
        status: IntegrationStatus::Connected,
        last_sync: "2024-01-15 10:30",
        endpoint: "https://api.sap.com/v1",
        requests: 1_247,
        uptime: "99.8%",
    },
    Integration {
        name: "Weather API",
        description: "Real-time weather data for agricultural insights",
        status: IntegrationStatus::Connected,
        last_sync: "2024-01-15 11:45",
        endpoint: "https://api.weather.com/v1",
        requests: 892,
        uptime: "99.9%",
    },
    Integration {
        name: "Oracle ERP",
        description: "Oracle enterprise system integration",
        status: IntegrationStatus::Error,
        last_sync: "2024-01-14 15:20",
        endpoint: "https://api.oracle.com/v2",
        requests: 456,
        uptime: "97.2%",
    },
    Integration {
        name: "Africa Telco Gateway",
        description: "SMS and communication services",
        status: IntegrationStatus::Connected,
        last_sync: "2024-01-15 11:50",
        endpoint: "https://api.telco.africa/v1",
        requests: 2_134,
        uptime: "99.5%",
    },
    Integration {
        name: "WhatsApp Business API",
        description: "WhatsApp messaging integration",
        status: IntegrationStatus::Warning,
        last_sync: "2024-01-15 09:15",
        endpoint: "https://api.whatsapp.com/v1",
        requests: 1_678,
        uptime: "98.7%",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiLogEntry {
    pub timestamp: &'static str,
    pub endpoint: &'static str,
    pub method: &'static str,
    pub status: u16,
    pub response_time: &'static str,
    pub message: &'static str,
}

pub static API_LOGS: [ApiLogEntry; 4] = [
    ApiLogEntry {
        timestamp: "2024-01-15 11:45:23",
        endpoint: "Weather API",
        method: "GET",
        status: 200,
        response_time: "245ms",
        message: "Weather data retrieved successfully",
    },
    ApiLogEntry {
        timestamp: "2024-01-15 11:44:12",
        endpoint: "SAP ERP",
        method: "POST",
        status: 201,
        response_time: "1.2s",
        message: "Product pricing updated",
    },
    ApiLogEntry {
        timestamp: "2024-01-15 11:42:55",
        endpoint: "WhatsApp API",
        method: "POST",
        status: 429,
        response_time: "890ms",
        message: "Rate limit exceeded",
    },
    ApiLogEntry {
        timestamp: "2024-01-15 11:41:33",
        endpoint: "Oracle ERP",
        method: "GET",
        status: 500,
        response_time: "2.5s",
        message: "Internal server error",
    },
];

pub static API_TABS: [&str; 3] = ["Integrations", "Logs", "Settings"];

/// Gateway-wide settings shown on the API settings tab, as label and value.
pub static API_SETTINGS: [(&str, &str); 6] = [
    ("Default Timeout (ms)", "5000"),
    ("Retry Attempts", "3"),
    ("Rate Limit (requests/minute)", "1000"),
    ("Log Level", "INFO"),
    ("Enable API Key Rotation", "every 90 days"),
    ("Enable Request Logging", "all requests"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub region: Region,
    pub active: bool,
    pub last_login: &'static str,
    pub phone: &'static str,
    pub campaigns: u32,
    pub permissions: &'static [&'static str],
}

pub static TEAM: [TeamMember; 5] = [
    TeamMember {
        name: "Sarah Mwangi",
        email: "sarah.mwangi@aggree.ai",
        role: "Regional Manager",
        region: Region::Kenya,
        active: true,
        last_login: "2024-01-15 10:30",
        phone: "+254712345678",
        campaigns: 12,
        permissions: &["campaigns", "pricing", "analytics"],
    },
    TeamMember {
        name: "John Okafor",
        email: "john.okafor@aggree.ai",
        role: "Sales Manager",
        region: Region::Nigeria,
        active: true,
        last_login: "2024-01-15 09:15",
        phone: "+2348012345678",
        campaigns: 8,
        permissions: &["campaigns", "communication"],
    },
    TeamMember {
        name: "Grace Ndovu",
        email: "grace.ndovu@aggree.ai",
        role: "Field Agent",
        region: Region::Tanzania,
        active: false,
        last_login: "2024-01-14 16:45",
        phone: "+255712345678",
        campaigns: 3,
        permissions: &["communication"],
    },
    TeamMember {
        name: "David Mwangi",
        email: "david.mwangi@aggree.ai",
        role: "Analytics Manager",
        region: Region::Kenya,
        active: true,
        last_login: "2024-01-15 11:20",
        phone: "+254722345678",
        campaigns: 0,
        permissions: &["analytics", "api"],
    },
    TeamMember {
        name: "Mary Kamau",
        email: "mary.kamau@aggree.ai",
        role: "Admin",
        region: Region::All,
        active: true,
        last_login: "2024-01-15 08:00",
        phone: "+254733345678",
        campaigns: 25,
        permissions: &["campaigns", "pricing", "analytics", "api", "users"],
    },
];

pub static PROFILE_STATS: [(&str, &str); 4] = [
    ("Campaigns Managed", "24"),
    ("Price Approvals", "156"),
    ("Revenue Generated", "$2.4M"),
    ("Days Active", "342"),
];

pub static PROFILE_ACTIVITY: [(&str, &str); 5] = [
    ("Approved price change for Premium Sugar 50kg", "2 hours ago"),
    ("Created Q2 Beverage Mix campaign", "4 hours ago"),
    ("Updated user permissions for John Okafor", "1 day ago"),
    ("Generated revenue analytics report", "2 days ago"),
    ("Configured SAP ERP integration", "3 days ago"),
];

pub static PROFILE_TABS: [&str; 3] = ["Profile", "Activity", "Security"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
    Toggle(bool),
    Text(&'static str),
    Number(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub default: SettingValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsGroup {
    pub name: &'static str,
    pub entries: &'static [SettingEntry],
}

const fn toggle(key: &'static str, label: &'static str, on: bool) -> SettingEntry {
    SettingEntry { key, label, default: SettingValue::Toggle(on) }
}

const fn text(key: &'static str, label: &'static str, value: &'static str) -> SettingEntry {
    SettingEntry { key, label, default: SettingValue::Text(value) }
}

const fn number(key: &'static str, label: &'static str, value: u32) -> SettingEntry {
    SettingEntry { key, label, default: SettingValue::Number(value) }
}

pub static SETTINGS_GROUPS: [SettingsGroup; 5] = [
    SettingsGroup {
        name: "General",
        entries: &[
            text("general.language", "Language", "English"),
            text("general.timezone", "Timezone", "Africa/Nairobi"),
            text("general.date_format", "Date format", "DD/MM/YYYY"),
            text("general.currency", "Currency", "USD"),
            toggle("general.auto_save", "Auto save", true),
        ],
    },
    SettingsGroup {
        name: "Notifications",
        entries: &[
            toggle("notifications.email", "Email notifications", true),
            toggle("notifications.push", "Push notifications", true),
            toggle("notifications.sms", "SMS notifications", false),
            toggle("notifications.price_alerts", "Price alerts", true),
            toggle("notifications.campaign_updates", "Campaign updates", true),
            toggle("notifications.system_alerts", "System alerts", true),
            toggle("notifications.weekly_reports", "Weekly reports", true),
            toggle("notifications.marketing", "Marketing emails", false),
        ],
    },
    SettingsGroup {
        name: "Security",
        entries: &[
            toggle("security.two_factor", "Two-factor authentication", false),
            number("security.session_timeout", "Session timeout (min)", 30),
            toggle("security.login_notifications", "Login notifications", true),
            toggle("security.api_key_rotation", "API key rotation", true),
            toggle("security.audit_logs", "Audit logs", true),
            toggle("security.ip_whitelist", "IP whitelist", false),
        ],
    },
    SettingsGroup {
        name: "Integrations",
        entries: &[
            toggle("integrations.sap_erp", "SAP ERP", true),
            toggle("integrations.oracle_erp", "Oracle ERP", false),
            toggle("integrations.whatsapp", "WhatsApp API", true),
            toggle("integrations.weather", "Weather API", true),
            toggle("integrations.telco", "Telco gateway", true),
            toggle("integrations.auto_sync", "Auto sync", true),
            number("integrations.sync_interval", "Sync interval (min)", 15),
            number("integrations.retry_attempts", "Retry attempts", 3),
        ],
    },
    SettingsGroup {
        name: "Appearance",
        entries: &[
            text("appearance.theme", "Theme", "light"),
            toggle("appearance.compact", "Compact mode", false),
            toggle("appearance.animations", "Show animations", true),
            toggle("appearance.high_contrast", "High contrast", false),
            text("appearance.font_size", "Font size", "medium"),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Campaign,
    Product,
    User,
    Report,
    Integration,
}

impl SearchKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Campaign => "campaign",
            Self::Product => "product",
            Self::User => "user",
            Self::Report => "report",
            Self::Integration => "integration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchItem {
    pub kind: SearchKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub target: ViewId,
}

pub static SEARCH_ITEMS: [SearchItem; 5] = [
    SearchItem {
        kind: SearchKind::Campaign,
        title: "Q1 Sugar Bundle Promotion",
        subtitle: "Active campaign in Kenya",
        target: ViewId::Campaigns,
    },
    SearchItem {
        kind: SearchKind::Product,
        title: "Premium Sugar 50kg",
        subtitle: "Price: $125, Margin: 23%",
        target: ViewId::Pricing,
    },
    SearchItem {
        kind: SearchKind::User,
        title: "John Okafor",
        subtitle: "Sales Manager - Nigeria",
        target: ViewId::Users,
    },
    SearchItem {
        kind: SearchKind::Report,
        title: "Revenue Analytics",
        subtitle: "Monthly performance report",
        target: ViewId::Revenue,
    },
    SearchItem {
        kind: SearchKind::Integration,
        title: "SAP ERP Integration",
        subtitle: "Connected - Last sync 2h ago",
        target: ViewId::Api,
    },
];

/// Indices into [`SEARCH_ITEMS`] whose title or subtitle contains `query`,
/// case-insensitively. The query is matched as typed, so surrounding spaces
/// count. An empty query matches nothing.
pub fn filtered_search_indices(query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    SEARCH_ITEMS
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            if item.title.to_lowercase().contains(&query)
                || item.subtitle.to_lowercase().contains(&query)
            {
                Some(idx)
            } else {
                None
            }
        })
        .collect()
}

pub fn campaigns_in(region: Region) -> Vec<&'static Campaign> {
    CAMPAIGNS.iter().filter(|c| region.includes(c.region)).collect()
}

pub fn proposals_in(region: Region) -> Vec<&'static PriceProposal> {
    PRICE_PROPOSALS
        .iter()
        .filter(|p| region.includes(p.region))
        .collect()
}

pub fn region_summaries_in(region: Region) -> Vec<&'static RegionSummary> {
    REGION_SUMMARIES
        .iter()
        .filter(|r| region.includes(r.region))
        .collect()
}

pub fn team_in(region: Region) -> Vec<&'static TeamMember> {
    TEAM.iter()
        .filter(|member| member.region == Region::All || region.includes(member.region))
        .collect()
}

/// Number of rows the view's cursor can move over in its current tab.
pub fn row_count(view: ViewId, region: Region, tab: usize) -> usize {
    match view {
        ViewId::Dashboard => RECENT_ACTIVITY.len(),
        ViewId::Campaigns => campaigns_in(region).len(),
        ViewId::Pricing => proposals_in(region).len(),
        ViewId::Communication => match tab % MESSAGE_TABS.len() {
            2 => BROADCASTS.len(),
            _ => messages_for_tab(tab).len(),
        },
        ViewId::Revenue => PRODUCT_REVENUE.len(),
        ViewId::Api => match tab % API_TABS.len() {
            0 => INTEGRATIONS.len(),
            1 => API_LOGS.len(),
            _ => API_SETTINGS.len(),
        },
        ViewId::Users => team_in(region).len(),
        ViewId::Profile => PROFILE_ACTIVITY.len(),
        ViewId::Settings => SETTINGS_GROUPS[tab % SETTINGS_GROUPS.len()].entries.len(),
        // Upload and notification rows depend on session data, not the catalog.
        ViewId::Upload | ViewId::Notifications => 0,
    }
}

pub fn tab_count(view: ViewId) -> usize {
    match view {
        ViewId::Communication => MESSAGE_TABS.len(),
        ViewId::Api => API_TABS.len(),
        ViewId::Profile => PROFILE_TABS.len(),
        ViewId::Settings => SETTINGS_GROUPS.len(),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn search_matches_title_and_subtitle() {
        assert_eq!(filtered_search_indices("sugar"), vec![0, 1]);
        assert_eq!(filtered_search_indices("NIGERIA"), vec![2]);
        assert_eq!(filtered_search_indices(""), Vec::<usize>::new());
        assert_eq!(filtered_search_indices("sugar "), vec![0, 1]);
        assert_eq!(filtered_search_indices("nigeria "), Vec::<usize>::new());
        assert_eq!(filtered_search_indices("zzz"), Vec::<usize>::new());
    }

    #[test]
    fn region_filter_keeps_all_region_staff() {
        let names: Vec<&str> = team_in(Region::Nigeria).iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["John Okafor", "Mary Kamau"]);
        assert_eq!(team_in(Region::All).len(), TEAM.len());
    }

    #[test]
    fn campaigns_follow_selected_region() {
        assert_eq!(campaigns_in(Region::Kenya).len(), 2);
        assert!(campaigns_in(Region::Uganda).is_empty());
    }

    #[test]
    fn monthly_revenue_sums_regions_for_all() {
        assert_eq!(MONTHLY_REVENUE[0].for_region(Region::All), 950_000);
        assert_eq!(MONTHLY_REVENUE[0].for_region(Region::Uganda), 0);
    }

    #[test]
    fn setting_keys_are_unique() {
        let mut keys: Vec<&str> = SETTINGS_GROUPS
            .iter()
            .flat_map(|group| group.entries.iter().map(|entry| entry.key))
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn message_tabs_split_by_channel() {
        assert!(messages_for_tab(0)
            .iter()
            .all(|message| message.channel == Channel::WhatsApp));
        assert_eq!(messages_for_tab(1).len(), 2);
        assert!(messages_for_tab(2).is_empty());
        assert_eq!(row_count(ViewId::Communication, Region::All, 2), 3);
    }

    #[test]
    fn broadcast_response_rate_is_share_of_sent() {
        assert_eq!(BROADCASTS[0].response_rate(), 71);
        assert_eq!(BROADCASTS[2].response_rate(), 73);
    }

    #[test]
    fn api_tabs_cover_settings() {
        assert_eq!(tab_count(ViewId::Api), 3);
        assert_eq!(row_count(ViewId::Api, Region::All, 1), API_LOGS.len());
        assert_eq!(row_count(ViewId::Api, Region::All, 2), 6);
    }

    #[test]
    fn price_change_percent() {
        let pct = PRICE_PROPOSALS[0].change_percent();
        assert!((pct - 4.1666).abs() < 0.01);
    }
}
