use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Sparkline, Tabs, Wrap,
};
use ratatui::Terminal;

use aggree_core::catalog::{
    campaigns_in, filtered_search_indices, messages_for_tab, proposals_in, region_summaries_in,
    team_in, CampaignStatus, IntegrationStatus, PriceStatus, SettingValue, API_LOGS, API_SETTINGS,
    API_TABS, BROADCASTS, DASHBOARD_METRICS, INTEGRATIONS, MESSAGE_TABS, MONTHLY_PERFORMANCE, MONTHLY_REVENUE,
    PRICING_RULES, PRODUCT_REVENUE, PROFILE_ACTIVITY, PROFILE_STATS, PROFILE_TABS, QUICK_STATS,
    RECENT_ACTIVITY, REGION_REVENUE, SEARCH_ITEMS, SETTINGS_GROUPS, TOP_PRODUCTS,
};
use aggree_core::notifications;
use aggree_core::router::{self, sidebar_views};
use aggree_core::session::{LoginField, RoleCategory, DEMO_PASSWORD, ROLE_PROFILES};
use aggree_core::state::{
    AppState, NotificationKind, ProfileMenuEntry, Region, ShellOverlay, ViewCursor, ViewId,
};
use aggree_core::upload::{file_kind, format_file_size, Trend, UploadStatus, UploadedFile};
use aggree_core::{reduce, ConsoleAction, ConsoleEffect, ConsoleState, UserAction};
use aggree_exec::InsightSource;

use crate::effects::{EffectRunner, Flow};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const SIDEBAR_WIDTH: u16 = 30;
const SIDEBAR_COLLAPSED_WIDTH: u16 = 7;

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

pub fn run<S: InsightSource>(
    mut state: ConsoleState,
    mut runner: EffectRunner<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
    let _guard = TuiGuard; // Restores the terminal on exit or panic

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, &mut state, &mut runner).map_err(|e| e.into())
}

fn run_app<B: Backend, S: InsightSource>(
    terminal: &mut Terminal<B>,
    state: &mut ConsoleState,
    runner: &mut EffectRunner<S>,
) -> io::Result<()> {
    loop {
        if runner.tick(state, Instant::now()) == Flow::Exit {
            return Ok(());
        }

        terminal.draw(|f| ui(f, state))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key_event(key, state) {
            KeyHandlerResult::Continue(effects) => {
                if runner.run(state, effects, Instant::now()) == Flow::Exit {
                    return Ok(());
                }
            }
            KeyHandlerResult::Exit => return Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

enum KeyHandlerResult {
    Continue(Vec<ConsoleEffect>),
    Exit,
}

fn dispatch(state: &mut ConsoleState, action: UserAction) -> KeyHandlerResult {
    KeyHandlerResult::Continue(reduce(state, ConsoleAction::User(action)))
}

fn ignored() -> KeyHandlerResult {
    KeyHandlerResult::Continue(Vec::new())
}

fn handle_login_keys(key: event::KeyEvent, state: &mut ConsoleState) -> KeyHandlerResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') => dispatch(state, UserAction::ToggleShowPassword),
            _ => ignored(),
        };
    }

    let action = match key.code {
        KeyCode::Esc => return KeyHandlerResult::Exit,
        KeyCode::Tab | KeyCode::BackTab => UserAction::LoginFocusNext,
        KeyCode::Left => UserAction::LoginCycleRole { forward: false },
        KeyCode::Right => UserAction::LoginCycleRole { forward: true },
        KeyCode::F(2) => UserAction::LoginQuickFill(state.login.role),
        KeyCode::Enter => UserAction::SubmitLogin,
        KeyCode::Backspace => UserAction::LoginBackspace,
        KeyCode::Char(c) => UserAction::LoginInput(c),
        _ => return ignored(),
    };
    dispatch(state, action)
}

fn handle_search_keys(key: event::KeyEvent, state: &mut ConsoleState) -> KeyHandlerResult {
    let action = match key.code {
        KeyCode::Esc => UserAction::CloseOverlay,
        KeyCode::Up => UserAction::OverlayMoveUp,
        KeyCode::Down => UserAction::OverlayMoveDown,
        KeyCode::Enter => UserAction::OverlaySubmit,
        KeyCode::Backspace => UserAction::SearchBackspace,
        KeyCode::Char(c) => UserAction::SearchInput(c),
        _ => return ignored(),
    };
    dispatch(state, action)
}

fn handle_menu_keys(key: event::KeyEvent, state: &mut ConsoleState) -> KeyHandlerResult {
    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => UserAction::CloseOverlay,
        KeyCode::Up | KeyCode::Char('k') => UserAction::OverlayMoveUp,
        KeyCode::Down | KeyCode::Char('j') => UserAction::OverlayMoveDown,
        KeyCode::Enter => UserAction::OverlaySubmit,
        _ => return ignored(),
    };
    dispatch(state, action)
}

fn handle_upload_prompt_keys(key: event::KeyEvent, state: &mut ConsoleState) -> KeyHandlerResult {
    let action = match key.code {
        KeyCode::Esc => UserAction::CloseOverlay,
        KeyCode::Enter => UserAction::UploadPromptSubmit,
        KeyCode::Backspace => UserAction::UploadPromptBackspace,
        KeyCode::Char(c) => UserAction::UploadPromptInput(c),
        _ => return ignored(),
    };
    dispatch(state, action)
}

fn handle_shell_keys(key: event::KeyEvent, state: &mut ConsoleState) -> KeyHandlerResult {
    if let Some(action) = view_local_action(state, key.code) {
        return dispatch(state, action);
    }

    let action = match key.code {
        KeyCode::Char('q') => UserAction::Quit,
        KeyCode::Esc => UserAction::CloseOverlay,
        KeyCode::Char('/') => UserAction::OpenSearch,
        KeyCode::Char('g') => UserAction::ToggleRegionMenu,
        KeyCode::Char('p') => UserAction::ToggleProfileMenu,
        KeyCode::Char('u') => UserAction::OpenUploadPrompt,
        KeyCode::Char('e') => UserAction::Export,
        KeyCode::Char('b') => UserAction::ToggleSidebar,
        KeyCode::Char('L') => UserAction::Logout,
        KeyCode::Up => UserAction::PrevSidebarView,
        KeyCode::Down => UserAction::NextSidebarView,
        KeyCode::Char('k') => UserAction::RowUp,
        KeyCode::Char('j') => UserAction::RowDown,
        KeyCode::Tab => UserAction::NextLocalTab,
        KeyCode::Char(c) => match router::view_for_hotkey(c) {
            Some(view) => UserAction::Navigate(view),
            None => return ignored(),
        },
        _ => return ignored(),
    };
    dispatch(state, action)
}

/// Keys that only mean something on the current view. Checked before the
/// global bindings.
fn view_local_action(state: &ConsoleState, code: KeyCode) -> Option<UserAction> {
    match (state.routing.view, code) {
        (ViewId::Notifications, KeyCode::Char('r')) => {
            selected_notification_id(state).map(UserAction::MarkNotificationRead)
        }
        (ViewId::Notifications, KeyCode::Char('a')) => Some(UserAction::MarkAllNotificationsRead),
        (ViewId::Notifications, KeyCode::Char('d')) => {
            selected_notification_id(state).map(UserAction::DeleteNotification)
        }
        (ViewId::Notifications, KeyCode::Char('c')) => Some(UserAction::ClearNotifications),
        (ViewId::Notifications, KeyCode::Char('f')) => Some(UserAction::CycleNotificationFilter),
        (ViewId::Settings, KeyCode::Enter | KeyCode::Char(' ')) => Some(UserAction::ToggleSetting),
        (ViewId::Upload, KeyCode::Enter) => selected_upload(state)
            .map(|file| UserAction::UploadQuickAction {
                file_id: file.id.clone(),
            }),
        _ => None,
    }
}

fn selected_notification_id(state: &ConsoleState) -> Option<String> {
    let app = state.app()?;
    let row = state.views.cursor(ViewId::Notifications).row;
    notifications::visible(&app.notifications, state.views.notification_filter)
        .get(row)
        .map(|notification| notification.id.clone())
}

fn selected_upload(state: &ConsoleState) -> Option<&UploadedFile> {
    let row = state.views.cursor(ViewId::Upload).row;
    state.uploads.files().get(row)
}

fn handle_key_event(key: event::KeyEvent, state: &mut ConsoleState) -> KeyHandlerResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyHandlerResult::Exit;
    }

    if !state.is_authenticated() {
        return handle_login_keys(key, state);
    }

    match &state.interaction.overlay {
        ShellOverlay::Search { .. } => handle_search_keys(key, state),
        ShellOverlay::RegionMenu { .. } | ShellOverlay::ProfileMenu { .. } => {
            handle_menu_keys(key, state)
        }
        ShellOverlay::UploadPrompt { .. } => handle_upload_prompt_keys(key, state),
        ShellOverlay::None => handle_shell_keys(key, state),
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
struct UiPalette {
    accent: Color,
    accent_alt: Color,
    success: Color,
    warning: Color,
    danger: Color,
    muted: Color,
    border: Color,
    panel_bg: Color,
    selected_bg: Color,
}

const PALETTE: UiPalette = UiPalette {
    accent: Color::Green,
    accent_alt: Color::Cyan,
    success: Color::LightGreen,
    warning: Color::Yellow,
    danger: Color::Red,
    muted: Color::DarkGray,
    border: Color::Gray,
    panel_bg: Color::Black,
    selected_bg: Color::Rgb(24, 64, 40),
};

fn get_spinner() -> &'static str {
    let frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    frames[(millis / 100) as usize % frames.len()]
}

fn panel<'a>(title: impl Into<Line<'a>>, palette: UiPalette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(title)
}

fn label(text: &str, palette: UiPalette) -> Span<'_> {
    Span::styled(text, Style::default().fg(palette.accent))
}

fn muted<'a>(text: impl Into<std::borrow::Cow<'a, str>>, palette: UiPalette) -> Span<'a> {
    Span::styled(text, Style::default().fg(palette.muted))
}

fn selection(row: usize, len: usize) -> Option<usize> {
    (len > 0).then_some(row.min(len - 1))
}

fn render_list(
    f: &mut ratatui::Frame,
    area: Rect,
    block: Block<'_>,
    items: Vec<ListItem<'_>>,
    row: usize,
    palette: UiPalette,
) {
    let mut list_state = ListState::default();
    list_state.select(selection(row, items.len()));
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(palette.selected_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_tabs(f: &mut ratatui::Frame, area: Rect, titles: &[&str], tab: usize, palette: UiPalette) {
    let tabs = Tabs::new(titles.to_vec())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .select(tab % titles.len().max(1))
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn ui(f: &mut ratatui::Frame, state: &ConsoleState) {
    let palette = PALETTE;
    let area = f.area();
    let app = match state.app() {
        Some(app) if state.is_authenticated() => app,
        _ => {
            render_login(f, area, state, palette);
            return;
        }
    };

    let sidebar_width = if state.customization.sidebar_collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(area);
    render_sidebar(f, columns[0], state, palette);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // View
            Constraint::Length(1), // Footer
        ])
        .split(columns[1]);
    render_header(f, rows[0], state, app, palette);
    render_view(f, rows[1], state, app, palette);
    render_footer(f, rows[2], state, palette);

    render_overlay(f, state, app, palette);
}

fn render_login(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let popup = centered_rect(60, 80, area);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.panel_bg))
        .title(" Aggree.ai ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Tagline
            Constraint::Length(3), // Role tabs
            Constraint::Min(0),    // Form
        ])
        .split(inner);

    let tagline = Paragraph::new(vec![
        Line::from(Span::styled(
            "Sign in to your account",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(muted("AI-driven pricing and campaigns for agri value chains", palette)),
    ])
    .alignment(Alignment::Center);
    f.render_widget(tagline, chunks[0]);

    let login = &state.login;
    let role_idx = RoleCategory::ALL
        .iter()
        .position(|role| *role == login.role)
        .unwrap_or(0);
    let titles: Vec<&str> = ROLE_PROFILES.iter().map(|profile| profile.title).collect();
    render_tabs(f, chunks[1], &titles, role_idx, palette);

    let field_style = |field: LoginField| {
        if login.focus == field {
            Style::default()
                .fg(palette.accent_alt)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent)
        }
    };
    let password = login.masked_password();
    let status_line = if state.session.is_pending() {
        Line::from(Span::styled(
            format!("{} Signing in...", get_spinner()),
            Style::default().fg(palette.warning),
        ))
    } else {
        Line::from(muted("Enter to sign in", palette))
    };

    let mut lines = vec![
        Line::from(muted(login.role.profile().description, palette)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email:    ", field_style(LoginField::Email)),
            Span::raw(login.email.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Password: ", field_style(LoginField::Password)),
            Span::raw(password),
        ]),
        Line::from(""),
        status_line,
        Line::from(""),
        Line::from(label("Demo credentials", palette)),
    ];
    for profile in ROLE_PROFILES.iter() {
        lines.push(Line::from(muted(
            format!(
                "  {:<9} {} / {}",
                profile.title, profile.default_email, DEMO_PASSWORD
            ),
            palette,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(muted(
        "Tab field  Left/Right role  F2 demo fill  Ctrl-r show password  Esc quit",
        palette,
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[2]);
}

fn render_sidebar(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let collapsed = state.customization.sidebar_collapsed;
    let stats_height = if collapsed { 0 } else { QUICK_STATS.len() as u16 + 2 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(stats_height)])
        .split(area);

    let current = state.routing.view;
    let mut selected = None;
    let items: Vec<ListItem> = sidebar_views()
        .enumerate()
        .map(|(idx, spec)| {
            if spec.id == current {
                selected = Some(idx);
            }
            let text = if collapsed {
                format!(" {}", spec.hotkey)
            } else {
                format!(" {} {}", spec.hotkey, spec.nav_label)
            };
            ListItem::new(text)
        })
        .collect();

    let title = if collapsed { "AG" } else { "Aggree.ai" };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(Span::styled(
                    title,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .bg(palette.selected_bg)
                .add_modifier(Modifier::BOLD),
        );
    let mut list_state = ListState::default();
    list_state.select(selected);
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    if !collapsed {
        let lines: Vec<Line> = QUICK_STATS
            .iter()
            .map(|(name, value)| {
                Line::from(vec![
                    muted(format!("{name}: "), palette),
                    Span::styled(*value, Style::default().fg(palette.success)),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(lines).block(panel("Quick Stats", palette)),
            chunks[1],
        );
    }
}

fn render_header(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &ConsoleState,
    app: &AppState,
    palette: UiPalette,
) {
    let spec = router::resolve(state.routing.view);
    let unread = app.unread_count();
    let user = app
        .current_user
        .as_ref()
        .map(|user| format!("{} ({})", user.name, user.role))
        .unwrap_or_default();
    let query = if app.search_query.is_empty() {
        "-".to_string()
    } else {
        app.search_query.clone()
    };
    let badge_style = if unread > 0 {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                spec.title,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            muted(format!("  {}", spec.subtitle), palette),
        ]),
        Line::from(vec![
            label("Search: ", palette),
            Span::raw(query),
            label("  Region: ", palette),
            Span::raw(app.selected_region.label()),
            label("  Alerts: ", palette),
            Span::styled(unread.to_string(), badge_style),
            label("  User: ", palette),
            Span::raw(user),
        ]),
    ];
    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(header, area);
}

fn render_footer(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let line = match &state.interaction.status {
        Some(status) => Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(palette.warning),
        )),
        None => {
            let processing = state.uploads.processing_count();
            let mut spans = vec![muted(
                "/ search  g region  p profile  u upload  e export  b sidebar  L logout  q quit",
                palette,
            )];
            if processing > 0 {
                spans.push(Span::styled(
                    format!("  {} analysing {processing}", get_spinner()),
                    Style::default().fg(palette.accent_alt),
                ));
            }
            Line::from(spans)
        }
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_view(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &ConsoleState,
    app: &AppState,
    palette: UiPalette,
) {
    let view = state.routing.view;
    let cursor = state.views.cursor(view);
    match view {
        ViewId::Dashboard => render_dashboard(f, area, app, cursor, palette),
        ViewId::Campaigns => render_campaigns(f, area, app, cursor, palette),
        ViewId::Pricing => render_pricing(f, area, app, cursor, palette),
        ViewId::Communication => render_communication(f, area, cursor, palette),
        ViewId::Revenue => render_revenue(f, area, app, cursor, palette),
        ViewId::Api => render_api(f, area, cursor, palette),
        ViewId::Users => render_users(f, area, app, cursor, palette),
        ViewId::Upload => render_upload(f, area, state, cursor, palette),
        ViewId::Notifications => render_notifications(f, area, state, app, cursor, palette),
        ViewId::Profile => render_profile(f, area, app, cursor, palette),
        ViewId::Settings => render_settings(f, area, state, cursor, palette),
    }
}

fn render_dashboard(
    f: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
    cursor: ViewCursor,
    palette: UiPalette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);
    for (metric, slot) in DASHBOARD_METRICS.iter().zip(cards.iter()) {
        let change_color = if metric.up {
            palette.success
        } else {
            palette.danger
        };
        let text = vec![Line::from(vec![
            Span::styled(
                metric.value,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(metric.change, Style::default().fg(change_color)),
        ])];
        f.render_widget(Paragraph::new(text).block(panel(metric.title, palette)), *slot);
    }

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    let performance: Vec<u64> = MONTHLY_PERFORMANCE.iter().map(|(_, value)| *value).collect();
    let first = MONTHLY_PERFORMANCE.first().map(|(m, _)| *m).unwrap_or_default();
    let last = MONTHLY_PERFORMANCE.last().map(|(m, _)| *m).unwrap_or_default();
    let sparkline = Sparkline::default()
        .block(panel(format!("Performance {first}-{last}"), palette))
        .style(Style::default().fg(palette.accent))
        .data(&performance);
    f.render_widget(sparkline, middle[0]);

    let regions: Vec<ListItem> = region_summaries_in(app.selected_region)
        .into_iter()
        .map(|summary| {
            let name_style = if summary.active {
                Style::default().fg(palette.accent_alt)
            } else {
                Style::default().fg(palette.muted)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", summary.region.label()), name_style),
                Span::raw(format!("{:>7} ", summary.revenue)),
                Span::styled(summary.growth, Style::default().fg(palette.success)),
                muted(format!("  {} campaigns", summary.campaigns), palette),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(regions).block(panel("Regional Performance", palette)),
        middle[1],
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);
    let activity: Vec<ListItem> = RECENT_ACTIVITY
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(format!("{}: {}", item.action, item.product)),
                Line::from(muted(
                    format!("  {} / {}", item.region.label(), item.time),
                    palette,
                )),
            ])
        })
        .collect();
    render_list(
        f,
        bottom[0],
        panel("Recent Activity (j/k)", palette),
        activity,
        cursor.row,
        palette,
    );

    let products: Vec<ListItem> = TOP_PRODUCTS
        .iter()
        .map(|product| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<22}", product.name)),
                Span::raw(format!("{:>7} ", product.revenue)),
                muted(format!("margin {} ", product.margin), palette),
                Span::styled(product.growth, Style::default().fg(palette.success)),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(products).block(panel("Top Products", palette)),
        bottom[1],
    );
}

fn campaign_status_color(status: CampaignStatus, palette: UiPalette) -> Color {
    match status {
        CampaignStatus::Active => palette.success,
        CampaignStatus::Paused => palette.warning,
        CampaignStatus::Scheduled => palette.accent_alt,
    }
}

fn render_campaigns(
    f: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
    cursor: ViewCursor,
    palette: UiPalette,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let campaigns = campaigns_in(app.selected_region);
    let items: Vec<ListItem> = campaigns
        .iter()
        .map(|campaign| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<26}", campaign.name)),
                Span::styled(
                    format!("{:<10}", campaign.status.label()),
                    Style::default().fg(campaign_status_color(campaign.status, palette)),
                ),
                muted(campaign.region.label(), palette),
            ]))
        })
        .collect();
    render_list(
        f,
        chunks[0],
        panel(format!("Campaigns ({})", campaigns.len()), palette),
        items,
        cursor.row,
        palette,
    );

    let Some(campaign) = selection(cursor.row, campaigns.len()).map(|idx| campaigns[idx]) else {
        f.render_widget(
            Paragraph::new("No campaigns in this region.").block(panel("Details", palette)),
            chunks[1],
        );
        return;
    };

    let detail = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(chunks[1]);
    let lines = vec![
        Line::from(Span::styled(
            campaign.name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![label("Product: ", palette), Span::raw(campaign.product)]),
        Line::from(vec![
            label("Window: ", palette),
            Span::raw(format!("{} to {}", campaign.start, campaign.end)),
        ]),
        Line::from(vec![
            label("Budget: ", palette),
            Span::raw(format!("{} (spent {})", campaign.budget, campaign.spent)),
        ]),
        Line::from(vec![label("Reach: ", palette), Span::raw(campaign.reach)]),
        Line::from(vec![
            label("Conversions: ", palette),
            Span::raw(campaign.conversions),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines).block(panel("Details", palette)),
        detail[0],
    );
    let gauge = Gauge::default()
        .block(panel("Performance", palette))
        .gauge_style(Style::default().fg(palette.accent))
        .percent(campaign.performance.min(100))
        .label(format!("{}%", campaign.performance));
    f.render_widget(gauge, detail[1]);
}

fn price_status_color(status: PriceStatus, palette: UiPalette) -> Color {
    match status {
        PriceStatus::PendingApproval => palette.warning,
        PriceStatus::Approved | PriceStatus::AutoApproved => palette.success,
        PriceStatus::Rejected => palette.danger,
    }
}

fn render_pricing(
    f: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
    cursor: ViewCursor,
    palette: UiPalette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PRICING_RULES.len() as u16 + 2),
        ])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    let proposals = proposals_in(app.selected_region);
    let items: Vec<ListItem> = proposals
        .iter()
        .map(|proposal| {
            let change = proposal.change_percent();
            let change_color = if change >= 0.0 {
                palette.success
            } else {
                palette.danger
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<24}", proposal.product)),
                Span::raw(format!(
                    "{:>6} -> {:<6}",
                    proposal.current_price, proposal.suggested_price
                )),
                Span::styled(
                    format!("{change:+.1}% "),
                    Style::default().fg(change_color),
                ),
                Span::styled(
                    proposal.status.label(),
                    Style::default().fg(price_status_color(proposal.status, palette)),
                ),
            ]))
        })
        .collect();
    render_list(
        f,
        top[0],
        panel("Price Proposals", palette),
        items,
        cursor.row,
        palette,
    );

    let details = match selection(cursor.row, proposals.len()).map(|idx| proposals[idx]) {
        Some(proposal) => vec![
            Line::from(Span::styled(
                proposal.product,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                label("Region: ", palette),
                Span::raw(proposal.region.label()),
            ]),
            Line::from(vec![label("Demand: ", palette), Span::raw(proposal.demand)]),
            Line::from(vec![
                label("Elasticity: ", palette),
                Span::raw(format!("{:.2}", proposal.elasticity)),
            ]),
            Line::from(vec![
                label("Margin: ", palette),
                Span::raw(format!("{}%", proposal.margin)),
            ]),
            Line::from(vec![
                label("Updated: ", palette),
                Span::raw(proposal.last_update),
            ]),
        ],
        None => vec![Line::from("No proposals in this region.")],
    };
    f.render_widget(
        Paragraph::new(details).block(panel("Proposal", palette)),
        top[1],
    );

    let rules: Vec<ListItem> = PRICING_RULES
        .iter()
        .map(|(rule, enabled)| {
            let (mark, color) = if *enabled {
                ("[on] ", palette.success)
            } else {
                ("[off]", palette.muted)
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(color)),
                Span::raw(format!(" {rule}")),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(rules).block(panel("Pricing Rules", palette)),
        rows[1],
    );
}

fn render_communication(
    f: &mut ratatui::Frame,
    area: Rect,
    cursor: ViewCursor,
    palette: UiPalette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    render_tabs(f, rows[0], &MESSAGE_TABS, cursor.tab, palette);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    if cursor.tab % MESSAGE_TABS.len() == 2 {
        render_broadcasts(f, &columns, cursor.row, palette);
        return;
    }

    let messages = messages_for_tab(cursor.tab);
    let items: Vec<ListItem> = messages
        .iter()
        .map(|message| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<9}", message.channel.label()),
                    Style::default().fg(palette.accent_alt),
                ),
                Span::raw(format!("{:<18}", message.recipient)),
                muted(message.status, palette),
            ]))
        })
        .collect();
    render_list(
        f,
        columns[0],
        panel("Messages (Tab switches channel)", palette),
        items,
        cursor.row,
        palette,
    );

    let details = match selection(cursor.row, messages.len()).map(|idx| messages[idx]) {
        Some(message) => vec![
            Line::from(vec![
                label("To: ", palette),
                Span::raw(format!("{} ({})", message.recipient, message.phone)),
            ]),
            Line::from(vec![label("Campaign: ", palette), Span::raw(message.campaign)]),
            Line::from(vec![label("Sent: ", palette), Span::raw(message.timestamp)]),
            Line::from(""),
            Line::from(message.body),
            Line::from(""),
            Line::from(vec![
                label("Response: ", palette),
                Span::raw(message.response.unwrap_or("none yet")),
            ]),
        ],
        None => vec![Line::from("No messages on this channel.")],
    };
    f.render_widget(
        Paragraph::new(details)
            .wrap(Wrap { trim: true })
            .block(panel("Conversation", palette)),
        columns[1],
    );
}

fn render_broadcasts(f: &mut ratatui::Frame, columns: &[Rect], row: usize, palette: UiPalette) {
    let items: Vec<ListItem> = BROADCASTS
        .iter()
        .map(|broadcast| {
            let (status, color) = if broadcast.active {
                ("active", palette.success)
            } else {
                ("completed", palette.muted)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<28}", broadcast.name)),
                Span::styled(status, Style::default().fg(color)),
            ]))
        })
        .collect();
    render_list(
        f,
        columns[0],
        panel("Broadcast Campaigns", palette),
        items,
        row,
        palette,
    );

    let Some(broadcast) = selection(row, BROADCASTS.len()).map(|idx| &BROADCASTS[idx]) else {
        return;
    };
    let detail = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(columns[1]);
    let lines = vec![
        Line::from(vec![label("Type: ", palette), Span::raw(broadcast.kind)]),
        Line::from(vec![
            label("Recipients: ", palette),
            Span::raw(thousands(broadcast.recipients.into())),
        ]),
        Line::from(vec![
            label("Sent: ", palette),
            Span::raw(thousands(broadcast.sent.into())),
        ]),
        Line::from(vec![
            label("Delivered: ", palette),
            Span::raw(thousands(broadcast.delivered.into())),
        ]),
        Line::from(vec![
            label("Responded: ", palette),
            Span::raw(thousands(broadcast.responded.into())),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines).block(panel(broadcast.name, palette)),
        detail[0],
    );
    let rate = broadcast.response_rate();
    let gauge = Gauge::default()
        .block(panel("Response Rate", palette))
        .gauge_style(Style::default().fg(palette.accent))
        .percent(rate.min(100))
        .label(format!("{rate}%"));
    f.render_widget(gauge, detail[1]);
}

fn render_revenue(
    f: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
    cursor: ViewCursor,
    palette: UiPalette,
) {
    let region = app.selected_region;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let monthly: Vec<u64> = MONTHLY_REVENUE
        .iter()
        .map(|month| month.for_region(region))
        .collect();
    let total: u64 = monthly.iter().sum();
    let sparkline = Sparkline::default()
        .block(panel(
            format!("Monthly Revenue, {} (${})", region.label(), thousands(total)),
            palette,
        ))
        .style(Style::default().fg(palette.accent))
        .data(&monthly);
    f.render_widget(sparkline, top[0]);

    let targets: Vec<_> = REGION_REVENUE
        .iter()
        .filter(|row| region.includes(row.region))
        .collect();
    let items: Vec<ListItem> = targets
        .iter()
        .map(|row| {
            let pct = row.revenue * 100 / row.target.max(1);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<10}", row.region.label())),
                Span::raw(format!(
                    "${:>10} / ${:<10}",
                    thousands(row.revenue),
                    thousands(row.target)
                )),
                Span::styled(format!("{pct:>3}% "), Style::default().fg(palette.accent_alt)),
                Span::styled(
                    format!("+{}% ", row.growth),
                    Style::default().fg(palette.success),
                ),
                muted(format!("{} customers", thousands(row.customers.into())), palette),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(panel("Regional Targets", palette)),
        top[1],
    );

    let (earned, target) = targets.iter().fold((0_u64, 0_u64), |(earned, target), row| {
        (earned + row.revenue, target + row.target)
    });
    let percent = (earned * 100 / target.max(1)).min(100) as u16;
    let gauge = Gauge::default()
        .block(panel("Target Achievement", palette))
        .gauge_style(Style::default().fg(palette.success))
        .percent(percent)
        .label(format!("${} of ${}", thousands(earned), thousands(target)));
    f.render_widget(gauge, rows[1]);

    let products: Vec<ListItem> = PRODUCT_REVENUE
        .iter()
        .map(|product| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<22}", product.name)),
                Span::raw(format!("${:>10}  ", thousands(product.revenue))),
                muted(format!("margin {}%  ", product.margin), palette),
                Span::styled(
                    format!("+{}%  ", product.growth),
                    Style::default().fg(palette.success),
                ),
                muted(format!("{} units", thousands(product.volume.into())), palette),
            ]))
        })
        .collect();
    render_list(
        f,
        rows[2],
        panel("Product Revenue", palette),
        products,
        cursor.row,
        palette,
    );
}

fn integration_status_color(status: IntegrationStatus, palette: UiPalette) -> Color {
    match status {
        IntegrationStatus::Connected => palette.success,
        IntegrationStatus::Warning => palette.warning,
        IntegrationStatus::Error => palette.danger,
    }
}

fn render_api(f: &mut ratatui::Frame, area: Rect, cursor: ViewCursor, palette: UiPalette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    render_tabs(f, rows[0], &API_TABS, cursor.tab, palette);

    if cursor.tab % API_TABS.len() == 2 {
        let items: Vec<ListItem> = API_SETTINGS
            .iter()
            .map(|(name, value)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{name:<32}"), Style::default().fg(palette.accent)),
                    Span::raw(*value),
                ]))
            })
            .collect();
        render_list(
            f,
            rows[1],
            panel("Gateway Settings", palette),
            items,
            cursor.row,
            palette,
        );
        return;
    }

    if cursor.tab % API_TABS.len() == 1 {
        let items: Vec<ListItem> = API_LOGS
            .iter()
            .map(|log| {
                let status_color = if log.status < 400 {
                    palette.success
                } else {
                    palette.danger
                };
                ListItem::new(Line::from(vec![
                    muted(format!("{} ", log.timestamp), palette),
                    Span::raw(format!("{:<6} {:<28}", log.method, log.endpoint)),
                    Span::styled(
                        format!("{} ", log.status),
                        Style::default().fg(status_color),
                    ),
                    Span::raw(format!("{:>6}  ", log.response_time)),
                    muted(log.message, palette),
                ]))
            })
            .collect();
        render_list(
            f,
            rows[1],
            panel("Request Log", palette),
            items,
            cursor.row,
            palette,
        );
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let items: Vec<ListItem> = INTEGRATIONS
        .iter()
        .map(|integration| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<24}", integration.name)),
                Span::styled(
                    integration.status.label(),
                    Style::default().fg(integration_status_color(integration.status, palette)),
                ),
            ]))
        })
        .collect();
    render_list(
        f,
        columns[0],
        panel("Integrations", palette),
        items,
        cursor.row,
        palette,
    );

    if let Some(integration) = selection(cursor.row, INTEGRATIONS.len()).map(|i| &INTEGRATIONS[i])
    {
        let lines = vec![
            Line::from(Span::styled(
                integration.name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(muted(integration.description, palette)),
            Line::from(""),
            Line::from(vec![
                label("Endpoint: ", palette),
                Span::raw(integration.endpoint),
            ]),
            Line::from(vec![
                label("Last sync: ", palette),
                Span::raw(integration.last_sync),
            ]),
            Line::from(vec![
                label("Requests: ", palette),
                Span::raw(thousands(integration.requests.into())),
            ]),
            Line::from(vec![label("Uptime: ", palette), Span::raw(integration.uptime)]),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(panel("Integration", palette)),
            columns[1],
        );
    }
}

fn render_users(
    f: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
    cursor: ViewCursor,
    palette: UiPalette,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let team = team_in(app.selected_region);
    let items: Vec<ListItem> = team
        .iter()
        .map(|member| {
            let state_span = if member.active {
                Span::styled("active", Style::default().fg(palette.success))
            } else {
                muted("inactive", palette)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<18}", member.name)),
                Span::styled(
                    format!("{:<16}", member.role),
                    Style::default().fg(palette.accent_alt),
                ),
                state_span,
            ]))
        })
        .collect();
    render_list(
        f,
        columns[0],
        panel(format!("Team ({})", team.len()), palette),
        items,
        cursor.row,
        palette,
    );

    let details = match selection(cursor.row, team.len()).map(|idx| team[idx]) {
        Some(member) => vec![
            Line::from(Span::styled(
                member.name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![label("Email: ", palette), Span::raw(member.email)]),
            Line::from(vec![label("Phone: ", palette), Span::raw(member.phone)]),
            Line::from(vec![
                label("Region: ", palette),
                Span::raw(member.region.label()),
            ]),
            Line::from(vec![
                label("Last login: ", palette),
                Span::raw(member.last_login),
            ]),
            Line::from(vec![
                label("Campaigns: ", palette),
                Span::raw(member.campaigns.to_string()),
            ]),
            Line::from(vec![
                label("Permissions: ", palette),
                Span::raw(member.permissions.join(", ")),
            ]),
        ],
        None => vec![Line::from("No team members in this region.")],
    };
    f.render_widget(
        Paragraph::new(details)
            .wrap(Wrap { trim: true })
            .block(panel("Member", palette)),
        columns[1],
    );
}

fn render_upload(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &ConsoleState,
    cursor: ViewCursor,
    palette: UiPalette,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(columns[0]);

    let intro = Paragraph::new(vec![
        Line::from("Press u and enter file paths separated by ';'."),
        Line::from(muted("CSV, Excel, JSON, PDF, text and images", palette)),
    ])
    .block(panel("Upload", palette));
    f.render_widget(intro, left[0]);

    let files = state.uploads.files();
    let items: Vec<ListItem> = files
        .iter()
        .map(|file| {
            let status_color = match file.status {
                UploadStatus::Processing => palette.warning,
                UploadStatus::Completed => palette.success,
                UploadStatus::Error => palette.danger,
            };
            let status = if file.status == UploadStatus::Processing {
                format!("{} {}", get_spinner(), file.status.label())
            } else {
                file.status.label().to_string()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{:<28} ", file.name)),
                    Span::styled(status, Style::default().fg(status_color)),
                ]),
                Line::from(muted(
                    format!(
                        "  {} / {} / {}",
                        file_kind(&file.mime).label(),
                        format_file_size(file.size),
                        file.uploaded_at
                    ),
                    palette,
                )),
            ])
        })
        .collect();
    render_list(
        f,
        left[1],
        panel(format!("Files ({})", files.len()), palette),
        items,
        cursor.row,
        palette,
    );

    let selected = selection(cursor.row, files.len()).map(|idx| &files[idx]);
    let lines = match selected {
        None => vec![Line::from(muted("No files uploaded yet.", palette))],
        Some(file) => match &file.insights {
            None => vec![Line::from(Span::styled(
                format!("{} Analysing {}...", get_spinner(), file.name),
                Style::default().fg(palette.warning),
            ))],
            Some(insights) => {
                let summary = &insights.summary;
                let mut lines = vec![
                    Line::from(vec![
                        label("Records: ", palette),
                        Span::raw(thousands(summary.total_records.into())),
                        label("  Quality: ", palette),
                        Span::raw(format!("{}%", summary.data_quality)),
                        label("  Complete: ", palette),
                        Span::raw(format!("{}%", summary.completeness)),
                        label("  Anomalies: ", palette),
                        Span::raw(summary.anomalies.to_string()),
                    ]),
                    Line::from(""),
                    Line::from(label("Key metrics", palette)),
                ];
                for metric in &insights.key_metrics {
                    let (arrow, color) = match metric.trend {
                        Trend::Up => ("^", palette.success),
                        Trend::Down => ("v", palette.danger),
                    };
                    lines.push(Line::from(vec![
                        Span::raw(format!("  {}: {} ", metric.label, metric.value)),
                        Span::styled(arrow, Style::default().fg(color)),
                    ]));
                }
                lines.push(Line::from(label("Regions", palette)));
                for row in &insights.regions {
                    lines.push(Line::from(format!(
                        "  {:<10} {:>3}%  {}",
                        row.name, row.percentage, row.value
                    )));
                }
                lines.push(Line::from(label("Products", palette)));
                for row in &insights.products {
                    lines.push(Line::from(format!(
                        "  {:<18} {:>3}%  {}",
                        row.name, row.percentage, row.value
                    )));
                }
                lines.push(Line::from(label("Recommendations", palette)));
                for item in &insights.recommendations {
                    lines.push(Line::from(format!("  - {item}")));
                }
                lines.push(Line::from(label("AI suggestions", palette)));
                for item in &insights.ai_suggestions {
                    lines.push(Line::from(format!("  - {item}")));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(muted(
                    "Enter: create pricing campaign from this file",
                    palette,
                )));
                lines
            }
        },
    };
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Insights", palette)),
        columns[1],
    );
}

fn notification_color(kind: NotificationKind, palette: UiPalette) -> Color {
    match kind {
        NotificationKind::Success => palette.success,
        NotificationKind::Warning => palette.warning,
        NotificationKind::Error => palette.danger,
        NotificationKind::Info => palette.accent_alt,
    }
}

fn render_notifications(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &ConsoleState,
    app: &AppState,
    cursor: ViewCursor,
    palette: UiPalette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let filter = state.views.notification_filter;
    let visible = notifications::visible(&app.notifications, filter);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            label("Filter: ", palette),
            Span::raw(filter.label()),
            label("  Unread: ", palette),
            Span::raw(app.unread_count().to_string()),
            muted(
                "   r read  a read all  d delete  c clear  f filter",
                palette,
            ),
        ])),
        rows[0],
    );

    if visible.is_empty() {
        f.render_widget(
            Paragraph::new("No notifications.").block(panel("Notifications", palette)),
            rows[1],
        );
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|notification| {
            let marker = if notification.read { "  " } else { "* " };
            let title_style = if notification.read {
                Style::default()
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        marker,
                        Style::default().fg(notification_color(notification.kind, palette)),
                    ),
                    Span::styled(notification.title.as_str(), title_style),
                    muted(
                        format!("  {} / {}", notification.category, notification.time),
                        palette,
                    ),
                ]),
                Line::from(muted(format!("  {}", notification.message), palette)),
            ])
        })
        .collect();
    render_list(
        f,
        rows[1],
        panel("Notifications", palette),
        items,
        cursor.row,
        palette,
    );
}

fn render_profile(
    f: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
    cursor: ViewCursor,
    palette: UiPalette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let mut stats = Vec::new();
    for (name, value) in PROFILE_STATS.iter() {
        stats.push(Span::styled(
            *value,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        stats.push(muted(format!(" {name}   "), palette));
    }
    f.render_widget(
        Paragraph::new(Line::from(stats)).block(panel("Overview", palette)),
        rows[0],
    );
    render_tabs(f, rows[1], &PROFILE_TABS, cursor.tab, palette);

    match cursor.tab % PROFILE_TABS.len() {
        1 => {
            let items: Vec<ListItem> = PROFILE_ACTIVITY
                .iter()
                .map(|(action, when)| {
                    ListItem::new(Line::from(vec![
                        Span::raw(*action),
                        muted(format!("  {when}"), palette),
                    ]))
                })
                .collect();
            render_list(
                f,
                rows[2],
                panel("Recent Activity", palette),
                items,
                cursor.row,
                palette,
            );
        }
        2 => {
            let lines = vec![
                Line::from(vec![label("Password: ", palette), Span::raw("last changed 30 days ago")]),
                Line::from(vec![
                    label("Two-factor: ", palette),
                    Span::styled("not enabled", Style::default().fg(palette.warning)),
                ]),
                Line::from(vec![
                    label("Sessions: ", palette),
                    Span::raw("1 active (this terminal)"),
                ]),
            ];
            f.render_widget(Paragraph::new(lines).block(panel("Security", palette)), rows[2]);
        }
        _ => {
            let lines = match &app.current_user {
                Some(user) => vec![
                    Line::from(Span::styled(
                        user.name.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(vec![label("Email: ", palette), Span::raw(user.email.as_str())]),
                    Line::from(vec![label("Role: ", palette), Span::raw(user.role.as_str())]),
                    Line::from(vec![
                        label("Region: ", palette),
                        Span::raw(user.region.as_str()),
                    ]),
                    Line::from(vec![
                        label("Permissions: ", palette),
                        Span::raw(user.permissions.join(", ")),
                    ]),
                ],
                None => vec![Line::from("Not signed in.")],
            };
            f.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .block(panel("Profile", palette)),
                rows[2],
            );
        }
    }
}

fn render_settings(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &ConsoleState,
    cursor: ViewCursor,
    palette: UiPalette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    let names: Vec<&str> = SETTINGS_GROUPS.iter().map(|group| group.name).collect();
    render_tabs(f, rows[0], &names, cursor.tab, palette);

    let group = &SETTINGS_GROUPS[cursor.tab % SETTINGS_GROUPS.len()];
    let items: Vec<ListItem> = group
        .entries
        .iter()
        .map(|entry| {
            let value = match entry.default {
                SettingValue::Toggle(on) => {
                    let on = on != state.views.toggled_settings.contains(entry.key);
                    if on {
                        Span::styled("[x]", Style::default().fg(palette.success))
                    } else {
                        muted("[ ]", palette)
                    }
                }
                SettingValue::Text(text) => Span::raw(text),
                SettingValue::Number(n) => Span::raw(n.to_string()),
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<28}", entry.label)),
                value,
            ]))
        })
        .collect();
    render_list(
        f,
        rows[1],
        panel(format!("{} (Enter toggles)", group.name), palette),
        items,
        cursor.row,
        palette,
    );
}

fn render_overlay(f: &mut ratatui::Frame, state: &ConsoleState, app: &AppState, palette: UiPalette) {
    match &state.interaction.overlay {
        ShellOverlay::None => {}
        ShellOverlay::Search { selected } => render_search(f, app, *selected, palette),
        ShellOverlay::RegionMenu { selected } => {
            let items: Vec<ListItem> = Region::ALL
                .iter()
                .map(|region| {
                    let mark = if *region == app.selected_region { "* " } else { "  " };
                    ListItem::new(format!("{mark}{}", region.label()))
                })
                .collect();
            let area = centered_rect(30, 40, f.area());
            f.render_widget(Clear, area);
            render_list(f, area, panel("Region", palette), items, *selected, palette);
        }
        ShellOverlay::ProfileMenu { selected } => {
            let title = app
                .current_user
                .as_ref()
                .map(|user| format!("{} <{}>", user.name, user.email))
                .unwrap_or_else(|| "Account".to_string());
            let items: Vec<ListItem> = ProfileMenuEntry::ALL
                .iter()
                .map(|entry| ListItem::new(entry.label()))
                .collect();
            let area = centered_rect(40, 30, f.area());
            f.render_widget(Clear, area);
            render_list(f, area, panel(title, palette), items, *selected, palette);
        }
        ShellOverlay::UploadPrompt { input } => {
            let area = centered_rect(70, 25, f.area());
            f.render_widget(Clear, area);
            let lines = vec![
                Line::from(vec![label("> ", palette), Span::raw(input.as_str())]),
                Line::from(""),
                Line::from(muted(
                    "Separate multiple paths with ';'. Enter uploads, Esc cancels.",
                    palette,
                )),
            ];
            f.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(panel("Upload Files", palette)),
                area,
            );
        }
    }
}

fn render_search(f: &mut ratatui::Frame, app: &AppState, selected: usize, palette: UiPalette) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(Line::from(vec![
        label("> ", palette),
        Span::raw(app.search_query.as_str()),
    ]))
    .block(panel("Search campaigns, products, users", palette));
    f.render_widget(input, chunks[0]);

    let indices = filtered_search_indices(&app.search_query);
    if indices.is_empty() {
        let hint = if app.search_query.is_empty() {
            "Start typing to search."
        } else {
            "No results."
        };
        f.render_widget(
            Paragraph::new(muted(hint, palette)).block(panel("Results", palette)),
            chunks[1],
        );
        return;
    }

    let items: Vec<ListItem> = indices
        .iter()
        .map(|idx| {
            let item = &SEARCH_ITEMS[*idx];
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", item.kind.label()),
                    Style::default().fg(palette.accent_alt),
                ),
                Span::raw(item.title),
                muted(format!("  {}", item.subtitle), palette),
            ]))
        })
        .collect();
    render_list(f, chunks[1], panel("Results", palette), items, selected, palette);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
