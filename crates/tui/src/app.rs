use std::{io, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use tokio::{spawn, sync::mpsc};
use tracing::{error, info};

use meeple_core::{
    config::AppConfig,
    i18n,
    models::{Difficulty, Game, GameCreate, GamePatch},
    navigation::MENU_ITEMS,
    routing::{self, Page, RouteMatch, ScrollMemory},
    stats,
    stores::{GamesStore, PlayersStore, PlaysStore, TeamsStore},
};

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_NAME_LEN: usize = 64;
const MENU_WIDTH: u16 = 24;

enum AppEvent {
    Input(Event),
    Tick,
    LibraryLoaded,
    PlaysLoaded(Option<String>),
    DetailLoaded,
    GameCreated(Result<Game, String>),
}

/// Terminal frontend over the data layer: renders the page the current
/// route resolves to and translates key presses into store operations.
pub struct MeepleApp {
    config: AppConfig,
    games: GamesStore,
    players: PlayersStore,
    teams: TeamsStore,
    plays: PlaysStore,
    path: String,
    route: RouteMatch,
    history: Vec<String>,
    scroll: ScrollMemory,
    cursor: usize,
    status: String,
    name_input: Option<String>,
    rating_edit: Option<u8>,
    should_quit: bool,
    event_tx: Option<mpsc::Sender<AppEvent>>,
}

impl MeepleApp {
    pub fn new(
        config: AppConfig,
        games: GamesStore,
        players: PlayersStore,
        teams: TeamsStore,
        plays: PlaysStore,
    ) -> Self {
        let path = "/library".to_string();
        let route = routing::resolve(&path);
        Self {
            config,
            games,
            players,
            teams,
            plays,
            path,
            route,
            history: Vec::new(),
            scroll: ScrollMemory::default(),
            cursor: 0,
            status: i18n::t("status.ready"),
            name_input: None,
            rating_edit: None,
            should_quit: false,
            event_tx: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx.clone());
        self.event_tx = Some(event_tx);

        self.status = i18n::t("status.loading");
        self.refresh_library();
        self.refresh_plays();

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.should_quit {
                break;
            }

            let maybe_event = event_rx.recv().await;
            if !self.process_app_event(maybe_event) {
                break;
            }

            if self.should_quit {
                break;
            }
        }

        restore_terminal(&mut terminal)?;
        self.event_tx = None;
        Ok(())
    }

    fn process_app_event(&mut self, maybe_event: Option<AppEvent>) -> bool {
        match maybe_event {
            Some(AppEvent::Input(event)) => {
                if let Err(err) = self.handle_input(event) {
                    self.status = format!("{}: {err}", i18n::t("status.error"));
                }
                true
            }
            Some(AppEvent::Tick) => true,
            Some(AppEvent::LibraryLoaded) => {
                match self.games.error() {
                    Some(message) => {
                        self.status = format!("{}: {message}", i18n::t("status.error"));
                    }
                    None => {
                        let count = self.games.games().len();
                        self.status = format!("{count} {}", i18n::t("library.count"));
                    }
                }
                true
            }
            Some(AppEvent::PlaysLoaded(failure)) => {
                if let Some(message) = failure {
                    self.status = format!("{}: {message}", i18n::t("status.error"));
                }
                true
            }
            Some(AppEvent::DetailLoaded) => {
                if let Some(message) = self.games.error() {
                    self.status = format!("{}: {message}", i18n::t("status.error"));
                }
                true
            }
            Some(AppEvent::GameCreated(result)) => {
                match result {
                    Ok(game) => {
                        info!(id = %game.id, "game created from prompt");
                        self.status = game.info.name.clone();
                        self.navigate(&format!("/library/{}", game.id));
                    }
                    Err(message) => {
                        self.status = format!("{}: {message}", i18n::t("status.error"));
                    }
                }
                true
            }
            None => false,
        }
    }

    fn refresh_library(&self) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let games = self.games.clone();
        spawn(async move {
            games.fetch_all().await;
            let _ = tx.send(AppEvent::LibraryLoaded).await;
        });
    }

    fn refresh_plays(&self) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let plays = self.plays.clone();
        spawn(async move {
            let failure = plays.fetch_plays().await.err().map(|err| err.to_string());
            if failure.is_some() {
                error!(?failure, "plays fetch failed");
            }
            let _ = tx.send(AppEvent::PlaysLoaded(failure)).await;
        });
    }

    fn load_detail(&self, id: &str) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let games = self.games.clone();
        let id = id.to_string();
        spawn(async move {
            games.load_by_id(&id).await;
            let _ = tx.send(AppEvent::DetailLoaded).await;
        });
    }

    /// Fresh navigation: record where we were, resolve the new route and
    /// start at the top of the new page.
    fn navigate(&mut self, path: &str) {
        if path == self.path {
            return;
        }
        self.scroll.leave(&self.path, self.cursor as u16);
        self.history.push(self.path.clone());
        self.enter(path, false);
    }

    /// History navigation: return to the previous page and restore its
    /// saved position.
    fn go_back(&mut self) {
        let Some(previous) = self.history.pop() else {
            return;
        };
        self.scroll.leave(&self.path, self.cursor as u16);
        self.enter(&previous, true);
    }

    fn enter(&mut self, path: &str, from_history: bool) {
        self.path = path.to_string();
        self.route = routing::resolve(path);
        self.cursor = self.scroll.enter(path, from_history) as usize;
        self.name_input = None;
        self.rating_edit = None;

        match self.route.page {
            Page::GameDetail => {
                if let Some(id) = self.route.id() {
                    self.load_detail(id);
                }
            }
            Page::GameNew => {
                self.name_input = Some(String::new());
            }
            Page::GameEdit => {
                let rating = self
                    .route
                    .id()
                    .and_then(|id| self.games.get_by_id(id))
                    .map(|game| game.info.rating)
                    .unwrap_or(0);
                self.rating_edit = Some(rating);
            }
            _ => {}
        }
    }

    fn handle_input(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                self.should_quit = true;
                return Ok(());
            }
            if self.name_input.is_some() {
                return self.handle_name_prompt_key(key);
            }
            if self.rating_edit.is_some() {
                return self.handle_rating_edit_key(key);
            }
            self.handle_key(key)?;
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            KeyCode::Char('r') => {
                self.status = i18n::t("status.loading");
                self.refresh_library();
                self.refresh_plays();
            }
            KeyCode::Char('l') => {
                let next = if i18n::locale() == "it" { "en" } else { "it" };
                i18n::set_locale(next);
                self.status = format!("{}: {next}", i18n::t("account.locale"));
            }
            KeyCode::Char(digit @ '1'..='6') => {
                let index = digit as usize - '1' as usize;
                if let Some(entry) = MENU_ITEMS.get(index) {
                    self.navigate(entry.to);
                }
            }
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('n') if self.route.page == Page::Library => {
                self.navigate("/library/new");
            }
            KeyCode::Char('e') if self.route.page == Page::GameDetail => {
                if let Some(id) = self.route.id() {
                    self.navigate(&format!("/library/{id}/edit"));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_name_prompt_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(buffer) = self.name_input.as_mut() else {
            return Ok(());
        };
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let name = buffer.trim().to_string();
                if !name.is_empty() {
                    self.create_game(name);
                }
            }
            KeyCode::Char(ch) if buffer.len() < MAX_NAME_LEN => buffer.push(ch),
            _ => {}
        }
        Ok(())
    }

    fn handle_rating_edit_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(rating) = self.rating_edit.as_mut() else {
            return Ok(());
        };
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Up => *rating = (*rating + 1).min(5),
            KeyCode::Down => *rating = rating.saturating_sub(1),
            KeyCode::Enter => {
                let rating = *rating;
                if let Some(id) = self.route.id().map(str::to_string) {
                    let patch = GamePatch {
                        rating: Some(rating),
                        ..GamePatch::default()
                    };
                    match self.games.update(&id, &patch) {
                        Ok(updated) => {
                            self.status = format!(
                                "{}: {}",
                                updated.info.name,
                                stars(updated.info.rating)
                            );
                            self.go_back();
                        }
                        Err(err) => {
                            self.status = format!("{}: {err}", i18n::t("status.error"));
                        }
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn create_game(&mut self, name: String) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let genre_id = self
            .games
            .genres()
            .first()
            .map(|genre| genre.id.clone())
            .unwrap_or_else(|| "family".to_string());
        let payload = GameCreate {
            name,
            cover_url: None,
            min_age: 8,
            players_min: 2,
            players_max: 4,
            difficulty: Difficulty::Medium,
            rating: 0,
            duration_mins: 60,
            genre_id,
            is_one_shot: true,
            is_coop: false,
            is_competitive: true,
            favorite: false,
            last_played_at: None,
            description: None,
            manual_url: None,
        };
        let games = self.games.clone();
        spawn(async move {
            let result = games
                .create(payload)
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(AppEvent::GameCreated(result)).await;
        });
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.active_list_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let current = self.cursor.min(len - 1) as isize;
        self.cursor = current.saturating_add(delta).clamp(0, len as isize - 1) as usize;
    }

    fn active_list_len(&self) -> usize {
        match self.route.page {
            Page::Library => self.games.games().len(),
            Page::Players => self.players.players().len(),
            Page::Teams => self.teams.teams().len(),
            _ => 0,
        }
    }

    fn open_selected(&mut self) {
        match self.route.page {
            Page::Library => {
                if let Some(game) = self.games.games().get(self.cursor) {
                    self.navigate(&format!("/library/{}", game.id));
                }
            }
            Page::Players => {
                if let Some(player) = self.players.players().get(self.cursor) {
                    self.navigate(&format!("/players/{}", player.id));
                }
            }
            Page::Teams => {
                if let Some(team) = self.teams.teams().get(self.cursor) {
                    self.navigate(&format!("/teams/{}", team.id));
                }
            }
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(3)])
            .split(area);

        // Routes may opt out of the chrome (the not-found page does).
        let content_area = if self.route.meta.chrome {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(20)])
                .split(vertical[0]);
            self.render_menu(frame, body[0]);
            body[1]
        } else {
            vertical[0]
        };

        match self.route.page {
            Page::Library => self.render_library(frame, content_area),
            Page::GameDetail => self.render_game_detail(frame, content_area),
            Page::GameNew => self.render_game_new(frame, content_area),
            Page::GameEdit => self.render_game_edit(frame, content_area),
            Page::Players => self.render_players(frame, content_area),
            Page::PlayerDetail => self.render_player_detail(frame, content_area),
            Page::Teams => self.render_teams(frame, content_area),
            Page::TeamDetail => self.render_team_detail(frame, content_area),
            Page::Stats => self.render_stats(frame, content_area),
            Page::Tools => self.render_tools(frame, content_area),
            Page::Account => self.render_account(frame, content_area),
            Page::NotFound => self.render_not_found(frame, content_area),
        }

        self.render_status(frame, vertical[1]);
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<ListItem> = MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let label = format!("{} {} {}", index + 1, entry.icon, i18n::t(entry.label_key));
                let style = if entry.is_active(&self.path) {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(label, style)))
            })
            .collect();

        let menu = List::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(i18n::t("app.title")),
        );
        frame.render_widget(menu, area);
    }

    fn render_library(&self, frame: &mut Frame, area: Rect) {
        let games = self.games.games();
        if games.is_empty() {
            let empty = Paragraph::new(i18n::t("library.empty"))
                .block(self.page_block())
                .wrap(Wrap { trim: true });
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = games
            .iter()
            .map(|game| {
                let favorite = if game.info.favorite { "♥ " } else { "  " };
                let line = format!(
                    "{favorite}{}  {}  {}",
                    game.info.name,
                    stars(game.info.rating),
                    self.games.genre_name(&game.info.genre_id),
                );
                ListItem::new(line)
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(self.cursor.min(games.len() - 1)));

        let list = List::new(items)
            .block(self.page_block())
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_game_detail(&self, frame: &mut Frame, area: Rect) {
        let Some(game) = self.route.id().and_then(|id| self.games.get_by_id(id)) else {
            let loading = Paragraph::new(i18n::t("status.loading")).block(self.page_block());
            frame.render_widget(loading, area);
            return;
        };

        let plays = self
            .route
            .id()
            .map(|id| self.plays.plays_for_game(id))
            .unwrap_or_default();

        let mut lines = vec![
            Line::from(Span::styled(
                game.info.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field_line("game.genre", self.games.genre_name(&game.info.genre_id)),
            field_line(
                "game.players",
                format!("{}–{}", game.info.players_min, game.info.players_max),
            ),
            field_line("game.minAge", format!("{}+", game.info.min_age)),
            field_line("game.duration", format!("{} min", game.info.duration_mins)),
            field_line("game.difficulty", difficulty_label(game.info.difficulty)),
            field_line("game.rating", stars(game.info.rating)),
        ];
        if game.info.is_coop {
            lines.push(field_line("game.coop", "✓".to_string()));
        }
        if game.info.is_competitive {
            lines.push(field_line("game.competitive", "✓".to_string()));
        }
        if game.info.is_one_shot {
            lines.push(field_line("game.oneShot", "✓".to_string()));
        }
        if game.info.favorite {
            lines.push(field_line("game.favorite", "♥".to_string()));
        }
        if let Some(last_played) = game.info.last_played_at {
            lines.push(field_line("game.lastPlayed", last_played.to_string()));
        }
        if let Some(description) = &game.info.description {
            lines.push(Line::from(""));
            lines.push(Line::from(description.clone()));
        }
        lines.push(Line::from(""));
        lines.push(field_line("game.plays", plays.len().to_string()));

        let detail = Paragraph::new(lines)
            .block(self.page_block())
            .wrap(Wrap { trim: true });
        frame.render_widget(detail, area);
    }

    fn render_game_new(&self, frame: &mut Frame, area: Rect) {
        let buffer = self.name_input.as_deref().unwrap_or("");
        let lines = vec![
            Line::from(i18n::t("game.namePrompt")),
            Line::from(""),
            Line::from(Span::styled(
                format!("{buffer}▏"),
                Style::default().fg(Color::Cyan),
            )),
        ];
        let prompt = Paragraph::new(lines)
            .block(self.page_block())
            .wrap(Wrap { trim: false });
        frame.render_widget(prompt, area);
    }

    fn render_game_edit(&self, frame: &mut Frame, area: Rect) {
        let name = self
            .route
            .id()
            .and_then(|id| self.games.get_by_id(id))
            .map(|game| game.info.name)
            .unwrap_or_default();
        let rating = self.rating_edit.unwrap_or(0);
        let lines = vec![
            Line::from(name),
            Line::from(""),
            field_line("game.rating", stars(rating)),
        ];
        let editor = Paragraph::new(lines).block(self.page_block());
        frame.render_widget(editor, area);
    }

    fn render_players(&self, frame: &mut Frame, area: Rect) {
        let players = self.players.players();
        let items: Vec<ListItem> = players
            .iter()
            .map(|player| ListItem::new(player.name.clone()))
            .collect();

        let mut state = ListState::default();
        if !players.is_empty() {
            state.select(Some(self.cursor.min(players.len() - 1)));
        }

        let list = List::new(items)
            .block(self.page_block())
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_player_detail(&self, frame: &mut Frame, area: Rect) {
        let player = self.route.id().and_then(|id| self.players.get_by_id(id));
        let mut lines = Vec::new();
        match player {
            Some(player) => {
                lines.push(Line::from(Span::styled(
                    player.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                let teams: Vec<String> = self
                    .teams
                    .teams()
                    .into_iter()
                    .filter(|team| team.player_ids.contains(&player.id))
                    .map(|team| team.name)
                    .collect();
                if !teams.is_empty() {
                    lines.push(Line::from(""));
                    lines.push(field_line("menu.teams", teams.join(", ")));
                }
            }
            None => lines.push(Line::from(i18n::t("pages.notFound"))),
        }
        let detail = Paragraph::new(lines).block(self.page_block());
        frame.render_widget(detail, area);
    }

    fn render_teams(&self, frame: &mut Frame, area: Rect) {
        let teams = self.teams.teams();
        let items: Vec<ListItem> = teams
            .iter()
            .map(|team| {
                ListItem::new(format!(
                    "{}  ({})",
                    team.name,
                    team.player_ids.len()
                ))
            })
            .collect();

        let mut state = ListState::default();
        if !teams.is_empty() {
            state.select(Some(self.cursor.min(teams.len() - 1)));
        }

        let list = List::new(items)
            .block(self.page_block())
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_team_detail(&self, frame: &mut Frame, area: Rect) {
        let team = self.route.id().and_then(|id| self.teams.get_by_id(id));
        let mut lines = Vec::new();
        match team {
            Some(team) => {
                lines.push(Line::from(Span::styled(
                    team.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
                // Dangling member ids render as the raw id.
                let members: Vec<String> = team
                    .player_ids
                    .iter()
                    .map(|id| {
                        self.players
                            .get_by_id(id)
                            .map(|player| player.name)
                            .unwrap_or_else(|| id.clone())
                    })
                    .collect();
                lines.push(field_line("team.members", members.join(", ")));
            }
            None => lines.push(Line::from(i18n::t("pages.notFound"))),
        }
        let detail = Paragraph::new(lines).block(self.page_block());
        frame.render_widget(detail, area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let plays = self.plays.plays();
        if plays.is_empty() {
            let empty = Paragraph::new(i18n::t("stats.empty")).block(self.page_block());
            frame.render_widget(empty, area);
            return;
        }

        let rows: Vec<Row> = stats::per_game(&plays)
            .into_iter()
            .map(|entry| {
                let name = self
                    .games
                    .get_by_id(&entry.game_id)
                    .map(|game| game.info.name)
                    .unwrap_or_else(|| entry.game_id.clone());
                Row::new(vec![
                    name,
                    entry.play_count.to_string(),
                    entry
                        .average_rating
                        .map(|rating| format!("{rating:.1}"))
                        .unwrap_or_default(),
                    entry
                        .last_played
                        .map(|date| date.to_string())
                        .unwrap_or_default(),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(18),
                Constraint::Length(8),
                Constraint::Length(12),
                Constraint::Length(12),
            ],
        )
        .header(
            Row::new(vec![
                i18n::t("stats.game"),
                i18n::t("stats.plays"),
                i18n::t("stats.avgRating"),
                i18n::t("stats.lastPlayed"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(self.page_block());
        frame.render_widget(table, area);
    }

    fn render_tools(&self, frame: &mut Frame, area: Rect) {
        let hint = Paragraph::new(i18n::t("tools.hint"))
            .block(self.page_block())
            .wrap(Wrap { trim: true });
        frame.render_widget(hint, area);
    }

    fn render_account(&self, frame: &mut Frame, area: Rect) {
        let backend = if self.config.use_mock {
            i18n::t("account.mock")
        } else {
            format!("{} ({})", i18n::t("account.remote"), self.config.api_base_url)
        };
        let lines = vec![
            field_line("account.locale", i18n::locale().to_string()),
            field_line("account.backend", backend),
        ];
        let account = Paragraph::new(lines).block(self.page_block());
        frame.render_widget(account, area);
    }

    fn render_not_found(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                i18n::t("pages.notFound"),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(i18n::t("notFound.hint")),
        ];
        let page = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(page, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut text = self.status.clone();
        if self.games.is_loading() {
            text = i18n::t("status.loading");
        }
        let status = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(i18n::t(self.route.meta.title_key)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(status, area);
    }

    fn page_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(i18n::t(self.route.meta.title_key))
    }
}

fn field_line(label_key: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", i18n::t(label_key)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

fn difficulty_label(difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Easy => i18n::t("difficulty.easy"),
        Difficulty::Medium => i18n::t("difficulty.medium"),
        Difficulty::Hard => i18n::t("difficulty.hard"),
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_renders_a_five_slot_scale() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        // Out-of-range ratings are clamped rather than panicking.
        assert_eq!(stars(9), "★★★★★");
    }
}
