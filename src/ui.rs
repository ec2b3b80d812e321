use crate::catalog::Catalog;
use crate::navigator::Navigator;
use crate::pet::PetId;
use crate::route::Route;
use crate::screen::{PetDetail, PetRow, Screen};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;

pub struct App {
    pub navigator: Navigator,
    pub state: TableState,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::at(catalog, Route::Overview)
    }

    pub fn at(catalog: Arc<Catalog>, route: Route) -> Self {
        let mut state = TableState::default();
        if !catalog.is_empty() {
            state.select(Some(0));
        }

        let mut app = Self {
            navigator: Navigator::new(catalog),
            state,
            should_quit: false,
        };

        if let Route::Detail(id) = route {
            app.sync_selection(id);
            app.navigator.open(id);
        }

        app
    }

    fn sync_selection(&mut self, id: PetId) {
        if let Some(position) = self.navigator.catalog().position(id) {
            self.state.select(Some(position));
        }
    }

    pub fn screen(&self) -> &Screen {
        self.navigator.screen()
    }

    pub fn selected_row(&self) -> Option<&PetRow> {
        match self.screen() {
            Screen::Overview { rows } => self.state.selected().and_then(|i| rows.get(i)),
            _ => None,
        }
    }

    /// Open the selected pet
    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_row().map(|row| row.id) {
            self.navigator.open(id);
        }
    }

    /// Back to the overview; the selection stays on the pet that was open
    pub fn back(&mut self) {
        if let Route::Detail(id) = self.navigator.route() {
            self.sync_selection(id);
        }
        self.navigator.back();
    }

    fn row_count(&self) -> usize {
        self.navigator.catalog().len()
    }

    pub fn next(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn first(&mut self) {
        if self.row_count() > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn last(&mut self) {
        let len = self.row_count();
        if len > 0 {
            self.state.select(Some(len - 1));
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.navigator.route() {
            Route::Overview => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter | KeyCode::Right => self.open_selected(),
                KeyCode::Down | KeyCode::Char('j') => self.next(),
                KeyCode::Up | KeyCode::Char('k') => self.previous(),
                KeyCode::Home => self.first(),
                KeyCode::End => self.last(),
                _ => {}
            },
            Route::Detail(_) => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Enter => self.back(),
                _ => {}
            },
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let screen = app.screen().clone();
    match &screen {
        Screen::Overview { rows } => render_table(f, chunks[1], rows, &mut app.state),
        Screen::Detail(detail) => render_detail_panel(f, chunks[1], detail),
        Screen::NotFound { pet_id } => render_not_found(f, chunks[1], *pet_id),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let route = app.navigator.route();

    let spans = vec![
        Span::styled(
            route.title(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Span::raw("  |  "),
        Span::styled(route.path(), Style::default().fg(Color::DarkGray)),
        Span::raw("  |  "),
        Span::styled(
            format!("Total: {}", app.navigator.catalog().len()),
            Style::default().fg(Color::White),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn species_color(species: &str) -> Color {
    if species.starts_with("Dog") {
        Color::Yellow
    } else {
        Color::Cyan
    }
}

fn render_table(f: &mut Frame, area: Rect, rows: &[PetRow], state: &mut TableState) {
    let header_cells = ["", "Name", "Species", "Gender"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let table_rows = rows.iter().map(|row| {
        let cells = vec![
            Cell::from(row.icon.clone()),
            Cell::from(row.name.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(row.species.clone()).style(Style::default().fg(species_color(&row.species))),
            Cell::from(row.gender.clone()),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(4),
            Constraint::Length(20),
            Constraint::Length(20),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Pets "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, state);
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {}: ", label),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn render_detail_panel(f: &mut Frame, area: Rect, detail: &PetDetail) {
    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::raw(detail.icon.clone()),
            Span::raw("  "),
            Span::styled(
                detail.name.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        field("Species", detail.species.clone()),
    ];

    if let Some(breed) = &detail.breed {
        content.push(field("Breed", breed.clone()));
    }

    content.extend([
        field("Gender", detail.gender.clone()),
        field("Born", detail.year_of_birth.to_string()),
        Line::from(""),
        Line::from("  ─────────────────────────────────────"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  HISTORY",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", detail.history),
            Style::default().fg(Color::Gray),
        )),
    ]);

    let detail_panel = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Pet Details "),
        );

    f.render_widget(detail_panel, area);
}

fn render_not_found(f: &mut Frame, area: Rect, pet_id: PetId) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Pet #{} not found", pet_id),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Esc to go back",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Pet Details "),
    );

    f.render_widget(panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = Vec::new();

    match app.navigator.route() {
        Route::Overview => {
            let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
            status_spans.push(Span::styled(
                format!(" Row: {}/{} ", selected, app.row_count()),
                Style::default().fg(Color::Cyan),
            ));
            status_spans.push(Span::raw(" | "));
            status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Open | "));
            status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Nav | "));
        }
        Route::Detail(_) => {
            status_spans.push(Span::styled("Esc", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Back | "));
        }
    }

    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}
