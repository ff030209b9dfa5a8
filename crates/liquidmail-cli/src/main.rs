use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use liquidmail_config::Config;
use liquidmail_engine::editing::document::Document;
use liquidmail_engine::editing::session::{
    CodeSurface, EditorSession, EditorView, RichTextSurface, SessionOptions,
};
use liquidmail_engine::preview::PreviewOptions;
use liquidmail_engine::templates::DEFAULT_TEMPLATE;
use liquidmail_engine::{io, minify};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::stdout,
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

/// In-memory rich-text mirror for the terminal front end. There is no
/// late-initializing widget here, so it is ready from construction.
struct TerminalRichText {
    html: String,
}

impl TerminalRichText {
    fn new() -> Self {
        Self {
            html: String::new(),
        }
    }
}

impl RichTextSurface for TerminalRichText {
    fn is_ready(&self) -> bool {
        true
    }

    fn html(&self) -> String {
        self.html.clone()
    }

    fn set_html(&mut self, html: &str) {
        self.html = html.to_string();
    }
}

struct App {
    templates_root: Option<PathBuf>,
    template_files: Vec<RelativePathBuf>,
    file_list_state: ListState,
    current_file: Option<RelativePathBuf>,
    session: EditorSession<Document, TerminalRichText>,
    preview: String,
    show_preview: bool,
    status: Option<(String, Instant)>,
}

impl App {
    fn new(templates_root: Option<PathBuf>, config: &Config) -> Result<Self> {
        let template_files = match &templates_root {
            Some(root) => {
                let absolute = io::scan_template_files(root)?;
                absolute
                    .iter()
                    .filter_map(|p| p.strip_prefix(root).ok())
                    .filter_map(|p| RelativePathBuf::from_path(p).ok())
                    .collect()
            }
            None => Vec::new(),
        };

        let opts = SessionOptions {
            quiet_window: Duration::from_millis(config.quiet_window_ms),
            auto_sync: config.auto_sync,
            preview: PreviewOptions {
                loop_repeats: config.loop_repeats,
            },
            ..SessionOptions::default()
        };
        let session = EditorSession::new(
            Document::from_text(DEFAULT_TEMPLATE),
            TerminalRichText::new(),
            opts,
        );

        let mut app = Self {
            templates_root,
            template_files,
            file_list_state: ListState::default(),
            current_file: None,
            session,
            preview: String::new(),
            show_preview: false,
            status: None,
        };

        if !app.template_files.is_empty() {
            app.file_list_state.select(Some(0));
            app.load_selected();
        }
        app.refresh_preview();

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.template_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.template_files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.load_selected();
    }

    fn previous_file(&mut self) {
        if self.template_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.template_files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.load_selected();
    }

    fn load_selected(&mut self) {
        let (Some(index), Some(root)) = (self.file_list_state.selected(), &self.templates_root)
        else {
            return;
        };
        let Some(path) = self.template_files.get(index) else {
            return;
        };

        match io::read_template(path.as_relative_path(), root) {
            Ok(content) => {
                self.session.code_mut().set_value(&content);
                self.session.code_changed();
                self.current_file = Some(path.clone());
            }
            Err(e) => self.notify(format!("Error reading template: {e}")),
        }
        self.refresh_preview();
    }

    fn toggle_view(&mut self) {
        let target = match self.session.view() {
            EditorView::Code => EditorView::RichText,
            EditorView::RichText => EditorView::Code,
        };
        match self.session.toggle_to(target) {
            Ok(()) => self.session.settle(),
            Err(e) => self.notify(format!("Cannot switch view: {e}")),
        }
        self.refresh_preview();
    }

    fn minify_current(&mut self) {
        let minified = minify::minify_html(&self.session.code().value());
        self.session.code_mut().set_value(&minified);
        self.session.code_changed();
        self.refresh_preview();
        self.notify("Minified".to_string());
    }

    fn save_current(&mut self) {
        let (Some(path), Some(root)) = (&self.current_file, &self.templates_root) else {
            self.notify("No template file to save to".to_string());
            return;
        };
        match io::write_template(path.as_relative_path(), root, &self.session.code().value()) {
            Ok(()) => self.notify(format!("Saved {path}")),
            Err(e) => self.notify(format!("Save failed: {e}")),
        }
    }

    fn toggle_auto_sync(&mut self) {
        let enabled = !self.session.auto_sync();
        self.session.set_auto_sync(enabled);
        self.notify(if enabled {
            "Auto-sync on".to_string()
        } else {
            "Auto-sync off".to_string()
        });
    }

    fn refresh_preview(&mut self) {
        if self.session.take_preview_dirty() {
            self.preview = self.session.render_preview();
        }
    }

    fn notify(&mut self, message: String) {
        self.status = Some((message, Instant::now()));
    }

    fn tick(&mut self, now: Instant) {
        if self.session.poll(now) {
            self.session.settle();
        }
        self.refresh_preview();
        // Transient notices expire on their own
        if let Some((_, since)) = &self.status
            && now.duration_since(*since) > Duration::from_secs(3)
        {
            self.status = None;
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Determine templates path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!(
                "Error: Failed to load config file at {}: {e}",
                config_path.display()
            );
            process::exit(1);
        }
    };

    let templates_root = if args.len() == 2 {
        Some(PathBuf::from(&args[1]))
    } else if args.len() == 1 {
        config.templates_path.clone()
    } else {
        eprintln!("Usage: {} [templates-folder-path]", args[0]);
        process::exit(1);
    };

    // Without a templates folder the editor still opens on the default
    // template, it just cannot save
    if let Some(root) = &templates_root
        && let Err(e) = io::validate_templates_dir(root)
    {
        eprintln!("Error: Templates path '{}' is invalid: {e}", root.display());
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(templates_root, &config)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Enter => app.load_selected(),
                KeyCode::Char('v') => app.toggle_view(),
                KeyCode::Char('p') => app.show_preview = !app.show_preview,
                KeyCode::Char('m') => app.minify_current(),
                KeyCode::Char('s') => app.save_current(),
                KeyCode::Char('a') => app.toggle_auto_sync(),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Template list panel
    let file_items: Vec<ListItem> = app
        .template_files
        .iter()
        .map(|path| ListItem::new(vec![Line::from(vec![Span::raw(path.to_string())])]))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Templates"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel: preview, or whichever surface is live
    let (title, text) = if app.show_preview {
        ("Preview", app.preview.clone())
    } else {
        match app.session.view() {
            EditorView::Code => ("Code", app.session.code().value()),
            EditorView::RichText => ("Visual", app.session.rich().html()),
        }
    };

    let content_text: Vec<Line> = if text.is_empty() {
        vec![Line::from("Select a template to view its content")]
    } else {
        text.lines()
            .map(|line| Line::from(vec![Span::raw(line.to_string())]))
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Instructions and transient status
    let help_text = match &app.status {
        Some((message, _)) => Line::from(vec![Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        )]),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Templates | "),
            Span::raw("v: Code/Visual | "),
            Span::raw("p: Preview | "),
            Span::raw("m: Minify | "),
            Span::raw("s: Save | "),
            Span::raw("a: Auto-sync"),
        ]),
    };

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
